pub mod effects;
pub mod model;
pub mod orbit;
pub mod preset;
pub mod state;

pub use effects::*;
pub use model::*;
pub use orbit::*;
pub use preset::*;
pub use state::*;

// Shaders bundled as string constants
pub static BACKDROP_WGSL: &str = include_str!("../../shaders/backdrop.wgsl");
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
