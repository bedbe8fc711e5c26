/// Viewer, camera and pointer-effect tuning constants.
///
/// These constants express intended behavior (time constants, clamp limits,
/// layout depths) and keep magic numbers out of the code.
// Page contract
pub const DEFAULT_MODEL_URL: &str = "assets/glasses.glb";
pub const DEFAULT_PARTICLES: usize = 36;
pub const MAX_PARTICLES: usize = 160;
pub const PARTICLE_SEED: u64 = 0x5eed_91a5;

// Camera
pub const CAMERA_FOVY_RAD: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_DEFAULT_DISTANCE: f32 = 4.0;
pub const CAMERA_DEFAULT_ELEVATION: f32 = 0.22; // slight look-down
pub const CAMERA_DEFAULT_AZIMUTH: f32 = 0.6;
pub const FIT_MARGIN: f32 = 1.25; // breathing room around the model's bounding sphere

// Orbit controls
pub const ORBIT_ROTATE_RAD_PER_PX: f32 = 0.006;
pub const ORBIT_ZOOM_PER_WHEEL_UNIT: f32 = 0.0015; // multiplicative, per wheel delta unit
pub const ORBIT_DAMPING_TAU_SEC: f32 = 0.12;
pub const MIN_ELEVATION: f32 = -1.2;
pub const MAX_ELEVATION: f32 = 1.2;
pub const MIN_DISTANCE_FACTOR: f32 = 0.5; // of fitted distance
pub const MAX_DISTANCE_FACTOR: f32 = 3.0;

// Auto-rotate
pub const AUTO_ROTATE_RAD_PER_SEC: f32 = 0.35;
pub const AUTO_ROTATE_IDLE_SEC: f32 = 2.5; // wait after the last interaction

// Cursor
pub const CURSOR_TAU_SEC: f32 = 0.08;
pub const CURSOR_SNAP_PX: f32 = 0.25;

// Parallax
pub const PARALLAX_MAX_PX: f32 = 28.0; // at depth 1.0
pub const PARALLAX_BG_DEPTH: f32 = 0.6;
pub const GLOW_SHIFT_PERCENT: f32 = 18.0;
pub const PARTICLE_DEPTH_MIN: f32 = 0.2;
pub const PARTICLE_DEPTH_MAX: f32 = 1.4;
pub const PARTICLE_SIZE_MIN_PX: f32 = 2.0;
pub const PARTICLE_SIZE_MAX_PX: f32 = 7.0;

// Hover targets for the custom cursor. Alt targets are a subset of the
// interactive ones and get the secondary hover style.
pub const HOVER_SELECTOR: &str = "button, a, [data-hover], canvas";
pub const HOVER_ALT_SELECTOR: &str = "[data-hover=\"alt\"], canvas";

// Rendering
pub const MAX_LIGHTS: usize = 4;
pub const BLOOM_STRENGTH: f32 = 0.35;
pub const BLOOM_THRESHOLD: f32 = 0.9;
pub const HORIZON_HEIGHT: f32 = 0.42;
