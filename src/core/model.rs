// glTF 2.0 asset decoding for the viewer.
//
// The whole default scene is flattened into one vertex/index list with node
// transforms and material factors baked in. Base colour textures are decoded
// to RGBA8 and referenced per draw batch.

use base64::Engine as _;
use fnv::FnvHashMap;
use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};
use gltf::material::AlphaMode;
use gltf::mesh::Mode;
use gltf::texture::WrappingMode;
use gltf::Gltf;
use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("glTF parse error: {0}")]
    Parse(#[from] gltf::Error),
    #[error("buffer {0} has no embedded binary chunk")]
    MissingBuffer(usize),
    #[error("external buffer '{0}' is not supported; embed buffers in the asset")]
    ExternalBuffer(String),
    #[error("invalid data URI: {0}")]
    DataUri(String),
    #[error("asset contains no triangle geometry")]
    Empty,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    /// Base colour factor times vertex colour, straight alpha.
    pub color: [f32; 4],
    /// x = metallic, y = roughness.
    pub material: [f32; 2],
    /// Base colour texture coordinate, texture transform applied.
    pub uv: [f32; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureWrap {
    Repeat,
    MirroredRepeat,
    ClampToEdge,
}

impl From<WrappingMode> for TextureWrap {
    fn from(mode: WrappingMode) -> Self {
        match mode {
            WrappingMode::Repeat => TextureWrap::Repeat,
            WrappingMode::MirroredRepeat => TextureWrap::MirroredRepeat,
            WrappingMode::ClampToEdge => TextureWrap::ClampToEdge,
        }
    }
}

/// Decoded base colour image, sRGB encoded RGBA8.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    pub wrap_u: TextureWrap,
    pub wrap_v: TextureWrap,
}

/// Contiguous index range drawn with one texture and one blend mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Batch {
    pub start: u32,
    pub count: u32,
    /// Index into `ModelData::textures`; `None` draws untextured.
    pub texture: Option<usize>,
    pub blended: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Radius of the sphere that encloses the box.
    #[inline]
    pub fn radius(&self) -> f32 {
        (self.max - self.min).length() * 0.5
    }
}

/// Flattened model ready for upload. Indices are ordered with all opaque
/// triangles first; `blend_start` is where alpha-blended ones begin.
#[derive(Clone, Debug, Default)]
pub struct ModelData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub blend_start: usize,
    pub batches: Vec<Batch>,
    pub textures: Vec<TextureImage>,
}

impl ModelData {
    pub fn bounds(&self) -> Option<Aabb> {
        let mut it = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = it.next()?;
        let (min, max) = it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Aabb { min, max })
    }

    /// Move the model so its bounding box is centred on the origin.
    #[must_use]
    pub fn recentered(mut self) -> Self {
        if let Some(b) = self.bounds() {
            let c = b.center();
            for v in &mut self.vertices {
                v.position = (Vec3::from(v.position) - c).to_array();
            }
        }
        self
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn opaque_indices(&self) -> &[u32] {
        &self.indices[..self.blend_start]
    }

    #[inline]
    pub fn blend_indices(&self) -> &[u32] {
        &self.indices[self.blend_start..]
    }
}

/// `KHR_texture_transform`: scale, then rotate, then offset.
#[inline]
pub fn transform_uv(uv: Vec2, offset: Vec2, rotation: f32, scale: Vec2) -> Vec2 {
    let s = uv * scale;
    let (sin, cos) = rotation.sin_cos();
    Vec2::new(cos * s.x + sin * s.y, -sin * s.x + cos * s.y) + offset
}

/// Parse a `.glb` (or a `.gltf` with embedded `data:` buffers).
pub fn parse_glb(bytes: &[u8]) -> Result<ModelData, ModelError> {
    let gltf = Gltf::from_slice(bytes)?;
    let buffers = load_buffers(&gltf)?;

    let mut builder = Builder::new(&buffers);
    match gltf.default_scene().or_else(|| gltf.scenes().next()) {
        Some(scene) => {
            for node in scene.nodes() {
                builder.visit(&node, Mat4::IDENTITY);
            }
        }
        // No scene: take every mesh untransformed.
        None => {
            for mesh in gltf.meshes() {
                builder.add_mesh(&mesh, Mat4::IDENTITY);
            }
        }
    }
    builder.finish()
}

fn load_buffers(gltf: &Gltf) -> Result<Vec<Vec<u8>>, ModelError> {
    gltf.buffers()
        .map(|buffer| match buffer.source() {
            gltf::buffer::Source::Bin => gltf
                .blob
                .clone()
                .ok_or(ModelError::MissingBuffer(buffer.index())),
            gltf::buffer::Source::Uri(uri) if uri.starts_with("data:") => decode_data_uri(uri),
            gltf::buffer::Source::Uri(uri) => Err(ModelError::ExternalBuffer(uri.to_string())),
        })
        .collect()
}

/// `data:[<mediatype>][;base64],<data>`
fn decode_data_uri(uri: &str) -> Result<Vec<u8>, ModelError> {
    let (header, data) = uri
        .split_once(',')
        .ok_or_else(|| ModelError::DataUri("missing ','".into()))?;
    if !header.ends_with(";base64") {
        return Err(ModelError::DataUri("only base64 payloads are supported".into()));
    }
    base64::engine::general_purpose::STANDARD
        .decode(data.trim())
        .map_err(|e| ModelError::DataUri(e.to_string()))
}

/// Encoded bytes of an image, from a buffer view or a `data:` URI.
fn image_bytes<'b>(image: &gltf::Image, buffers: &'b [Vec<u8>]) -> Option<Cow<'b, [u8]>> {
    match image.source() {
        gltf::image::Source::View { view, .. } => {
            let data = buffers.get(view.buffer().index())?;
            data.get(view.offset()..view.offset() + view.length())
                .map(Cow::Borrowed)
        }
        gltf::image::Source::Uri { uri, .. } if uri.starts_with("data:") => {
            decode_data_uri(uri).ok().map(Cow::Owned)
        }
        gltf::image::Source::Uri { uri, .. } => {
            log::warn!("[model] external image '{}' skipped", uri);
            None
        }
    }
}

fn decode_texture(texture: &gltf::Texture, buffers: &[Vec<u8>]) -> Option<TextureImage> {
    let bytes = image_bytes(&texture.source(), buffers)?;
    let rgba = match image::load_from_memory(&bytes) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            log::warn!("[model] texture {} not decoded: {}", texture.index(), e);
            return None;
        }
    };
    if rgba.width() == 0 || rgba.height() == 0 {
        return None;
    }
    let sampler = texture.sampler();
    Some(TextureImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
        wrap_u: sampler.wrap_s().into(),
        wrap_v: sampler.wrap_t().into(),
    })
}

#[derive(Default)]
struct IndexList {
    indices: Vec<u32>,
    // (texture, index count), merged when consecutive textures match
    runs: Vec<(Option<usize>, u32)>,
}

impl IndexList {
    fn push(&mut self, texture: Option<usize>, indices: impl Iterator<Item = u32>) {
        let before = self.indices.len();
        self.indices.extend(indices);
        let added = (self.indices.len() - before) as u32;
        if added == 0 {
            return;
        }
        match self.runs.last_mut() {
            Some((t, n)) if *t == texture => *n += added,
            _ => self.runs.push((texture, added)),
        }
    }
}

struct Builder<'b> {
    buffers: &'b [Vec<u8>],
    vertices: Vec<Vertex>,
    opaque: IndexList,
    blend: IndexList,
    textures: Vec<TextureImage>,
    // glTF texture index -> slot in `textures` (None when undecodable)
    texture_slots: FnvHashMap<usize, Option<usize>>,
}

impl<'b> Builder<'b> {
    fn new(buffers: &'b [Vec<u8>]) -> Self {
        Self {
            buffers,
            vertices: Vec::new(),
            opaque: IndexList::default(),
            blend: IndexList::default(),
            textures: Vec::new(),
            texture_slots: FnvHashMap::default(),
        }
    }

    fn visit(&mut self, node: &gltf::Node, parent: Mat4) {
        let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
        if let Some(mesh) = node.mesh() {
            self.add_mesh(&mesh, world);
        }
        for child in node.children() {
            self.visit(&child, world);
        }
    }

    fn texture_slot(&mut self, texture: &gltf::Texture) -> Option<usize> {
        if let Some(slot) = self.texture_slots.get(&texture.index()) {
            return *slot;
        }
        let slot = decode_texture(texture, self.buffers).map(|img| {
            self.textures.push(img);
            self.textures.len() - 1
        });
        self.texture_slots.insert(texture.index(), slot);
        slot
    }

    fn add_mesh(&mut self, mesh: &gltf::Mesh, world: Mat4) {
        let normal_m = Mat3::from_mat4(world).inverse().transpose();
        let buffers = self.buffers;
        for primitive in mesh.primitives() {
            if primitive.mode() != Mode::Triangles {
                log::warn!(
                    "[model] skipping {:?} primitive in mesh {:?}",
                    primitive.mode(),
                    mesh.name()
                );
                continue;
            }
            let reader = primitive.reader(|b| buffers.get(b.index()).map(|d| d.as_slice()));
            let Some(positions) = reader.read_positions() else {
                continue;
            };
            let positions: Vec<Vec3> = positions
                .map(|p| world.transform_point3(Vec3::from(p)))
                .collect();
            if positions.is_empty() {
                continue;
            }

            let base = self.vertices.len() as u32;
            let local_indices: Vec<u32> = match reader.read_indices() {
                Some(idx) => idx.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };
            let local_indices: Vec<u32> = local_indices
                .chunks_exact(3)
                .filter(|t| t.iter().all(|&i| (i as usize) < positions.len()))
                .flatten()
                .copied()
                .collect();

            let normals: Vec<Vec3> = match reader.read_normals() {
                Some(n) => n
                    .map(|n| (normal_m * Vec3::from(n)).normalize_or_zero())
                    .collect(),
                None => face_normals(&positions, &local_indices),
            };
            let colors: Vec<Vec4> = match reader.read_colors(0) {
                Some(c) => c.into_rgba_f32().map(Vec4::from).collect(),
                None => Vec::new(),
            };

            let material = primitive.material();
            let pbr = material.pbr_metallic_roughness();
            let factor = Vec4::from(pbr.base_color_factor());
            let mr = [pbr.metallic_factor(), pbr.roughness_factor()];
            let blended = material.alpha_mode() == AlphaMode::Blend;

            let mut texture = None;
            let mut uvs: Vec<Vec2> = Vec::new();
            if let Some(info) = pbr.base_color_texture() {
                let transform = info.texture_transform();
                let set = transform
                    .as_ref()
                    .and_then(|t| t.tex_coord())
                    .unwrap_or_else(|| info.tex_coord());
                if let Some(tc) = reader.read_tex_coords(set) {
                    uvs = tc.into_f32().map(Vec2::from).collect();
                    if let Some(t) = &transform {
                        let (offset, scale) = (Vec2::from(t.offset()), Vec2::from(t.scale()));
                        for uv in &mut uvs {
                            *uv = transform_uv(*uv, offset, t.rotation(), scale);
                        }
                    }
                    texture = self.texture_slot(&info.texture());
                }
            }

            for (i, p) in positions.iter().enumerate() {
                let vc = colors.get(i).copied().unwrap_or(Vec4::ONE);
                self.vertices.push(Vertex {
                    position: p.to_array(),
                    normal: normals.get(i).copied().unwrap_or(Vec3::Y).to_array(),
                    color: (factor * vc).to_array(),
                    material: mr,
                    uv: uvs.get(i).copied().unwrap_or(Vec2::ZERO).to_array(),
                });
            }
            let out = if blended {
                &mut self.blend
            } else {
                &mut self.opaque
            };
            out.push(texture, local_indices.iter().map(|i| base + i));
        }
    }

    fn finish(self) -> Result<ModelData, ModelError> {
        if self.opaque.indices.is_empty() && self.blend.indices.is_empty() {
            return Err(ModelError::Empty);
        }
        let blend_start = self.opaque.indices.len();
        let mut batches = Vec::with_capacity(self.opaque.runs.len() + self.blend.runs.len());
        let mut start = 0u32;
        for (list, blended) in [(&self.opaque, false), (&self.blend, true)] {
            for &(texture, count) in &list.runs {
                batches.push(Batch {
                    start,
                    count,
                    texture,
                    blended,
                });
                start += count;
            }
        }
        let mut indices = self.opaque.indices;
        indices.extend(self.blend.indices);
        Ok(ModelData {
            vertices: self.vertices,
            indices,
            blend_start,
            batches,
            textures: self.textures,
        })
    }
}

/// Per-vertex normals from area-weighted adjacent face normals.
fn face_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for t in indices.chunks_exact(3) {
        let (a, b, c) = (t[0] as usize, t[1] as usize, t[2] as usize);
        let n = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y))
        .collect()
}
