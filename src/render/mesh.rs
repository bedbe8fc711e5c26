use super::helpers;
use crate::constants::MAX_LIGHTS;
use crate::core::{Batch, Camera, Environment, ModelData, TextureImage, TextureWrap, Vertex};
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) eye: [f32; 4],
    pub(crate) sky: [f32; 4],
    pub(crate) ground: [f32; 4],
    pub(crate) light_dir: [[f32; 4]; MAX_LIGHTS],
    pub(crate) light_color: [[f32; 4]; MAX_LIGHTS],
    pub(crate) params: [f32; 4],
}

impl SceneUniforms {
    pub(crate) fn new(env: &Environment, camera: &Camera, time: f32) -> Self {
        let mut light_dir = [[0.0; 4]; MAX_LIGHTS];
        let mut light_color = [[0.0; 4]; MAX_LIGHTS];
        let count = env.lights.len().min(MAX_LIGHTS);
        for (i, l) in env.lights.iter().take(MAX_LIGHTS).enumerate() {
            light_dir[i] = l.direction.extend(0.0).to_array();
            light_color[i] = l.color.extend(l.intensity).to_array();
        }
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            sky: env.sky.extend(env.ambient).to_array(),
            ground: env.ground.extend(1.0).to_array(),
            light_dir,
            light_color,
            params: [count as f32, env.exposure, time, 0.0],
        }
    }
}

pub(crate) struct MeshResources {
    pub(crate) opaque_pipeline: wgpu::RenderPipeline,
    pub(crate) blend_pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) texture_bgl: wgpu::BindGroupLayout,
    /// 1x1 white, bound for untextured batches.
    pub(crate) white: wgpu::BindGroup,
}

/// Uploaded model buffers.
pub(crate) struct GpuModel {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) batches: Vec<Batch>,
    pub(crate) textures: Vec<wgpu::BindGroup>,
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32x3,
    2 => Float32x4,
    3 => Float32x2,
    4 => Float32x2
];

fn address_mode(wrap: TextureWrap) -> wgpu::AddressMode {
    match wrap {
        TextureWrap::Repeat => wgpu::AddressMode::Repeat,
        TextureWrap::MirroredRepeat => wgpu::AddressMode::MirrorRepeat,
        TextureWrap::ClampToEdge => wgpu::AddressMode::ClampToEdge,
    }
}

fn texture_bind_group(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    image: &TextureImage,
) -> wgpu::BindGroup {
    let texture = device.create_texture_with_data(
        queue,
        &wgpu::TextureDescriptor {
            label: Some("base_color"),
            size: wgpu::Extent3d {
                width: image.width.max(1),
                height: image.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        },
        wgpu::util::TextureDataOrder::LayerMajor,
        &image.rgba,
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("base_color_sampler"),
        address_mode_u: address_mode(image.wrap_u),
        address_mode_v: address_mode(image.wrap_v),
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("base_color_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    })
}

fn make_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    label: &str,
    blended: bool,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        // frames and temples are thin shells; draw both faces
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: helpers::DEPTH_FORMAT,
            depth_write_enabled: !blended,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: helpers::HDR_FORMAT,
                blend: if blended {
                    Some(wgpu::BlendState::ALPHA_BLENDING)
                } else {
                    None
                },
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

pub(crate) fn create_mesh_resources(device: &wgpu::Device, queue: &wgpu::Queue) -> MeshResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("mesh_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::MESH_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("mesh_bgl"),
        entries: &[helpers::uniform_bgl_entry(
            0,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        )],
    });
    let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("mesh_texture_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("mesh_pl"),
        bind_group_layouts: &[&bgl, &texture_bgl],
        push_constant_ranges: &[],
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("mesh_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let white_image = TextureImage {
        width: 1,
        height: 1,
        rgba: vec![255; 4],
        wrap_u: TextureWrap::Repeat,
        wrap_v: TextureWrap::Repeat,
    };
    let white = texture_bind_group(device, queue, &texture_bgl, &white_image);
    MeshResources {
        opaque_pipeline: make_pipeline(device, &pl, &shader, "mesh_opaque", false),
        blend_pipeline: make_pipeline(device, &pl, &shader, "mesh_blend", true),
        uniform_buffer,
        bind_group,
        texture_bgl,
        white,
    }
}

pub(crate) fn upload_model(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    mesh: &MeshResources,
    model: &ModelData,
) -> GpuModel {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("model_vertices"),
        contents: bytemuck::cast_slice(&model.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("model_indices"),
        contents: bytemuck::cast_slice(&model.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let textures = model
        .textures
        .iter()
        .map(|img| texture_bind_group(device, queue, &mesh.texture_bgl, img))
        .collect();
    GpuModel {
        vertex_buffer,
        index_buffer,
        batches: model.batches.clone(),
        textures,
    }
}

impl GpuModel {
    /// Opaque batches come first, so blended ones draw over a finished depth buffer.
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, mesh: &MeshResources) {
        rpass.set_bind_group(0, &mesh.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        let mut blended = None;
        for batch in &self.batches {
            if blended != Some(batch.blended) {
                let pipeline = if batch.blended {
                    &mesh.blend_pipeline
                } else {
                    &mesh.opaque_pipeline
                };
                rpass.set_pipeline(pipeline);
                blended = Some(batch.blended);
            }
            let texture = batch
                .texture
                .and_then(|i| self.textures.get(i))
                .unwrap_or(&mesh.white);
            rpass.set_bind_group(1, texture, &[]);
            rpass.draw_indexed(batch.start..batch.start + batch.count, 0, 0..1);
        }
    }
}
