use crate::constants::{BLOOM_STRENGTH, BLOOM_THRESHOLD, HORIZON_HEIGHT};
use crate::core::{Camera, Environment, ModelData, Preset};
use web_sys as web;

mod backdrop;
mod helpers;
mod mesh;
mod post;
mod targets;

use backdrop::{create_backdrop_resources, BackdropResources, BackdropUniforms};
use mesh::{create_mesh_resources, GpuModel, MeshResources, SceneUniforms};
use post::{PostBindGroups, PostResources, PostUniforms};
use targets::RenderTargets;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    view_format: wgpu::TextureFormat,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    backdrop: BackdropResources,
    mesh: MeshResources,
    model: Option<GpuModel>,

    targets: RenderTargets,
    post: PostResources,
    post_bind_groups: PostBindGroups,

    width: u32,
    height: u32,
    environment: Environment,
    camera: Option<Camera>,
    time_accum: f32,
    glow_uv: [f32; 2],
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // default limits: older WebGPU impls reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // WebGPU canvases only expose linear formats; an sRGB view encodes on write
        let (format, view_format) = helpers::pick_surface_format(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} view={:?}",
            width,
            height,
            format,
            view_format
        );

        let targets = RenderTargets::new(&device, width, height);
        let backdrop = create_backdrop_resources(&device);
        let mesh = create_mesh_resources(&device, &queue);
        let post = post::create_post_resources(&device, view_format);
        let post_bind_groups = post::create_bind_groups(&device, &post, &targets);

        Ok(Self {
            surface,
            view_format,
            device,
            queue,
            config,
            backdrop,
            mesh,
            model: None,
            targets,
            post,
            post_bind_groups,
            width,
            height,
            environment: Preset::default().environment(),
            camera: None,
            time_accum: 0.0,
            glow_uv: [0.5, 0.5],
        })
    }

    pub fn set_environment(&mut self, env: Environment) {
        self.environment = env;
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }

    /// Backdrop glow centre in canvas uv.
    pub fn set_glow(&mut self, uv: [f32; 2]) {
        self.glow_uv = [uv[0].clamp(0.0, 1.0), uv[1].clamp(0.0, 1.0)];
    }

    pub fn upload_model(&mut self, model: &ModelData) {
        self.model = Some(mesh::upload_model(
            &self.device,
            &self.queue,
            &self.mesh,
            model,
        ));
        log::info!(
            "[gpu] uploaded {} vertices, {} triangles, {} textures",
            model.vertices.len(),
            model.triangle_count(),
            model.textures.len()
        );
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate offscreen render targets and the bind groups that reference them
            self.targets.recreate(&self.device, width, height);
            self.post_bind_groups =
                post::create_bind_groups(&self.device, &self.post, &self.targets);
        }
    }

    pub fn render(&mut self, dt_sec: f32) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });

        let res = [self.width as f32, self.height as f32];
        let bd = BackdropUniforms::new(
            &self.environment.backdrop,
            res,
            HORIZON_HEIGHT,
            self.time_accum,
            self.glow_uv,
            0.18,
        );
        self.queue
            .write_buffer(&self.backdrop.uniform_buffer, 0, bytemuck::bytes_of(&bd));
        if let Some(cam) = &self.camera {
            let su = SceneUniforms::new(&self.environment, cam, self.time_accum);
            self.queue
                .write_buffer(&self.mesh.uniform_buffer, 0, bytemuck::bytes_of(&su));
        }
        let (bw, bh) = targets::bloom_size(self.width, self.height);
        post::write_post_uniforms(
            &self.queue,
            &self.post,
            PostUniforms {
                resolution: [bw as f32, bh as f32],
                time: self.time_accum,
                exposure: self.environment.exposure,
                blur_dir: [0.0, 0.0],
                bloom_strength: BLOOM_STRENGTH,
                threshold: BLOOM_THRESHOLD,
            },
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: backdrop + model → HDR
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.backdrop.pipeline);
            rpass.set_bind_group(0, &self.backdrop.bind_group, &[]);
            rpass.draw(0..3, 0..1);

            if let (Some(model), Some(_)) = (&self.model, &self.camera) {
                model.draw(&mut rpass, &self.mesh);
            }
        }

        // Pass 2: bright pass → bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            &self.post.bright_pipeline,
            &self.post_bind_groups.from_hdr,
            None,
        );
        // Pass 3: blur horizontal bloom_a → bloom_b
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            &self.post.blur_pipeline,
            &self.post_bind_groups.from_bloom_a,
            None,
        );
        // Pass 4: blur vertical bloom_b → bloom_a
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            &self.post.blur_pipeline,
            &self.post_bind_groups.from_bloom_b,
            None,
        );
        // Pass 5: composite to swapchain
        post::blit(
            &mut encoder,
            "composite",
            &view,
            &self.post.composite_pipeline,
            &self.post_bind_groups.from_hdr,
            Some(&self.post_bind_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
