use crate::core::{AvatarPose, Camera, CLEAR_COLOR};
use web_sys as web;

mod avatar;
mod helpers;

use avatar::{create_avatar_resources, head_uniforms, ring_uniforms, AvatarResources};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    avatar: AvatarResources,
    depth_view: wgpu::TextureView,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
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
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
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
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (_depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);
        let avatar = create_avatar_resources(&device, format);

        let [r, g, b] = CLEAR_COLOR;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            avatar,
            depth_view,
            width,
            height,
            clear_color: wgpu::Color { r, g, b, a: 1.0 },
        })
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
            let (_tex, view) = helpers::create_depth_texture(&self.device, width, height);
            self.depth_view = view;
        }
    }

    /// Draw the avatar at `pose`. The ring shares the group transform but
    /// keeps its own material.
    pub fn render(
        &mut self,
        camera: &Camera,
        pose: &AvatarPose,
        elapsed_sec: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        let head = head_uniforms(camera, pose, elapsed_sec);
        let ring = ring_uniforms(camera, pose, elapsed_sec);
        self.queue.write_buffer(
            &self.avatar.head_slot.buffer,
            0,
            bytemuck::bytes_of(&head),
        );
        self.queue.write_buffer(
            &self.avatar.ring_slot.buffer,
            0,
            bytemuck::bytes_of(&ring),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("avatar_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let a = &self.avatar;
            rpass.set_bind_group(0, &a.head_slot.bind_group, &[]);
            rpass.set_vertex_buffer(0, a.head.vertices.slice(..));
            match (&a.head.lines, pose.wireframe) {
                (Some((lines, count)), true) => {
                    rpass.set_pipeline(&a.wire_pipeline);
                    rpass.set_index_buffer(lines.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..*count, 0, 0..1);
                }
                _ => {
                    rpass.set_pipeline(&a.solid_pipeline);
                    rpass.set_index_buffer(a.head.triangles.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..a.head.triangle_count, 0, 0..1);
                }
            }

            rpass.set_pipeline(&a.solid_pipeline);
            rpass.set_bind_group(0, &a.ring_slot.bind_group, &[]);
            rpass.set_vertex_buffer(0, a.ring.vertices.slice(..));
            rpass.set_index_buffer(a.ring.triangles.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..a.ring.triangle_count, 0, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
