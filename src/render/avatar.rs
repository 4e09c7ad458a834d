use super::helpers;
use crate::core::*;
use glam::{Mat4, Quat, Vec3};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    color: [f32; 4],
    emissive: [f32; 4],
    material: [f32; 4],
    timing: [f32; 4],
    key_pos: [f32; 4],
    key_color: [f32; 4],
    fill_pos: [f32; 4],
    fill_color: [f32; 4],
}

impl ObjectUniforms {
    fn new(camera: &Camera, model: Mat4, elapsed_sec: f32) -> Self {
        let [kx, ky, kz] = KEY_LIGHT_POS;
        let [fx, fy, fz] = FILL_LIGHT_POS;
        let [kr, kg, kb] = KEY_LIGHT_COLOR;
        let [fr, fg, fb] = FILL_LIGHT_COLOR;
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            color: [0.0; 4],
            emissive: [0.0; 4],
            material: [0.0; 4],
            timing: [elapsed_sec, 0.0, AMBIENT_INTENSITY, 0.0],
            key_pos: [kx, ky, kz, KEY_LIGHT_INTENSITY],
            key_color: [kr, kg, kb, 1.0],
            fill_pos: [fx, fy, fz, FILL_LIGHT_INTENSITY],
            fill_color: [fr, fg, fb, 1.0],
        }
    }
}

/// Uniforms for the head: pose transform plus the metallic distort material.
pub(crate) fn head_uniforms(camera: &Camera, pose: &AvatarPose, elapsed_sec: f32) -> ObjectUniforms {
    let [r, g, b] = HEAD_COLOR;
    let [er, eg, eb] = HEAD_EMISSIVE;
    let mut u = ObjectUniforms::new(camera, pose.model_matrix(), elapsed_sec);
    u.color = [r, g, b, pose.opacity];
    u.emissive = [er, eg, eb, HEAD_EMISSIVE_INTENSITY];
    u.material = [HEAD_METALNESS, HEAD_ROUGHNESS, HEAD_DISTORT, 1.0];
    u.timing[1] = HEAD_DISTORT_SPEED;
    u
}

/// Uniforms for the ring: fixed offset inside the avatar group, unlit, fixed
/// opacity regardless of the head material.
pub(crate) fn ring_uniforms(camera: &Camera, pose: &AvatarPose, elapsed_sec: f32) -> ObjectUniforms {
    let local = Mat4::from_scale_rotation_translation(
        Vec3::splat(RING_SCALE),
        Quat::from_rotation_z(RING_ROLL),
        Vec3::ZERO,
    );
    let [r, g, b] = HEAD_COLOR;
    let mut u = ObjectUniforms::new(camera, pose.model_matrix() * local, elapsed_sec);
    u.color = [r, g, b, RING_OPACITY];
    u
}

pub(crate) struct MeshBuffers {
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) triangles: wgpu::Buffer,
    pub(crate) triangle_count: u32,
    pub(crate) lines: Option<(wgpu::Buffer, u32)>,
}

impl MeshBuffers {
    fn upload(device: &wgpu::Device, label: &str, mesh: &Mesh, with_lines: bool) -> Self {
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let triangles = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let lines = with_lines.then(|| {
            let line_indices = mesh.wireframe_indices();
            let buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&line_indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            (buf, line_indices.len() as u32)
        });
        Self {
            vertices,
            triangles,
            triangle_count: mesh.indices.len() as u32,
            lines,
        }
    }
}

pub(crate) struct UniformSlot {
    pub(crate) buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) struct AvatarResources {
    pub(crate) solid_pipeline: wgpu::RenderPipeline,
    pub(crate) wire_pipeline: wgpu::RenderPipeline,
    pub(crate) head: MeshBuffers,
    pub(crate) ring: MeshBuffers,
    pub(crate) head_slot: UniformSlot,
    pub(crate) ring_slot: UniformSlot,
}

fn create_slot(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> UniformSlot {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<ObjectUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    });
    UniformSlot { buffer, bind_group }
}

pub(crate) fn create_avatar_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> AvatarResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("avatar_shader"),
        source: wgpu::ShaderSource::Wgsl(AVATAR_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("avatar_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("avatar_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let solid_pipeline = helpers::make_mesh_pipeline(
        device,
        "avatar_solid",
        &pl,
        &shader,
        color_format,
        wgpu::PrimitiveTopology::TriangleList,
    );
    let wire_pipeline = helpers::make_mesh_pipeline(
        device,
        "avatar_wire",
        &pl,
        &shader,
        color_format,
        wgpu::PrimitiveTopology::LineList,
    );

    let head_mesh = uv_sphere(1.0, HEAD_SEGMENTS, HEAD_SEGMENTS);
    let ring_mesh = torus(
        RING_RADIUS,
        RING_TUBE,
        RING_RADIAL_SEGMENTS,
        RING_TUBULAR_SEGMENTS,
    );
    log::info!(
        "[avatar] head tris={} ring tris={}",
        head_mesh.triangle_count(),
        ring_mesh.triangle_count()
    );

    AvatarResources {
        solid_pipeline,
        wire_pipeline,
        head: MeshBuffers::upload(device, "head_mesh", &head_mesh, true),
        ring: MeshBuffers::upload(device, "ring_mesh", &ring_mesh, false),
        head_slot: create_slot(device, &bgl, "head_uniforms"),
        ring_slot: create_slot(device, &bgl, "ring_uniforms"),
    }
}
