use crate::core::Camera;
use glam::{Vec2, Vec3, Vec4};

#[inline]
/// Compute a world-space ray through a point given in normalized device
/// coordinates (x right, y up).
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn ndc_to_world_ray(camera: &Camera, ndc: Vec2) -> (Vec3, Vec3) {
    let inv = camera.view_projection().inverse();
    let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize();
    (ro, rd)
}
