use glam::{Vec2, Vec3};
use web_sys as web;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// CSS-pixel position to normalized device coordinates: x right, y up, both
/// in [-1, 1]. A zero-sized viewport maps everything to the centre.
#[inline]
pub fn pointer_ndc(x_css: f32, y_css: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let x = (x_css / width) * 2.0 - 1.0;
    let y = 1.0 - (y_css / height) * 2.0;
    Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

/// Pointer position relative to the full window, which the fixed canvas
/// covers.
#[inline]
pub fn pointer_window_ndc(ev: &web::PointerEvent, window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    pointer_ndc(ev.client_x() as f32, ev.client_y() as f32, w, h)
}

/// Whether the pointer is over the avatar. Only drives the cursor hint.
#[derive(Default, Clone, Copy, Debug)]
pub struct HoverState {
    pub hovered: bool,
}

impl HoverState {
    /// Record the latest hit test; returns the new value when it changed.
    #[inline]
    pub fn update(&mut self, hit: bool) -> Option<bool> {
        if hit == self.hovered {
            return None;
        }
        self.hovered = hit;
        Some(hit)
    }
}
