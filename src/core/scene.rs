// Camera and viewport helpers. No platform APIs here so the frame math can be
// checked on the host.

use super::constants::{CAMERA_FOV_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed page camera looking at the origin from +z.
    pub fn page(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space extent visible on the plane through the camera target.
    pub fn viewport(&self) -> Viewport {
        Viewport::at_distance(self.fovy_radians, (self.target - self.eye).length(), self.aspect)
    }
}

/// World-space size of the visible area at a given depth plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn at_distance(fovy_radians: f32, distance: f32, aspect: f32) -> Self {
        let height = 2.0 * (fovy_radians * 0.5).tan() * distance;
        Self {
            width: height * aspect,
            height,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Camera::page(16.0 / 9.0).viewport()
    }
}
