use super::constants::{BREATH_AMPLITUDE, BREATH_RATE, POSE_LERP_ALPHA};
use super::stage::StageTarget;
use glam::{Mat4, Quat, Vec3};

/// Pointer position in normalized device coordinates, +y up, both in [-1, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }
}

/// Current avatar transform and material state. Written once per frame by
/// the frame loop; everything else only reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvatarPose {
    pub position: Vec3,
    pub scale: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub opacity: f32,
    pub wireframe: bool,
}

impl Default for AvatarPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            opacity: 1.0,
            wireframe: false,
        }
    }
}

impl AvatarPose {
    /// Group transform: translate, then rotate (x then y, as three.js 'XYZ'
    /// euler order with z = 0), then uniform scale.
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_rotation_x(self.rotation_x) * Quat::from_rotation_y(self.rotation_y);
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rotation, self.position)
    }
}

/// Smoothing parameters for [`step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    /// Fraction of the remaining distance covered per tick.
    pub lerp_alpha: f32,
    pub breath_amplitude: f32,
    pub breath_rate: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            lerp_alpha: POSE_LERP_ALPHA,
            breath_amplitude: BREATH_AMPLITUDE,
            breath_rate: BREATH_RATE,
        }
    }
}

#[inline]
pub fn lerp(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

/// Advance the pose one tick toward `target`.
///
/// Every continuous channel moves a fixed fraction of the way; the blend is
/// per tick, so convergence speed follows the caller's tick rate. The
/// breathing bob is added after blending and is not smoothed. The wireframe
/// flag switches immediately.
pub fn step(
    pose: &AvatarPose,
    target: &StageTarget,
    params: &MotionParams,
    elapsed_sec: f32,
) -> AvatarPose {
    let a = params.lerp_alpha;
    let mut position = pose.position.lerp(target.position, a);
    position.y += (elapsed_sec * params.breath_rate).sin() * params.breath_amplitude;
    AvatarPose {
        position,
        scale: lerp(pose.scale, target.scale, a),
        rotation_x: lerp(pose.rotation_x, target.rotation_x, a),
        rotation_y: lerp(pose.rotation_y, target.rotation_y, a),
        opacity: lerp(pose.opacity, target.opacity, a).clamp(0.0, 1.0),
        wireframe: target.wireframe,
    }
}
