// Host-side tests for the per-frame pose interpolator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod pose {
        include!("../src/core/pose.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod stage {
        include!("../src/core/stage.rs");
    }
}

use crate::core::pose::*;
use crate::core::stage::StageTarget;
use glam::{Mat4, Vec3};

fn still() -> MotionParams {
    MotionParams {
        breath_amplitude: 0.0,
        ..MotionParams::default()
    }
}

fn target() -> StageTarget {
    StageTarget {
        position: Vec3::new(1.6, 0.45, -2.0),
        scale: 0.7,
        rotation_x: -0.2,
        rotation_y: 0.4,
        wireframe: false,
        opacity: 0.3,
    }
}

fn max_gap(p: &AvatarPose, t: &StageTarget) -> f32 {
    [
        (p.position - t.position).abs().max_element(),
        (p.scale - t.scale).abs(),
        (p.rotation_x - t.rotation_x).abs(),
        (p.rotation_y - t.rotation_y).abs(),
        (p.opacity - t.opacity).abs(),
    ]
    .into_iter()
    .fold(0.0, f32::max)
}

#[test]
fn default_pose_is_identity() {
    let pose = AvatarPose::default();
    assert!(pose.model_matrix().abs_diff_eq(Mat4::IDENTITY, 1e-6));
    assert!(!pose.wireframe);
    assert_eq!(pose.opacity, 1.0);
}

#[test]
fn model_matrix_places_origin_at_position() {
    let pose = AvatarPose {
        position: Vec3::new(1.0, 2.0, 3.0),
        scale: 2.0,
        rotation_y: 0.7,
        ..AvatarPose::default()
    };
    let p = pose.model_matrix().transform_point3(Vec3::ZERO);
    assert!(p.abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-5));
}

#[test]
fn one_step_closes_five_percent_of_the_gap() {
    let pose = AvatarPose::default();
    let t = target();
    let next = step(&pose, &t, &still(), 0.0);

    let before = t.scale - pose.scale;
    let after = t.scale - next.scale;
    assert!((after - before * 0.95).abs() < 1e-6);

    let before = t.position - pose.position;
    let after = t.position - next.position;
    assert!(after.abs_diff_eq(before * 0.95, 1e-6));
}

#[test]
fn constant_target_converges() {
    let t = target();
    let mut pose = AvatarPose::default();
    let mut last = max_gap(&pose, &t);
    for _ in 0..200 {
        pose = step(&pose, &t, &still(), 0.0);
        let gap = max_gap(&pose, &t);
        assert!(gap <= last);
        last = gap;
    }
    assert!(last < 1e-3, "still {} away", last);
}

#[test]
fn wireframe_switches_immediately() {
    let t = StageTarget {
        wireframe: true,
        opacity: 0.4,
        ..target()
    };
    let next = step(&AvatarPose::default(), &t, &still(), 0.0);
    assert!(next.wireframe);
    // opacity is still blending
    assert!(next.opacity > 0.9);

    let back = step(&next, &target(), &still(), 0.0);
    assert!(!back.wireframe);
}

#[test]
fn breathing_bobs_vertically() {
    let params = MotionParams {
        lerp_alpha: 0.0,
        ..MotionParams::default()
    };
    let pose = AvatarPose::default();
    let t = StageTarget {
        position: Vec3::ZERO,
        ..target()
    };

    let at_peak = step(&pose, &t, &params, std::f32::consts::FRAC_PI_2);
    assert!((at_peak.position.y - 0.02).abs() < 1e-6);
    assert_eq!(at_peak.position.x, 0.0);

    let at_zero = step(&pose, &t, &params, 0.0);
    assert_eq!(at_zero.position.y, 0.0);
}

#[test]
fn opacity_stays_in_unit_range() {
    let t = StageTarget {
        opacity: 3.0,
        ..target()
    };
    let params = MotionParams {
        lerp_alpha: 1.0,
        ..still()
    };
    assert_eq!(step(&AvatarPose::default(), &t, &params, 0.0).opacity, 1.0);
}

#[test]
fn pointer_state_is_clamped() {
    let p = PointerState::new(2.5, -7.0);
    assert_eq!(p, PointerState { x: 1.0, y: -1.0 });
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
}
