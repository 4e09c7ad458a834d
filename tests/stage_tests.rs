// Host-side tests for the scroll-to-stage classifier.
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

use crate::core::pose::PointerState;
use crate::core::scene::Viewport;
use crate::core::stage::*;
use glam::Vec3;

const EPS: f32 = 1e-5;

fn inputs(elapsed_sec: f32) -> ClassifyInputs {
    ClassifyInputs {
        viewport: Viewport::new(8.0, 4.5),
        elapsed_sec,
    }
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn table_is_contiguous_and_covers_stage_space() {
    assert_eq!(STAGE_TABLE.first().map(|r| r.lower), Some(0.0));
    assert_eq!(STAGE_TABLE.last().map(|r| r.upper), Some(10.0));
    for pair in STAGE_TABLE.windows(2) {
        assert_eq!(pair[0].upper, pair[1].lower, "gap between {:?}", pair);
        assert!(pair[0].lower < pair[0].upper);
    }
}

#[test]
fn row_boundaries_are_lower_inclusive() {
    assert_eq!(Stage::for_value(0.0), Stage::Hero);
    assert_eq!(Stage::for_value(0.999), Stage::Hero);
    assert_eq!(Stage::for_value(1.0), Stage::About);
    assert_eq!(Stage::for_value(2.0), Stage::Experience);
    assert_eq!(Stage::for_value(3.99), Stage::Experience);
    assert_eq!(Stage::for_value(4.0), Stage::Projects);
    assert_eq!(Stage::for_value(6.0), Stage::Finale);
    assert_eq!(Stage::for_value(10.0), Stage::Finale);
}

#[test]
fn out_of_range_values_clamp_to_end_rows() {
    assert_eq!(Stage::for_value(-3.0), Stage::Hero);
    assert_eq!(Stage::for_value(42.0), Stage::Finale);
    assert_eq!(Stage::for_value(f32::NAN), Stage::Hero);
    assert_eq!(Stage::for_value(f32::INFINITY), Stage::Hero);

    let i = inputs(0.0);
    assert_eq!(classify(-3.0, &i), classify(0.0, &i));
    assert_eq!(classify(42.0, &i), classify(10.0, &i));
}

#[test]
fn hero_is_centred_and_enlarged() {
    for v in [0.0, 0.25, 0.5, 0.99] {
        let t = classify(v, &inputs(0.0));
        assert!(close(t.scale, 1.5));
        assert_eq!(t.position, Vec3::ZERO);
        assert!(!t.wireframe);
        assert!(close(t.opacity, 1.0));
    }
}

#[test]
fn hero_idle_sway_follows_elapsed_time() {
    assert!(close(classify(0.5, &inputs(0.0)).rotation_y, 0.0));
    // sin(0.5 * pi) * 0.2
    let t = classify(0.5, &inputs(std::f32::consts::PI));
    assert!(close(t.rotation_y, 0.2));
}

#[test]
fn about_sits_right_facing_left() {
    let t = classify(1.5, &inputs(0.0));
    assert!(close(t.position.x, 8.0 * 0.2));
    assert!(close(t.rotation_y, -0.4));
    assert!(close(t.scale, 1.2));
}

#[test]
fn experience_alternates_sides_per_unit() {
    let even = classify(2.3, &inputs(0.0));
    let odd = classify(3.3, &inputs(0.0));

    assert!(close(even.position.x, -1.6));
    assert!(close(even.rotation_y, 0.4));
    assert!(close(odd.position.x, 1.6));
    assert!(close(odd.rotation_y, -0.4));
    assert!(even.position.x.signum() != odd.position.x.signum());
    assert!(close(even.scale, 1.0) && close(odd.scale, 1.0));
}

#[test]
fn projects_switch_to_wireframe_past_threshold() {
    let solid = classify(4.2, &inputs(0.0));
    assert!(!solid.wireframe);
    assert!(close(solid.opacity, 1.0));
    assert!(close(solid.position.y, 4.5 * 0.1));
    assert!(close(solid.scale, 0.8));

    // threshold itself is still solid
    assert!(!classify(4.5, &inputs(0.0)).wireframe);

    for v in [4.51, 5.0, 5.99] {
        let t = classify(v, &inputs(0.0));
        assert!(t.wireframe, "expected wireframe at {}", v);
        assert!(close(t.opacity, 0.4));
    }
}

#[test]
fn finale_recedes_and_fades() {
    for v in [6.0, 8.0, 10.0] {
        let t = classify(v, &inputs(0.0));
        assert!(close(t.scale, 0.7));
        assert!(close(t.position.z, -2.0));
        assert!(close(t.position.y, -0.45));
        assert!(close(t.opacity, 0.3));
        assert!(!t.wireframe);
    }
}

#[test]
fn classify_is_pure() {
    let i = inputs(1.7);
    for v in [0.3, 1.1, 2.8, 4.9, 7.5] {
        assert_eq!(classify(v, &i), classify(v, &i));
    }
}

#[test]
fn parallax_applies_near_page_ends_only() {
    assert!(parallax_active(0.5));
    assert!(!parallax_active(1.0));
    assert!(!parallax_active(5.0));
    assert!(!parallax_active(9.0));
    assert!(parallax_active(9.5));
}

#[test]
fn parallax_offsets_rotation_in_hero() {
    let i = inputs(0.0);
    let t = target_for_frame(0.5, &i, PointerState::new(1.0, 1.0));
    assert!(close(t.rotation_y, 0.3));
    assert!(close(t.rotation_x, -0.2));

    let base = classify(5.0, &i);
    let t = target_for_frame(5.0, &i, PointerState::new(1.0, 1.0));
    assert_eq!(t, base);
}

#[test]
fn parallax_adds_to_finale_pose() {
    let i = inputs(0.0);
    let t = target_for_frame(9.5, &i, PointerState::new(-0.5, 0.0));
    assert!(close(t.rotation_y, -0.15));
    assert!(close(t.rotation_x, 0.0));
    assert!(close(t.opacity, 0.3));
}

#[test]
fn stage_names_are_stable() {
    let names: Vec<_> = STAGE_TABLE.iter().map(|r| r.stage.name()).collect();
    assert_eq!(names, ["hero", "about", "experience", "projects", "finale"]);
}
