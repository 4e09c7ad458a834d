// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_within_reasonable_bounds() {
    // Blend factor must make progress without overshooting
    assert!(POSE_LERP_ALPHA > 0.0 && POSE_LERP_ALPHA < 1.0);

    // Idle motion stays subtle
    assert!(IDLE_SWAY_AMPLITUDE > 0.0 && IDLE_SWAY_AMPLITUDE < 1.0);
    assert!(BREATH_AMPLITUDE > 0.0 && BREATH_AMPLITUDE < 0.1);
    assert!(IDLE_SWAY_RATE > 0.0);
    assert!(BREATH_RATE > 0.0);

    // Parallax gains are small rotations
    assert!(PARALLAX_YAW > 0.0 && PARALLAX_YAW < 1.0);
    assert!(PARALLAX_PITCH > 0.0 && PARALLAX_PITCH < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stage_space_thresholds_are_ordered() {
    assert_eq!(STAGE_SPACE_MAX, 10.0);
    assert!(0.0 < PARALLAX_BELOW);
    assert!(PARALLAX_BELOW < PARALLAX_ABOVE);
    assert!(PARALLAX_ABOVE < STAGE_SPACE_MAX);

    // The wireframe switch sits inside the projects stretch [4, 6)
    assert!(WIREFRAME_THRESHOLD > 4.0 && WIREFRAME_THRESHOLD < 6.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacities_are_valid_alpha() {
    for a in [WIREFRAME_OPACITY, FINALE_OPACITY, RING_OPACITY] {
        assert!(a > 0.0 && a < 1.0, "opacity {} out of range", a);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_and_material_constants_are_sane() {
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_Z);
    assert!(CAMERA_ZFAR > CAMERA_Z);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);

    assert!((0.0..=1.0).contains(&HEAD_METALNESS));
    assert!((0.0..=1.0).contains(&HEAD_ROUGHNESS));
    assert!(HEAD_SEGMENTS >= 3);
    assert!(RING_TUBE < RING_RADIUS);

    // Finale sits behind the camera target, still in front of the camera
    assert!(FINALE_DEPTH < 0.0 && CAMERA_Z - FINALE_DEPTH < CAMERA_ZFAR);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [CANVAS_ID, LOADING_SCREEN_ID, NAV_ID, CONTENT_ID, HUD_SYNC_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(REVEAL_SELECTOR.starts_with('.'));
    assert_ne!(REVEALED_CLASS, HIDDEN_CLASS);
}
