// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Time constants should be positive
    assert!(ORBIT_DAMPING_TAU_SEC > 0.0);
    assert!(CURSOR_TAU_SEC > 0.0);
    assert!(AUTO_ROTATE_IDLE_SEC > 0.0);
    assert!(AUTO_ROTATE_RAD_PER_SEC > 0.0);

    // Elevation must stay clear of the poles so look_at never degenerates
    assert!(MIN_ELEVATION > -std::f32::consts::FRAC_PI_2);
    assert!(MAX_ELEVATION < std::f32::consts::FRAC_PI_2);
    assert!(MIN_ELEVATION < CAMERA_DEFAULT_ELEVATION);
    assert!(CAMERA_DEFAULT_ELEVATION < MAX_ELEVATION);

    // Zoom range brackets the fitted distance
    assert!(MIN_DISTANCE_FACTOR > 0.0 && MIN_DISTANCE_FACTOR < 1.0);
    assert!(MAX_DISTANCE_FACTOR > 1.0);
    assert!(FIT_MARGIN >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn effect_ranges_are_ordered() {
    assert!(PARTICLE_DEPTH_MIN > 0.0);
    assert!(PARTICLE_DEPTH_MIN < PARTICLE_DEPTH_MAX);
    assert!(PARTICLE_SIZE_MIN_PX < PARTICLE_SIZE_MAX_PX);
    assert!(DEFAULT_PARTICLES <= MAX_PARTICLES);
    // glow focus stays inside the element
    assert!(GLOW_SHIFT_PERCENT > 0.0 && GLOW_SHIFT_PERCENT < 50.0);
    assert!(HORIZON_HEIGHT > 0.0 && HORIZON_HEIGHT < 1.0);
}

#[test]
fn default_model_is_a_binary_gltf() {
    assert!(DEFAULT_MODEL_URL.ends_with(".glb"));
    assert!(HOVER_SELECTOR.contains("button"));
    assert_eq!(MAX_LIGHTS, 4);
}

#[test]
fn alt_hover_targets_are_also_hover_targets() {
    assert!(HOVER_SELECTOR.contains("[data-hover]"));
    assert!(HOVER_ALT_SELECTOR.contains("[data-hover=\"alt\"]"));
    for part in HOVER_ALT_SELECTOR.split(',').map(str::trim) {
        let covered = part.starts_with("[data-hover")
            || HOVER_SELECTOR.split(',').any(|s| s.trim() == part);
        assert!(covered, "{} is not a hover target", part);
    }
}
