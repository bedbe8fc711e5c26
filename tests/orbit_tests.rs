// Host-side tests for orbit camera controls and view state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod state {
        include!("../src/core/state.rs");
    }
    pub mod orbit {
        include!("../src/core/orbit.rs");
    }
}

use crate::core::orbit::{fit_distance, OrbitControls};
use crate::core::state::LoadState;
use constants::*;
use glam::{Vec3, Vec4};

fn settle(c: &mut OrbitControls) {
    for _ in 0..200 {
        c.update(0.1);
    }
}

#[test]
fn starts_at_default_view() {
    let c = OrbitControls::new(false);
    assert_eq!(c.azimuth(), CAMERA_DEFAULT_AZIMUTH);
    assert_eq!(c.elevation(), CAMERA_DEFAULT_ELEVATION);
    assert_eq!(c.distance(), CAMERA_DEFAULT_DISTANCE);
    assert!(!c.is_dragging());
}

#[test]
fn fit_frames_bounding_sphere() {
    let mut c = OrbitControls::new(false);
    c.fit(1.0, 1.0);
    let expected = 1.0 / (CAMERA_FOVY_RAD * 0.5).sin() * FIT_MARGIN;
    assert!((c.distance() - expected).abs() < 1e-5);
    assert!((c.min_distance - expected * MIN_DISTANCE_FACTOR).abs() < 1e-5);
    assert!((c.max_distance - expected * MAX_DISTANCE_FACTOR).abs() < 1e-5);
}

#[test]
fn narrow_viewport_backs_the_camera_off() {
    let landscape = fit_distance(1.0, 16.0 / 9.0);
    let portrait = fit_distance(1.0, 9.0 / 16.0);
    // wide viewports are limited by the vertical fov
    assert!((landscape - fit_distance(1.0, 1.0)).abs() < 1e-5);
    assert!(portrait > landscape);

    // the sphere's horizontal extent stays inside the frustum
    let half_h = ((CAMERA_FOVY_RAD * 0.5).tan() * 9.0 / 16.0).atan();
    assert!(1.0 / portrait <= half_h.sin() + 1e-6);
}

#[test]
fn fit_distance_treats_bad_aspect_as_square() {
    assert_eq!(fit_distance(2.0, 0.0), fit_distance(2.0, 1.0));
    assert_eq!(fit_distance(2.0, f32::NAN), fit_distance(2.0, 1.0));
}

#[test]
fn aspect_change_refits_and_keeps_zoom_ratio() {
    let mut c = OrbitControls::new(false);
    c.fit(1.0, 16.0 / 9.0);
    c.zoom(200.0);
    settle(&mut c);
    let ratio = c.distance() / c.home_distance();
    assert!(ratio > 1.0);

    c.set_aspect(9.0 / 16.0);
    assert!((c.home_distance() - fit_distance(1.0, 9.0 / 16.0)).abs() < 1e-5);
    assert!((c.distance() / c.home_distance() - ratio).abs() < 1e-4);
    settle(&mut c);
    assert!((c.distance() / c.home_distance() - ratio).abs() < 1e-3);

    c.reset();
    settle(&mut c);
    assert!((c.distance() - fit_distance(1.0, 9.0 / 16.0)).abs() < 1e-3);
}

#[test]
fn aspect_change_before_fit_keeps_default_distance() {
    let mut c = OrbitControls::new(false);
    c.set_aspect(0.5);
    assert_eq!(c.distance(), CAMERA_DEFAULT_DISTANCE);
}

#[test]
fn fit_ignores_degenerate_radius() {
    let mut c = OrbitControls::new(false);
    c.fit(0.0, 1.5);
    c.fit(-2.0, 1.5);
    c.fit(f32::NAN, 1.5);
    c.fit(f32::INFINITY, 1.5);
    assert_eq!(c.distance(), CAMERA_DEFAULT_DISTANCE);
}

#[test]
fn rotate_eases_toward_goal() {
    let mut c = OrbitControls::new(false);
    c.rotate(100.0, 0.0);
    c.update(0.016);
    let goal = CAMERA_DEFAULT_AZIMUTH - 100.0 * ORBIT_ROTATE_RAD_PER_PX;
    // moved, but not all the way yet
    assert!(c.azimuth() < CAMERA_DEFAULT_AZIMUTH);
    assert!(c.azimuth() > goal);
    settle(&mut c);
    assert!((c.azimuth() - goal).abs() < 1e-4);
}

#[test]
fn elevation_is_clamped() {
    let mut c = OrbitControls::new(false);
    c.rotate(0.0, 100_000.0);
    settle(&mut c);
    assert!((c.elevation() - MAX_ELEVATION).abs() < 1e-4);
    c.rotate(0.0, -200_000.0);
    settle(&mut c);
    assert!((c.elevation() - MIN_ELEVATION).abs() < 1e-4);
}

#[test]
fn zoom_stays_within_limits() {
    let mut c = OrbitControls::new(false);
    c.zoom(1.0e6);
    settle(&mut c);
    assert!((c.distance() - c.max_distance).abs() < 1e-3);
    c.zoom(-1.0e6);
    settle(&mut c);
    assert!((c.distance() - c.min_distance).abs() < 1e-3);
    let before = c.distance();
    c.zoom(f32::NAN);
    settle(&mut c);
    assert!((c.distance() - before).abs() < 1e-6);
}

#[test]
fn wheel_down_zooms_out() {
    let mut c = OrbitControls::new(false);
    c.zoom(120.0);
    settle(&mut c);
    assert!(c.distance() > CAMERA_DEFAULT_DISTANCE);
}

#[test]
fn auto_rotate_waits_for_idle() {
    let mut c = OrbitControls::new(true);
    c.begin_drag();
    for _ in 0..50 {
        c.update(0.1);
    }
    assert_eq!(c.azimuth(), CAMERA_DEFAULT_AZIMUTH);

    c.end_drag();
    c.update(AUTO_ROTATE_IDLE_SEC * 0.5);
    assert_eq!(c.azimuth(), CAMERA_DEFAULT_AZIMUTH);

    c.update(AUTO_ROTATE_IDLE_SEC);
    assert!(c.azimuth() > CAMERA_DEFAULT_AZIMUTH);
}

#[test]
fn auto_rotate_turns_on_first_frames() {
    let mut c = OrbitControls::new(true);
    c.update(0.1);
    assert!(c.azimuth() > CAMERA_DEFAULT_AZIMUTH);
}

#[test]
fn toggle_auto_rotate_reports_new_value() {
    let mut c = OrbitControls::new(true);
    assert!(!c.toggle_auto_rotate());
    settle(&mut c);
    assert_eq!(c.azimuth(), CAMERA_DEFAULT_AZIMUTH);
    assert!(c.toggle_auto_rotate());
}

#[test]
fn reset_returns_to_home_view() {
    let mut c = OrbitControls::new(false);
    c.fit(0.5, 1.5);
    let home = c.distance();
    c.rotate(-5_000.0, 300.0);
    c.zoom(400.0);
    settle(&mut c);

    c.reset();
    // accumulated turns are unwound to the nearest equivalent angle
    assert!((c.azimuth() - CAMERA_DEFAULT_AZIMUTH).abs() <= std::f32::consts::PI + 1e-4);
    settle(&mut c);
    assert!((c.azimuth() - CAMERA_DEFAULT_AZIMUTH).abs() < 1e-3);
    assert!((c.elevation() - CAMERA_DEFAULT_ELEVATION).abs() < 1e-3);
    assert!((c.distance() - home).abs() < 1e-3);
}

#[test]
fn eye_sits_on_orbit_sphere() {
    let mut c = OrbitControls::new(false);
    c.target = Vec3::new(1.0, 2.0, 3.0);
    c.rotate(37.0, -12.0);
    settle(&mut c);
    let r = (c.eye() - c.target).length();
    assert!((r - c.distance()).abs() < 1e-4);
}

#[test]
fn camera_falls_back_to_square_aspect() {
    let c = OrbitControls::new(false);
    assert_eq!(c.camera(0.0).aspect, 1.0);
    assert_eq!(c.camera(f32::NAN).aspect, 1.0);
    let cam = c.camera(16.0 / 9.0);
    assert!(cam.znear > 0.0);
    assert!(cam.zfar > c.distance());
}

#[test]
fn camera_projects_target_to_screen_centre() {
    let mut c = OrbitControls::new(false);
    c.rotate(80.0, 40.0);
    settle(&mut c);
    let clip = c.camera(1.5).view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip / clip.w;
    assert!(ndc.x.abs() < 1e-4);
    assert!(ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn load_state_resolves_once() {
    let s = LoadState::default();
    assert!(s.shows_fallback());
    assert_eq!(s.as_attr(), "loading");

    let ok = s.resolve(true);
    assert_eq!(ok, LoadState::Ready);
    assert!(!ok.shows_fallback());
    assert_eq!(ok.resolve(false), LoadState::Ready);

    let failed = s.resolve(false);
    assert_eq!(failed, LoadState::Failed);
    assert!(!failed.shows_fallback());
    assert_eq!(failed.as_attr(), "failed");
    assert_eq!(failed.resolve(true), LoadState::Failed);
}
