// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod preset {
        include!("../src/core/preset.rs");
    }
    pub use preset::*;
}
mod input {
    include!("../src/input.rs");
}

use crate::core::Preset;
use glam::Vec2;
use input::*;

#[test]
fn drag_reports_deltas_only_for_its_pointer() {
    let mut drag = DragState::default();
    assert_eq!(drag.advance(1, Vec2::new(5.0, 5.0)), None);

    drag.begin(7, Vec2::new(10.0, 20.0));
    assert_eq!(drag.advance(7, Vec2::new(13.0, 18.0)), Some(Vec2::new(3.0, -2.0)));
    // a second finger must not steer the orbit
    assert_eq!(drag.advance(8, Vec2::new(100.0, 100.0)), None);
    assert_eq!(drag.advance(7, Vec2::new(14.0, 18.0)), Some(Vec2::new(1.0, 0.0)));
}

#[test]
fn drag_ends_only_for_owner() {
    let mut drag = DragState::default();
    drag.begin(3, Vec2::ZERO);
    assert!(!drag.end(4));
    assert!(drag.active);
    assert!(drag.end(3));
    assert!(!drag.active);
    assert!(!drag.end(3));
}

#[test]
fn wheel_delta_modes_scale_to_pixels() {
    assert_eq!(normalize_wheel(100.0, 0), 100.0);
    assert_eq!(normalize_wheel(3.0, 1), 48.0);
    assert_eq!(normalize_wheel(-1.0, 2), -800.0);
    // unknown modes are treated as pixels
    assert_eq!(normalize_wheel(5.0, 9), 5.0);
}

#[test]
fn uv_from_norm_maps_and_clamps() {
    assert_eq!(uv_from_norm(Vec2::ZERO), [0.5, 0.5]);
    assert_eq!(uv_from_norm(Vec2::new(-1.0, 1.0)), [0.0, 1.0]);
    assert_eq!(uv_from_norm(Vec2::new(-4.0, 9.0)), [0.0, 1.0]);
}

#[test]
fn digit_keys_select_presets_in_picker_order() {
    assert_eq!(
        action_for_key("1"),
        Some(KeyAction::SelectPreset(Preset::ALL[0]))
    );
    assert_eq!(
        action_for_key("9"),
        Some(KeyAction::SelectPreset(Preset::ALL[8]))
    );
    assert_eq!(
        action_for_key("0"),
        Some(KeyAction::SelectPreset(Preset::ALL[9]))
    );
}

#[test]
fn control_keys_map_to_camera_actions() {
    assert_eq!(action_for_key("r"), Some(KeyAction::ResetCamera));
    assert_eq!(action_for_key("R"), Some(KeyAction::ResetCamera));
    assert_eq!(action_for_key(" "), Some(KeyAction::ToggleAutoRotate));
}

#[test]
fn unrelated_keys_are_ignored() {
    for key in ["a", "Enter", "Shift", "10", "", "F1", "ArrowLeft"] {
        assert_eq!(action_for_key(key), None, "key {:?}", key);
    }
}

#[test]
fn focus_is_classified_by_tag_role_and_editability() {
    assert_eq!(target_kind_for("input", false, None), TargetKind::Text);
    assert_eq!(target_kind_for("TEXTAREA", false, None), TargetKind::Text);
    assert_eq!(target_kind_for("DIV", true, None), TargetKind::Text);
    assert_eq!(target_kind_for("DIV", false, Some("textbox")), TargetKind::Text);
    assert_eq!(target_kind_for("BUTTON", false, None), TargetKind::Control);
    assert_eq!(target_kind_for("a", false, None), TargetKind::Control);
    assert_eq!(target_kind_for("SPAN", false, Some("button")), TargetKind::Control);
    assert_eq!(target_kind_for("BODY", false, None), TargetKind::Page);
    assert_eq!(target_kind_for("CANVAS", false, Some("img")), TargetKind::Page);
}

#[test]
fn text_fields_swallow_every_shortcut() {
    for key in ["1", "0", "r", " "] {
        assert_eq!(action_for_target(key, TargetKind::Text), None, "key {:?}", key);
    }
}

#[test]
fn focused_controls_keep_space_for_activation() {
    assert_eq!(action_for_target(" ", TargetKind::Control), None);
    assert_eq!(action_for_target("r", TargetKind::Control), Some(KeyAction::ResetCamera));
    assert_eq!(
        action_for_target("3", TargetKind::Control),
        Some(KeyAction::SelectPreset(Preset::ALL[2]))
    );
    assert_eq!(
        action_for_target(" ", TargetKind::Page),
        Some(KeyAction::ToggleAutoRotate)
    );
    assert_eq!(action_for_target("x", TargetKind::Page), None);
}
