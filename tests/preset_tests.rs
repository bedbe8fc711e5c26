// Host-side tests for lighting presets.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod preset {
    include!("../src/core/preset.rs");
}

use preset::*;
use std::collections::HashSet;

#[test]
fn studio_is_the_default_preset() {
    assert_eq!(Preset::default(), Preset::Studio);
    assert!(Preset::ALL.contains(&Preset::Studio));
}

#[test]
fn names_parse_back_case_insensitively() {
    for p in Preset::ALL {
        assert_eq!(p.name().parse::<Preset>(), Ok(p));
        assert_eq!(p.label().to_uppercase().parse::<Preset>(), Ok(p));
        assert_eq!(p.to_string(), p.name());
    }
    assert_eq!("  sunset \n".parse::<Preset>(), Ok(Preset::Sunset));
}

#[test]
fn unknown_names_are_rejected() {
    let err = "disco".parse::<Preset>().unwrap_err();
    assert_eq!(err, UnknownPreset("disco".to_string()));
    assert_eq!(err.to_string(), "unknown preset 'disco'");
    assert!("".parse::<Preset>().is_err());
}

#[test]
fn names_and_labels_are_unique() {
    let names: HashSet<_> = Preset::ALL.iter().map(|p| p.name()).collect();
    let labels: HashSet<_> = Preset::ALL.iter().map(|p| p.label()).collect();
    assert_eq!(names.len(), Preset::ALL.len());
    assert_eq!(labels.len(), Preset::ALL.len());
}

#[test]
fn every_digit_reaches_a_distinct_preset() {
    let picked: Vec<Preset> = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"]
        .iter()
        .filter_map(|k| Preset::for_digit(k))
        .collect();
    assert_eq!(picked, Preset::ALL.to_vec());
    assert_eq!(Preset::for_digit("a"), None);
    assert_eq!(Preset::for_digit("11"), None);
}

#[test]
fn environments_are_renderable() {
    for p in Preset::ALL {
        let env = p.environment();
        assert!(!env.lights.is_empty(), "{} has no lights", p);
        assert!(env.lights.len() <= 4, "{} exceeds the light budget", p);
        for l in &env.lights {
            assert!((l.direction.length() - 1.0).abs() < 1e-4);
            assert!(l.intensity > 0.0);
        }
        assert!(env.exposure > 0.0);
        assert!((0.0..=1.0).contains(&env.ambient));
        assert!(env.accent.starts_with('#'));
    }
}

#[test]
fn presets_look_different() {
    let studio = Preset::Studio.environment();
    let night = Preset::Night.environment();
    assert_ne!(studio.backdrop, night.backdrop);
    // night reads darker than the studio sweep
    assert!(night.backdrop.horizon.length() < studio.backdrop.horizon.length());
}

#[test]
fn selection_hands_out_each_environment_once() {
    let mut sel = PresetSelection::new(Preset::Studio);
    assert_eq!(sel.current(), Preset::Studio);
    assert_eq!(sel.take_environment(), Some(Preset::Studio.environment()));
    assert_eq!(sel.take_environment(), None);

    assert!(sel.select(Preset::Night));
    assert_eq!(sel.current(), Preset::Night);
    assert_eq!(sel.take_environment(), Some(Preset::Night.environment()));
    assert_eq!(sel.take_environment(), None);
}

#[test]
fn reselecting_the_active_preset_is_a_no_op() {
    let mut sel = PresetSelection::new(Preset::Park);
    _ = sel.take_environment();
    assert!(!sel.select(Preset::Park));
    assert_eq!(sel.take_environment(), None);
}

#[test]
fn switching_back_before_a_frame_skips_the_upload() {
    let mut sel = PresetSelection::new(Preset::Studio);
    _ = sel.take_environment();
    assert!(sel.select(Preset::Dawn));
    assert!(sel.select(Preset::Studio));
    assert_eq!(sel.take_environment(), None);
}
