// Host-side tests for cursor and parallax maths.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod effects {
    include!("../src/core/effects.rs");
}

use constants::*;
use effects::*;
use glam::Vec2;

#[test]
fn cursor_snaps_on_first_sample() {
    let mut c = CursorFollower::default();
    assert!(!c.is_initialized());
    let p = c.step(Vec2::new(120.0, 80.0), 0.016);
    assert_eq!(p, Vec2::new(120.0, 80.0));
    assert!(c.is_initialized());
}

#[test]
fn cursor_trails_then_arrives() {
    let mut c = CursorFollower::default();
    c.step(Vec2::ZERO, 0.016);
    let p = c.step(Vec2::new(100.0, 0.0), 0.016);
    assert!(p.x > 0.0 && p.x < 100.0);
    assert_eq!(p.y, 0.0);
    for _ in 0..120 {
        c.step(Vec2::new(100.0, 0.0), 0.016);
    }
    assert_eq!(c.position(), Vec2::new(100.0, 0.0));
}

#[test]
fn cursor_holds_still_without_time() {
    let mut c = CursorFollower::default();
    c.step(Vec2::new(10.0, 10.0), 0.016);
    assert_eq!(c.step(Vec2::new(90.0, 90.0), 0.0), Vec2::new(10.0, 10.0));
    assert_eq!(c.step(Vec2::new(90.0, 90.0), -1.0), Vec2::new(10.0, 10.0));
}

#[test]
fn cursor_reset_snaps_again() {
    let mut c = CursorFollower::default();
    c.step(Vec2::ZERO, 0.016);
    c.reset();
    assert_eq!(c.step(Vec2::new(500.0, 40.0), 0.016), Vec2::new(500.0, 40.0));
}

#[test]
fn normalized_offset_spans_viewport() {
    assert_eq!(normalized_offset(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    assert_eq!(normalized_offset(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, -1.0));
    assert_eq!(normalized_offset(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, 1.0));
    assert_eq!(normalized_offset(-50.0, 900.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
}

#[test]
fn normalized_offset_handles_empty_viewport() {
    assert_eq!(normalized_offset(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    assert_eq!(normalized_offset(10.0, 10.0, 800.0, -1.0), Vec2::ZERO);
    assert_eq!(normalized_offset(10.0, 10.0, f32::NAN, 600.0), Vec2::ZERO);
}

#[test]
fn parallax_moves_against_pointer_by_depth() {
    let near = parallax_offset(Vec2::new(1.0, 0.0), 1.0);
    assert_eq!(near, Vec2::new(-PARALLAX_MAX_PX, 0.0));
    let far = parallax_offset(Vec2::new(1.0, 0.0), 0.5);
    assert!(far.x.abs() < near.x.abs());
    assert_eq!(parallax_offset(Vec2::new(0.5, -0.5), -3.0), Vec2::ZERO);
    // inputs beyond the viewport are clamped
    assert_eq!(parallax_offset(Vec2::new(7.0, 0.0), 1.0), near);
}

#[test]
fn glow_follows_pointer() {
    assert_eq!(glow_focus_percent(Vec2::ZERO), Vec2::splat(50.0));
    let g = glow_focus_percent(Vec2::new(1.0, -1.0));
    assert_eq!(g, Vec2::new(50.0 + GLOW_SHIFT_PERCENT, 50.0 - GLOW_SHIFT_PERCENT));
}

#[test]
fn particle_field_is_deterministic_per_seed() {
    let a = ParticleField::new(24, 7);
    let b = ParticleField::new(24, 7);
    let c = ParticleField::new(24, 8);
    assert_eq!(a.particles(), b.particles());
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn particles_stay_in_range() {
    let field = ParticleField::new(DEFAULT_PARTICLES, PARTICLE_SEED);
    assert_eq!(field.len(), DEFAULT_PARTICLES);
    for p in field.particles() {
        assert!((0.0..100.0).contains(&p.x_pct));
        assert!((0.0..100.0).contains(&p.y_pct));
        assert!((PARTICLE_DEPTH_MIN..=PARTICLE_DEPTH_MAX).contains(&p.depth));
        assert!(p.size_px >= PARTICLE_SIZE_MIN_PX - 1e-4);
        assert!(p.size_px <= PARTICLE_SIZE_MAX_PX + 1e-4);
        assert!(p.opacity > 0.0 && p.opacity <= 1.0);
    }
}

#[test]
fn nearer_particles_are_larger() {
    let field = ParticleField::new(50, 3);
    let mut ps = field.particles().to_vec();
    ps.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    for w in ps.windows(2) {
        assert!(w[0].size_px <= w[1].size_px);
        assert!(w[0].opacity <= w[1].opacity);
    }
}

#[test]
fn particle_offsets_follow_depth() {
    let field = ParticleField::new(10, 1);
    let norm = Vec2::new(0.3, -0.8);
    let offsets: Vec<Vec2> = field.offsets(norm).collect();
    assert_eq!(offsets.len(), field.len());
    for (o, p) in offsets.iter().zip(field.particles()) {
        assert_eq!(*o, parallax_offset(norm, p.depth));
    }
}

#[test]
fn empty_field() {
    let field = ParticleField::new(0, PARTICLE_SEED);
    assert!(field.is_empty());
    assert_eq!(field.offsets(Vec2::ONE).count(), 0);
}

#[test]
fn hover_kind_needs_an_interactive_target() {
    assert_eq!(HoverKind::classify(false, false), HoverKind::None);
    assert_eq!(HoverKind::classify(false, true), HoverKind::None);
    assert_eq!(HoverKind::classify(true, false), HoverKind::Primary);
    assert_eq!(HoverKind::classify(true, true), HoverKind::Alt);
}

#[test]
fn each_hover_kind_sets_at_most_one_class() {
    assert_eq!(HoverKind::None.class(), None);
    assert_eq!(HoverKind::Primary.class(), Some("is-hover"));
    assert_eq!(HoverKind::Alt.class(), Some("is-hover-alt"));
    assert_ne!(HoverKind::Primary.class(), HoverKind::Alt.class());
    for kind in [HoverKind::Primary, HoverKind::Alt] {
        let class = kind.class().unwrap();
        assert!(HoverKind::CLASSES.contains(&class));
    }
}

#[test]
fn dot_leads_while_outline_trails() {
    // the dot is pinned to the pointer; the outline eases after it
    let mut outline = CursorFollower::default();
    outline.step(Vec2::ZERO, 0.016);
    let pointer = Vec2::new(200.0, 0.0);
    let p = outline.step(pointer, 0.016);
    assert!(p.x > 0.0 && p.x < pointer.x);
}
