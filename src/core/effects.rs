use crate::constants::{
    CURSOR_SNAP_PX, CURSOR_TAU_SEC, GLOW_SHIFT_PERCENT, PARALLAX_MAX_PX, PARTICLE_DEPTH_MAX,
    PARTICLE_DEPTH_MIN, PARTICLE_SIZE_MAX_PX, PARTICLE_SIZE_MIN_PX,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Eases the custom cursor toward the pointer.
#[derive(Clone, Copy, Debug, Default)]
pub struct CursorFollower {
    pos: Vec2,
    initialized: bool,
}

impl CursorFollower {
    /// Advance toward `target` and return the new position. The first sample
    /// snaps so the cursor never flies in from the corner.
    pub fn step(&mut self, target: Vec2, dt_sec: f32) -> Vec2 {
        if !self.initialized {
            self.pos = target;
            self.initialized = true;
            return self.pos;
        }
        let alpha = 1.0 - (-dt_sec.max(0.0) / CURSOR_TAU_SEC).exp();
        self.pos += (target - self.pos) * alpha;
        if self.pos.distance(target) < CURSOR_SNAP_PX {
            self.pos = target;
        }
        self.pos
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Forget the last position; the next sample snaps again.
    pub fn reset(&mut self) {
        self.initialized = false;
    }
}

/// Which hover style the cursor shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverKind {
    #[default]
    None,
    Primary,
    Alt,
}

impl HoverKind {
    pub const CLASSES: [&'static str; 2] = ["is-hover", "is-hover-alt"];

    /// `alt` only counts on an interactive target.
    #[inline]
    pub fn classify(interactive: bool, alt: bool) -> Self {
        match (interactive, alt) {
            (false, _) => HoverKind::None,
            (true, false) => HoverKind::Primary,
            (true, true) => HoverKind::Alt,
        }
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            HoverKind::None => None,
            HoverKind::Primary => Some(Self::CLASSES[0]),
            HoverKind::Alt => Some(Self::CLASSES[1]),
        }
    }
}

/// Pointer position relative to the viewport centre, `[-1, 1]` per axis.
#[inline]
pub fn normalized_offset(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if !(width > 0.0 && height > 0.0) {
        return Vec2::ZERO;
    }
    Vec2::new(
        (x / width * 2.0 - 1.0).clamp(-1.0, 1.0),
        (y / height * 2.0 - 1.0).clamp(-1.0, 1.0),
    )
}

/// Layer translation in px. Deeper layers travel further, against the pointer.
#[inline]
pub fn parallax_offset(norm: Vec2, depth: f32) -> Vec2 {
    -norm.clamp(Vec2::splat(-1.0), Vec2::splat(1.0)) * PARALLAX_MAX_PX * depth.max(0.0)
}

/// Background gradient focus in percent; follows the pointer.
#[inline]
pub fn glow_focus_percent(norm: Vec2) -> Vec2 {
    Vec2::splat(50.0) + norm.clamp(Vec2::splat(-1.0), Vec2::splat(1.0)) * GLOW_SHIFT_PERCENT
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Resting position in percent of the particle layer.
    pub x_pct: f32,
    pub y_pct: f32,
    pub size_px: f32,
    pub depth: f32,
    pub opacity: f32,
}

/// Decorative particle layout, deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| {
                let depth = rng.gen_range(PARTICLE_DEPTH_MIN..=PARTICLE_DEPTH_MAX);
                // nearer particles are larger and brighter
                let near = (depth - PARTICLE_DEPTH_MIN) / (PARTICLE_DEPTH_MAX - PARTICLE_DEPTH_MIN);
                Particle {
                    x_pct: rng.gen_range(0.0..100.0),
                    y_pct: rng.gen_range(0.0..100.0),
                    size_px: PARTICLE_SIZE_MIN_PX
                        + (PARTICLE_SIZE_MAX_PX - PARTICLE_SIZE_MIN_PX) * near,
                    depth,
                    opacity: 0.25 + 0.5 * near,
                }
            })
            .collect();
        Self { particles }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn offsets(&self, norm: Vec2) -> impl Iterator<Item = Vec2> + '_ {
        self.particles
            .iter()
            .map(move |p| parallax_offset(norm, p.depth))
    }
}
