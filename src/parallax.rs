use crate::constants::PARALLAX_BG_DEPTH;
use crate::core::{glow_focus_percent, parallax_offset, ParticleField};
use crate::dom;
use glam::Vec2;
use web_sys as web;

/// Background gradient and particle layer that drift against the pointer.
pub struct ParallaxFx {
    bg: web::Element,
    particle_els: Vec<web::Element>,
    field: ParticleField,
    last_norm: Option<Vec2>,
}

impl ParallaxFx {
    pub fn new(
        document: &web::Document,
        bg: web::Element,
        layer: &web::Element,
        count: usize,
        seed: u64,
    ) -> Self {
        let field = ParticleField::new(count, seed);
        let mut particle_els = Vec::with_capacity(field.len());
        for p in field.particles() {
            let Ok(el) = document.create_element("span") else {
                continue;
            };
            el.set_class_name("particle");
            dom::set_style(&el, "left", &format!("{:.2}%", p.x_pct));
            dom::set_style(&el, "top", &format!("{:.2}%", p.y_pct));
            dom::set_style(&el, "width", &format!("{:.1}px", p.size_px));
            dom::set_style(&el, "height", &format!("{:.1}px", p.size_px));
            dom::set_style(&el, "opacity", &format!("{:.2}", p.opacity));
            if layer.append_child(&el).is_ok() {
                particle_els.push(el);
            }
        }
        log::info!("[parallax] {} particles", particle_els.len());
        Self {
            bg,
            particle_els,
            field,
            last_norm: None,
        }
    }

    /// Push the current pointer offset into styles; no-op when unchanged.
    pub fn apply(&mut self, norm: Vec2) {
        if self.last_norm == Some(norm) {
            return;
        }
        self.last_norm = Some(norm);

        let bg = parallax_offset(norm, PARALLAX_BG_DEPTH);
        let glow = glow_focus_percent(norm);
        dom::set_style(&self.bg, "--parallax-x", &format!("{:.2}px", bg.x));
        dom::set_style(&self.bg, "--parallax-y", &format!("{:.2}px", bg.y));
        dom::set_style(&self.bg, "--glow-x", &format!("{:.1}%", glow.x));
        dom::set_style(&self.bg, "--glow-y", &format!("{:.1}%", glow.y));

        for (el, off) in self.particle_els.iter().zip(self.field.offsets(norm)) {
            dom::set_translate(el, off.x, off.y);
        }
    }
}
