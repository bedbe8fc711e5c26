use crate::constants::{DEFAULT_MODEL_URL, DEFAULT_PARTICLES, MAX_PARTICLES};
use crate::core::Preset;

/// Page-level viewer settings, taken from the host element's `data-*`
/// attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub model_url: String,
    pub preset: Preset,
    pub auto_rotate: bool,
    pub particles: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model_url: DEFAULT_MODEL_URL.to_string(),
            preset: Preset::default(),
            auto_rotate: true,
            particles: DEFAULT_PARTICLES,
        }
    }
}

impl ViewerConfig {
    /// Build from an attribute lookup (`"data-model"` → value). Bad values
    /// fall back to defaults with a warning.
    pub fn from_attrs(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(url) = get("data-model").filter(|s| !s.trim().is_empty()) {
            cfg.model_url = url.trim().to_string();
        }
        if let Some(name) = get("data-preset") {
            match name.parse::<Preset>() {
                Ok(p) => cfg.preset = p,
                Err(e) => log::warn!("[config] {}; using '{}'", e, cfg.preset),
            }
        }
        if let Some(v) = get("data-autorotate") {
            let v = v.trim().to_ascii_lowercase();
            cfg.auto_rotate = !matches!(v.as_str(), "false" | "0" | "off");
        }
        if let Some(v) = get("data-particles") {
            match v.trim().parse::<usize>() {
                Ok(n) => cfg.particles = n.min(MAX_PARTICLES),
                Err(_) => log::warn!("[config] bad data-particles '{}'", v),
            }
        }
        cfg
    }
}
