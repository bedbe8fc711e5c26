use glam::Vec3;
use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::str::FromStr;

/// Named lighting/backdrop configurations selectable from the picker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Preset {
    Apartment,
    City,
    Dawn,
    Forest,
    Lobby,
    Night,
    Park,
    #[default]
    Studio,
    Sunset,
    Warehouse,
}

/// Single directional light. `direction` is the way the light travels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl DirectionalLight {
    fn new(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            direction: direction.normalize(),
            color,
            intensity,
        }
    }
}

/// Vertical three-stop gradient drawn behind the model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Backdrop {
    pub top: Vec3,
    pub horizon: Vec3,
    pub bottom: Vec3,
}

/// Resolved look of a preset: backdrop plus light rig.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    pub backdrop: Backdrop,
    pub sky: Vec3,
    pub ground: Vec3,
    pub ambient: f32,
    pub lights: SmallVec<[DirectionalLight; 4]>,
    pub exposure: f32,
    /// CSS colour used for page chrome (active button, cursor ring).
    pub accent: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownPreset(pub String);

impl fmt::Display for UnknownPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown preset '{}'", self.0)
    }
}

impl std::error::Error for UnknownPreset {}

impl Preset {
    pub const ALL: [Preset; 10] = [
        Preset::Apartment,
        Preset::City,
        Preset::Dawn,
        Preset::Forest,
        Preset::Lobby,
        Preset::Night,
        Preset::Park,
        Preset::Studio,
        Preset::Sunset,
        Preset::Warehouse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Apartment => "apartment",
            Preset::City => "city",
            Preset::Dawn => "dawn",
            Preset::Forest => "forest",
            Preset::Lobby => "lobby",
            Preset::Night => "night",
            Preset::Park => "park",
            Preset::Studio => "studio",
            Preset::Sunset => "sunset",
            Preset::Warehouse => "warehouse",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::Apartment => "Apartment",
            Preset::City => "City",
            Preset::Dawn => "Dawn",
            Preset::Forest => "Forest",
            Preset::Lobby => "Lobby",
            Preset::Night => "Night",
            Preset::Park => "Park",
            Preset::Studio => "Studio",
            Preset::Sunset => "Sunset",
            Preset::Warehouse => "Warehouse",
        }
    }

    /// Keys `1`..`9` then `0` select presets in `ALL` order.
    #[inline]
    pub fn for_digit(key: &str) -> Option<Preset> {
        let idx = match key {
            "0" => 9,
            k if k.len() == 1 => {
                let d = k.chars().next()?.to_digit(10)?;
                d.checked_sub(1)? as usize
            }
            _ => return None,
        };
        Self::ALL.get(idx).copied()
    }

    pub fn environment(self) -> Environment {
        match self {
            Preset::Studio => Environment {
                backdrop: Backdrop {
                    top: rgb(0.86, 0.87, 0.89),
                    horizon: rgb(0.95, 0.95, 0.96),
                    bottom: rgb(0.72, 0.73, 0.76),
                },
                sky: rgb(0.9, 0.92, 0.96),
                ground: rgb(0.35, 0.34, 0.33),
                ambient: 0.35,
                lights: smallvec![
                    // key
                    DirectionalLight::new(Vec3::new(-1.0, -1.0, -1.0), rgb(1.0, 0.98, 0.95), 1.4),
                    // fill
                    DirectionalLight::new(Vec3::new(1.0, -0.5, -0.5), rgb(0.8, 0.85, 1.0), 0.5),
                    // rim
                    DirectionalLight::new(Vec3::new(0.0, -0.6, 1.0), rgb(1.0, 1.0, 1.0), 0.7),
                ],
                exposure: 1.0,
                accent: "#1f2933",
            },
            Preset::Apartment => Environment {
                backdrop: Backdrop {
                    top: rgb(0.78, 0.70, 0.62),
                    horizon: rgb(0.93, 0.86, 0.77),
                    bottom: rgb(0.52, 0.43, 0.36),
                },
                sky: rgb(1.0, 0.9, 0.78),
                ground: rgb(0.4, 0.3, 0.22),
                ambient: 0.4,
                lights: smallvec![
                    DirectionalLight::new(Vec3::new(-0.8, -0.6, -0.4), rgb(1.0, 0.88, 0.72), 1.1),
                    DirectionalLight::new(Vec3::new(0.9, -0.3, -0.6), rgb(0.95, 0.9, 0.85), 0.4),
                ],
                exposure: 1.05,
                accent: "#8a5a3b",
            },
            Preset::City => Environment {
                backdrop: Backdrop {
                    top: rgb(0.42, 0.50, 0.62),
                    horizon: rgb(0.74, 0.76, 0.78),
                    bottom: rgb(0.30, 0.31, 0.34),
                },
                sky: rgb(0.7, 0.78, 0.9),
                ground: rgb(0.3, 0.3, 0.32),
                ambient: 0.3,
                lights: smallvec![
                    DirectionalLight::new(Vec3::new(-0.4, -1.0, -0.6), rgb(1.0, 0.97, 0.92), 1.2),
                    DirectionalLight::new(Vec3::new(0.8, -0.2, -0.3), rgb(0.7, 0.8, 1.0), 0.5),
                    DirectionalLight::new(Vec3::new(0.2, -0.3, 1.0), rgb(1.0, 0.9, 0.8), 0.4),
                ],
                exposure: 1.0,
                accent: "#2d4a6b",
            },
            Preset::Dawn => Environment {
                backdrop: Backdrop {
                    top: rgb(0.46, 0.52, 0.72),
                    horizon: rgb(0.98, 0.74, 0.62),
                    bottom: rgb(0.36, 0.30, 0.38),
                },
                sky: rgb(0.75, 0.72, 0.9),
                ground: rgb(0.45, 0.3, 0.28),
                ambient: 0.3,
                lights: smallvec![
                    DirectionalLight::new(Vec3::new(0.9, -0.25, -0.4), rgb(1.0, 0.72, 0.55), 1.2),
                    DirectionalLight::new(Vec3::new(-0.6, -0.5, -0.3), rgb(0.6, 0.65, 0.95), 0.45),
                ],
                exposure: 1.1,
                accent: "#c46a5a",
            },
            Preset::Forest => Environment {
                backdrop: Backdrop {
                    top: rgb(0.36, 0.48, 0.38),
                    horizon: rgb(0.62, 0.70, 0.55),
                    bottom: rgb(0.18, 0.22, 0.16),
                },
                sky: rgb(0.6, 0.75, 0.6),
                ground: rgb(0.18, 0.22, 0.12),
                ambient: 0.35,
                lights: smallvec![
                    DirectionalLight::new(Vec3::new(-0.3, -1.0, -0.2), rgb(0.95, 1.0, 0.85), 0.9),
                    DirectionalLight::new(Vec3::new(0.7, -0.4, 0.6), rgb(0.6, 0.8, 0.55), 0.35),
                ],
                exposure: 1.15,
                accent: "#3d5c3a",
            },
            Preset::Lobby => Environment {
                backdrop: Backdrop {
                    top: rgb(0.70, 0.66, 0.58),
                    horizon: rgb(0.90, 0.86, 0.78),
                    bottom: rgb(0.44, 0.40, 0.34),
                },
                sky: rgb(0.95, 0.9, 0.82),
                ground: rgb(0.42, 0.36, 0.3),
                ambient: 0.45,
                lights: smallvec![
                    DirectionalLight::new(Vec3::new(0.0, -1.0, -0.3), rgb(1.0, 0.93, 0.82), 1.0),
                    DirectionalLight::new(Vec3::new(-0.9, -0.3, 0.2), rgb(1.0, 0.95, 0.88), 0.4),
                    DirectionalLight::new(Vec3::new(0.9, -0.3, 0.2), rgb(1.0, 0.95, 0.88), 0.4),
                ],
                exposure: 1.0,
                accent: "#7a6448",
            },
            Preset::Night => Environment {
                backdrop: Backdrop {
                    top: rgb(0.02, 0.03, 0.08),
                    horizon: rgb(0.10, 0.12, 0.22),
                    bottom: rgb(0.01, 0.01, 0.03),
                },
                sky: rgb(0.2, 0.25, 0.45),
                ground: rgb(0.03, 0.03, 0.05),
                ambient: 0.2,
                lights: smallvec![
                    DirectionalLight::new(Vec3::new(-0.5, -0.8, -0.6), rgb(0.6, 0.7, 1.0), 0.8),
                    DirectionalLight::new(Vec3::new(0.3, -0.2, 1.0), rgb(0.9, 0.6, 1.0), 0.9),
                ],
                exposure: 1.3,
                accent: "#6c7bd9",
            },
            Preset::Park => Environment {
                backdrop: Backdrop {
                    top: rgb(0.45, 0.65, 0.92),
                    horizon: rgb(0.82, 0.90, 0.96),
                    bottom: rgb(0.36, 0.46, 0.28),
                },
                sky: rgb(0.6, 0.75, 1.0),
                ground: rgb(0.35, 0.42, 0.25),
                ambient: 0.4,
                lights: smallvec![
                    // sun
                    DirectionalLight::new(Vec3::new(-0.5, -1.0, -0.3), rgb(1.0, 0.95, 0.85), 1.3),
                    DirectionalLight::new(Vec3::new(0.6, -0.4, 0.4), rgb(0.7, 0.8, 1.0), 0.3),
                ],
                exposure: 1.0,
                accent: "#3b6ea5",
            },
            Preset::Sunset => Environment {
                backdrop: Backdrop {
                    top: rgb(0.32, 0.22, 0.42),
                    horizon: rgb(1.0, 0.58, 0.32),
                    bottom: rgb(0.24, 0.14, 0.16),
                },
                sky: rgb(1.0, 0.65, 0.45),
                ground: rgb(0.3, 0.18, 0.15),
                ambient: 0.3,
                lights: smallvec![
                    DirectionalLight::new(Vec3::new(-1.0, -0.2, -0.3), rgb(1.0, 0.6, 0.35), 1.4),
                    DirectionalLight::new(Vec3::new(0.7, -0.4, -0.5), rgb(0.55, 0.45, 0.8), 0.4),
                    DirectionalLight::new(Vec3::new(0.2, -0.1, 1.0), rgb(1.0, 0.7, 0.4), 0.6),
                ],
                exposure: 1.05,
                accent: "#d9673a",
            },
            Preset::Warehouse => Environment {
                backdrop: Backdrop {
                    top: rgb(0.30, 0.31, 0.33),
                    horizon: rgb(0.56, 0.55, 0.52),
                    bottom: rgb(0.16, 0.16, 0.17),
                },
                sky: rgb(0.75, 0.75, 0.72),
                ground: rgb(0.22, 0.21, 0.2),
                ambient: 0.3,
                lights: smallvec![
                    DirectionalLight::new(Vec3::new(0.0, -1.0, 0.0), rgb(1.0, 0.98, 0.9), 1.1),
                    DirectionalLight::new(Vec3::new(-1.0, -0.2, 0.0), rgb(0.85, 0.9, 1.0), 0.45),
                    DirectionalLight::new(Vec3::new(1.0, -0.2, 0.0), rgb(0.85, 0.9, 1.0), 0.45),
                    DirectionalLight::new(Vec3::new(0.0, -0.3, 1.0), rgb(1.0, 1.0, 1.0), 0.5),
                ],
                exposure: 1.0,
                accent: "#4a4a48",
            },
        }
    }
}

/// Active preset plus the one the renderer last received.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresetSelection {
    current: Preset,
    applied: Option<Preset>,
}

impl PresetSelection {
    pub fn new(initial: Preset) -> Self {
        Self {
            current: initial,
            applied: None,
        }
    }

    #[inline]
    pub fn current(&self) -> Preset {
        self.current
    }

    /// Returns false when `preset` is already active.
    pub fn select(&mut self, preset: Preset) -> bool {
        if self.current == preset {
            return false;
        }
        self.current = preset;
        true
    }

    /// Environment to upload, or `None` when the renderer is already current.
    pub fn take_environment(&mut self) -> Option<Environment> {
        if self.applied == Some(self.current) {
            return None;
        }
        self.applied = Some(self.current);
        Some(self.current.environment())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

#[inline]
const fn rgb(r: f32, g: f32, b: f32) -> Vec3 {
    Vec3::new(r, g, b)
}
