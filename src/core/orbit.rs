use super::state::Camera;
use crate::constants::{
    AUTO_ROTATE_IDLE_SEC, AUTO_ROTATE_RAD_PER_SEC, CAMERA_DEFAULT_AZIMUTH,
    CAMERA_DEFAULT_DISTANCE, CAMERA_DEFAULT_ELEVATION, CAMERA_FOVY_RAD, FIT_MARGIN,
    MAX_DISTANCE_FACTOR, MAX_ELEVATION, MIN_DISTANCE_FACTOR, MIN_ELEVATION,
    ORBIT_DAMPING_TAU_SEC, ORBIT_ROTATE_RAD_PER_PX, ORBIT_ZOOM_PER_WHEEL_UNIT,
};
use glam::Vec3;

/// Orbit-style camera controls around a fixed target.
///
/// Input moves *goal* angles and distance; `update` eases the current values
/// toward them so drags and wheel steps glide instead of jumping.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub auto_rotate: bool,
    pub min_distance: f32,
    pub max_distance: f32,

    azimuth: f32,
    elevation: f32,
    distance: f32,

    goal_azimuth: f32,
    goal_elevation: f32,
    goal_distance: f32,

    home_distance: f32,
    fit_radius: Option<f32>,
    aspect: f32,
    dragging: bool,
    idle_sec: f32,
}

impl OrbitControls {
    pub fn new(auto_rotate: bool) -> Self {
        let distance = CAMERA_DEFAULT_DISTANCE;
        Self {
            target: Vec3::ZERO,
            auto_rotate,
            min_distance: distance * MIN_DISTANCE_FACTOR,
            max_distance: distance * MAX_DISTANCE_FACTOR,
            azimuth: CAMERA_DEFAULT_AZIMUTH,
            elevation: CAMERA_DEFAULT_ELEVATION,
            distance,
            goal_azimuth: CAMERA_DEFAULT_AZIMUTH,
            goal_elevation: CAMERA_DEFAULT_ELEVATION,
            goal_distance: distance,
            home_distance: distance,
            fit_radius: None,
            aspect: 1.0,
            dragging: false,
            // start idle so the model turns on first paint
            idle_sec: AUTO_ROTATE_IDLE_SEC,
        }
    }

    /// Frame a bounding sphere of `radius` centred on the target.
    pub fn fit(&mut self, radius: f32, aspect: f32) {
        if !(radius.is_finite() && radius > 0.0) {
            return;
        }
        self.fit_radius = Some(radius);
        self.aspect = sane_aspect(aspect);
        let d = fit_distance(radius, self.aspect);
        self.set_home(d);
        self.distance = d;
        self.goal_distance = d;
    }

    /// Re-frame after a viewport change, keeping the user's zoom ratio.
    pub fn set_aspect(&mut self, aspect: f32) {
        let aspect = sane_aspect(aspect);
        if (aspect - self.aspect).abs() < 1e-4 {
            return;
        }
        self.aspect = aspect;
        let Some(radius) = self.fit_radius else {
            return;
        };
        let d = fit_distance(radius, aspect);
        let scale = d / self.home_distance;
        self.set_home(d);
        self.distance *= scale;
        self.goal_distance =
            (self.goal_distance * scale).clamp(self.min_distance, self.max_distance);
    }

    fn set_home(&mut self, d: f32) {
        self.home_distance = d;
        self.min_distance = d * MIN_DISTANCE_FACTOR;
        self.max_distance = d * MAX_DISTANCE_FACTOR;
    }

    #[inline]
    pub fn home_distance(&self) -> f32 {
        self.home_distance
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.idle_sec = 0.0;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.idle_sec = 0.0;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer drag in CSS pixels.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32) {
        self.goal_azimuth -= dx_px * ORBIT_ROTATE_RAD_PER_PX;
        self.goal_elevation = (self.goal_elevation + dy_px * ORBIT_ROTATE_RAD_PER_PX)
            .clamp(MIN_ELEVATION, MAX_ELEVATION);
        self.idle_sec = 0.0;
    }

    /// Wheel delta as reported by `WheelEvent.deltaY`; positive zooms out.
    pub fn zoom(&mut self, wheel_delta: f32) {
        if !wheel_delta.is_finite() {
            return;
        }
        let factor = (wheel_delta * ORBIT_ZOOM_PER_WHEEL_UNIT).exp();
        self.goal_distance =
            (self.goal_distance * factor).clamp(self.min_distance, self.max_distance);
        self.idle_sec = 0.0;
    }

    pub fn reset(&mut self) {
        self.goal_azimuth = CAMERA_DEFAULT_AZIMUTH;
        self.goal_elevation = CAMERA_DEFAULT_ELEVATION;
        self.goal_distance = self.home_distance;
        // take the short way round instead of unwinding accumulated turns
        let tau = std::f32::consts::TAU;
        self.azimuth = CAMERA_DEFAULT_AZIMUTH
            + (self.azimuth - CAMERA_DEFAULT_AZIMUTH + std::f32::consts::PI).rem_euclid(tau)
            - std::f32::consts::PI;
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    pub fn update(&mut self, dt_sec: f32) {
        let dt = dt_sec.max(0.0);
        if !self.dragging {
            self.idle_sec += dt;
        }
        if self.auto_rotate && !self.dragging && self.idle_sec >= AUTO_ROTATE_IDLE_SEC {
            self.goal_azimuth += AUTO_ROTATE_RAD_PER_SEC * dt;
        }
        let t = 1.0 - (-dt / ORBIT_DAMPING_TAU_SEC).exp();
        self.azimuth += (self.goal_azimuth - self.azimuth) * t;
        self.elevation += (self.goal_elevation - self.elevation) * t;
        self.distance += (self.goal_distance - self.distance) * t;
    }

    #[inline]
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    #[inline]
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_e, cos_e) = self.elevation.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + Vec3::new(cos_e * sin_a, sin_e, cos_e * cos_a) * self.distance
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: sane_aspect(aspect),
            fovy_radians: CAMERA_FOVY_RAD,
            znear: (self.distance * 0.01).max(0.001),
            zfar: self.max_distance * 10.0,
        }
    }
}

#[inline]
fn sane_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}

/// Distance at which a sphere of `radius` fits both the vertical and the
/// horizontal field of view, with `FIT_MARGIN` to spare.
pub fn fit_distance(radius: f32, aspect: f32) -> f32 {
    let half_v = CAMERA_FOVY_RAD * 0.5;
    let half_h = (half_v.tan() * sane_aspect(aspect)).atan();
    radius / half_v.min(half_h).sin() * FIT_MARGIN
}
