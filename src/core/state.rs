// View-side state shared by the frame loop, the input handlers and the renderer.
//
// Nothing here touches web APIs, so host tests can include it directly.

use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Latest pointer sample in client pixels plus its offset from the viewport
/// centre in `[-1, 1]` on both axes.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub client: Vec2,
    pub norm: Vec2,
    pub inside: bool,
}

/// Progress of the single model asset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

impl LoadState {
    /// Terminal states never move again; only `Loading` resolves.
    #[must_use]
    pub fn resolve(self, ok: bool) -> LoadState {
        match self {
            LoadState::Loading if ok => LoadState::Ready,
            LoadState::Loading => LoadState::Failed,
            done => done,
        }
    }

    /// The loading fallback is visible only while the asset is in flight.
    #[inline]
    pub fn shows_fallback(self) -> bool {
        self == LoadState::Loading
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Ready => "ready",
            LoadState::Failed => "failed",
        }
    }
}

/// Whole percent of a download, or `None` while the size is unknown.
pub fn download_percent(received: u64, total: Option<u64>) -> Option<u8> {
    let total = total.filter(|&t| t > 0)?;
    let pct = received.saturating_mul(100) / total;
    Some(pct.min(100) as u8)
}

/// Byte counter that reports only when the shown percentage changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct DownloadProgress {
    received: u64,
    total: Option<u64>,
    shown: Option<Option<u8>>,
}

impl DownloadProgress {
    pub fn new(total: Option<u64>) -> Self {
        Self {
            received: 0,
            total,
            shown: None,
        }
    }

    #[inline]
    pub fn received(&self) -> u64 {
        self.received
    }

    /// Count `bytes` more; `Some` carries a new value to display.
    pub fn advance(&mut self, bytes: u64) -> Option<Option<u8>> {
        self.received = self.received.saturating_add(bytes);
        let pct = download_percent(self.received, self.total);
        if self.shown == Some(pct) {
            return None;
        }
        self.shown = Some(pct);
        Some(pct)
    }
}

/// Text for the loading fallback.
pub fn progress_label(percent: Option<u8>) -> String {
    match percent {
        Some(p) => format!("Loading… {}%", p),
        None => "Loading…".to_string(),
    }
}
