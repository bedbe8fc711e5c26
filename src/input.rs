use crate::core::Preset;
use glam::Vec2;
use web_sys as web;

/// Orbit drag in progress on the canvas.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, at: Vec2) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = at;
    }

    /// Movement since the previous sample for the dragging pointer.
    pub fn advance(&mut self, pointer_id: i32, at: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let d = at - self.last;
        self.last = at;
        Some(d)
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.active && pointer_id == self.pointer_id {
            self.active = false;
            return true;
        }
        false
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// `[-1, 1]` viewport offset to `[0, 1]` uv.
#[inline]
pub fn uv_from_norm(norm: Vec2) -> [f32; 2] {
    let uv = (norm.clamp(Vec2::splat(-1.0), Vec2::splat(1.0)) + Vec2::ONE) * 0.5;
    [uv.x, uv.y]
}

// WheelEvent.deltaMode values
const DOM_DELTA_LINE: u32 = 1;
const DOM_DELTA_PAGE: u32 = 2;

/// Wheel delta in pixel-equivalents regardless of the event's delta mode.
#[inline]
pub fn normalize_wheel(delta_y: f64, delta_mode: u32) -> f32 {
    let scale = match delta_mode {
        DOM_DELTA_LINE => 16.0,
        DOM_DELTA_PAGE => 800.0,
        _ => 1.0,
    };
    (delta_y * scale) as f32
}

/// What has keyboard focus, as far as page shortcuts care.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    Page,
    /// Text entry: every key belongs to the field.
    Text,
    /// Buttons and links: space and enter activate them.
    Control,
}

/// Classify an element by tag name, editability and ARIA role.
pub fn target_kind_for(tag: &str, editable: bool, role: Option<&str>) -> TargetKind {
    if editable {
        return TargetKind::Text;
    }
    match tag.to_ascii_uppercase().as_str() {
        "INPUT" | "TEXTAREA" | "SELECT" => TargetKind::Text,
        "BUTTON" | "A" | "SUMMARY" => TargetKind::Control,
        _ => match role {
            Some("textbox" | "searchbox" | "combobox") => TargetKind::Text,
            Some("button" | "link" | "checkbox" | "radio" | "switch" | "tab") => {
                TargetKind::Control
            }
            _ => TargetKind::Page,
        },
    }
}

pub fn target_kind(ev: &web::Event) -> TargetKind {
    use wasm_bindgen::JsCast;
    let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return TargetKind::Page;
    };
    let editable = el
        .dyn_ref::<web::HtmlElement>()
        .map(|h| h.is_content_editable())
        .unwrap_or(false);
    let role = el.get_attribute("role");
    target_kind_for(&el.tag_name(), editable, role.as_deref())
}

// ---------------- Keyboard shortcuts ----------------
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    SelectPreset(Preset),
    ResetCamera,
    ToggleAutoRotate,
}

/// `1`..`9`, `0` pick a preset; `r` resets the camera; space toggles auto-rotate.
#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    if let Some(p) = Preset::for_digit(key) {
        return Some(KeyAction::SelectPreset(p));
    }
    match key {
        "r" | "R" => Some(KeyAction::ResetCamera),
        " " => Some(KeyAction::ToggleAutoRotate),
        _ => None,
    }
}

/// Shortcut for `key` given what has focus. Text fields swallow everything;
/// focused controls keep space for their own activation.
pub fn action_for_target(key: &str, kind: TargetKind) -> Option<KeyAction> {
    match (kind, action_for_key(key)?) {
        (TargetKind::Text, _) => None,
        (TargetKind::Control, KeyAction::ToggleAutoRotate) => None,
        (_, action) => Some(action),
    }
}
