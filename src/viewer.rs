use crate::config::ViewerConfig;
use crate::core::{
    progress_label, LoadState, ModelData, OrbitControls, PointerState, PresetSelection,
};
use crate::dom;
use crate::input::DragState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// UI state shared by listeners and the frame loop.
pub struct ViewerState {
    pub preset: PresetSelection,
    pub pointer: PointerState,
    pub orbit: OrbitControls,
    pub drag: DragState,
    pub load: LoadState,
    /// Decoded model waiting for the GPU upload on the next frame.
    pub pending_model: Option<ModelData>,
}

pub type SharedState = Rc<RefCell<ViewerState>>;

impl ViewerState {
    pub fn new(cfg: &ViewerConfig) -> Self {
        Self {
            preset: PresetSelection::new(cfg.preset),
            pointer: PointerState::default(),
            orbit: OrbitControls::new(cfg.auto_rotate),
            drag: DragState::default(),
            load: LoadState::Loading,
            pending_model: None,
        }
    }
}

/// DOM nodes the page shell hands to the effects and the renderer.
pub struct Mounted {
    pub canvas: web::HtmlCanvasElement,
    pub cursor_dot: web::Element,
    pub cursor_outline: web::Element,
    pub parallax_bg: web::Element,
    pub particles: web::Element,
    pub picker: web::Element,
}

/// Fallback with a text label and a progress bar. A plain-text fallback from
/// the page markup is replaced by the structured one.
fn mount_loading(document: &web::Document, host: &web::Element) -> anyhow::Result<()> {
    let loading = dom::ensure_child(document, host, "div", "viewer-loading", "viewer-loading")?;
    _ = loading.set_attribute("role", "status");
    if document.get_element_by_id("viewer-loading-label").is_none() {
        loading.set_text_content(None);
    }
    let label = dom::ensure_child(
        document,
        &loading,
        "span",
        "viewer-loading-label",
        "viewer-loading-label",
    )?;
    label.set_text_content(Some(&progress_label(None)));

    let bar = dom::ensure_child(
        document,
        &loading,
        "div",
        "viewer-loading-bar",
        "viewer-loading-bar is-indeterminate",
    )?;
    _ = bar.set_attribute("role", "progressbar");
    _ = bar.set_attribute("aria-valuemin", "0");
    _ = bar.set_attribute("aria-valuemax", "100");
    dom::ensure_child(document, &bar, "div", "viewer-loading-fill", "viewer-loading-fill")?;
    Ok(())
}

/// Make sure every node the viewer needs exists, creating the missing ones.
pub fn mount(document: &web::Document, host: &web::Element) -> anyhow::Result<Mounted> {
    let body: web::Element = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?
        .into();

    let parallax_bg = dom::ensure_child(document, &body, "div", "parallax-bg", "parallax-bg")?;
    let particles = dom::ensure_child(document, &body, "div", "particles", "particles")?;
    let cursor_dot = dom::ensure_child(document, &body, "div", "cursor-dot", "cursor cursor-dot")?;
    let cursor_outline =
        dom::ensure_child(document, &body, "div", "cursor-outline", "cursor cursor-outline")?;
    for el in [&cursor_dot, &cursor_outline] {
        _ = el.set_attribute("aria-hidden", "true");
    }

    let canvas_el = dom::ensure_child(document, host, "canvas", "viewer-canvas", "viewer-canvas")?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#viewer-canvas is not a canvas: {:?}", e))?;

    mount_loading(document, host)?;
    let picker = dom::ensure_child(document, host, "div", "preset-picker", "preset-picker")?;

    Ok(Mounted {
        canvas,
        cursor_dot,
        cursor_outline,
        parallax_bg,
        particles,
        picker,
    })
}
