use crate::constants::{HOVER_ALT_SELECTOR, HOVER_SELECTOR};
use crate::core::{CursorFollower, HoverKind, PointerState};
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Custom cursor: a dot pinned to the pointer and an outline that trails it.
pub struct CursorFx {
    dot: web::Element,
    outline: web::Element,
    follower: CursorFollower,
    enabled: bool,
    visible: bool,
}

impl CursorFx {
    pub fn new(dot: web::Element, outline: web::Element) -> Self {
        // touch devices keep the native behaviour
        let enabled = !dom::is_coarse_pointer();
        if enabled {
            if let Some(root) = dom::window_document().and_then(|d| d.document_element()) {
                _ = root.class_list().add_1("has-custom-cursor");
            }
        } else {
            dom::set_style(&dot, "display", "none");
            dom::set_style(&outline, "display", "none");
        }
        Self {
            dot,
            outline,
            follower: CursorFollower::default(),
            enabled,
            visible: false,
        }
    }

    pub fn tick(&mut self, pointer: &PointerState, dt_sec: f32) {
        if !self.enabled {
            return;
        }
        if pointer.inside != self.visible {
            self.visible = pointer.inside;
            for el in [&self.dot, &self.outline] {
                _ = el.class_list().toggle_with_force("is-visible", self.visible);
            }
            if !self.visible {
                // re-entering snaps instead of gliding across the page
                self.follower.reset();
            }
        }
        if !self.visible {
            return;
        }
        dom::set_translate(&self.dot, pointer.client.x, pointer.client.y);
        let p = self.follower.step(pointer.client, dt_sec);
        dom::set_translate(&self.outline, p.x, p.y);
    }
}

fn hover_kind(target: Option<web::EventTarget>) -> HoverKind {
    let Some(hit) = target
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(HOVER_SELECTOR).ok().flatten())
    else {
        return HoverKind::None;
    };
    let alt = hit.matches(HOVER_ALT_SELECTOR).unwrap_or(false);
    HoverKind::classify(true, alt)
}

/// Switch the cursor parts between the idle, hover and alt-hover styles, and
/// mark them while a button is held.
pub fn wire_hover(document: &web::Document, parts: &[web::Element]) {
    let parts: Rc<[web::Element]> = parts.into();

    let over = parts.clone();
    dom::listen(document, "pointerover", move |ev: web::PointerEvent| {
        let kind = hover_kind(ev.target());
        for el in over.iter() {
            for class in HoverKind::CLASSES {
                _ = el
                    .class_list()
                    .toggle_with_force(class, kind.class() == Some(class));
            }
        }
    });
    let down = parts.clone();
    dom::listen(document, "pointerdown", move |_: web::PointerEvent| {
        for el in down.iter() {
            _ = el.class_list().add_1("is-pressed");
        }
    });
    let up = parts;
    dom::listen(document, "pointerup", move |_: web::PointerEvent| {
        for el in up.iter() {
            _ = el.class_list().remove_1("is-pressed");
        }
    });
}
