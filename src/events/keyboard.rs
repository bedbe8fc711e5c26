use crate::events::picker::Picker;
use crate::input::{self, action_for_target, KeyAction};
use crate::viewer::SharedState;
use std::rc::Rc;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, state: &SharedState, picker: &Picker) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || ev.repeat() {
        return;
    }
    let Some(action) = action_for_target(&ev.key(), input::target_kind(ev)) else {
        return;
    };
    match action {
        KeyAction::SelectPreset(p) => {
            picker.select(p);
        }
        KeyAction::ResetCamera => {
            state.borrow_mut().orbit.reset();
            log::info!("[keys] camera reset");
        }
        KeyAction::ToggleAutoRotate => {
            let on = state.borrow_mut().orbit.toggle_auto_rotate();
            log::info!("[keys] auto-rotate={}", on);
            ev.prevent_default();
        }
    }
}

pub fn wire_global_keydown(state: SharedState, picker: Rc<Picker>) {
    if let Some(window) = web::window() {
        crate::dom::listen(&window, "keydown", move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &state, &picker);
        });
    }
}
