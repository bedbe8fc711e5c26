use crate::core::normalized_offset;
use crate::dom;
use crate::input;
use crate::viewer::SharedState;
use web_sys as web;

/// Track the pointer across the whole page for cursor and parallax.
pub fn wire_pointer_tracking(document: &web::Document, state: &SharedState) {
    let Some(window) = web::window() else {
        return;
    };

    let st = state.clone();
    let win = window.clone();
    dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
        let client = input::pointer_client(&ev);
        let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        let mut s = st.borrow_mut();
        s.pointer.client = client;
        s.pointer.norm = normalized_offset(client.x, client.y, w, h);
        s.pointer.inside = true;
    });

    if let Some(root) = document.document_element() {
        let st = state.clone();
        dom::listen(&root, "pointerleave", move |_: web::PointerEvent| {
            st.borrow_mut().pointer.inside = false;
        });
        let st = state.clone();
        dom::listen(&root, "pointerenter", move |_: web::PointerEvent| {
            st.borrow_mut().pointer.inside = true;
        });
    }
}

/// Drag to orbit, wheel to zoom, double-click to reset.
pub fn wire_orbit_input(canvas: &web::HtmlCanvasElement, state: &SharedState) {
    let st = state.clone();
    let cv = canvas.clone();
    dom::listen(canvas, "pointerdown", move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        {
            let mut s = st.borrow_mut();
            s.drag.begin(ev.pointer_id(), input::pointer_client(&ev));
            s.orbit.begin_drag();
        }
        _ = cv.set_pointer_capture(ev.pointer_id());
        _ = cv.class_list().add_1("is-grabbing");
        ev.prevent_default();
    });

    let st = state.clone();
    dom::listen(canvas, "pointermove", move |ev: web::PointerEvent| {
        let mut s = st.borrow_mut();
        if let Some(d) = s.drag.advance(ev.pointer_id(), input::pointer_client(&ev)) {
            s.orbit.rotate(d.x, d.y);
        }
    });

    for name in ["pointerup", "pointercancel"] {
        let st = state.clone();
        let cv = canvas.clone();
        dom::listen(canvas, name, move |ev: web::PointerEvent| {
            let ended = {
                let mut s = st.borrow_mut();
                let ended = s.drag.end(ev.pointer_id());
                if ended {
                    s.orbit.end_drag();
                }
                ended
            };
            if ended {
                _ = cv.release_pointer_capture(ev.pointer_id());
                _ = cv.class_list().remove_1("is-grabbing");
            }
        });
    }

    let st = state.clone();
    dom::listen(canvas, "wheel", move |ev: web::WheelEvent| {
        let delta = input::normalize_wheel(ev.delta_y(), ev.delta_mode());
        st.borrow_mut().orbit.zoom(delta);
        ev.prevent_default();
    });

    let st = state.clone();
    dom::listen(canvas, "dblclick", move |_: web::MouseEvent| {
        st.borrow_mut().orbit.reset();
        log::info!("[orbit] reset");
    });
}
