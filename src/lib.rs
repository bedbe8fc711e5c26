#![cfg(target_arch = "wasm32")]
use crate::config::ViewerConfig;
use crate::constants::PARTICLE_SEED;
use crate::core::LoadState;
use crate::events::picker::Picker;
use crate::viewer::{SharedState, ViewerState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod constants;
mod core;
mod cursor;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod overlay;
mod parallax;
mod render;
mod viewer;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        dom::listen(&window, "resize", move |_: web::Event| {
            dom::sync_canvas_backing_size(&canvas_resize);
        });
    }
}

fn spawn_model_load(url: String, state: SharedState, document: web::Document, host: web::Element) {
    spawn_local(async move {
        let progress_doc = document.clone();
        let result = loader::load_model(&url, move |pct| {
            overlay::set_progress(&progress_doc, pct);
        })
        .await;
        let load = {
            let mut st = state.borrow_mut();
            st.load = st.load.resolve(result.is_ok());
            match result {
                Ok(model) => st.pending_model = Some(model),
                Err(e) => log::error!("[model] load failed for {}: {:?}", url, e),
            }
            st.load
        };
        overlay::apply_load_state(&document, &host, load);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("eyewear-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let host = document
        .get_element_by_id("viewer")
        .ok_or_else(|| anyhow::anyhow!("missing #viewer"))?;

    let cfg = ViewerConfig::from_attrs(|name| host.get_attribute(name));
    log::info!(
        "[config] model={} preset={} autorotate={} particles={}",
        cfg.model_url,
        cfg.preset,
        cfg.auto_rotate,
        cfg.particles
    );

    let mounted = viewer::mount(&document, &host)?;
    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&mounted.canvas);

    let state: SharedState = Rc::new(RefCell::new(ViewerState::new(&cfg)));
    overlay::apply_load_state(&document, &host, LoadState::Loading);

    let picker = Picker::build(&document, &mounted.picker, state.clone())?;
    picker.sync_dom(cfg.preset);

    events::pointer::wire_pointer_tracking(&document, &state);
    events::pointer::wire_orbit_input(&mounted.canvas, &state);
    events::keyboard::wire_global_keydown(state.clone(), picker);
    cursor::wire_hover(
        &document,
        &[mounted.cursor_dot.clone(), mounted.cursor_outline.clone()],
    );

    spawn_model_load(cfg.model_url.clone(), state.clone(), document.clone(), host);

    // Effects run from the first frame; the GPU joins once the device is ready.
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state: state.clone(),
        canvas: mounted.canvas.clone(),
        gpu: None,
        cursor: cursor::CursorFx::new(
            mounted.cursor_dot.clone(),
            mounted.cursor_outline.clone(),
        ),
        parallax: parallax::ParallaxFx::new(
            &document,
            mounted.parallax_bg.clone(),
            &mounted.particles,
            cfg.particles,
            PARTICLE_SEED,
        ),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx.clone());

    let gpu = frame::init_gpu(&mounted.canvas).await;
    if gpu.is_none() {
        log::warn!("[gpu] unavailable; page effects only");
    }
    frame_ctx.borrow_mut().gpu = gpu;
    Ok(())
}
