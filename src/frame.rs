use crate::cursor::CursorFx;
use crate::input;
use crate::parallax::ParallaxFx;
use crate::render;
use crate::viewer::SharedState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub state: SharedState,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub cursor: CursorFx,
    pub parallax: ParallaxFx,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(0.1);
        self.last_instant = now;

        let pointer = {
            let mut st = self.state.borrow_mut();
            st.orbit.update(dt_sec);
            st.pointer
        };

        self.cursor.tick(&pointer, dt_sec);
        self.parallax.apply(pointer.norm);

        let Some(g) = &mut self.gpu else {
            return;
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        // leave the model queued until a device exists to take it
        let pending = self.state.borrow_mut().pending_model.take();
        if let Some(model) = pending {
            g.upload_model(&model);
            if let Some(bounds) = model.bounds() {
                self.state.borrow_mut().orbit.fit(bounds.radius(), g.aspect());
            }
        }
        if let Some(env) = self.state.borrow_mut().preset.take_environment() {
            g.set_environment(env);
        }

        let camera = {
            let mut st = self.state.borrow_mut();
            st.orbit.set_aspect(g.aspect());
            st.orbit.camera(g.aspect())
        };
        g.set_camera(camera);
        g.set_glow(input::uv_from_norm(pointer.norm));
        if let Err(e) = g.render(dt_sec) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
