use crate::render;
use ripple_core::{EventQueue, RingApp, RingEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: RingApp,
    pub queue: Rc<RefCell<EventQueue>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
}

impl FrameContext {
    /// One requestAnimationFrame callback: everything queued since the last frame, then the tick.
    pub fn frame(&mut self, timestamp_ms: f64) {
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        // Pointer listeners keep pushing to the shared queue; this frame works on a snapshot.
        let mut pending = std::mem::take(&mut *self.queue.borrow_mut());
        pending.push_back(RingEvent::FrameTick { timestamp_ms });
        match self.app.drain(&mut pending, &mut self.gpu) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure()
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        frame_ctx_tick.borrow_mut().frame(timestamp_ms);
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
