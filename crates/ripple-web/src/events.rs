use crate::constants::DRAGGING_CLASS;
use crate::dom;
use crate::input::{self, CanvasGeometry};
use ripple_core::{EventQueue, RingEvent, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn canvas_geometry(canvas: &web::HtmlCanvasElement) -> CanvasGeometry {
    let rect = canvas.get_bounding_client_rect();
    CanvasGeometry {
        left: rect.left(),
        top: rect.top(),
        css_width: rect.width(),
        css_height: rect.height(),
        backing_width: canvas.width() as f64,
        backing_height: canvas.height() as f64,
    }
}

fn pointer_sample(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> (f64, f64, Viewport) {
    let geometry = canvas_geometry(canvas);
    let p = input::client_to_canvas_px(ev.client_x() as f64, ev.client_y() as f64, &geometry);
    let viewport = Viewport::new(geometry.backing_width, geometry.backing_height);
    (p.x, p.y, viewport)
}

/// Pointer listeners only enqueue; the frame callback is the single consumer.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub queue: Rc<RefCell<EventQueue>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    dom::disable_touch_gestures(&w.canvas);
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !input::starts_drag(&ev.pointer_type(), ev.button(), ev.is_primary()) {
            return;
        }
        let (x, y, viewport) = pointer_sample(&ev, &w.canvas);
        w.queue
            .borrow_mut()
            .push_back(RingEvent::PointerDown { x, y, viewport });
        dom::set_class(&w.canvas, DRAGGING_CLASS, true);
        let _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ = w
        .canvas
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let (x, y, viewport) = pointer_sample(&ev, &w.canvas);
        w.queue
            .borrow_mut()
            .push_back(RingEvent::PointerMove { x, y, viewport });
        if ev.pointer_type() != "mouse" {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    let _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring, event_name: &str) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // a second finger lifting must not end the first finger's drag
        if !ev.is_primary() {
            return;
        }
        w.queue.borrow_mut().push_back(RingEvent::PointerUp);
        dom::set_class(&w.canvas, DRAGGING_CLASS, false);
        let _ = w.canvas.release_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
