#![cfg(target_arch = "wasm32")]
use ripple_core::{pick_base_color, EventQueue, RingApp, RingConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripple-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let app = RingApp::new(RingConfig::default())?;
    let base_color = pick_base_color(&mut rand::thread_rng())?;
    let gpu = render::GpuState::new(&canvas, app.fan_vertex_count(), base_color)
        .await
        .map_err(|e| anyhow::anyhow!("WebGPU init error: {:?}", e))?;

    let queue: Rc<RefCell<EventQueue>> = Rc::new(RefCell::new(EventQueue::new()));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        queue: queue.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        queue,
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
