use std::time::Instant;
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event::*,
    event_loop::EventLoop,
    window::WindowBuilder,
};

use ripple_core::{pick_base_color, RingApp, RingConfig, RingEvent, Viewport};

mod gpu;
mod pointer;

const WINDOW_TITLE: &str = "Ripple Ring (native)";
const WINDOW_SIZE: [f64; 2] = [900.0, 900.0]; // logical px

#[inline]
fn viewport_of(size: PhysicalSize<u32>) -> Viewport {
    Viewport::new(size.width.max(1) as f64, size.height.max(1) as f64)
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(e) = run() {
        log::error!("{:?}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut app = RingApp::new(RingConfig::default())?;
    let base_color = pick_base_color(&mut rand::thread_rng())?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(WINDOW_SIZE[0], WINDOW_SIZE[1]))
        .build(&event_loop)?;

    let mut state = pollster::block_on(gpu::GpuState::new(
        &window,
        app.fan_vertex_count(),
        base_color,
    ))?;
    let mut tracker = pointer::PointerTracker::default();
    let start = Instant::now();

    event_loop.run(move |event, elwt| {
        let viewport = viewport_of(state.window.inner_size());
        // winit delivers events one at a time on this thread, so each is dispatched as it arrives
        let ring_event = match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    state.resize(size);
                    None
                }
                WindowEvent::CloseRequested => {
                    elwt.exit();
                    None
                }
                WindowEvent::CursorMoved { position, .. } => {
                    Some(tracker.cursor_moved(position.x, position.y, viewport))
                }
                WindowEvent::CursorLeft { .. } => {
                    tracker.cursor_left();
                    None
                }
                WindowEvent::MouseInput {
                    state: button_state,
                    button: MouseButton::Left,
                    ..
                } => tracker.left_button(button_state == ElementState::Pressed, viewport),
                WindowEvent::Touch(touch) => tracker.touch(
                    touch.phase,
                    touch.id,
                    touch.location.x,
                    touch.location.y,
                    viewport,
                ),
                _ => None,
            },
            Event::AboutToWait => Some(RingEvent::FrameTick {
                timestamp_ms: start.elapsed().as_secs_f64() * 1000.0,
            }),
            _ => None,
        };
        let Some(ring_event) = ring_event else {
            return;
        };
        let is_tick = matches!(ring_event, RingEvent::FrameTick { .. });
        match app.dispatch(ring_event, &mut state) {
            Ok(()) => {
                if is_tick {
                    state.window.request_redraw();
                }
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                state.resize(state.window.inner_size())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
            Err(e) => log::warn!("frame skipped: {:?}", e),
        }
    })?;
    Ok(())
}
