//! Frame driver and event dispatch.
//!
//! Frontends never touch the ring directly. They turn platform callbacks into [`RingEvent`]s and
//! feed them, in arrival order, to a single [`RingApp`] that owns all mutable state. Only a
//! [`RingEvent::FrameTick`] advances the simulation and reaches the [`FanBackend`].

use crate::config::{ConfigError, RingConfig};
use crate::constants::CLOCK_MS_TO_SEC;
use crate::geometry::VertexGenerator;
use crate::interaction::{InteractionMapper, Viewport};
use crate::physics::PhysicsIntegrator;
use crate::ring::RingState;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RingEvent {
    PointerDown { x: f64, y: f64, viewport: Viewport },
    PointerMove { x: f64, y: f64, viewport: Viewport },
    PointerUp,
    /// Frame clock tick carrying a monotonically increasing timestamp in milliseconds.
    FrameTick { timestamp_ms: f64 },
}

pub type EventQueue = VecDeque<RingEvent>;

/// What a frame hands to the renderer.
#[derive(Clone, Copy, Debug)]
pub struct FanFrame<'a> {
    /// Interleaved fan positions, center first.
    pub vertices: &'a [f32],
    pub elapsed_sec: f64,
}

impl FanFrame<'_> {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 2
    }
}

/// Upload-and-draw side of a frame.
pub trait FanBackend {
    type Error;

    fn draw_fan(&mut self, frame: &FanFrame<'_>) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoopPhase {
    Idle,
    Running { start_ms: f64 },
}

/// Elapsed-time source. The first tick starts the clock.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    phase: LoopPhase,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            phase: LoopPhase::Idle,
        }
    }
}

impl FrameClock {
    #[inline]
    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Seconds since the first tick.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let start_ms = match self.phase {
            LoopPhase::Idle => {
                self.phase = LoopPhase::Running {
                    start_ms: timestamp_ms,
                };
                timestamp_ms
            }
            LoopPhase::Running { start_ms } => start_ms,
        };
        (timestamp_ms - start_ms) * CLOCK_MS_TO_SEC
    }
}

pub struct RingApp {
    config: RingConfig,
    state: RingState,
    integrator: PhysicsIntegrator,
    mapper: InteractionMapper,
    vertices: VertexGenerator,
    clock: FrameClock,
    frame_count: u64,
}

impl RingApp {
    pub fn new(config: RingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = RingState::new(&config);
        let integrator = PhysicsIntegrator::new(&config);
        let vertices = VertexGenerator::new(config.sample_count());
        Ok(Self {
            config,
            state,
            integrator,
            mapper: InteractionMapper::default(),
            vertices,
            clock: FrameClock::default(),
            frame_count: 0,
        })
    }

    #[inline]
    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &RingState {
        &self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.mapper.is_dragging()
    }

    #[inline]
    pub fn drag_center(&self) -> Option<usize> {
        self.mapper.session().map(|s| s.center)
    }

    #[inline]
    pub fn phase(&self) -> LoopPhase {
        self.clock.phase()
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Number of vertices every frame hands to the backend (center + N + 1 rim points).
    #[inline]
    pub fn fan_vertex_count(&self) -> usize {
        self.config.sample_count() + 1
    }

    pub fn dispatch<B: FanBackend>(
        &mut self,
        event: RingEvent,
        backend: &mut B,
    ) -> Result<(), B::Error> {
        match event {
            RingEvent::PointerDown { x, y, viewport } => {
                self.mapper.pointer_down(x, y, viewport, &self.config);
            }
            RingEvent::PointerMove { x, y, viewport } => {
                self.mapper
                    .pointer_move(self.state.radius_mut(), x, y, viewport, &self.config);
            }
            RingEvent::PointerUp => self.mapper.pointer_up(),
            RingEvent::FrameTick { timestamp_ms } => self.frame(timestamp_ms, backend)?,
        }
        Ok(())
    }

    /// Process every queued event in arrival order.
    ///
    /// On a backend error the remaining events stay queued for the next drain.
    pub fn drain<B: FanBackend>(
        &mut self,
        queue: &mut EventQueue,
        backend: &mut B,
    ) -> Result<(), B::Error> {
        while let Some(event) = queue.pop_front() {
            self.dispatch(event, backend)?;
        }
        Ok(())
    }

    fn frame<B: FanBackend>(&mut self, timestamp_ms: f64, backend: &mut B) -> Result<(), B::Error> {
        if self.frame_count == 0 {
            log::info!(
                "ring loop running: {} segments, base radius {}",
                self.config.segment_count,
                self.config.base_radius
            );
        }
        let elapsed_sec = self.clock.tick(timestamp_ms);
        self.integrator
            .step(&mut self.state, &self.config, self.mapper.is_dragging());
        let vertices = self.vertices.generate(&self.state);
        self.frame_count += 1;
        backend.draw_fan(&FanFrame {
            vertices,
            elapsed_sec,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(usize, f64)>,
    }

    impl FanBackend for Recorder {
        type Error = std::convert::Infallible;

        fn draw_fan(&mut self, frame: &FanFrame<'_>) -> Result<(), Self::Error> {
            self.frames.push((frame.vertex_count(), frame.elapsed_sec));
            Ok(())
        }
    }

    struct Failing;

    impl FanBackend for Failing {
        type Error = &'static str;

        fn draw_fan(&mut self, _frame: &FanFrame<'_>) -> Result<(), Self::Error> {
            Err("surface lost")
        }
    }

    #[test]
    fn clock_starts_on_first_tick() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.phase(), LoopPhase::Idle);
        assert_eq!(clock.tick(1500.0), 0.0);
        assert_eq!(clock.phase(), LoopPhase::Running { start_ms: 1500.0 });
        assert!((clock.tick(2750.0) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn each_tick_draws_one_frame() {
        let mut app = RingApp::new(RingConfig::default()).unwrap();
        let mut rec = Recorder::default();
        for t in [0.0, 16.0, 33.0] {
            app.dispatch(RingEvent::FrameTick { timestamp_ms: t }, &mut rec)
                .unwrap();
        }
        assert_eq!(app.frame_count(), 3);
        assert_eq!(rec.frames.len(), 3);
        assert!(rec.frames.iter().all(|&(n, _)| n == app.fan_vertex_count()));
        assert!((rec.frames[2].1 - 0.033).abs() < 1e-12);
    }

    #[test]
    fn pointer_events_do_not_draw() {
        let mut app = RingApp::new(RingConfig::default()).unwrap();
        let mut rec = Recorder::default();
        let viewport = Viewport::new(200.0, 200.0);
        app.dispatch(RingEvent::PointerDown { x: 190.0, y: 100.0, viewport }, &mut rec)
            .unwrap();
        app.dispatch(RingEvent::PointerMove { x: 200.0, y: 100.0, viewport }, &mut rec)
            .unwrap();
        assert!(rec.frames.is_empty());
        assert_eq!(app.phase(), LoopPhase::Idle);
        assert_eq!(app.drag_center(), Some(0));
        assert_eq!(app.state().radius()[0], app.config().drag_max_radius);
    }

    #[test]
    fn drain_preserves_arrival_order() {
        let mut app = RingApp::new(RingConfig::default()).unwrap();
        let mut rec = Recorder::default();
        let viewport = Viewport::new(200.0, 200.0);
        let mut queue = EventQueue::new();
        queue.push_back(RingEvent::PointerDown { x: 100.0, y: 10.0, viewport });
        queue.push_back(RingEvent::PointerMove { x: 100.0, y: 0.0, viewport });
        queue.push_back(RingEvent::FrameTick { timestamp_ms: 0.0 });
        queue.push_back(RingEvent::PointerUp);
        app.drain(&mut queue, &mut rec).unwrap();
        assert!(queue.is_empty());
        assert_eq!(rec.frames.len(), 1);
        assert!(!app.is_dragging());
        // the frame ran while dragging, so relaxation left velocity untouched
        assert!(app.state().velocity().iter().all(|&v| v == 0.0));
        assert!(app.state().radius()[90] > app.config().base_radius);
    }

    #[test]
    fn backend_error_keeps_remaining_events() {
        let mut app = RingApp::new(RingConfig::default()).unwrap();
        let mut queue = EventQueue::new();
        queue.push_back(RingEvent::FrameTick { timestamp_ms: 0.0 });
        queue.push_back(RingEvent::PointerUp);
        assert_eq!(app.drain(&mut queue, &mut Failing), Err("surface lost"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn rejects_invalid_config() {
        let cfg = RingConfig {
            segment_count: 0,
            ..RingConfig::default()
        };
        assert!(RingApp::new(cfg).is_err());
    }
}
