//! winit mouse/touch input to ring events.
//!
//! Only the first finger down drives the ring; other touches are ignored until it lifts.

use ripple_core::{RingEvent, Viewport};
use winit::event::TouchPhase;

#[derive(Debug, Default)]
pub struct PointerTracker {
    cursor: Option<(f64, f64)>,
    touch_id: Option<u64>,
}

impl PointerTracker {
    pub fn cursor_moved(&mut self, x: f64, y: f64, viewport: Viewport) -> RingEvent {
        self.cursor = Some((x, y));
        RingEvent::PointerMove { x, y, viewport }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Primary mouse button. A press before the cursor has been seen has no position to pick from.
    pub fn left_button(&mut self, pressed: bool, viewport: Viewport) -> Option<RingEvent> {
        if pressed {
            let (x, y) = self.cursor?;
            Some(RingEvent::PointerDown { x, y, viewport })
        } else {
            Some(RingEvent::PointerUp)
        }
    }

    pub fn touch(
        &mut self,
        phase: TouchPhase,
        id: u64,
        x: f64,
        y: f64,
        viewport: Viewport,
    ) -> Option<RingEvent> {
        match phase {
            TouchPhase::Started if self.touch_id.is_none() => {
                self.touch_id = Some(id);
                Some(RingEvent::PointerDown { x, y, viewport })
            }
            TouchPhase::Moved if self.touch_id == Some(id) => {
                Some(RingEvent::PointerMove { x, y, viewport })
            }
            TouchPhase::Ended | TouchPhase::Cancelled if self.touch_id == Some(id) => {
                self.touch_id = None;
                Some(RingEvent::PointerUp)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn press_uses_last_cursor_position() {
        let mut t = PointerTracker::default();
        assert_eq!(t.left_button(true, VP), None);
        t.cursor_moved(700.0, 300.0, VP);
        assert_eq!(
            t.left_button(true, VP),
            Some(RingEvent::PointerDown {
                x: 700.0,
                y: 300.0,
                viewport: VP
            })
        );
        assert_eq!(t.left_button(false, VP), Some(RingEvent::PointerUp));
    }

    #[test]
    fn cursor_leaving_forgets_position() {
        let mut t = PointerTracker::default();
        t.cursor_moved(1.0, 2.0, VP);
        t.cursor_left();
        assert_eq!(t.left_button(true, VP), None);
    }

    #[test]
    fn second_finger_is_ignored() {
        let mut t = PointerTracker::default();
        assert!(matches!(
            t.touch(TouchPhase::Started, 1, 10.0, 10.0, VP),
            Some(RingEvent::PointerDown { .. })
        ));
        assert_eq!(t.touch(TouchPhase::Started, 2, 50.0, 50.0, VP), None);
        assert_eq!(t.touch(TouchPhase::Moved, 2, 60.0, 60.0, VP), None);
        assert_eq!(t.touch(TouchPhase::Ended, 2, 60.0, 60.0, VP), None);
        assert!(matches!(
            t.touch(TouchPhase::Moved, 1, 20.0, 20.0, VP),
            Some(RingEvent::PointerMove { .. })
        ));
        assert_eq!(
            t.touch(TouchPhase::Cancelled, 1, 20.0, 20.0, VP),
            Some(RingEvent::PointerUp)
        );
        // a new first finger can start another drag
        assert!(t.touch(TouchPhase::Started, 2, 5.0, 5.0, VP).is_some());
    }
}
