use crate::game::direction::Direction;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Game inputs written by the input context and read by the loop worker
#[derive(Debug)]
pub(crate) struct Controls {
    direction: AtomicU8,
    paused: AtomicBool,
}

impl Controls {
    pub(crate) fn new() -> Controls {
        Controls {
            direction: AtomicU8::new(Direction::default().as_u8()),
            paused: AtomicBool::new(true),
        }
    }

    pub(crate) fn direction(&self) -> Direction {
        Direction::from_u8(self.direction.load(Ordering::Acquire)).unwrap_or_default()
    }

    pub(crate) fn set_direction(&self, direction: Direction) {
        let old = self.direction.swap(direction.as_u8(), Ordering::AcqRel);
        if old != direction.as_u8() {
            log::debug!("Direction changed to {direction:?}");
        }
    }

    pub(crate) fn paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    pub(crate) fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Release);
    }

    /// Turn the snake in `direction` and resume play, as for a key press
    pub(crate) fn steer(&self, direction: Direction) {
        self.set_paused(false);
        self.set_direction(direction);
    }
}

impl Default for Controls {
    fn default() -> Controls {
        Controls::new()
    }
}

/// The stage of a touch or drag gesture that an input event reports
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    Down,
    Move,
    Up,
}

/// A point in screen pixels
#[derive(Clone, Copy, Debug, PartialEq)]
struct Point {
    x: f32,
    y: f32,
}

/// Turns press/drag/release gestures into snake directions.
///
/// The direction follows the vector from where the gesture was pressed to
/// where it currently is, along whichever axis that vector is longer on.  It
/// is recomputed on every event, so the snake can be steered in the middle
/// of a drag.
#[derive(Debug)]
pub(crate) struct GestureTranslator<'a> {
    controls: &'a Controls,
    press: Option<Point>,
    latest: Option<Point>,
}

impl<'a> GestureTranslator<'a> {
    pub(crate) fn new(controls: &'a Controls) -> Self {
        GestureTranslator {
            controls,
            press: None,
            latest: None,
        }
    }

    /// Process one input event.  A press also resumes play.
    pub(crate) fn handle(&mut self, phase: Phase, x: f32, y: f32) {
        let point = Point { x, y };
        if phase == Phase::Down {
            self.controls.set_paused(false);
            self.press = Some(point);
        }
        // A press is also the latest point of its own gesture.
        self.latest = Some(point);
        if let Some(direction) = self.gesture_direction() {
            self.controls.set_direction(direction);
        }
    }

    /// The direction indicated by the current gesture, or `None` if nothing
    /// has been pressed yet or the gesture has not moved from its press point
    fn gesture_direction(&self) -> Option<Direction> {
        let (press, latest) = (self.press?, self.latest?);
        let dx = latest.x - press.x;
        let dy = latest.y - press.y;
        if dx == 0.0 && dy == 0.0 {
            None
        } else if dx.abs() > dy.abs() {
            Some(if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            })
        } else {
            Some(if dy > 0.0 {
                Direction::Down
            } else {
                Direction::Up
            })
        }
    }
}
