//! Touch-swipe and keyboard mapping onto page turns.

use crate::navigator::Direction;

/// Minimum horizontal travel, in screen pixels, that counts as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Direction for a swipe from `start_x` to `end_x`.
///
/// Swiping left turns forward, swiping right turns back.
pub fn swipe_direction(start_x: f64, end_x: f64) -> Option<Direction> {
    let diff = start_x - end_x;
    if diff.abs() <= SWIPE_THRESHOLD {
        return None;
    }
    if diff > 0.0 {
        Some(Direction::Forward)
    } else {
        Some(Direction::Backward)
    }
}

/// Remembers where the current touch started.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: f64,
}

impl SwipeTracker {
    pub fn touch_start(&mut self, screen_x: f64) {
        self.start_x = screen_x;
    }

    pub fn touch_end(&self, screen_x: f64) -> Option<Direction> {
        swipe_direction(self.start_x, screen_x)
    }
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Reload,
}

/// Map a DOM key name (`"ArrowLeft"`, `" "`, ...) to an action.
///
/// Handled keys should have their default behaviour suppressed.
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowLeft" => Some(KeyAction::Turn(Direction::Backward)),
        "ArrowRight" | " " => Some(KeyAction::Turn(Direction::Forward)),
        "r" | "R" => Some(KeyAction::Reload),
        _ => None,
    }
}
