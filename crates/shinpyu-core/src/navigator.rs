//! Flip-book page navigation.
//!
//! The book has [`TOTAL_LEAVES`] leaves, each with a front and a back side.
//! `current` counts how many leaves are turned over, so it ranges over
//! `0..=TOTAL_LEAVES`. Every accepted transition takes the flip lock; the
//! caller releases it once the turn animation ([`FLIP_DURATION`]) is over.

use std::time::Duration;

/// Number of physical leaves in the book.
pub const TOTAL_LEAVES: usize = 4;

/// Number of printed sides (two per leaf).
pub const TOTAL_SIDES: usize = TOTAL_LEAVES * 2;

/// Length of the page-turn animation; the flip lock is held this long.
pub const FLIP_DURATION: Duration = Duration::from_millis(600);

/// Direction of a page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// An accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flip {
    pub direction: Direction,
    /// Leaf that turned (for a jump, the last one).
    pub leaf: usize,
    /// Page index after the transition.
    pub current: usize,
}

/// Bounded page index plus the in-flight flip lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookNavigator {
    current: usize,
    flipping: bool,
}

impl BookNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of leaves currently turned over.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether a turn animation is in flight.
    pub fn is_flipping(&self) -> bool {
        self.flipping
    }

    /// Turn the next leaf over.
    pub fn next(&mut self) -> Option<Flip> {
        if self.flipping || self.current >= TOTAL_LEAVES {
            return None;
        }
        self.flipping = true;
        let leaf = self.current;
        self.current += 1;
        tracing::debug!(leaf, current = self.current, "Flipped forward");

        Some(Flip {
            direction: Direction::Forward,
            leaf,
            current: self.current,
        })
    }

    /// Turn the last flipped leaf back.
    pub fn prev(&mut self) -> Option<Flip> {
        if self.flipping || self.current == 0 {
            return None;
        }
        self.flipping = true;
        self.current -= 1;
        tracing::debug!(leaf = self.current, current = self.current, "Flipped backward");

        Some(Flip {
            direction: Direction::Backward,
            leaf: self.current,
            current: self.current,
        })
    }

    /// Jump straight to `target` (clamped to the last page) as one transition.
    pub fn go_to(&mut self, target: usize) -> Option<Flip> {
        let target = target.min(TOTAL_LEAVES);
        if self.flipping || target == self.current {
            return None;
        }
        self.flipping = true;
        let (direction, leaf) = if target > self.current {
            (Direction::Forward, target - 1)
        } else {
            (Direction::Backward, target)
        };
        self.current = target;

        Some(Flip {
            direction,
            leaf,
            current: target,
        })
    }

    /// Transition for a click on leaf `leaf`.
    ///
    /// The top unturned leaf turns forward unless it is the last one; the
    /// most recently turned leaf turns back.
    pub fn leaf_clicked(&mut self, leaf: usize) -> Option<Flip> {
        if leaf == self.current && self.current < TOTAL_LEAVES - 1 {
            self.next()
        } else if self.current > 0 && leaf == self.current - 1 {
            self.prev()
        } else {
            None
        }
    }

    /// Apply a direction from a button, key or swipe.
    pub fn step(&mut self, direction: Direction) -> Option<Flip> {
        match direction {
            Direction::Forward => self.next(),
            Direction::Backward => self.prev(),
        }
    }

    /// Drop the flip lock after the animation.
    pub fn release(&mut self) {
        self.flipping = false;
    }

    /// Whether `leaf` is turned over.
    pub fn is_flipped(&self, leaf: usize) -> bool {
        leaf < self.current
    }

    /// Stacking order for `leaf`.
    ///
    /// Turned leaves stack upward in turn order; unturned leaves stack in
    /// reverse so the next one to turn is on top.
    pub fn z_index(&self, leaf: usize) -> usize {
        if leaf < self.current {
            leaf + 1
        } else {
            TOTAL_LEAVES.saturating_sub(leaf)
        }
    }

    pub fn prev_disabled(&self) -> bool {
        self.current == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.current == TOTAL_LEAVES
    }

    /// First visible side number, e.g. `"3 / 8"`.
    pub fn indicator(&self) -> String {
        let side = (self.current * 2 + 1).min(TOTAL_SIDES);
        format!("{} / {}", side, TOTAL_SIDES)
    }
}
