// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A multi-step form position with an animation direction.
//!
//! The direction is interaction history, not derivable from the step index:
//! the outgoing step must slide toward where the user came from, so the
//! direction set by the last navigation travels with the position. Going
//! forward from the final step wraps to the first and flags the wrap as a
//! backward move, which keeps the slide pointing the right way.

/// Which way the step content should slide.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// New content enters from the trailing edge.
    #[default]
    Forward,
    /// New content enters from the leading edge.
    Backward,
}

impl Direction {
    /// The sign of the enter offset for this direction.
    ///
    /// Multiply by the slide distance (the reference uses 110% of the step's
    /// width, to clear the container padding).
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Position in a fixed sequence of steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stepper {
    step: usize,
    last: usize,
    direction: Direction,
}

impl Stepper {
    /// Creates a stepper over `count` steps, starting at the first.
    ///
    /// `count` must be at least 1.
    #[must_use]
    pub fn new(count: usize) -> Self {
        debug_assert!(count > 0, "a stepper needs at least one step");
        Self {
            step: 0,
            last: count.saturating_sub(1),
            direction: Direction::Forward,
        }
    }

    /// Returns the current step index.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn count(&self) -> usize {
        self.last + 1
    }

    /// Returns the direction of the most recent navigation.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `true` at the first step (the back button disables).
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.step == 0
    }

    /// Returns `true` at the final step.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.step == self.last
    }

    /// Advances one step. From the final step, wraps to the first.
    ///
    /// The wrap is a backward slide: the first step re-enters from the
    /// leading edge rather than marching further forward.
    pub fn forward(&mut self) {
        if self.step == self.last {
            self.step = 0;
            self.direction = Direction::Backward;
        } else {
            self.step += 1;
            self.direction = Direction::Forward;
        }
    }

    /// Steps back. No-op at the first step.
    pub fn back(&mut self) {
        if self.step == 0 {
            return;
        }
        self.step -= 1;
        self.direction = Direction::Backward;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_back_set_the_direction() {
        let mut stepper = Stepper::new(3);
        assert_eq!(stepper.step(), 0);
        assert_eq!(stepper.direction(), Direction::Forward);

        stepper.forward();
        assert_eq!(stepper.step(), 1);
        assert_eq!(stepper.direction(), Direction::Forward);

        stepper.back();
        assert_eq!(stepper.step(), 0);
        assert_eq!(stepper.direction(), Direction::Backward);
    }

    #[test]
    fn back_at_the_first_step_is_a_noop() {
        let mut stepper = Stepper::new(3);
        stepper.back();
        assert_eq!(stepper.step(), 0);
        // An ignored press leaves the direction alone too.
        assert_eq!(stepper.direction(), Direction::Forward);
    }

    #[test]
    fn forward_at_the_last_step_wraps_backward() {
        let mut stepper = Stepper::new(3);
        stepper.forward();
        stepper.forward();
        assert!(stepper.is_last());

        stepper.forward();
        assert_eq!(stepper.step(), 0);
        assert_eq!(stepper.direction(), Direction::Backward);
    }

    #[test]
    fn direction_sign_matches_the_slide() {
        assert_eq!(Direction::Forward.sign(), 1.0);
        assert_eq!(Direction::Backward.sign(), -1.0);
    }

    #[test]
    fn single_step_stepper_wraps_onto_itself() {
        let mut stepper = Stepper::new(1);
        assert!(stepper.is_first() && stepper.is_last());
        stepper.forward();
        assert_eq!(stepper.step(), 0);
        assert_eq!(stepper.direction(), Direction::Backward);
    }
}
