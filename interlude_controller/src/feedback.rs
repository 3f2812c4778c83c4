// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The feedback popover: an outside-dismissable form with timed success.
//!
//! One machine covers both the popover shell and the form inside it:
//! `Closed` until opened, then `Idle` (editing) → `Loading` → `Success`,
//! with `Close` rows from every open state. Opening clears the previous
//! draft and starts watching the popover's region; closing (whether by
//! button, Escape, outside pointer-down, or the post-success timer) stops
//! watching and cancels any pending timers, so a stale success can never
//! surface into a reopened popover.
//!
//! Submission is silently blocked while the draft is empty: no event is
//! dispatched, nothing changes. An accepted submit schedules the success
//! swap at 1500 ms and the auto-close at 3300 ms from the same origin.
//! Ctrl+Enter (or ⌘+Enter) submits only while open and editing.

use interlude_dismiss::{InputEvent, Key};
use interlude_machine::{Machine, TransitionTable};
use interlude_motion::MotionProps;
use kurbo::Rect;

use alloc::string::String;

use crate::controller::Controller;

/// Delay before the success copy replaces the form, in milliseconds.
pub const SUCCESS_DELAY_MS: u64 = 1500;

/// Delay before the popover closes after submission, in milliseconds.
pub const CLOSE_DELAY_MS: u64 = 3300;

/// Popover-and-form states.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FeedbackState {
    /// Popover hidden; the trigger button shows.
    Closed,
    /// Popover open, form editable.
    Idle,
    /// Submission in flight; the submit button shows a spinner.
    Loading,
    /// Success copy shows until the auto-close.
    Success,
}

/// Events the popover's transition table understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FeedbackEvent {
    /// Open the popover.
    Open,
    /// Close it, from any open state.
    Close,
    /// Submit the draft.
    Submit,
    /// Timer: swap the form for the success copy.
    ShowSuccess,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TimerKind {
    Success,
    Close,
}

/// The feedback-popover controller.
#[derive(Clone, Debug)]
pub struct FeedbackPopover {
    inner: Controller<FeedbackState, FeedbackEvent, TimerKind>,
    draft: String,
}

impl Default for FeedbackPopover {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackPopover {
    /// Creates a closed popover.
    #[must_use]
    pub fn new() -> Self {
        let table = TransitionTable::new()
            .row(FeedbackState::Closed, FeedbackEvent::Open, FeedbackState::Idle)
            .row(FeedbackState::Idle, FeedbackEvent::Close, FeedbackState::Closed)
            .row(
                FeedbackState::Loading,
                FeedbackEvent::Close,
                FeedbackState::Closed,
            )
            .row(
                FeedbackState::Success,
                FeedbackEvent::Close,
                FeedbackState::Closed,
            )
            .row(FeedbackState::Idle, FeedbackEvent::Submit, FeedbackState::Loading)
            .row(
                FeedbackState::Loading,
                FeedbackEvent::ShowSuccess,
                FeedbackState::Success,
            );
        Self {
            inner: Controller::new(Machine::new(FeedbackState::Closed, table)),
            draft: String::new(),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &FeedbackState {
        self.inner.state()
    }

    /// Returns `true` while the popover is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        *self.state() != FeedbackState::Closed
    }

    /// Returns the draft text.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the draft text.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Returns `true` if the faux placeholder should hide.
    ///
    /// The placeholder is a separate animated element, hidden the moment the
    /// draft is non-empty.
    #[must_use]
    pub fn placeholder_hidden(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Opens the popover over `region`, resetting the form and draft.
    ///
    /// Returns `false` if it was already open.
    pub fn open(&mut self, region: Rect) -> bool {
        if self.inner.dispatch(&FeedbackEvent::Open).is_none() {
            return false;
        }
        self.draft.clear();
        self.inner.attach(region);
        true
    }

    /// The popover moved or resized while open.
    pub fn update_region(&mut self, region: Rect) {
        if self.is_open() {
            self.inner.attach(region);
        }
    }

    /// Closes the popover from any open state.
    pub fn close(&mut self) -> bool {
        let closed = self.inner.dispatch(&FeedbackEvent::Close).is_some();
        if closed {
            self.deactivate();
        }
        closed
    }

    /// Submits the draft. Returns `true` if the submission was accepted.
    ///
    /// Blocked silently (no event dispatched) while the draft is empty,
    /// and refused by the table outside the editing state. Both timers are
    /// scheduled from the same `now`.
    pub fn submit(&mut self, now: u64) -> bool {
        if self.draft.is_empty() {
            return false;
        }
        if self.inner.dispatch(&FeedbackEvent::Submit).is_none() {
            return false;
        }
        self.inner.schedule(
            TimerKind::Success,
            SUCCESS_DELAY_MS,
            FeedbackEvent::ShowSuccess,
            now,
        );
        self.inner
            .schedule(TimerKind::Close, CLOSE_DELAY_MS, FeedbackEvent::Close, now);
        true
    }

    /// Feeds one host input event through dismissal and the submit chord.
    ///
    /// Returns `true` if the event changed anything. Dismissal (outside
    /// pointer/touch, Escape) closes; Ctrl/⌘+Enter submits while editing.
    pub fn handle_input(&mut self, event: &InputEvent, now: u64) -> bool {
        if self.inner.wants_dismiss(event) {
            return self.close();
        }
        if let InputEvent::KeyDown { key: Key::Enter, mods } = event
            && mods.command()
            && *self.state() == FeedbackState::Idle
        {
            return self.submit(now);
        }
        false
    }

    /// Pumps due timers. Returns `true` if the state changed.
    pub fn tick(&mut self, now: u64) -> bool {
        let applied = self.inner.tick(now);
        if applied.contains(&FeedbackState::Closed) {
            self.deactivate();
        }
        !applied.is_empty()
    }

    /// Tears the controller down. Idempotent.
    pub fn teardown(&mut self) {
        self.inner.teardown();
    }

    /// Enter origin for the success copy.
    #[must_use]
    pub fn success_enter(&self) -> MotionProps {
        MotionProps::success_enter()
    }

    // Closing deregisters the watcher and cancels pending timers in the
    // same synchronous step as the state change.
    fn deactivate(&mut self) {
        self.inner.detach();
        self.inner.cancel(&TimerKind::Success);
        self.inner.cancel(&TimerKind::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interlude_dismiss::Modifiers;
    use kurbo::Point;

    fn region() -> Rect {
        Rect::new(100.0, 100.0, 464.0, 292.0)
    }

    fn open_popover() -> FeedbackPopover {
        let mut popover = FeedbackPopover::new();
        assert!(popover.open(region()));
        popover
    }

    #[test]
    fn submit_follows_the_reference_timings() {
        let mut popover = open_popover();
        popover.set_draft("love the dismiss animation");

        assert!(popover.submit(0));
        assert_eq!(*popover.state(), FeedbackState::Loading);

        assert!(!popover.tick(1499));
        assert!(popover.tick(1500));
        assert_eq!(*popover.state(), FeedbackState::Success);

        assert!(popover.tick(3300));
        assert_eq!(*popover.state(), FeedbackState::Closed);
        assert!(!popover.is_open());
    }

    #[test]
    fn empty_draft_blocks_submission_silently() {
        let mut popover = open_popover();

        assert!(!popover.submit(0));
        assert_eq!(*popover.state(), FeedbackState::Idle);

        // Whitespace-free emptiness is the only guard; the chord is blocked
        // the same way.
        let chord = InputEvent::key(Key::Enter, Modifiers::CTRL);
        assert!(!popover.handle_input(&chord, 0));
        assert_eq!(*popover.state(), FeedbackState::Idle);
    }

    #[test]
    fn command_enter_submits_only_while_editing() {
        let mut popover = open_popover();
        popover.set_draft("ship it");

        let chord = InputEvent::key(Key::Enter, Modifiers::META);
        assert!(popover.handle_input(&chord, 0));
        assert_eq!(*popover.state(), FeedbackState::Loading);

        // While loading the chord does nothing.
        assert!(!popover.handle_input(&chord, 100));
        assert_eq!(*popover.state(), FeedbackState::Loading);

        // Plain Enter never submits.
        let mut fresh = open_popover();
        fresh.set_draft("plain enter");
        assert!(!fresh.handle_input(&InputEvent::key(Key::Enter, Modifiers::empty()), 0));
    }

    #[test]
    fn escape_and_outside_pointer_close() {
        let mut popover = open_popover();
        assert!(popover.handle_input(&InputEvent::escape(), 0));
        assert!(!popover.is_open());

        let mut popover = open_popover();
        let outside = InputEvent::pointer_down(Point::new(0.0, 0.0));
        assert!(popover.handle_input(&outside, 0));
        assert!(!popover.is_open());

        // Inside the region: stays open.
        let mut popover = open_popover();
        let inside = InputEvent::pointer_down(Point::new(200.0, 150.0));
        assert!(!popover.handle_input(&inside, 0));
        assert!(popover.is_open());
    }

    #[test]
    fn dismissal_is_inert_while_closed() {
        let mut popover = FeedbackPopover::new();
        assert!(!popover.handle_input(&InputEvent::escape(), 0));
        assert_eq!(*popover.state(), FeedbackState::Closed);
    }

    #[test]
    fn closing_midflight_cancels_the_pending_timers() {
        let mut popover = open_popover();
        popover.set_draft("closing early");
        popover.submit(0);

        assert!(popover.close());

        // Reopen: the old success/close timers must not leak in.
        assert!(popover.open(region()));
        assert!(!popover.tick(1500));
        assert!(!popover.tick(3300));
        assert_eq!(*popover.state(), FeedbackState::Idle);
    }

    #[test]
    fn reopening_clears_the_draft() {
        let mut popover = open_popover();
        popover.set_draft("stale text");
        assert!(popover.placeholder_hidden());
        popover.close();

        popover.open(region());
        assert_eq!(popover.draft(), "");
        assert!(!popover.placeholder_hidden());
    }

    #[test]
    fn teardown_is_idempotent() {
        let mut popover = open_popover();
        popover.set_draft("tear me down");
        popover.submit(0);

        popover.teardown();
        popover.teardown();
        assert!(!popover.tick(5000));
    }
}
