// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The login button: idle → loading → success → idle on two timers.
//!
//! Activation schedules both delayed transitions atomically: the success
//! swap at 1750 ms and the return to idle at 3500 ms from the same origin.
//! While not idle the button accepts no input; re-activation mid-flight is
//! a transition-table no-op. A forced reset (for example, the view's owner
//! discards the flow) snaps back to idle and cancels both timers in one
//! step, so neither stale transition can fire later.

use interlude_machine::{Machine, TransitionTable};
use interlude_motion::MotionProps;

use crate::controller::Controller;

/// How long the loading state shows before the success copy, in milliseconds.
pub const SUCCESS_DELAY_MS: u64 = 1750;

/// How long after activation the button returns to idle, in milliseconds.
pub const RESET_DELAY_MS: u64 = 3500;

/// The button's states.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoginState {
    /// Showing the call-to-action label, accepting activation.
    Idle,
    /// Request in flight; a spinner shows.
    Loading,
    /// Confirmation copy shows before the automatic reset.
    Success,
}

/// Events the button's transition table understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoginEvent {
    /// The user pressed the button.
    Activate,
    /// Timer: swap the spinner for the success copy.
    ShowSuccess,
    /// Timer: return to idle.
    Reset,
}

/// Timer kinds; each supersedes its own prior schedule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TimerKind {
    Success,
    Reset,
}

/// What the rendering surface should put inside the button.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonCopy {
    /// A text label.
    Label(&'static str),
    /// An indeterminate spinner.
    Spinner,
}

/// The login-button controller.
///
/// See the [crate docs](crate) for the consumption model. The swap between
/// copies is a pop-layout transition: the outgoing copy animates to
/// [`MotionProps::pop_exit`], the incoming one from
/// [`MotionProps::pop_enter`] to rest.
#[derive(Clone, Debug)]
pub struct LoginButton {
    inner: Controller<LoginState, LoginEvent, TimerKind>,
}

impl Default for LoginButton {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginButton {
    /// Creates an idle button.
    #[must_use]
    pub fn new() -> Self {
        let table = TransitionTable::new()
            .row(LoginState::Idle, LoginEvent::Activate, LoginState::Loading)
            .row(
                LoginState::Loading,
                LoginEvent::ShowSuccess,
                LoginState::Success,
            )
            .row(LoginState::Success, LoginEvent::Reset, LoginState::Idle);
        Self {
            inner: Controller::new(Machine::new(LoginState::Idle, table)),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &LoginState {
        self.inner.state()
    }

    /// Returns a revision counter that bumps on every applied transition.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.inner.revision()
    }

    /// Presses the button. Returns `true` if the press was accepted.
    ///
    /// Accepted only while idle. Both timers are scheduled here, from the
    /// same `now`, so the 1750/3500 ms points share an origin.
    pub fn activate(&mut self, now: u64) -> bool {
        if self.inner.dispatch(&LoginEvent::Activate).is_none() {
            return false;
        }
        self.inner
            .schedule(TimerKind::Success, SUCCESS_DELAY_MS, LoginEvent::ShowSuccess, now);
        self.inner
            .schedule(TimerKind::Reset, RESET_DELAY_MS, LoginEvent::Reset, now);
        true
    }

    /// Pumps due timers. Returns `true` if the state changed.
    pub fn tick(&mut self, now: u64) -> bool {
        !self.inner.tick(now).is_empty()
    }

    /// Forces the button back to idle, cancelling both pending timers.
    pub fn force_reset(&mut self) {
        self.inner.reset();
    }

    /// Tears the controller down. Idempotent.
    pub fn teardown(&mut self) {
        self.inner.teardown();
    }

    /// Returns `true` if the button should render as disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        *self.state() != LoginState::Idle
    }

    /// The copy to render for the current state.
    #[must_use]
    pub fn copy(&self) -> ButtonCopy {
        match self.state() {
            LoginState::Idle => ButtonCopy::Label("Send me a login link"),
            LoginState::Loading => ButtonCopy::Spinner,
            LoginState::Success => ButtonCopy::Label("Login link sent!"),
        }
    }

    /// Enter origin for the copy keyed by the new state.
    #[must_use]
    pub fn copy_enter(&self) -> MotionProps {
        MotionProps::pop_enter()
    }

    /// Exit target for the copy keyed by the old state.
    #[must_use]
    pub fn copy_exit(&self) -> MotionProps {
        MotionProps::pop_exit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_hits_the_reference_timings() {
        let mut button = LoginButton::new();
        assert!(button.activate(0));
        assert_eq!(*button.state(), LoginState::Loading);

        assert!(!button.tick(1749));
        assert!(button.tick(1750));
        assert_eq!(*button.state(), LoginState::Success);

        assert!(!button.tick(3499));
        assert!(button.tick(3500));
        assert_eq!(*button.state(), LoginState::Idle);
    }

    #[test]
    fn activation_is_refused_outside_idle() {
        let mut button = LoginButton::new();
        button.activate(0);

        assert!(!button.activate(1000));
        assert_eq!(*button.state(), LoginState::Loading);
        assert!(button.is_disabled());

        // The original schedule is undisturbed by the refused press.
        button.tick(1750);
        assert_eq!(*button.state(), LoginState::Success);
    }

    #[test]
    fn force_reset_cancels_both_timers() {
        let mut button = LoginButton::new();
        button.activate(0);

        button.force_reset();
        assert_eq!(*button.state(), LoginState::Idle);

        // Neither timer fires afterwards.
        assert!(!button.tick(1750));
        assert!(!button.tick(3500));
        assert_eq!(*button.state(), LoginState::Idle);
    }

    #[test]
    fn copy_tracks_state() {
        let mut button = LoginButton::new();
        assert_eq!(button.copy(), ButtonCopy::Label("Send me a login link"));

        button.activate(0);
        assert_eq!(button.copy(), ButtonCopy::Spinner);

        button.tick(1750);
        assert_eq!(button.copy(), ButtonCopy::Label("Login link sent!"));
    }

    #[test]
    fn reactivation_after_a_full_cycle_works() {
        let mut button = LoginButton::new();
        button.activate(0);
        button.tick(3500);
        assert_eq!(*button.state(), LoginState::Idle);

        assert!(button.activate(4000));
        button.tick(4000 + SUCCESS_DELAY_MS);
        assert_eq!(*button.state(), LoginState::Success);
    }
}
