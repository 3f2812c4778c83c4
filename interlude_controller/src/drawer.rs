// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A bottom drawer with an inner view switch.
//!
//! The drawer holds one of four views; switching re-keys the content so the
//! outgoing view fades out scaled back while the incoming one fades in, and
//! the host animates the sheet's height to the new content's measured
//! height. Reopening always lands on the default view: whatever sub-view
//! the user was in when the drawer closed is stale context, not a place to
//! resume.
//!
//! Dismissal goes through the watched region like the feedback popover:
//! Escape or a pointer-down on the overlay (outside the sheet) closes.

use interlude_dismiss::InputEvent;
use interlude_machine::{Machine, TransitionTable};
use interlude_motion::{MotionProps, Transition};
use kurbo::Rect;

use crate::controller::Controller;

/// The views the drawer can show.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DrawerView {
    /// The options list.
    #[default]
    Default,
    /// The remove-wallet confirmation.
    RemoveWallet,
    /// The secret-phrase warning.
    Phrase,
    /// The private-key warning.
    Key,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum DrawerState {
    Closed,
    Open,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum DrawerEvent {
    Open,
    Close,
}

// The shell machine never schedules timers; the kind is uninhabited-ish but
// the façade wants one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TimerKind {}

/// The drawer controller: open/closed shell around a view tag.
#[derive(Clone, Debug)]
pub struct Drawer {
    inner: Controller<DrawerState, DrawerEvent, TimerKind>,
    view: DrawerView,
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawer {
    /// Creates a closed drawer on the default view.
    #[must_use]
    pub fn new() -> Self {
        let table = TransitionTable::new()
            .row(DrawerState::Closed, DrawerEvent::Open, DrawerState::Open)
            .row(DrawerState::Open, DrawerEvent::Close, DrawerState::Closed);
        Self {
            inner: Controller::new(Machine::new(DrawerState::Closed, table)),
            view: DrawerView::Default,
        }
    }

    /// Returns `true` while the drawer is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        *self.inner.state() == DrawerState::Open
    }

    /// Returns the current view tag.
    #[must_use]
    pub fn view(&self) -> DrawerView {
        self.view
    }

    /// Opens the drawer over `region`, always on the default view.
    ///
    /// Returns `false` if it was already open.
    pub fn open(&mut self, region: Rect) -> bool {
        if self.inner.dispatch(&DrawerEvent::Open).is_none() {
            return false;
        }
        self.view = DrawerView::Default;
        self.inner.attach(region);
        true
    }

    /// The sheet moved or resized while open (content height changed).
    pub fn update_region(&mut self, region: Rect) {
        if self.is_open() {
            self.inner.attach(region);
        }
    }

    /// Closes the drawer.
    pub fn close(&mut self) -> bool {
        let closed = self.inner.dispatch(&DrawerEvent::Close).is_some();
        if closed {
            self.inner.detach();
        }
        closed
    }

    /// Switches to `view`. Ignored while closed.
    ///
    /// Returns `true` if the view changed; an unchanged tag must not re-key
    /// the content.
    pub fn show(&mut self, view: DrawerView) -> bool {
        if !self.is_open() || self.view == view {
            return false;
        }
        self.view = view;
        true
    }

    /// Returns to the default view. Ignored while closed.
    pub fn show_default(&mut self) -> bool {
        self.show(DrawerView::Default)
    }

    /// Feeds one host input event through dismissal.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if self.inner.wants_dismiss(event) {
            return self.close();
        }
        false
    }

    /// Tears the controller down. Idempotent.
    pub fn teardown(&mut self) {
        self.inner.teardown();
    }

    /// Enter origin and exit target for a switched view's content.
    #[must_use]
    pub fn view_enter(&self) -> MotionProps {
        MotionProps::scaled_back()
    }

    /// Transition profile for the view switch.
    #[must_use]
    pub fn view_transition(&self) -> Transition {
        Transition::VIEW_SWITCH
    }
}
