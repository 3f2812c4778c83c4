// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The generic façade: machine + timers + dismissal region + teardown.
//!
//! [`Controller`] owns one [`Machine`], one [`TimerQueue`] whose payloads are
//! the machine's own events, and an optional [`DismissWatcher`] region. The
//! concrete controllers in this crate are thin wrappers over it; hosts can
//! also use it directly for one-off widgets.
//!
//! Lifecycle: create on view mount, [`teardown`](Controller::teardown) on
//! unmount. Teardown cancels every pending timer and drops the watcher in
//! one synchronous step, and is idempotent: a second call changes nothing.
//! After teardown, dispatch, scheduling, and ticks are all inert, so no
//! transition can ever fire against a destroyed view.

use interlude_dismiss::{DismissWatcher, InputEvent};
use interlude_machine::Machine;
use interlude_timing::{TimerHandle, TimerQueue};
use kurbo::Rect;

use alloc::vec::Vec;

/// One widget's worth of interaction state: machine, timers, region.
#[derive(Clone, Debug)]
pub struct Controller<S, E, K> {
    machine: Machine<S, E>,
    timers: TimerQueue<K, E>,
    watcher: Option<DismissWatcher>,
    torn_down: bool,
}

impl<S, E, K> Controller<S, E, K> {
    /// Wraps `machine` with an empty timer queue and no watched region.
    #[must_use]
    pub fn new(machine: Machine<S, E>) -> Self {
        Self {
            machine,
            timers: TimerQueue::new(),
            watcher: None,
            torn_down: false,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &S {
        self.machine.state()
    }

    /// Returns the machine's revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.machine.revision()
    }

    /// Returns `true` once [`teardown`](Self::teardown) has run.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Starts watching `region` for outside interaction.
    ///
    /// Typically called when the widget opens. Re-attaching replaces the
    /// region (the widget moved or resized).
    pub fn attach(&mut self, region: Rect) {
        if self.torn_down {
            return;
        }
        match &mut self.watcher {
            Some(watcher) => watcher.set_region(region),
            None => self.watcher = Some(DismissWatcher::new(region)),
        }
    }

    /// Stops watching for outside interaction (widget closed, not destroyed).
    pub fn detach(&mut self) {
        self.watcher = None;
    }

    /// Returns `true` if a region is attached and `event` should dismiss it.
    #[must_use]
    pub fn wants_dismiss(&self, event: &InputEvent) -> bool {
        !self.torn_down
            && self
                .watcher
                .as_ref()
                .is_some_and(|watcher| watcher.should_dismiss(event))
    }

    /// Tears the controller down: cancels all timers, drops the watcher.
    ///
    /// Idempotent and safe to call multiple times. Everything happens in
    /// this one synchronous step; no timer payload or dismissal can observe
    /// the controller afterwards.
    pub fn teardown(&mut self) {
        self.timers.shutdown();
        self.watcher = None;
        self.torn_down = true;
    }
}

impl<S, E, K> Controller<S, E, K>
where
    S: Clone + PartialEq,
    E: PartialEq,
{
    /// Dispatches `event` through the transition table.
    ///
    /// Unknown `(state, event)` pairs are no-ops returning `None`, as is any
    /// dispatch after teardown.
    pub fn dispatch(&mut self, event: &E) -> Option<S> {
        if self.torn_down {
            return None;
        }
        self.machine.dispatch(event)
    }

    /// Returns unconditionally to the initial state and cancels all timers.
    ///
    /// The forced-reset path: any pending delayed transition would be stale
    /// the moment the state snaps back, so both go in one step.
    pub fn reset(&mut self) {
        self.timers.cancel_all();
        self.machine.reset();
    }
}

impl<S, E, K> Controller<S, E, K>
where
    S: Clone + PartialEq,
    E: PartialEq,
    K: PartialEq,
{
    /// Schedules `event` to be dispatched `delay_ms` after `now`.
    ///
    /// Superseding semantics per kind come from the underlying
    /// [`TimerQueue`]; on a torn-down controller this is inert.
    pub fn schedule(&mut self, kind: K, delay_ms: u64, event: E, now: u64) -> TimerHandle {
        self.timers.schedule(kind, delay_ms, event, now)
    }

    /// Cancels the pending timer of `kind`, if any.
    pub fn cancel(&mut self, kind: &K) -> bool {
        self.timers.cancel(kind)
    }

    /// Returns `true` if a timer of `kind` is pending.
    #[must_use]
    pub fn is_pending(&self, kind: &K) -> bool {
        self.timers.is_pending(kind)
    }

    /// Pumps due timers, dispatching their payload events in deadline order.
    ///
    /// Returns the states that were actually applied (a due event can still
    /// be a table no-op if a user interaction got there first; that is the
    /// cancellation-by-supersession the ordering guarantee requires).
    pub fn tick(&mut self, now: u64) -> Vec<S> {
        let due: Vec<(K, E)> = self.timers.drain_due(now).collect();
        due.into_iter()
            .filter_map(|(_, event)| self.dispatch(&event))
            .collect()
    }
}
