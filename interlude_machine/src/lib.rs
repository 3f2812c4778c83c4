// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=interlude_machine --heading-base-level=0

//! Interlude Machine: small finite transition tables for UI interaction state.
//!
//! Interactive widgets tend to carry a handful of symbolic states (`Idle`,
//! `Loading`, `Success`; `Browsing`, `Selecting`, …) and move between them on
//! discrete events: user input, or a timer firing. This crate models exactly
//! that and nothing more:
//!
//! - [`TransitionTable`]: a pure `(from, event) -> to` mapping, stored as an
//!   ordered list of rows.
//! - [`Machine`]: a current state plus a table, with a monotonically
//!   increasing **revision** counter that bumps whenever a transition is
//!   applied.
//!
//! The table imposes no `Hash` or `Ord` bounds on state or event tags; rows
//! are matched by equality scan. Tables here are a few rows long, and this
//! keeps application enums free of derive requirements.
//!
//! UI input is forgiving: an event that has no row for the current state is
//! a **no-op**, not an error. [`Machine::dispatch`] returns `None` for such
//! pairs; [`Machine::try_dispatch`] surfaces them as
//! [`InvalidTransition`] for callers that want to log ignored input.
//!
//! ## Minimal example
//!
//! ```rust
//! use interlude_machine::{Machine, TransitionTable};
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq)]
//! enum State { Idle, Loading, Success }
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq)]
//! enum Event { Activate, Succeed, Reset }
//!
//! let table = TransitionTable::new()
//!     .row(State::Idle, Event::Activate, State::Loading)
//!     .row(State::Loading, Event::Succeed, State::Success)
//!     .row(State::Success, Event::Reset, State::Idle);
//!
//! let mut machine = Machine::new(State::Idle, table);
//!
//! assert_eq!(machine.dispatch(&Event::Activate), Some(State::Loading));
//!
//! // `Activate` has no row while `Loading`: ignored, state unchanged.
//! assert_eq!(machine.dispatch(&Event::Activate), None);
//! assert_eq!(*machine.state(), State::Loading);
//!
//! assert_eq!(machine.dispatch(&Event::Succeed), Some(State::Success));
//! assert_eq!(machine.dispatch(&Event::Reset), Some(State::Idle));
//! ```
//!
//! The initial state doubles as the reset target: [`Machine::reset`] returns
//! to it unconditionally, which is how controllers implement a forced
//! idle-reset path without threading a dedicated event through the table.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// A `(state, event)` pair that had no row in the transition table.
///
/// Produced by [`Machine::try_dispatch`]. Unknown pairs are not failures in
/// any operational sense (UI input is dropped silently), so this type exists
/// purely for observability at call sites that want to record ignored events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidTransition<S, E> {
    /// The state the machine was in when the event arrived.
    pub state: S,
    /// The event that matched no row.
    pub event: E,
}

impl<S: fmt::Debug, E: fmt::Debug> fmt::Display for InvalidTransition<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "event {:?} has no transition from state {:?}",
            self.event, self.state
        )
    }
}

impl<S: fmt::Debug, E: fmt::Debug> core::error::Error for InvalidTransition<S, E> {}

/// A pure `(from, event) -> to` mapping stored as an ordered list of rows.
///
/// Lookup scans rows in insertion order and takes the first match, so earlier
/// rows shadow later ones. Duplicated `(from, event)` pairs are caught by a
/// debug-only assertion when rows are added.
#[derive(Clone, Debug, Default)]
pub struct TransitionTable<S, E> {
    rows: Vec<(S, E, S)>,
}

impl<S, E> TransitionTable<S, E> {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<S, E> TransitionTable<S, E>
where
    S: PartialEq,
    E: PartialEq,
{
    /// Adds a row, builder style.
    #[must_use]
    pub fn row(mut self, from: S, event: E, to: S) -> Self {
        self.push(from, event, to);
        self
    }

    /// Adds a row in place.
    ///
    /// # Panics (debug only)
    ///
    /// Panics in debug builds if a row with the same `(from, event)` pair
    /// already exists; the earlier row would shadow the new one.
    pub fn push(&mut self, from: S, event: E, to: S) {
        debug_assert!(
            self.lookup(&from, &event).is_none(),
            "duplicate transition row for this (state, event) pair"
        );
        self.rows.push((from, event, to));
    }

    /// Returns the target state for `(state, event)`, if a row exists.
    #[must_use]
    pub fn lookup(&self, state: &S, event: &E) -> Option<&S> {
        self.rows
            .iter()
            .find(|(from, ev, _)| from == state && ev == event)
            .map(|(_, _, to)| to)
    }
}

/// A current state plus a [`TransitionTable`], with revision tracking.
///
/// Exactly one state is active at a time. Transitions happen only through
/// [`dispatch`](Self::dispatch) / [`try_dispatch`](Self::try_dispatch)
/// (table-driven) or [`reset`](Self::reset) (unconditional return to the
/// initial state). The revision counter bumps on every applied change, giving
/// observers a cheap "did anything happen?" marker without comparing states.
#[derive(Clone, Debug)]
pub struct Machine<S, E> {
    initial: S,
    state: S,
    table: TransitionTable<S, E>,
    revision: u64,
}

impl<S, E> Machine<S, E> {
    /// Creates a machine in `initial`, which is also the [`reset`](Self::reset) target.
    #[must_use]
    pub fn new(initial: S, table: TransitionTable<S, E>) -> Self
    where
        S: Clone,
    {
        Self {
            state: initial.clone(),
            initial,
            table,
            revision: 0,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Returns the current revision counter.
    ///
    /// Bumped by every applied transition and by [`reset`](Self::reset) when
    /// it actually changes the state. Ignored events leave it untouched.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<S, E> Machine<S, E>
where
    S: Clone + PartialEq,
    E: PartialEq,
{
    /// Applies `event`, returning the new state, or `None` if no row matched.
    ///
    /// Unknown `(state, event)` pairs are no-ops; the state and revision are
    /// left unchanged.
    pub fn dispatch(&mut self, event: &E) -> Option<S> {
        let next = self.table.lookup(&self.state, event)?.clone();
        self.state = next.clone();
        self.bump_revision();
        Some(next)
    }

    /// Applies `event`, surfacing ignored pairs as [`InvalidTransition`].
    ///
    /// Behaves exactly like [`dispatch`](Self::dispatch) on the happy path.
    /// The error exists for logging; it is safe (and expected) to discard.
    pub fn try_dispatch(&mut self, event: E) -> Result<S, InvalidTransition<S, E>> {
        match self.dispatch(&event) {
            Some(next) => Ok(next),
            None => Err(InvalidTransition {
                state: self.state.clone(),
                event,
            }),
        }
    }

    /// Returns unconditionally to the initial state.
    ///
    /// Bumps the revision only if the state actually changed. Callers that
    /// pair the machine with scheduled timers must cancel those separately;
    /// the machine knows nothing about time.
    pub fn reset(&mut self) {
        if self.state != self.initial {
            self.state = self.initial.clone();
            self.bump_revision();
        }
    }
}
