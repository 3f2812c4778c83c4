// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=interlude_timing --heading-base-level=0

//! Interlude Timing: a host-agnostic superseding timer queue for UI controllers.
//!
//! UI controllers defer work ("show the success copy in 1750 ms", "reset the
//! whole widget in 3500 ms"), and those deferrals are constantly superseded by
//! fresh interaction. This crate provides [`TimerQueue`], a small deferred-
//! payload queue with the superseding discipline built in:
//!
//! - Every pending timer has a **kind**. Scheduling under an existing kind
//!   atomically cancels the previous pending timer of that kind first, so a
//!   stale delayed transition can never fire after a newer interaction has
//!   replaced it.
//! - The queue never talks to an OS timer. The host injects a monotonic
//!   `now` (milliseconds from an arbitrary origin) into
//!   [`schedule`](TimerQueue::schedule) and [`drain_due`](TimerQueue::drain_due);
//!   single-threaded event loops, test harnesses, and frame-driven runtimes
//!   all drive it the same way.
//! - [`shutdown`](TimerQueue::shutdown) flips a liveness flag. The underlying
//!   host timer primitive often cannot be synchronously cancelled against a
//!   last-moment firing, so `drain_due` re-checks liveness and yields nothing
//!   once the queue is shut down. A payload can never observe a torn-down
//!   owner.
//!
//! Payloads are plain data (typically the owning controller's event type),
//! not closures: `drain_due` hands them back and the host decides what they
//! mean. This keeps control flow visible at the call site and keeps the queue
//! trivially testable.
//!
//! ## Minimal example
//!
//! ```rust
//! use interlude_timing::TimerQueue;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq)]
//! enum Kind { Reset }
//!
//! let mut queue = TimerQueue::new();
//!
//! // Schedule a reset for t=100, then supersede it with one for t=50.
//! queue.schedule(Kind::Reset, 100, "first", 0);
//! queue.schedule(Kind::Reset, 50, "second", 0);
//!
//! // Only the superseding timer exists; it fires at t=50.
//! assert!(queue.drain_due(49).next().is_none());
//! let fired: Vec<_> = queue.drain_due(50).collect();
//! assert_eq!(fired, vec![(Kind::Reset, "second")]);
//!
//! // Nothing is left, and the earlier payload is gone for good.
//! assert!(queue.is_empty());
//! ```
//!
//! Due timers are yielded in deadline order, with schedule order breaking
//! ties, so a controller that schedules its T1 and T2 in one turn observes
//! them fire in the order it intended even when the host ticks late and both
//! are overdue.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use smallvec::SmallVec;

/// Identifies one scheduled timer, for targeted cancellation.
///
/// A handle is bound to the exact `schedule` call that produced it. If the
/// timer has since fired, been cancelled, or been superseded by a newer timer
/// of the same kind, the handle is stale and
/// [`cancel_handle`](TimerQueue::cancel_handle) does nothing: a stale handle
/// can never cancel a newer timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimerHandle {
    seq: u64,
}

impl TimerHandle {
    // seq 0 is never assigned to an entry.
    const INERT: Self = Self { seq: 0 };
}

#[derive(Clone, Debug)]
struct Entry<K, A> {
    kind: K,
    payload: A,
    deadline: u64,
    seq: u64,
}

/// A deferred-payload queue with per-kind superseding and a liveness flag.
///
/// See the [crate docs](crate) for the discipline this type enforces. All
/// operations are `O(n)` in the number of pending timers, which is tiny for
/// the intended use (a controller rarely has more than two or three pending
/// kinds); entries live inline in a [`SmallVec`].
#[derive(Clone, Debug)]
pub struct TimerQueue<K, A> {
    entries: SmallVec<[Entry<K, A>; 4]>,
    next_seq: u64,
    live: bool,
}

impl<K, A> Default for TimerQueue<K, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, A> TimerQueue<K, A> {
    /// Creates an empty, live queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_seq: 1,
            live: true,
        }
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `false` once [`shutdown`](Self::shutdown) has been called.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Returns the earliest pending deadline, if any.
    ///
    /// Hosts that sleep between events can use this to decide when the next
    /// [`drain_due`](Self::drain_due) call is worthwhile.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Cancels every pending timer without affecting liveness.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Cancels every pending timer and marks the queue dead.
    ///
    /// Idempotent. After shutdown, [`schedule`](Self::schedule) is ignored
    /// and [`drain_due`](Self::drain_due) yields nothing, even for entries
    /// that were already due when shutdown happened.
    pub fn shutdown(&mut self) {
        self.entries.clear();
        self.live = false;
    }
}

impl<K, A> TimerQueue<K, A>
where
    K: PartialEq,
{
    /// Schedules `payload` to come due `delay_ms` after `now`.
    ///
    /// Any pending timer of the same `kind` is cancelled first; the two can
    /// never coexist. Returns a handle for targeted cancellation. On a
    /// shut-down queue this is a no-op and the returned handle is inert.
    pub fn schedule(&mut self, kind: K, delay_ms: u64, payload: A, now: u64) -> TimerHandle {
        if !self.live {
            return TimerHandle::INERT;
        }

        self.cancel(&kind);

        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            kind,
            payload,
            deadline: now.saturating_add(delay_ms),
            seq,
        });
        TimerHandle { seq }
    }

    /// Cancels the pending timer of `kind`, if any. Returns `true` if one existed.
    pub fn cancel(&mut self, kind: &K) -> bool {
        match self.entries.iter().position(|e| &e.kind == kind) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Cancels the timer identified by `handle`, if it is still pending.
    ///
    /// Stale handles (fired, cancelled, or superseded timers) are ignored.
    pub fn cancel_handle(&mut self, handle: TimerHandle) -> bool {
        match self.entries.iter().position(|e| e.seq == handle.seq) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if a timer of `kind` is pending.
    #[must_use]
    pub fn is_pending(&self, kind: &K) -> bool {
        self.entries.iter().any(|e| &e.kind == kind)
    }

    /// Removes and returns every timer due at `now`, in deadline order.
    ///
    /// A timer is due when `now >= deadline`. Ties are broken by schedule
    /// order. On a shut-down queue this yields nothing; the liveness check
    /// happens here, at the last moment before payloads escape, so that a
    /// shutdown between an entry coming due and the host's next tick still
    /// suppresses it.
    pub fn drain_due(&mut self, now: u64) -> impl Iterator<Item = (K, A)> + use<K, A> {
        let mut due: Vec<Entry<K, A>> = Vec::new();
        if self.live {
            let mut idx = 0;
            while idx < self.entries.len() {
                if self.entries[idx].deadline <= now {
                    due.push(self.entries.remove(idx));
                } else {
                    idx += 1;
                }
            }
            due.sort_by_key(|e| (e.deadline, e.seq));
        }
        due.into_iter().map(|e| (e.kind, e.payload))
    }
}
