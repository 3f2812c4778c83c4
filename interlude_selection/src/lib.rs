// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=interlude_selection --heading-base-level=0

//! Interlude Selection: staged selection bookkeeping for select-then-confirm flows.
//!
//! Destructive batch actions in UIs are two-step: the user toggles items into
//! a selection, then explicitly confirms before anything is committed
//! (select photos → review → trash them). [`StagedSelection`] tracks exactly
//! that bookkeeping:
//!
//! - A set of selected keys, stored in a small `Vec<K>` with uniqueness
//!   enforced by equality. No hashing or ordering constraints are imposed on
//!   `K`; insertion order carries no semantics.
//! - A **ready-to-commit** flag that becomes `true` only through an explicit
//!   [`confirm`](StagedSelection::confirm) call, never implied by the
//!   selection merely being non-empty.
//! - A monotonically increasing **revision** counter that bumps when the
//!   semantic contents change, for cheap change observation.
//!
//! The container does not know what the keys refer to. Callers own the
//! backing collection and are responsible for two things: calling
//! [`retain_present`](StagedSelection::retain_present) when items leave that
//! collection (the selection must never hold a dangling key), and draining
//! [`take_committed`](StagedSelection::take_committed) when the confirmed
//! action actually runs.
//!
//! ## Minimal example
//!
//! ```rust
//! use interlude_selection::StagedSelection;
//!
//! let items = ["japan", "jungle", "new-york", "desert"];
//! let mut sel = StagedSelection::new();
//!
//! sel.toggle("jungle");
//! sel.toggle("desert");
//! assert_eq!(sel.len(), 2);
//!
//! // Toggling again removes: double-toggle is a round trip.
//! sel.toggle("desert");
//! assert!(!sel.contains(&"desert"));
//! sel.toggle("desert");
//!
//! // Non-empty is not confirmed.
//! assert!(!sel.ready_to_commit());
//! assert!(sel.confirm());
//! assert!(sel.ready_to_commit());
//!
//! // Commit drains the staged keys; the caller removes them from `items`.
//! let staged = sel.take_committed();
//! assert_eq!(staged, vec!["jungle", "desert"]);
//! assert!(sel.is_empty());
//! assert!(!sel.ready_to_commit());
//! # let _ = items;
//! ```
//!
//! ## Invariants
//!
//! - Every key in the selection corresponds to an item the caller still has;
//!   [`retain_present`](StagedSelection::retain_present) is the pruning hook.
//! - `ready_to_commit` implies a non-empty selection. Confirming an empty
//!   selection is refused, and any mutation that empties the selection
//!   revokes the confirmation.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// A set of selected keys plus an explicit ready-to-commit stage.
///
/// Keys are stored in a `Vec<K>` and matched by equality, which keeps the
/// type easy to integrate with existing ID types without forcing them to be
/// `Ord` or `Hash`. See the [crate docs](crate) for the staging discipline.
#[derive(Clone, Debug, Default)]
pub struct StagedSelection<K> {
    items: Vec<K>,
    ready: bool,
    revision: u64,
}

impl<K> StagedSelection<K> {
    /// Creates an empty, unconfirmed selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            ready: false,
            revision: 0,
        }
    }

    /// Returns `true` if no keys are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns a slice of the selected keys.
    ///
    /// The order is stable within one instance but carries no semantics.
    #[must_use]
    pub fn items(&self) -> &[K] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.items.iter()
    }

    /// Returns `true` once [`confirm`](Self::confirm) has staged the selection.
    #[must_use]
    pub fn ready_to_commit(&self) -> bool {
        self.ready
    }

    /// Returns the current revision counter.
    ///
    /// Bumped only when a mutation changes the semantic contents: the
    /// selected keys or the ready flag. No-op calls leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes all keys and revokes any confirmation.
    pub fn clear(&mut self) {
        if self.items.is_empty() && !self.ready {
            return;
        }
        self.items.clear();
        self.ready = false;
        self.bump_revision();
    }

    /// Stages the current selection for commit.
    ///
    /// Returns `false` (and stays unconfirmed) if the selection is empty;
    /// the two-step flow has nothing to review. Confirming an already
    /// confirmed selection is a no-op returning `true`.
    pub fn confirm(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        if !self.ready {
            self.ready = true;
            self.bump_revision();
        }
        true
    }

    /// Withdraws the confirmation, keeping the selected keys.
    ///
    /// This is the "back" path of the review step.
    pub fn revoke(&mut self) {
        if self.ready {
            self.ready = false;
            self.bump_revision();
        }
    }

    /// Drains the staged keys, resetting to empty and unconfirmed.
    ///
    /// Returns an empty `Vec` if the selection was never confirmed; commit
    /// without confirmation is not a path the two-step flow has.
    #[must_use]
    pub fn take_committed(&mut self) -> Vec<K> {
        if !self.ready {
            return Vec::new();
        }
        self.ready = false;
        self.bump_revision();
        core::mem::take(&mut self.items)
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn revoke_if_empty(&mut self) {
        if self.items.is_empty() {
            self.ready = false;
        }
    }
}

impl<K> StagedSelection<K>
where
    K: PartialEq,
{
    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.items.iter().any(|k| k == key)
    }

    /// Toggles `key`: adds it if absent, removes it if present.
    ///
    /// An even number of toggles on the same key restores the prior
    /// membership. Removing the last key revokes any confirmation.
    pub fn toggle(&mut self, key: K) {
        match self.items.iter().position(|k| *k == key) {
            Some(idx) => {
                self.items.remove(idx);
                self.revoke_if_empty();
            }
            None => self.items.push(key),
        }
        self.bump_revision();
    }

    /// Removes `key` if present. Returns `true` if it was selected.
    ///
    /// This is the hook for items leaving the backing collection: the
    /// selection must never hold a key for an item that no longer exists.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.items.iter().position(|k| k == key) {
            Some(idx) => {
                self.items.remove(idx);
                self.revoke_if_empty();
                self.bump_revision();
                true
            }
            None => false,
        }
    }

    /// Drops every selected key that is not present in `universe`.
    ///
    /// Call this after the backing collection shrinks for any reason other
    /// than a commit (which already drains the selection). Revokes the
    /// confirmation if pruning empties the selection.
    pub fn retain_present(&mut self, universe: &[K]) {
        let before = self.items.len();
        self.items.retain(|k| universe.contains(k));
        if self.items.len() != before {
            self.revoke_if_empty();
            self.bump_revision();
        }
    }
}

#[cfg(feature = "hashbrown")]
impl<K> StagedSelection<K>
where
    K: core::hash::Hash + Eq,
{
    /// Hash-accelerated [`retain_present`](Self::retain_present).
    ///
    /// Builds a hashed index of `universe` and prunes in linear time, for
    /// callers whose backing collections are large enough that the quadratic
    /// scan matters. Semantics are identical to `retain_present`.
    pub fn retain_present_hashed(&mut self, universe: &[K]) {
        use hashbrown::HashSet;

        let index: HashSet<&K> = universe.iter().collect();
        let before = self.items.len();
        self.items.retain(|k| index.contains(k));
        if self.items.len() != before {
            self.revoke_if_empty();
            self.bump_revision();
        }
    }
}
