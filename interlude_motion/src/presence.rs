// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presence bookkeeping: keep exiting items mounted until their animation settles.
//!
//! Declarative rendering removes an item from the tree the instant it leaves
//! the data set, before any exit animation can play. The standard fix is a
//! presence layer that remembers recently removed keys and keeps them
//! mounted until the animation engine reports each one settled.
//! [`Presence`] is that layer, with no opinion about what "mounted" means:
//! the host renders [`mounted`](Presence::mounted) instead of its raw data.
//!
//! ## Minimal example
//!
//! ```rust
//! use interlude_motion::presence::Presence;
//!
//! let mut presence = Presence::new();
//! presence.sync(&["a", "b", "c"]);
//!
//! // "b" leaves the data set but stays mounted as exiting.
//! presence.sync(&["a", "c"]);
//! assert_eq!(presence.exiting(), ["b"]);
//! assert_eq!(presence.mounted(), ["a", "c", "b"]);
//!
//! // The engine reports the exit animation finished.
//! presence.settle(&"b");
//! assert_eq!(presence.mounted(), ["a", "c"]);
//! ```

use alloc::vec::Vec;

/// Tracks live and exiting keys across data-set updates.
///
/// Keys are matched by equality. Exiting keys are kept in removal order;
/// a key that re-enters the live set while still exiting is resurrected
/// (removed from the exiting list) rather than mounted twice.
#[derive(Clone, Debug, Default)]
pub struct Presence<K> {
    live: Vec<K>,
    exiting: Vec<K>,
}

impl<K> Presence<K> {
    /// Creates an empty presence layer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            live: Vec::new(),
            exiting: Vec::new(),
        }
    }

    /// Keys currently in the data set.
    #[must_use]
    pub fn live(&self) -> &[K] {
        &self.live
    }

    /// Keys removed from the data set whose exit has not settled yet.
    #[must_use]
    pub fn exiting(&self) -> &[K] {
        &self.exiting
    }

    /// Returns `true` if nothing is live and nothing is exiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty() && self.exiting.is_empty()
    }
}

impl<K> Presence<K>
where
    K: Clone + PartialEq,
{
    /// Replaces the live set, moving vanished keys to the exiting list.
    ///
    /// Keys in `live` that were exiting are resurrected. Keys that vanish
    /// while already exiting keep their place in the exit order.
    pub fn sync(&mut self, live: &[K]) {
        for key in &self.live {
            if !live.contains(key) && !self.exiting.contains(key) {
                self.exiting.push(key.clone());
            }
        }
        self.exiting.retain(|key| !live.contains(key));
        self.live = live.to_vec();
    }

    /// Marks one exiting key as settled, unmounting it. Idempotent.
    pub fn settle(&mut self, key: &K) {
        self.exiting.retain(|k| k != key);
    }

    /// Unmounts every exiting key at once.
    ///
    /// For hosts that settle a whole group when its shared transition ends.
    pub fn settle_all(&mut self) {
        self.exiting.clear();
    }

    /// Everything the host should render: live keys, then exiting keys.
    #[must_use]
    pub fn mounted(&self) -> Vec<K> {
        let mut keys = self.live.clone();
        keys.extend(self.exiting.iter().cloned());
        keys
    }
}
