// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared-element correlation: pair geometries for identity-keyed transitions.
//!
//! A shared-element transition treats an element rendered at two different
//! locations (or times) as the same visual entity. The engine needs to know,
//! for each identity key, the geometry it *left* and the geometry it
//! *arrived at* within one update; [`SharedLayout`] is that correlation
//! table. Hosts record placements every update and commit the frame; keys
//! present in both the previous and current frame yield a `(from, to)` pair,
//! keys present in only one are plain enters or exits.
//!
//! ## Minimal example
//!
//! ```rust
//! use interlude_motion::shared::SharedLayout;
//! use kurbo::Rect;
//!
//! let mut layout = SharedLayout::new();
//!
//! // Frame 1: the thumbnail lives in the grid.
//! layout.record("image-japan", Rect::new(0.0, 0.0, 100.0, 100.0));
//! layout.commit();
//!
//! // Frame 2: the same key reappears over the bin.
//! layout.record("image-japan", Rect::new(210.0, 340.0, 275.0, 405.0));
//!
//! let (from, to) = layout.pair(&"image-japan").unwrap();
//! assert_eq!(from, Rect::new(0.0, 0.0, 100.0, 100.0));
//! assert_eq!(to, Rect::new(210.0, 340.0, 275.0, 405.0));
//! ```

use alloc::vec::Vec;
use kurbo::Rect;

/// An identity-keyed geometry correlation table.
///
/// Keys are matched by equality; no `Hash`/`Ord` bounds, in keeping with the
/// rest of the workspace. Placement counts per frame are small (one per
/// shared element on screen).
#[derive(Clone, Debug, Default)]
pub struct SharedLayout<K> {
    prev: Vec<(K, Rect)>,
    curr: Vec<(K, Rect)>,
}

impl<K> SharedLayout<K> {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prev: Vec::new(),
            curr: Vec::new(),
        }
    }

    /// Ends the current update: current placements become the previous frame.
    pub fn commit(&mut self) {
        self.prev = core::mem::take(&mut self.curr);
    }

    /// Forgets both frames.
    pub fn clear(&mut self) {
        self.prev.clear();
        self.curr.clear();
    }
}

impl<K> SharedLayout<K>
where
    K: PartialEq,
{
    /// Records where `key` is placed in the current update.
    ///
    /// Recording the same key twice in one update replaces the earlier
    /// placement; an identity exists at one place at a time.
    pub fn record(&mut self, key: K, rect: Rect) {
        if let Some((_, existing)) = self.curr.iter_mut().find(|(k, _)| *k == key) {
            *existing = rect;
        } else {
            self.curr.push((key, rect));
        }
    }

    /// Returns the `(from, to)` geometry pair for `key`, if it moved.
    ///
    /// `None` when the key is missing from either frame, or when its
    /// geometry did not change (nothing to interpolate).
    #[must_use]
    pub fn pair(&self, key: &K) -> Option<(Rect, Rect)> {
        let from = self.lookup(&self.prev, key)?;
        let to = self.lookup(&self.curr, key)?;
        (from != to).then_some((from, to))
    }

    /// Returns every `(key, from, to)` correlation in the current update.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&K, Rect, Rect)> {
        self.curr
            .iter()
            .filter_map(|(key, to)| {
                let from = self.lookup(&self.prev, key)?;
                (from != *to).then_some((key, from, *to))
            })
            .collect()
    }

    /// Keys present this update that were absent last frame.
    #[must_use]
    pub fn enters(&self) -> Vec<&K> {
        self.curr
            .iter()
            .filter(|(key, _)| self.lookup(&self.prev, key).is_none())
            .map(|(key, _)| key)
            .collect()
    }

    /// Keys present last frame that are absent this update.
    #[must_use]
    pub fn exits(&self) -> Vec<&K> {
        self.prev
            .iter()
            .filter(|(key, _)| self.lookup(&self.curr, key).is_none())
            .map(|(key, _)| key)
            .collect()
    }

    fn lookup(&self, frame: &[(K, Rect)], key: &K) -> Option<Rect> {
        frame.iter().find(|(k, _)| k == key).map(|(_, rect)| *rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn rect(x: f64, y: f64) -> Rect {
        Rect::new(x, y, x + 100.0, y + 100.0)
    }

    #[test]
    fn moved_key_yields_a_pair() {
        let mut layout = SharedLayout::new();
        layout.record(1_u32, rect(0.0, 0.0));
        layout.commit();
        layout.record(1, rect(200.0, 300.0));

        assert_eq!(layout.pair(&1), Some((rect(0.0, 0.0), rect(200.0, 300.0))));
        assert_eq!(layout.pairs().len(), 1);
    }

    #[test]
    fn stationary_key_yields_nothing() {
        let mut layout = SharedLayout::new();
        layout.record(1_u32, rect(0.0, 0.0));
        layout.commit();
        layout.record(1, rect(0.0, 0.0));

        assert_eq!(layout.pair(&1), None);
        assert!(layout.pairs().is_empty());
    }

    #[test]
    fn unpaired_keys_are_enters_and_exits() {
        let mut layout = SharedLayout::new();
        layout.record("old", rect(0.0, 0.0));
        layout.commit();
        layout.record("new", rect(100.0, 0.0));

        assert_eq!(layout.enters(), vec![&"new"]);
        assert_eq!(layout.exits(), vec![&"old"]);
        assert_eq!(layout.pair(&"old"), None);
        assert_eq!(layout.pair(&"new"), None);
    }

    #[test]
    fn re_recording_replaces_the_placement() {
        let mut layout = SharedLayout::new();
        layout.record(1_u32, rect(0.0, 0.0));
        layout.commit();
        layout.record(1, rect(50.0, 0.0));
        layout.record(1, rect(75.0, 0.0));

        assert_eq!(layout.pair(&1), Some((rect(0.0, 0.0), rect(75.0, 0.0))));
    }

    #[test]
    fn commit_rolls_frames_forward() {
        let mut layout = SharedLayout::new();
        layout.record(1_u32, rect(0.0, 0.0));
        layout.commit();
        layout.record(1, rect(10.0, 0.0));
        layout.commit();
        layout.record(1, rect(20.0, 0.0));

        // The pair is against the most recently committed frame.
        assert_eq!(
            layout.pair(&1),
            Some((rect(10.0, 0.0), rect(20.0, 0.0)))
        );
    }
}
