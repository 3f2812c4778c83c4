// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A card list whose active item expands into a centered modal.
//!
//! At most one item is active at a time. Selecting a card makes it the
//! active item; its geometry flies from the list slot to the modal via the
//! shared-layout table, the overlay fades in behind it, and the detail copy
//! fades in on its own quick tween. Escape or a pointer-down outside the
//! modal closes it; a press on a different card in the same event turn is
//! handled as close-then-open by the host, exactly like the popover and
//! drawer (dismissal first, within the broadcast, then the new open).
//!
//! The controller owns the [`SharedLayout`] table because the card keys are
//! its own: the host records every card's list slot each frame, records the
//! modal placement under the active key, and asks
//! [`flight`](CardModal::flight) for the pair to interpolate.

use interlude_dismiss::{DismissWatcher, InputEvent};
use interlude_motion::shared::SharedLayout;
use interlude_motion::{MotionProps, Transition};
use kurbo::Rect;

/// One expandable-card list with at most one active modal.
#[derive(Clone, Debug)]
pub struct CardModal<K> {
    active: Option<K>,
    layout: SharedLayout<K>,
    watcher: Option<DismissWatcher>,
}

impl<K> Default for CardModal<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> CardModal<K> {
    /// Creates a list with nothing active.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: None,
            layout: SharedLayout::new(),
            watcher: None,
        }
    }

    /// Returns the active item's key, if a modal is up.
    #[must_use]
    pub fn active(&self) -> Option<&K> {
        self.active.as_ref()
    }

    /// Returns `true` while a modal is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Closes the modal. Returns `false` if nothing was active.
    pub fn close(&mut self) -> bool {
        self.watcher = None;
        self.active.take().is_some()
    }

    /// Ends the layout frame: current placements become the previous ones.
    pub fn commit_frame(&mut self) {
        self.layout.commit();
    }

    /// Enter origin and exit target for the overlay behind the modal.
    #[must_use]
    pub fn overlay_hidden(&self) -> MotionProps {
        MotionProps {
            opacity: 0.0,
            ..MotionProps::REST
        }
    }

    /// Transition profile for the detail copy inside the modal.
    ///
    /// The copy is not a shared element; it fades in quickly once the card
    /// has landed.
    #[must_use]
    pub fn detail_transition(&self) -> Transition {
        Transition::tween(100)
    }
}

impl<K> CardModal<K>
where
    K: PartialEq,
{
    /// Makes `key` the active item, with the modal occupying `region`.
    ///
    /// Replaces any previously active item. Returns `false` when `key` is
    /// already active (the modal merely moved; the region still updates).
    pub fn open(&mut self, key: K, region: Rect) -> bool {
        match &mut self.watcher {
            Some(watcher) => watcher.set_region(region),
            None => self.watcher = Some(DismissWatcher::new(region)),
        }
        let replaced = self.active.as_ref() != Some(&key);
        self.active = Some(key);
        replaced
    }

    /// The modal moved or resized while open.
    pub fn update_region(&mut self, region: Rect) {
        if let Some(watcher) = &mut self.watcher {
            watcher.set_region(region);
        }
    }

    /// Feeds one host input event through dismissal.
    ///
    /// Escape and presses outside the modal's region close it; everything
    /// else, and everything while closed, is ignored.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if self
            .watcher
            .as_ref()
            .is_some_and(|watcher| watcher.should_dismiss(event))
        {
            return self.close();
        }
        false
    }

    /// Records where `key`'s card is placed in the current frame.
    ///
    /// List slots and the modal placement go through the same call; the
    /// active key simply gets recorded at the modal's geometry.
    pub fn record_card(&mut self, key: K, rect: Rect) {
        self.layout.record(key, rect);
    }

    /// The `(from, to)` geometry pair for `key`, if it moved this frame.
    ///
    /// `Some` on open (list slot to modal) and on close (modal back to list
    /// slot); `None` for cards that stayed put.
    #[must_use]
    pub fn flight(&self, key: &K) -> Option<(Rect, Rect)> {
        self.layout.pair(key)
    }
}
