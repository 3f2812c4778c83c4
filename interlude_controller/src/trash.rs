// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The trash flow: select items, review, commit, auto-reset.
//!
//! Four states drive the flow. `Browsing` is the grid at rest; toggling the
//! first item enters `Selecting`, and deselecting the last returns to
//! `Browsing`. An explicit confirm, never mere non-emptiness, moves to
//! `Confirmed`, where the grid hides the staged items and shows them over
//! the bin. Commit permanently removes the staged keys from the backing
//! collection and enters `Removed`; 1200 ms later the flow resets itself to
//! `Browsing`, leaving the exit animation time to finish before state
//! snaps back.
//!
//! The backing collection lives inside the controller so the
//! no-dangling-keys invariant has one owner: any removal path, commit or
//! [`remove_item`](TrashFlow::remove_item), prunes the selection in the
//! same step.

use interlude_machine::{Machine, TransitionTable};
use interlude_motion::{MotionProps, Transition};
use interlude_selection::StagedSelection;

use alloc::vec::Vec;

use crate::controller::Controller;

/// Delay between commit and the automatic reset, in milliseconds.
pub const RESET_DELAY_MS: u64 = 1200;

/// The flow's states.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrashState {
    /// Grid at rest, nothing selected.
    Browsing,
    /// At least one item selected; the action toolbar shows.
    Selecting,
    /// Selection staged for removal; the bin shows.
    Confirmed,
    /// Commit done; staged items are in the bin until the auto-reset.
    Removed,
}

/// Events the flow's transition table understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrashEvent {
    /// The selection became non-empty.
    Select,
    /// The selection became empty again.
    Empty,
    /// The user confirmed the staged removal.
    Confirm,
    /// The user backed out of the review step.
    Back,
    /// The user committed the removal.
    Commit,
    /// Timer: reset to browsing.
    Reset,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TimerKind {
    Reset,
}

/// The staged-removal controller over a backing collection of keys.
#[derive(Clone, Debug)]
pub struct TrashFlow<K> {
    inner: Controller<TrashState, TrashEvent, TimerKind>,
    items: Vec<K>,
    selection: StagedSelection<K>,
    // Keys drained at commit, kept for rendering until the auto-reset.
    committed: Vec<K>,
}

impl<K> TrashFlow<K> {
    /// Creates a browsing flow over `items`.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = K>) -> Self {
        let table = TransitionTable::new()
            .row(TrashState::Browsing, TrashEvent::Select, TrashState::Selecting)
            .row(TrashState::Selecting, TrashEvent::Empty, TrashState::Browsing)
            .row(
                TrashState::Selecting,
                TrashEvent::Confirm,
                TrashState::Confirmed,
            )
            .row(TrashState::Confirmed, TrashEvent::Back, TrashState::Selecting)
            .row(TrashState::Confirmed, TrashEvent::Commit, TrashState::Removed)
            .row(TrashState::Removed, TrashEvent::Reset, TrashState::Browsing);
        Self {
            inner: Controller::new(Machine::new(TrashState::Browsing, table)),
            items: items.into_iter().collect(),
            selection: StagedSelection::new(),
            committed: Vec::new(),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &TrashState {
        self.inner.state()
    }

    /// Returns every item in the backing collection.
    #[must_use]
    pub fn items(&self) -> &[K] {
        &self.items
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Returns `true` once the selection has been explicitly confirmed.
    #[must_use]
    pub fn ready_to_commit(&self) -> bool {
        self.selection.ready_to_commit()
    }

    /// Tears the controller down. Idempotent.
    pub fn teardown(&mut self) {
        self.inner.teardown();
    }

    /// Animation target for the staged items over the bin.
    ///
    /// Hovering above the open bin while confirmed; dropped in, shrunken
    /// and blurred, once removed.
    #[must_use]
    pub fn staged_target(&self) -> MotionProps {
        match self.state() {
            TrashState::Removed => MotionProps::bin_dropped(),
            _ => MotionProps::bin_hover(),
        }
    }

    /// Transition profile for the staged items.
    ///
    /// The hover settle is delayed so the shared-element flight from the
    /// grid lands first; the drop itself is a quick no-bounce spring.
    #[must_use]
    pub fn staged_transition(&self) -> Transition {
        match self.state() {
            TrashState::Removed => Transition::SMOOTH,
            _ => Transition::TOSS.after(130),
        }
    }

    /// Alternating fan-out rotation (degrees) for the staged pile.
    ///
    /// Matches the reference stacking: even indices lean one way, odd the
    /// other, outer items leaning further.
    #[must_use]
    pub fn staged_rotation(index: usize, count: usize) -> f64 {
        let lean = 4.0 * ((count.saturating_sub(index) + 1) as f64);
        if index % 2 == 0 { lean } else { -lean }
    }
}

impl<K> TrashFlow<K>
where
    K: Clone + PartialEq,
{
    /// Returns `true` if `key` is currently selected.
    #[must_use]
    pub fn is_selected(&self, key: &K) -> bool {
        self.selection.contains(key)
    }

    /// The items the grid should show in the current state.
    ///
    /// While the selection is staged (or just removed), staged keys are
    /// excluded; otherwise the full collection shows.
    #[must_use]
    pub fn visible(&self) -> Vec<&K> {
        match self.state() {
            TrashState::Confirmed => self
                .items
                .iter()
                .filter(|key| !self.selection.contains(key))
                .collect(),
            _ => self.items.iter().collect(),
        }
    }

    /// The staged keys to render over the bin.
    #[must_use]
    pub fn staged(&self) -> &[K] {
        match self.state() {
            TrashState::Removed => &self.committed,
            _ => self.selection.items(),
        }
    }

    /// Toggles `key` in the selection. Ignored while confirmed or removed.
    ///
    /// Returns `true` if the toggle was applied. Selecting the first key
    /// enters `Selecting`; deselecting the last returns to `Browsing`.
    pub fn toggle(&mut self, key: K) -> bool {
        if !matches!(self.state(), TrashState::Browsing | TrashState::Selecting) {
            return false;
        }
        if !self.items.contains(&key) {
            return false;
        }
        self.selection.toggle(key);
        if self.selection.is_empty() {
            self.inner.dispatch(&TrashEvent::Empty);
        } else {
            self.inner.dispatch(&TrashEvent::Select);
        }
        true
    }

    /// Confirms the selection for removal. Returns `true` if accepted.
    pub fn confirm(&mut self) -> bool {
        if self.inner.dispatch(&TrashEvent::Confirm).is_none() {
            return false;
        }
        let confirmed = self.selection.confirm();
        debug_assert!(confirmed, "selecting state implies a non-empty selection");
        true
    }

    /// Backs out of the review step, keeping the selection.
    pub fn back(&mut self) -> bool {
        let applied = self.inner.dispatch(&TrashEvent::Back).is_some();
        if applied {
            self.selection.revoke();
        }
        applied
    }

    /// Commits the staged removal. Returns `true` if accepted.
    ///
    /// The staged keys leave the backing collection permanently, and the
    /// auto-reset timer starts: 1200 ms later the flow returns to browsing.
    pub fn commit(&mut self, now: u64) -> bool {
        // The selection's stage is the source of truth; the state alone is
        // not enough (an out-of-band removal can drain a confirmed
        // selection before the host reacts).
        if !self.selection.ready_to_commit() {
            return false;
        }
        if self.inner.dispatch(&TrashEvent::Commit).is_none() {
            return false;
        }
        self.committed = self.selection.take_committed();
        self.items.retain(|key| !self.committed.contains(key));
        self.inner
            .schedule(TimerKind::Reset, RESET_DELAY_MS, TrashEvent::Reset, now);
        true
    }

    /// Removes `key` from the backing collection out-of-band.
    ///
    /// For removals that do not go through the flow (another view deleted
    /// the item). The selection is pruned in the same step; if that empties
    /// it while selecting, the flow returns to browsing.
    pub fn remove_item(&mut self, key: &K) -> bool {
        let Some(idx) = self.items.iter().position(|k| k == key) else {
            return false;
        };
        self.items.remove(idx);
        self.selection.remove(key);
        if self.selection.is_empty() {
            // Nothing left to review or remove. From the review step this
            // unwinds through both rows; elsewhere the extra dispatch is a
            // table no-op.
            self.inner.dispatch(&TrashEvent::Back);
            self.inner.dispatch(&TrashEvent::Empty);
        }
        true
    }

    /// Pumps due timers. Returns `true` if the state changed.
    ///
    /// The auto-reset clears the rendered bin pile along with the state.
    pub fn tick(&mut self, now: u64) -> bool {
        let applied = self.inner.tick(now);
        if applied.contains(&TrashState::Browsing) {
            self.committed.clear();
            self.selection.clear();
        }
        !applied.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn flow() -> TrashFlow<&'static str> {
        TrashFlow::new(["japan", "jungle", "new-york", "desert"])
    }

    #[test]
    fn toggling_moves_between_browsing_and_selecting() {
        let mut flow = flow();
        assert_eq!(*flow.state(), TrashState::Browsing);

        assert!(flow.toggle("jungle"));
        assert_eq!(*flow.state(), TrashState::Selecting);

        assert!(flow.toggle("jungle"));
        assert_eq!(*flow.state(), TrashState::Browsing);
        assert_eq!(flow.selected_count(), 0);
    }

    #[test]
    fn unknown_keys_are_refused() {
        let mut flow = flow();
        assert!(!flow.toggle("atlantis"));
        assert_eq!(*flow.state(), TrashState::Browsing);
    }

    #[test]
    fn end_to_end_reference_flow() {
        let mut flow = flow();

        flow.toggle("jungle");
        flow.toggle("desert");
        assert_eq!(flow.selected_count(), 2);
        assert!(!flow.ready_to_commit());

        assert!(flow.confirm());
        assert!(flow.ready_to_commit());
        assert_eq!(*flow.state(), TrashState::Confirmed);
        assert_eq!(flow.visible(), vec![&"japan", &"new-york"]);
        assert_eq!(flow.staged(), ["jungle", "desert"]);

        assert!(flow.commit(0));
        assert_eq!(*flow.state(), TrashState::Removed);
        assert_eq!(flow.items(), ["japan", "new-york"]);
        // The pile stays renderable until the reset.
        assert_eq!(flow.staged(), ["jungle", "desert"]);

        assert!(!flow.tick(1199));
        assert!(flow.tick(1200));
        assert_eq!(*flow.state(), TrashState::Browsing);
        assert_eq!(flow.selected_count(), 0);
        assert!(flow.staged().is_empty());
        assert_eq!(flow.items(), ["japan", "new-york"]);
    }

    #[test]
    fn back_returns_to_selecting_with_selection_intact() {
        let mut flow = flow();
        flow.toggle("japan");
        flow.confirm();

        assert!(flow.back());
        assert_eq!(*flow.state(), TrashState::Selecting);
        assert!(!flow.ready_to_commit());
        assert_eq!(flow.selected_count(), 1);
    }

    #[test]
    fn toggling_is_ignored_while_confirmed() {
        let mut flow = flow();
        flow.toggle("japan");
        flow.confirm();

        assert!(!flow.toggle("jungle"));
        assert_eq!(flow.selected_count(), 1);
    }

    #[test]
    fn confirm_and_commit_are_refused_out_of_order() {
        let mut flow = flow();
        // Nothing selected: cannot confirm from browsing.
        assert!(!flow.confirm());
        // Cannot commit without a confirmation.
        assert!(!flow.commit(0));

        flow.toggle("japan");
        // Cannot commit from selecting either.
        assert!(!flow.commit(0));
    }

    #[test]
    fn out_of_band_removal_of_a_confirmed_selection_unwinds_to_browsing() {
        let mut flow = flow();
        flow.toggle("japan");
        flow.confirm();
        assert_eq!(*flow.state(), TrashState::Confirmed);

        // Another view deletes the only staged item while we review.
        assert!(flow.remove_item(&"japan"));
        assert_eq!(*flow.state(), TrashState::Browsing);
        assert!(!flow.ready_to_commit());

        // A commit of nothing must be refused, and no reset timer started.
        assert!(!flow.commit(0));
        assert_eq!(*flow.state(), TrashState::Browsing);
        assert!(!flow.tick(1200));
        assert_eq!(flow.items(), ["jungle", "new-york", "desert"]);
    }

    #[test]
    fn confirmed_selection_survives_removal_of_a_non_staged_item() {
        let mut flow = flow();
        flow.toggle("japan");
        flow.confirm();

        assert!(flow.remove_item(&"desert"));
        assert_eq!(*flow.state(), TrashState::Confirmed);
        assert!(flow.ready_to_commit());
        assert!(flow.commit(0));
        assert_eq!(flow.items(), ["jungle", "new-york"]);
    }

    #[test]
    fn out_of_band_removal_prunes_the_selection() {
        let mut flow = flow();
        flow.toggle("japan");

        assert!(flow.remove_item(&"japan"));
        assert_eq!(flow.selected_count(), 0);
        assert_eq!(*flow.state(), TrashState::Browsing);
        assert_eq!(flow.items().len(), 3);

        assert!(!flow.remove_item(&"japan"));
    }

    #[test]
    fn staged_pile_targets_follow_the_state() {
        let mut flow = flow();
        flow.toggle("japan");
        flow.confirm();
        assert_eq!(flow.staged_target(), MotionProps::bin_hover());
        assert_eq!(flow.staged_transition().delay_ms, 130);

        flow.commit(0);
        assert_eq!(flow.staged_target(), MotionProps::bin_dropped());
        assert_eq!(flow.staged_transition(), Transition::SMOOTH);
    }

    #[test]
    fn staged_rotation_alternates_and_fans_out() {
        assert_eq!(TrashFlow::<u32>::staged_rotation(0, 2), 12.0);
        assert_eq!(TrashFlow::<u32>::staged_rotation(1, 2), -8.0);
        // Outer items lean further than inner ones.
        assert!(
            TrashFlow::<u32>::staged_rotation(0, 4).abs()
                > TrashFlow::<u32>::staged_rotation(3, 4).abs()
        );
        // Out-of-range indices saturate instead of underflowing.
        assert_eq!(TrashFlow::<u32>::staged_rotation(5, 2), -4.0);
        assert_eq!(TrashFlow::<u32>::staged_rotation(4, 2), 4.0);
    }
}
