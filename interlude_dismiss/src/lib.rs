// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=interlude_dismiss --heading-base-level=0

//! Interlude Dismiss: outside-interaction dismissal watching for UI controllers.
//!
//! Popovers, drawers, and menus close when the user interacts *somewhere
//! else*: a pointer or touch going down outside the widget's region, or the
//! Escape key. The usual implementation (a document-level listener per open
//! widget) generalizes to a process-wide input-event stream that each
//! controller filters with its own region predicate, scoped to its own
//! lifetime. This crate provides that abstraction, with no real UI surface
//! required:
//!
//! - [`InputEvent`]: the raw interaction beginnings a host forwards:
//!   pointer down, touch start, key down (with a [`Modifiers`] set).
//! - [`DismissWatcher`]: one region ([`kurbo::Rect`]) plus the dismissal
//!   predicate: outside pointer/touch dismisses, Escape dismisses, anything
//!   inside the region never does.
//! - [`InputHub`]: the injectable stream. Controllers subscribe a token and
//!   a region; [`InputHub::broadcast`] returns the tokens whose watchers
//!   fired, synchronously and in registration order.
//!
//! The synchronous, in-order broadcast is load-bearing: when one click both
//! closes an open popover and triggers a different widget's open, the host
//! processes every dismissal *within the broadcast call*, before it acts on
//! the click's other meaning. Two controllers can therefore never both
//! believe they are open across an event turn. There is no global lock; the
//! only filtering is region containment.
//!
//! ## Minimal example
//!
//! ```rust
//! use interlude_dismiss::{DismissWatcher, InputEvent, InputHub};
//! use kurbo::{Point, Rect};
//!
//! let region = Rect::new(100.0, 100.0, 300.0, 200.0);
//! let watcher = DismissWatcher::new(region);
//!
//! // Inside the region: never dismisses.
//! assert!(!watcher.should_dismiss(&InputEvent::pointer_down(Point::new(150.0, 150.0))));
//! // Outside: always does.
//! assert!(watcher.should_dismiss(&InputEvent::pointer_down(Point::new(10.0, 10.0))));
//! // Escape dismisses regardless of position.
//! assert!(watcher.should_dismiss(&InputEvent::escape()));
//!
//! // The hub scopes watchers to subscriptions.
//! let mut hub = InputHub::new();
//! hub.subscribe("popover", region);
//! let fired = hub.broadcast(&InputEvent::pointer_down(Point::new(0.0, 0.0)));
//! assert_eq!(fired, vec!["popover"]);
//! hub.unsubscribe(&"popover");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use kurbo::{Point, Rect};

bitflags::bitflags! {
    /// Keyboard modifier keys held during a [`InputEvent::KeyDown`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        /// The Control key.
        const CTRL = 1 << 0;
        /// The platform command/meta key.
        const META = 1 << 1;
        /// The Shift key.
        const SHIFT = 1 << 2;
        /// The Alt/Option key.
        const ALT = 1 << 3;
    }
}

impl Modifiers {
    /// Returns `true` if either Control or Meta is held.
    ///
    /// The cross-platform "command" chord (Ctrl+Enter on one OS, ⌘+Enter on
    /// another) checks this rather than a single flag.
    #[must_use]
    pub fn command(self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }
}

/// A key identity, reduced to what dismissal and submit chords care about.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// The Escape key.
    Escape,
    /// The Enter/Return key.
    Enter,
    /// Any other key.
    Other,
}

/// The beginning of a user interaction, as forwarded by the host.
///
/// Only interaction *starts* matter for dismissal (the reference behavior
/// listens for `mousedown`/`touchstart`, not clicks), so there is no up or
/// move variant here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A pointer (mouse, pen) went down at `pos`.
    PointerDown {
        /// Position in the host's coordinate space.
        pos: Point,
    },
    /// A touch began at `pos`.
    TouchStart {
        /// Position in the host's coordinate space.
        pos: Point,
    },
    /// A key went down.
    KeyDown {
        /// Which key.
        key: Key,
        /// Modifier keys held.
        mods: Modifiers,
    },
}

impl InputEvent {
    /// A pointer-down at `pos`.
    #[must_use]
    pub fn pointer_down(pos: Point) -> Self {
        Self::PointerDown { pos }
    }

    /// A touch-start at `pos`.
    #[must_use]
    pub fn touch_start(pos: Point) -> Self {
        Self::TouchStart { pos }
    }

    /// A bare Escape key-down.
    #[must_use]
    pub fn escape() -> Self {
        Self::KeyDown {
            key: Key::Escape,
            mods: Modifiers::empty(),
        }
    }

    /// A key-down with modifiers.
    #[must_use]
    pub fn key(key: Key, mods: Modifiers) -> Self {
        Self::KeyDown { key, mods }
    }

    /// The position carried by pointer/touch events, if any.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { pos } | Self::TouchStart { pos } => Some(*pos),
            Self::KeyDown { .. } => None,
        }
    }
}

/// One watched region plus the dismissal predicate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DismissWatcher {
    region: Rect,
}

impl DismissWatcher {
    /// Creates a watcher over `region`.
    #[must_use]
    pub fn new(region: Rect) -> Self {
        Self { region }
    }

    /// Returns the watched region.
    #[must_use]
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Replaces the watched region (e.g. after the widget moved or resized).
    pub fn set_region(&mut self, region: Rect) {
        self.region = region;
    }

    /// Returns `true` if `event` should dismiss the watched widget.
    ///
    /// - Pointer/touch starts inside the region never dismiss.
    /// - Pointer/touch starts outside always do.
    /// - Escape dismisses regardless of position; other keys never do.
    #[must_use]
    pub fn should_dismiss(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { pos } | InputEvent::TouchStart { pos } => {
                !self.region.contains(*pos)
            }
            InputEvent::KeyDown { key, .. } => *key == Key::Escape,
        }
    }
}

/// The injectable process-wide input-event stream.
///
/// Each subscription pairs a caller-chosen token with a [`DismissWatcher`].
/// Tokens only need equality; controllers typically use a small ID type.
/// Subscriptions are scoped to the owning controller's lifetime: register on
/// activation, [`unsubscribe`](Self::unsubscribe) on deactivation or
/// teardown, whichever comes first (unsubscribing twice is a harmless no-op).
#[derive(Clone, Debug, Default)]
pub struct InputHub<T> {
    watchers: Vec<(T, DismissWatcher)>,
}

impl<T> InputHub<T> {
    /// Creates a hub with no subscriptions.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            watchers: Vec::new(),
        }
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.watchers.len()
    }

    /// Returns `true` if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.watchers.is_empty()
    }
}

impl<T> InputHub<T>
where
    T: PartialEq,
{
    /// Subscribes `token` with a watcher over `region`.
    ///
    /// Re-subscribing an existing token replaces its region in place,
    /// keeping its position in the broadcast order.
    pub fn subscribe(&mut self, token: T, region: Rect) {
        if let Some((_, watcher)) = self.watchers.iter_mut().find(|(t, _)| *t == token) {
            watcher.set_region(region);
        } else {
            self.watchers.push((token, DismissWatcher::new(region)));
        }
    }

    /// Updates the region for `token`. Returns `false` if it is not subscribed.
    pub fn update_region(&mut self, token: &T, region: Rect) -> bool {
        match self.watchers.iter_mut().find(|(t, _)| t == token) {
            Some((_, watcher)) => {
                watcher.set_region(region);
                true
            }
            None => false,
        }
    }

    /// Removes the subscription for `token`, if present. Idempotent.
    pub fn unsubscribe(&mut self, token: &T) -> bool {
        match self.watchers.iter().position(|(t, _)| t == token) {
            Some(idx) => {
                self.watchers.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `token` is subscribed.
    #[must_use]
    pub fn is_subscribed(&self, token: &T) -> bool {
        self.watchers.iter().any(|(t, _)| t == token)
    }

    /// Feeds `event` to every watcher, returning the tokens that fired.
    ///
    /// Tokens are returned in registration order. The host must process every
    /// returned dismissal before acting on any other meaning of the same
    /// event (such as opening a different widget); that sequencing, all
    /// within one synchronous event turn, is what keeps two controllers from
    /// both believing they are open.
    #[must_use]
    pub fn broadcast(&self, event: &InputEvent) -> Vec<T>
    where
        T: Clone,
    {
        self.watchers
            .iter()
            .filter(|(_, watcher)| watcher.should_dismiss(event))
            .map(|(token, _)| token.clone())
            .collect()
    }
}
