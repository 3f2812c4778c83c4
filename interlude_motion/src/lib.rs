// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=interlude_motion --heading-base-level=0

//! Interlude Motion: animation-target data for an external animation engine.
//!
//! Controllers in this workspace never animate anything themselves. They hand
//! an external engine a *description* ("property P goes to this target over
//! this duration with this easing") and the engine owns the interpolation.
//! This crate defines those descriptions plus two small pieces of bookkeeping
//! the pattern needs:
//!
//! - [`MotionProps`]: a target bundle of visual properties (opacity,
//!   vertical offset, scale, blur), with presets for the recurring
//!   enter/exit treatments.
//! - [`Transition`]: duration, easing ([`Easing::Spring`] with a bounce
//!   parameter, or a plain tween), and an optional start delay.
//! - [`shared::SharedLayout`]: the identity-keyed correlation table behind
//!   shared-element transitions: when a key disappears at one recorded
//!   geometry and reappears at another within the same update, the engine
//!   should interpolate between the two rather than treat them as unrelated
//!   elements.
//! - [`presence::Presence`]: exit bookkeeping. An item removed from the live
//!   set stays "mounted" until the host reports its exit animation settled,
//!   so the rendering surface can keep drawing it while it leaves.
//!
//! ## Minimal example
//!
//! ```rust
//! use interlude_motion::{MotionProps, Transition};
//!
//! // A list row leaving a pop-layout group: fade out while sliding down.
//! let target = MotionProps::pop_exit();
//! assert_eq!(target.opacity, 0.0);
//! assert_eq!(target.y, 25.0);
//!
//! // The reference components' default "no bounce" spring.
//! let transition = Transition::SMOOTH;
//! assert_eq!(transition.duration_ms, 300);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod presence;
pub mod shared;

/// A bundle of target visual properties for the animation engine.
///
/// Values are absolute targets, not deltas. The defaults describe an element
/// at rest: fully opaque, unshifted, unscaled, unblurred.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionProps {
    /// Target opacity in `0.0..=1.0`.
    pub opacity: f64,
    /// Target vertical offset in logical pixels (positive is down).
    pub y: f64,
    /// Target uniform scale factor.
    pub scale: f64,
    /// Target blur radius in logical pixels.
    pub blur: f64,
}

impl Default for MotionProps {
    fn default() -> Self {
        Self::REST
    }
}

impl MotionProps {
    /// An element at rest: opaque, unshifted, unscaled, unblurred.
    pub const REST: Self = Self {
        opacity: 1.0,
        y: 0.0,
        scale: 1.0,
        blur: 0.0,
    };

    /// Pop-layout enter origin: transparent, 25 px above its slot.
    ///
    /// Pairs with [`REST`](Self::REST) as the animate target.
    #[must_use]
    pub const fn pop_enter() -> Self {
        Self {
            opacity: 0.0,
            y: -25.0,
            ..Self::REST
        }
    }

    /// Pop-layout exit target: transparent, 25 px below its slot.
    #[must_use]
    pub const fn pop_exit() -> Self {
        Self {
            opacity: 0.0,
            y: 25.0,
            ..Self::REST
        }
    }

    /// Hidden state for blur-veiled toolbars: transparent, 20 px down, 4 px blur.
    ///
    /// Used for both the enter origin and the exit target; the visible state
    /// is [`REST`](Self::REST).
    #[must_use]
    pub const fn veiled() -> Self {
        Self {
            opacity: 0.0,
            y: 20.0,
            blur: 4.0,
            ..Self::REST
        }
    }

    /// Success-copy enter origin: transparent, 32 px up, 4 px blur.
    #[must_use]
    pub const fn success_enter() -> Self {
        Self {
            opacity: 0.0,
            y: -32.0,
            blur: 4.0,
            ..Self::REST
        }
    }

    /// View-switch hidden state: transparent at 96% scale.
    #[must_use]
    pub const fn scaled_back() -> Self {
        Self {
            opacity: 0.0,
            scale: 0.96,
            ..Self::REST
        }
    }

    /// Staged items hovering over the bin: 73 px down, unscaled, sharp.
    #[must_use]
    pub const fn bin_hover() -> Self {
        Self {
            y: 73.0,
            ..Self::REST
        }
    }

    /// Staged items dropped into the bin: 110 px down, 90% scale, 4 px blur.
    #[must_use]
    pub const fn bin_dropped() -> Self {
        Self {
            y: 110.0,
            scale: 0.9,
            blur: 4.0,
            ..Self::REST
        }
    }
}

/// How the engine should interpolate towards a target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Easing {
    /// A spring with the given bounce in `0.0..=1.0` (0 is critically damped).
    Spring {
        /// Bounciness of the spring.
        bounce: f64,
    },
    /// A plain duration-based tween.
    Tween,
}

/// A duration/easing/delay profile handed to the animation engine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    /// Interpolation style.
    pub easing: Easing,
    /// Total duration in milliseconds.
    pub duration_ms: u64,
    /// Delay before the animation starts, in milliseconds.
    pub delay_ms: u64,
}

impl Transition {
    /// The default no-bounce spring: 300 ms, bounce 0.
    pub const SMOOTH: Self = Self::spring(300, 0.0);

    /// A slower no-bounce spring for form/success swaps: 400 ms, bounce 0.
    pub const SETTLE: Self = Self::spring(400, 0.0);

    /// The "throwing something" spring: 500 ms, bounce 0.2.
    pub const TOSS: Self = Self::spring(500, 0.2);

    /// A quick exit fade: 170 ms tween.
    pub const QUICK_FADE: Self = Self::tween(170);

    /// The view-switch crossfade: 200 ms tween.
    pub const VIEW_SWITCH: Self = Self::tween(200);

    /// A spring transition.
    #[must_use]
    pub const fn spring(duration_ms: u64, bounce: f64) -> Self {
        Self {
            easing: Easing::Spring { bounce },
            duration_ms,
            delay_ms: 0,
        }
    }

    /// A tween transition.
    #[must_use]
    pub const fn tween(duration_ms: u64) -> Self {
        Self {
            easing: Easing::Tween,
            duration_ms,
            delay_ms: 0,
        }
    }

    /// The same profile, started after `delay_ms`.
    ///
    /// The staged-drop choreography uses this: the hover settle is delayed
    /// 130 ms so the shared-element flight lands first, and the bin's front
    /// face appears after 175 ms with zero duration (a display toggle).
    #[must_use]
    pub const fn after(self, delay_ms: u64) -> Self {
        Self { delay_ms, ..self }
    }
}
