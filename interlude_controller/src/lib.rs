// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=interlude_controller --heading-base-level=0

//! Interlude Controller: timed interaction controllers for UI widgets.
//!
//! This crate composes the workspace's primitives (transition tables from
//! `interlude_machine`, the superseding timer queue from `interlude_timing`,
//! outside-dismissal watching from `interlude_dismiss`, staged selection
//! from `interlude_selection`, and animation-target data from
//! `interlude_motion`) into the observable objects a rendering surface
//! consumes. Each controller
//! exposes its current state for reads, a small set of operations for
//! writes, a `tick(now)` to pump due timers, and an idempotent `teardown`;
//! the timer and watcher primitives are never exposed.
//!
//! The concurrency model is single-threaded and event-loop-driven: every
//! transition happens synchronously inside a user-input call or a `tick`.
//! Timers are payload data, not callbacks, so nothing can fire against a
//! torn-down controller; teardown shuts the queue down in the same
//! synchronous step.
//!
//! Concrete controllers:
//!
//! - [`login::LoginButton`]: idle → loading → success → idle on two timers
//!   scheduled atomically at activation.
//! - [`feedback::FeedbackPopover`]: an outside-dismissable popover around a
//!   small form machine with a submit chord and timed success/close.
//! - [`trash::TrashFlow`]: the two-step select → confirm → commit flow with
//!   a post-commit auto-reset.
//! - [`stepper::Stepper`]: a multi-step form position with animation
//!   direction.
//! - [`drawer::Drawer`]: an outside-dismissable drawer with a view switch.
//! - [`modal::CardModal`]: a card list whose active item expands into a
//!   centered modal along a shared-layout flight.
//! - [`chat::ChatInput`]: a message draft with owned file-attachment
//!   preview handles and the auto-height clamp.
//!
//! The generic [`controller::Controller`] carries the shared composition;
//! [`view::ViewCache`] is the tagged-variant render dispatch that
//! re-evaluates a view only when the state tag changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use interlude_controller::login::{LoginButton, LoginState};
//!
//! let mut button = LoginButton::new();
//! assert!(button.activate(0));
//! assert_eq!(*button.state(), LoginState::Loading);
//!
//! // Re-activating mid-flight is ignored by the transition table.
//! assert!(!button.activate(1000));
//!
//! button.tick(1750);
//! assert_eq!(*button.state(), LoginState::Success);
//!
//! button.tick(3500);
//! assert_eq!(*button.state(), LoginState::Idle);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod chat;
pub mod controller;
pub mod drawer;
pub mod feedback;
pub mod login;
pub mod modal;
pub mod stepper;
pub mod trash;
pub mod view;
