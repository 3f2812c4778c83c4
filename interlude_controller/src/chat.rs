// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A chat composer: message draft, attachments, auto-height.
//!
//! Attachment previews are host resources (a decoded thumbnail, an object
//! URL). The host's [`PreviewRegistry`] issues them as [`PreviewHandle`]
//! RAII guards, and the registry's live count is the single source of truth
//! for leaks: every path that discards an attachment (explicit removal,
//! submission, clearing, dropping the whole composer) releases its handle
//! by dropping it. There is no manual release call to forget.
//!
//! The composer itself is plain data. Submission hands the assembled
//! [`Draft`] to the caller and resets the composer in the same step; what
//! happens to the draft afterwards is the host's business.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

/// Height of one text line, in pixels.
pub const LINE_HEIGHT: f64 = 24.0;

/// Minimum composer height: three lines.
pub const MIN_HEIGHT: f64 = LINE_HEIGHT * 3.0;

/// Maximum composer height: ten lines, after which the text scrolls.
pub const MAX_HEIGHT: f64 = LINE_HEIGHT * 10.0;

/// Clamps a measured content height to the composer's bounds.
#[must_use]
pub fn clamp_height(content_height: f64) -> f64 {
    content_height.clamp(MIN_HEIGHT, MAX_HEIGHT)
}

/// Issues preview handles and counts the live ones.
///
/// Cloning the registry clones the counter's handle, not the count; all
/// clones observe the same number.
#[derive(Clone, Debug, Default)]
pub struct PreviewRegistry {
    live: Rc<Cell<usize>>,
    next_id: Rc<Cell<u64>>,
}

impl PreviewRegistry {
    /// Creates a registry with no live handles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new handle, incrementing the live count.
    #[must_use]
    pub fn issue(&self) -> PreviewHandle {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.live.set(self.live.get() + 1);
        PreviewHandle {
            live: Rc::clone(&self.live),
            id,
        }
    }

    /// Returns the number of handles issued and not yet dropped.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.get()
    }
}

/// An RAII guard over one host-issued preview resource.
///
/// The id identifies the resource to the host (which thumbnail to show);
/// dropping the guard is the release.
#[derive(Debug)]
pub struct PreviewHandle {
    live: Rc<Cell<usize>>,
    id: u64,
}

impl PreviewHandle {
    /// Returns the host-facing resource id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.live.set(self.live.get().saturating_sub(1));
    }
}

/// One attached file, preview handle included.
///
/// The picker and drag-and-drop both produce this same shape; the composer
/// does not care which path a file arrived by.
#[derive(Debug)]
pub struct Attachment {
    /// File name as the host reported it.
    pub name: String,
    /// Size in bytes (rendered as kB by the surface).
    pub size_bytes: u64,
    /// MIME type, when the host knows it.
    pub mime: Option<String>,
    /// The preview resource guard.
    pub preview: PreviewHandle,
}

impl Attachment {
    /// Returns `true` if the preview should render as an image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime
            .as_deref()
            .is_some_and(|mime| mime.starts_with("image/"))
    }
}

/// A composed message, handed to the caller at submission.
#[derive(Debug, Default)]
pub struct Draft {
    /// The message text.
    pub message: String,
    /// The attachments, handles and all; they release when the caller is
    /// done with the draft.
    pub attachments: Vec<Attachment>,
}

/// The chat-input controller.
#[derive(Debug, Default)]
pub struct ChatInput {
    message: String,
    attachments: Vec<Attachment>,
}

impl ChatInput {
    /// Creates an empty composer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replaces the message text.
    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message = text.into();
    }

    /// Returns the current attachments.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Returns `true` when there is nothing to send.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty() && self.attachments.is_empty()
    }

    /// Adds one attachment.
    pub fn attach(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    /// Adds a batch of attachments (a multi-file pick or drop).
    pub fn attach_all(&mut self, attachments: impl IntoIterator<Item = Attachment>) {
        self.attachments.extend(attachments);
    }

    /// Removes the attachment at `index`, releasing its preview.
    ///
    /// Returns `false` if the index is out of range.
    pub fn remove_attachment(&mut self, index: usize) -> bool {
        if index >= self.attachments.len() {
            return false;
        }
        drop(self.attachments.remove(index));
        true
    }

    /// Clears the message and releases every attachment.
    pub fn clear(&mut self) {
        self.message.clear();
        self.attachments.clear();
    }

    /// Submits the draft, resetting the composer.
    ///
    /// Returns `None` when there is nothing to send; the composer is left
    /// untouched in that case.
    pub fn submit(&mut self) -> Option<Draft> {
        if self.is_empty() {
            return None;
        }
        Some(Draft {
            message: core::mem::take(&mut self.message),
            attachments: core::mem::take(&mut self.attachments),
        })
    }

    /// The composer height for a measured content height.
    #[must_use]
    pub fn height_for(&self, content_height: f64) -> f64 {
        clamp_height(content_height)
    }
}
