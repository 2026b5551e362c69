// SPDX-License-Identifier: MPL-2.0
use crate::feedback::FeedbackResult;
use iced::widget::text_editor;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Slot the dialog writes its outcome into before the event loop exits.
pub type SharedResult = Arc<Mutex<Option<FeedbackResult>>>;

/// Launch parameters handed to the dialog by `main.rs`.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Language override from the command line.
    pub lang: Option<String>,
    /// Prompt supplied by the calling agent, shown above the editor.
    pub prompt: Option<String>,
    /// Where the outcome is stored for the launcher to read back.
    pub result_slot: SharedResult,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Edits to the feedback text editor.
    Editor(text_editor::Action),
    /// Open the native file picker.
    PickImages,
    /// Paths returned by the file picker (empty when dismissed).
    ImagesPicked(Vec<PathBuf>),
    /// Attach an image from the system clipboard.
    PasteClipboard,
    /// A file was dropped onto the window.
    FileDropped(PathBuf),
    /// Remove one attachment from the gallery.
    RemoveImage(usize),
    /// Remove every attachment.
    ClearImages,
    /// Dismiss the inline notice banner.
    DismissNotice,
    Submit,
    Cancel,
    /// One-second countdown tick.
    Tick(iced::time::Instant),
}
