// SPDX-License-Identifier: MPL-2.0
//! Feedback data model shared between the dialog process and the MCP server.
//!
//! The dialog builds a [`FeedbackDraft`] while the window is open, then
//! freezes it into a [`FeedbackResult`] which crosses the process boundary
//! as a single JSON line on the dialog's stdout. Image attachments never
//! travel inline; they are staged as PNG files in a session temp directory
//! and referenced by path.

use crate::config::{Config, MAX_TEXT_CHARS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where an attachment came from. Kept for result summaries and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "name")]
pub enum ImageOrigin {
    /// Picked from disk; carries the original file name.
    File(String),
    /// Pasted from the clipboard.
    Clipboard,
}

impl ImageOrigin {
    pub fn label(&self) -> String {
        match self {
            ImageOrigin::File(name) => name.clone(),
            ImageOrigin::Clipboard => "clipboard".to_string(),
        }
    }
}

/// A validated attachment staged as a PNG file on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedImage {
    /// Path of the staged PNG in the session temp directory.
    pub path: PathBuf,
    pub origin: ImageOrigin,
    pub width: u32,
    pub height: u32,
}

/// Why the dialog closed without a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum CancelReason {
    UserCancelled,
    TimedOut { seconds: u64 },
}

/// The dialog's final answer, serialized to one JSON line on stdout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub cancelled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<CancelReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<StagedImage>,
}

impl FeedbackResult {
    pub fn submitted(text: Option<String>, images: Vec<StagedImage>) -> Self {
        Self {
            cancelled: false,
            reason: None,
            text,
            images,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            cancelled: true,
            reason: Some(CancelReason::UserCancelled),
            text: None,
            images: Vec::new(),
        }
    }

    pub fn timed_out(seconds: u64) -> Self {
        Self {
            cancelled: true,
            reason: Some(CancelReason::TimedOut { seconds }),
            text: None,
            images: Vec::new(),
        }
    }

    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

/// Outcome of a validation pass over the current draft.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftError {
    /// Neither text nor images were provided.
    Empty,
    /// Text exceeds the character cap.
    TextTooLong { limit: usize },
    /// Adding another image would exceed the attachment cap.
    TooManyImages { limit: usize },
}

impl DraftError {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DraftError::Empty => "notification-no-feedback",
            DraftError::TextTooLong { .. } => "notification-text-too-long",
            DraftError::TooManyImages { .. } => "notification-image-limit",
        }
    }
}

/// Mutable feedback state while the dialog is open.
#[derive(Debug, Default)]
pub struct FeedbackDraft {
    text: String,
    images: Vec<StagedImage>,
}

impl FeedbackDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn images(&self) -> &[StagedImage] {
        &self.images
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Whether another image may be added under the configured cap.
    pub fn can_add_image(&self, config: &Config) -> bool {
        self.images.len() < config.max_image_count()
    }

    pub fn add_image(&mut self, image: StagedImage) {
        self.images.push(image);
    }

    pub fn remove_image(&mut self, index: usize) -> Option<StagedImage> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    pub fn clear_images(&mut self) -> Vec<StagedImage> {
        std::mem::take(&mut self.images)
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.images.is_empty()
    }

    /// Validates the draft for submission.
    pub fn validate(&self, config: &Config) -> Result<(), DraftError> {
        if self.is_empty() {
            return Err(DraftError::Empty);
        }
        if self.text.chars().count() > MAX_TEXT_CHARS {
            return Err(DraftError::TextTooLong {
                limit: MAX_TEXT_CHARS,
            });
        }
        if self.images.len() > config.max_image_count() {
            return Err(DraftError::TooManyImages {
                limit: config.max_image_count(),
            });
        }
        Ok(())
    }

    /// Freezes the draft into a submitted result. Text is trimmed; an
    /// all-whitespace entry becomes no text at all.
    pub fn into_result(self) -> FeedbackResult {
        let trimmed = self.text.trim();
        let text = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        FeedbackResult::submitted(text, self.images)
    }

    /// One-line description of the draft contents, for stderr diagnostics.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        let trimmed = self.text.trim();
        if !trimmed.is_empty() {
            let preview: String = trimmed.chars().take(50).collect();
            if trimmed.chars().count() > 50 {
                parts.push(format!("text: {}...", preview));
            } else {
                parts.push(format!("text: {}", preview));
            }
        }
        if !self.images.is_empty() {
            parts.push(format!("images: {}", self.images.len()));
        }
        if parts.is_empty() {
            "empty".to_string()
        } else {
            parts.join(" | ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ImagesConfig};

    fn staged(name: &str) -> StagedImage {
        StagedImage {
            path: PathBuf::from(format!("/tmp/{name}.png")),
            origin: ImageOrigin::File(format!("{name}.png")),
            width: 64,
            height: 48,
        }
    }

    #[test]
    fn text_only_submission_returns_exact_text() {
        let mut draft = FeedbackDraft::new();
        draft.set_text("the button is misaligned".to_string());

        let result = draft.into_result();
        assert!(!result.cancelled);
        assert_eq!(result.text.as_deref(), Some("the button is misaligned"));
        assert!(result.images.is_empty());
    }

    #[test]
    fn submitted_text_is_trimmed() {
        let mut draft = FeedbackDraft::new();
        draft.set_text("  padded  \n".to_string());
        assert_eq!(draft.into_result().text.as_deref(), Some("padded"));
    }

    #[test]
    fn whitespace_only_text_becomes_none() {
        let mut draft = FeedbackDraft::new();
        draft.set_text("   \n\t".to_string());
        draft.add_image(staged("a"));
        let result = draft.into_result();
        assert_eq!(result.text, None);
        assert_eq!(result.images.len(), 1);
    }

    #[test]
    fn add_then_remove_image_leaves_no_trace() {
        let mut draft = FeedbackDraft::new();
        draft.set_text("text".to_string());
        draft.add_image(staged("a"));
        draft.add_image(staged("b"));

        let removed = draft.remove_image(0).expect("image at index 0");
        assert_eq!(removed.origin, ImageOrigin::File("a.png".to_string()));

        let result = draft.into_result();
        assert_eq!(result.images.len(), 1);
        assert_eq!(result.images[0].origin, ImageOrigin::File("b.png".to_string()));
    }

    #[test]
    fn remove_image_out_of_bounds_is_none() {
        let mut draft = FeedbackDraft::new();
        assert!(draft.remove_image(0).is_none());
    }

    #[test]
    fn clear_images_returns_all_staged_files() {
        let mut draft = FeedbackDraft::new();
        draft.add_image(staged("a"));
        draft.add_image(staged("b"));

        let cleared = draft.clear_images();
        assert_eq!(cleared.len(), 2);
        assert_eq!(draft.image_count(), 0);
    }

    #[test]
    fn empty_draft_fails_validation() {
        let draft = FeedbackDraft::new();
        assert_eq!(
            draft.validate(&Config::default()),
            Err(DraftError::Empty)
        );
    }

    #[test]
    fn whitespace_only_draft_fails_validation() {
        let mut draft = FeedbackDraft::new();
        draft.set_text("   ".to_string());
        assert_eq!(
            draft.validate(&Config::default()),
            Err(DraftError::Empty)
        );
    }

    #[test]
    fn over_long_text_fails_validation() {
        let mut draft = FeedbackDraft::new();
        draft.set_text("x".repeat(MAX_TEXT_CHARS + 1));
        assert!(matches!(
            draft.validate(&Config::default()),
            Err(DraftError::TextTooLong { .. })
        ));
    }

    #[test]
    fn image_cap_is_enforced() {
        let config = Config {
            images: ImagesConfig {
                max_count: Some(2),
                ..ImagesConfig::default()
            },
            ..Config::default()
        };

        let mut draft = FeedbackDraft::new();
        draft.add_image(staged("a"));
        assert!(draft.can_add_image(&config));
        draft.add_image(staged("b"));
        assert!(!draft.can_add_image(&config));

        draft.add_image(staged("c"));
        assert!(matches!(
            draft.validate(&config),
            Err(DraftError::TooManyImages { limit: 2 })
        ));
    }

    #[test]
    fn result_json_round_trip() {
        let result = FeedbackResult::submitted(
            Some("hello".to_string()),
            vec![staged("shot")],
        );
        let line = serde_json::to_string(&result).expect("serialize");
        let parsed: FeedbackResult = serde_json::from_str(&line).expect("deserialize");
        assert_eq!(parsed, result);
    }

    #[test]
    fn timeout_result_carries_seconds() {
        let result = FeedbackResult::timed_out(600);
        assert!(result.cancelled);
        assert_eq!(result.reason, Some(CancelReason::TimedOut { seconds: 600 }));

        let line = serde_json::to_string(&result).expect("serialize");
        let parsed: FeedbackResult = serde_json::from_str(&line).expect("deserialize");
        assert_eq!(parsed.reason, Some(CancelReason::TimedOut { seconds: 600 }));
    }

    #[test]
    fn cancelled_result_has_no_content() {
        let result = FeedbackResult::cancelled();
        assert!(result.cancelled);
        assert!(!result.has_text());
        assert!(!result.has_images());
    }

    #[test]
    fn summary_previews_long_text() {
        let mut draft = FeedbackDraft::new();
        draft.set_text("a".repeat(80));
        draft.add_image(staged("a"));
        let summary = draft.summary();
        assert!(summary.contains("..."));
        assert!(summary.contains("images: 1"));
    }
}
