// SPDX-License-Identifier: MPL-2.0
//! Message handling for the feedback dialog.

use super::{DialogApp, Message, Notice};
use crate::error::Error;
use crate::feedback::{DraftError, FeedbackResult};
use crate::image_handler::{self, SUPPORTED_EXTENSIONS};
use iced::widget::image as image_widget;
use iced::Task;
use std::path::PathBuf;

impl DialogApp {
    pub(super) fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Editor(action) => {
                self.editor.perform(action);
                self.draft.set_text(self.editor.text());
                Task::none()
            }
            Message::PickImages => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("Images", SUPPORTED_EXTENSIONS)
                        .pick_files()
                        .await
                        .map(|handles| {
                            handles
                                .iter()
                                .map(|h| h.path().to_path_buf())
                                .collect::<Vec<_>>()
                        })
                        .unwrap_or_default()
                },
                Message::ImagesPicked,
            ),
            Message::ImagesPicked(paths) => {
                self.attach_files(paths);
                Task::none()
            }
            Message::FileDropped(path) => {
                self.attach_files(vec![path]);
                Task::none()
            }
            Message::PasteClipboard => {
                self.attach_clipboard();
                Task::none()
            }
            Message::RemoveImage(index) => {
                if let Some(removed) = self.draft.remove_image(index) {
                    if let Some(stager) = self.stager.as_ref() {
                        stager.discard(&removed);
                    }
                    self.thumbnails.remove(index);
                }
                Task::none()
            }
            Message::ClearImages => {
                let cleared = self.draft.clear_images();
                if let Some(stager) = self.stager.as_ref() {
                    for image in &cleared {
                        stager.discard(image);
                    }
                }
                self.thumbnails.clear();
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
            Message::Submit => self.submit(),
            Message::Cancel => self.finish(FeedbackResult::cancelled()),
            Message::Tick(_instant) => {
                self.remaining_secs = self.remaining_secs.saturating_sub(1);
                if self.remaining_secs == 0 {
                    let seconds = self.config.effective_timeout_secs();
                    self.finish(FeedbackResult::timed_out(seconds))
                } else {
                    Task::none()
                }
            }
        }
    }

    /// Validates and stages a batch of image files, reporting skipped ones.
    fn attach_files(&mut self, paths: Vec<PathBuf>) {
        let mut skipped: Vec<String> = Vec::new();

        for path in paths {
            if !self.draft.can_add_image(&self.config) {
                self.notice = Some(
                    Notice::error("notification-image-limit")
                        .with_arg("max", self.config.max_image_count()),
                );
                return;
            }

            let display_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("?")
                .to_string();

            // Clone the limits up front; stager_mut borrows self mutably.
            let config = self.config.clone();
            let staged = self
                .stager_mut()
                .and_then(|stager| stager.stage_file(&path, &config));
            match staged {
                Ok(image) => match image_handler::thumbnail_png(&image.path) {
                    Ok(bytes) => {
                        self.thumbnails.push(image_widget::Handle::from_bytes(bytes));
                        self.draft.add_image(image);
                    }
                    Err(_) => {
                        if let Some(stager) = self.stager.as_ref() {
                            stager.discard(&image);
                        }
                        skipped.push(display_name);
                    }
                },
                Err(_) => skipped.push(display_name),
            }
        }

        if skipped.is_empty() {
            self.notice = None;
        } else {
            self.notice = Some(
                Notice::error("notification-images-skipped")
                    .with_arg("files", skipped.join(", ")),
            );
        }
    }

    /// Attaches an image from the system clipboard.
    fn attach_clipboard(&mut self) {
        if !self.draft.can_add_image(&self.config) {
            self.notice = Some(
                Notice::error("notification-image-limit")
                    .with_arg("max", self.config.max_image_count()),
            );
            return;
        }

        let config = self.config.clone();
        let staged = self
            .stager_mut()
            .and_then(|stager| stager.stage_clipboard(&config));
        match staged {
            Ok(image) => match image_handler::thumbnail_png(&image.path) {
                Ok(bytes) => {
                    self.thumbnails.push(image_widget::Handle::from_bytes(bytes));
                    self.draft.add_image(image);
                    self.notice = None;
                }
                Err(err) => {
                    if let Some(stager) = self.stager.as_ref() {
                        stager.discard(&image);
                    }
                    self.notice = Some(Notice::error(notice_key(&err)));
                }
            },
            Err(err) => {
                self.notice = Some(Notice::error(notice_key(&err)));
            }
        }
    }

    fn submit(&mut self) -> Task<Message> {
        match self.draft.validate(&self.config) {
            Ok(()) => {
                // Staged files must outlive this process; the launcher reads
                // and deletes them.
                if self.draft.image_count() > 0 {
                    if let Some(stager) = self.stager.take() {
                        stager.keep();
                    }
                }
                let result = std::mem::take(&mut self.draft).into_result();
                self.finish(result)
            }
            Err(err) => {
                self.notice = Some(match &err {
                    DraftError::Empty => Notice::error(err.i18n_key()),
                    DraftError::TextTooLong { limit } => {
                        Notice::error(err.i18n_key()).with_arg("max", limit)
                    }
                    DraftError::TooManyImages { limit } => {
                        Notice::error(err.i18n_key()).with_arg("max", limit)
                    }
                });
                Task::none()
            }
        }
    }

    /// Stores the outcome and shuts the event loop down.
    fn finish(&mut self, result: FeedbackResult) -> Task<Message> {
        if let Ok(mut slot) = self.result_slot.lock() {
            *slot = Some(result);
        }
        iced::exit()
    }
}

fn notice_key(err: &Error) -> String {
    match err {
        Error::Image(image_err) => image_err.i18n_key().to_string(),
        _ => "error-image-decode".to_string(),
    }
}
