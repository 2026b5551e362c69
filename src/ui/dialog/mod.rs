// SPDX-License-Identifier: MPL-2.0
//! The feedback dialog window.
//!
//! This is a self-contained Iced application launched by `main.rs` in
//! `--dialog` mode. It collects text and image attachments from the user,
//! writes the outcome into a shared slot, and exits. The MCP server never
//! touches this module directly; it talks to the dialog through a
//! subprocess boundary.

mod gallery;
mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, SharedResult};

use crate::config::{self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::feedback::FeedbackDraft;
use crate::i18n::fluent::I18n;
use crate::image_handler::ImageStager;
use crate::ui::theming::ThemeMode;
use iced::widget::{image as image_widget, text_editor};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Severity of the inline notice banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Warning,
    Error,
}

/// Localized inline notice shown below the gallery.
#[derive(Debug, Clone)]
pub(crate) struct Notice {
    pub key: String,
    pub args: Vec<(String, String)>,
    pub severity: Severity,
}

impl Notice {
    pub fn warning(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            args: Vec::new(),
            severity: Severity::Warning,
        }
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            args: Vec::new(),
            severity: Severity::Error,
        }
    }

    pub fn with_arg(mut self, name: &str, value: impl ToString) -> Self {
        self.args.push((name.to_string(), value.to_string()));
        self
    }
}

/// Root state of the dialog window.
pub struct DialogApp {
    pub i18n: I18n,
    config: Config,
    prompt: Option<String>,
    editor: text_editor::Content,
    draft: FeedbackDraft,
    stager: Option<ImageStager>,
    thumbnails: Vec<image_widget::Handle>,
    notice: Option<Notice>,
    remaining_secs: u64,
    theme_mode: ThemeMode,
    result_slot: SharedResult,
}

impl fmt::Debug for DialogApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogApp")
            .field("image_count", &self.draft.image_count())
            .field("remaining_secs", &self.remaining_secs)
            .finish()
    }
}

/// Builds the window settings from the configured geometry.
pub fn window_settings(config: &Config) -> window::Settings {
    let width = config
        .dialog
        .window_width
        .unwrap_or(config::DEFAULT_WINDOW_WIDTH);
    let height = config
        .dialog
        .window_height
        .unwrap_or(config::DEFAULT_WINDOW_HEIGHT);

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        position: window::Position::Centered,
        level: window::Level::AlwaysOnTop,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the dialog event loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let settings = {
        let (config, _) = config::load();
        window_settings(&config)
    };

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        DialogApp::new(flags)
    };

    iced::application(boot, DialogApp::update, DialogApp::view)
        .title(DialogApp::title)
        .theme(DialogApp::theme)
        .window(settings)
        .subscription(DialogApp::subscription)
        .run()
}

impl DialogApp {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let remaining_secs = config.effective_timeout_secs();
        let theme_mode = config.general.theme_mode;

        let app = Self {
            i18n,
            config,
            prompt: flags.prompt,
            editor: text_editor::Content::new(),
            draft: FeedbackDraft::new(),
            stager: None,
            thumbnails: Vec::new(),
            notice: config_warning.map(Notice::warning),
            remaining_secs,
            theme_mode,
            result_slot: flags.result_slot,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("dialog-window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::shortcuts_and_drops(),
            subscription::countdown(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.handle_message(message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            prompt: self.prompt.as_deref(),
            editor: &self.editor,
            images: self.draft.images(),
            thumbnails: &self.thumbnails,
            notice: self.notice.as_ref(),
            remaining_secs: self.remaining_secs,
            char_count: self.draft.text().chars().count(),
        })
    }

    /// The staging directory is created on first use so a temp-dir failure
    /// surfaces as a notice instead of aborting the whole dialog.
    pub(crate) fn stager_mut(&mut self) -> crate::error::Result<&mut ImageStager> {
        if self.stager.is_none() {
            self.stager = Some(ImageStager::new()?);
        }
        Ok(self
            .stager
            .as_mut()
            .expect("stager was just initialized"))
    }
}
