// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the feedback dialog.
//!
//! Keyboard shortcuts are handled here rather than in widgets so they work
//! no matter which widget has focus: Ctrl+Enter (Cmd+Enter on macOS)
//! submits, Escape cancels.

use super::Message;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Global keyboard shortcuts plus file drop onto the window.
pub(super) fn shortcuts_and_drops() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        match &event {
            event::Event::Window(iced::window::Event::FileDropped(path)) => {
                return Some(Message::FileDropped(path.clone()));
            }
            event::Event::Window(iced::window::Event::CloseRequested) => {
                return Some(Message::Cancel);
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                // Shortcuts fire regardless of focus, so Escape works while
                // the editor is being typed into.
                match key.as_ref() {
                    keyboard::Key::Named(keyboard::key::Named::Enter) if modifiers.command() => {
                        return Some(Message::Submit);
                    }
                    keyboard::Key::Named(keyboard::key::Named::Escape) => {
                        return Some(Message::Cancel);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
        None
    })
}

/// One-second tick driving the auto-close countdown.
pub(super) fn countdown() -> Subscription<Message> {
    time::every(Duration::from_secs(1)).map(Message::Tick)
}
