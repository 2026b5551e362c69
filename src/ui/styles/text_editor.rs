// SPDX-License-Identifier: MPL-2.0
//! Styles for the feedback text editor.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::text_editor;
use iced::{Background, Border, Color, Theme};

/// Multi-line feedback input surface.
pub fn feedback_input(theme: &Theme, status: text_editor::Status) -> text_editor::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg, value, placeholder) = if is_light {
        (palette::WHITE, palette::GRAY_900, palette::GRAY_400)
    } else {
        (palette::GRAY_600, palette::GRAY_100, palette::GRAY_300)
    };

    let border_color = match status {
        text_editor::Status::Focused { .. } => palette::PRIMARY_500,
        text_editor::Status::Hovered => palette::GRAY_300,
        _ => palette::GRAY_400,
    };

    text_editor::Style {
        background: Background::Color(bg),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        placeholder,
        value,
        selection: Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::PRIMARY_500
        },
    }
}
