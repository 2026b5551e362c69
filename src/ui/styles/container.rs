// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the gallery and button rows.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Root surface of the dialog window.
pub fn window(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);
    let bg = if is_light {
        palette::WHITE
    } else {
        palette::GRAY_900
    };

    container::Style {
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Framed cell around a gallery thumbnail.
pub fn thumbnail(theme: &Theme, selected: bool) -> container::Style {
    let is_light = matches!(theme, Theme::Light);
    let bg = if is_light {
        palette::GRAY_100
    } else {
        palette::GRAY_700
    };

    container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: if selected {
                palette::PRIMARY_500
            } else {
                palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Inline notice banner shown for validation and attachment errors.
pub fn notice_error(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ERROR_500
        })),
        text_color: Some(palette::ERROR_500),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Inline notice banner for non-fatal warnings.
pub fn notice_warning(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WARNING_500
        })),
        text_color: Some(palette::WARNING_500),
        border: Border {
            color: palette::WARNING_500,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
