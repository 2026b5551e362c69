// SPDX-License-Identifier: MPL-2.0
//! Horizontal gallery of attached image thumbnails.

use super::Message;
use crate::feedback::StagedImage;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, column, container, image as image_widget, row, scrollable, text, tooltip};
use iced::{Element, Length};

/// Builds the thumbnail strip with a remove button per attachment.
pub(super) fn gallery<'a>(
    i18n: &'a I18n,
    images: &'a [StagedImage],
    thumbnails: &'a [image_widget::Handle],
) -> Element<'a, Message> {
    let mut strip = row![].spacing(spacing::XS);

    for (index, (staged, handle)) in images.iter().zip(thumbnails.iter()).enumerate() {
        let thumb = container(
            image_widget(handle.clone())
                .width(sizing::THUMBNAIL_WIDTH)
                .height(sizing::THUMBNAIL_HEIGHT),
        )
        .padding(spacing::XXS)
        .style(|theme| styles::container::thumbnail(theme, false));

        let remove = tooltip(
            button(text("\u{00d7}").size(typography::BODY))
                .on_press(Message::RemoveImage(index))
                .style(styles::button::destructive)
                .padding([0.0, spacing::XXS]),
            text(i18n.tr("dialog-remove-image-tooltip")).size(typography::CAPTION),
            tooltip::Position::Top,
        );

        let label = text(truncated_label(staged)).size(typography::CAPTION);

        strip = strip.push(
            column![thumb, row![label, remove].spacing(spacing::XXS)]
                .spacing(spacing::XXS)
                .align_x(iced::Alignment::Center),
        );
    }

    scrollable(strip)
        .direction(Direction::Horizontal(Scrollbar::new()))
        .width(Length::Fill)
        .into()
}

fn truncated_label(staged: &StagedImage) -> String {
    let label = staged.origin.label();
    if label.chars().count() > 14 {
        let short: String = label.chars().take(11).collect();
        format!("{short}...")
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::ImageOrigin;
    use std::path::PathBuf;

    fn staged_named(name: &str) -> StagedImage {
        StagedImage {
            path: PathBuf::from("/tmp/x.png"),
            origin: ImageOrigin::File(name.to_string()),
            width: 8,
            height: 8,
        }
    }

    #[test]
    fn long_file_names_are_truncated() {
        let staged = staged_named("a-very-long-screenshot-name.png");
        let label = truncated_label(&staged);
        assert!(label.ends_with("..."));
        assert!(label.chars().count() <= 14);
    }

    #[test]
    fn short_names_and_clipboard_pass_through() {
        assert_eq!(truncated_label(&staged_named("shot.png")), "shot.png");

        let clip = StagedImage {
            origin: ImageOrigin::Clipboard,
            ..staged_named("x")
        };
        assert_eq!(truncated_label(&clip), "clipboard");
    }
}
