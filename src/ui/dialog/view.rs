// SPDX-License-Identifier: MPL-2.0
//! Layout of the feedback dialog window.

use super::{gallery, Message, Notice, Severity};
use crate::config::MAX_TEXT_CHARS;
use crate::feedback::StagedImage;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, column, container, image as image_widget, row, text, text_editor, Space,
};
use iced::{Element, Length};

/// Read-only state handed from `DialogApp::view` to the layout code.
pub(super) struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub prompt: Option<&'a str>,
    pub editor: &'a text_editor::Content,
    pub images: &'a [StagedImage],
    pub thumbnails: &'a [image_widget::Handle],
    pub notice: Option<&'a Notice>,
    pub remaining_secs: u64,
    pub char_count: usize,
}

pub(super) fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let mut content = column![].spacing(spacing::SM).padding(spacing::MD);

    // Prompt from the calling agent, when present
    if let Some(prompt) = ctx.prompt {
        content = content.push(
            container(text(prompt.to_string()).size(typography::BODY))
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::panel),
        );
    }

    // Text feedback section
    content = content.push(
        text(i18n.tr("dialog-text-section-title")).size(typography::TITLE_SM),
    );
    content = content.push(
        text_editor(ctx.editor)
            .placeholder(i18n.tr("dialog-text-placeholder"))
            .on_action(Message::Editor)
            .height(sizing::EDITOR_MIN_HEIGHT)
            .style(styles::text_editor::feedback_input),
    );
    content = content.push(
        row![
            text(i18n.tr("dialog-shortcut-info")).size(typography::CAPTION),
            Space::new().width(Length::Fill),
            text(format!("{} / {}", ctx.char_count, MAX_TEXT_CHARS))
                .size(typography::CAPTION),
        ]
        .width(Length::Fill),
    );

    // Image feedback section
    content = content.push(
        text(i18n.tr("dialog-image-section-title")).size(typography::TITLE_SM),
    );
    if ctx.images.is_empty() {
        content = content.push(text(i18n.tr("dialog-no-images")).size(typography::BODY_SM));
    } else {
        content = content.push(text(
            i18n.tr_with_args(
                "dialog-image-count",
                &[("count", &ctx.images.len().to_string())],
            ),
        )
        .size(typography::BODY_SM));
        content = content.push(gallery::gallery(i18n, ctx.images, ctx.thumbnails));
    }

    let mut image_actions = row![
        button(text(i18n.tr("dialog-select-image-button")).size(typography::BODY))
            .on_press(Message::PickImages)
            .style(styles::button::secondary),
        button(text(i18n.tr("dialog-paste-image-button")).size(typography::BODY))
            .on_press(Message::PasteClipboard)
            .style(styles::button::secondary),
    ]
    .spacing(spacing::XS);
    if !ctx.images.is_empty() {
        image_actions = image_actions.push(
            button(text(i18n.tr("dialog-clear-images-button")).size(typography::BODY))
                .on_press(Message::ClearImages)
                .style(styles::button::secondary),
        );
    }
    content = content.push(image_actions);

    // Inline notice banner
    if let Some(notice) = ctx.notice {
        content = content.push(notice_banner(i18n, notice));
    }

    // Countdown and primary actions
    let minutes = ctx.remaining_secs.div_ceil(60);
    content = content.push(Space::new().height(Length::Fill));
    content = content.push(
        row![
            text(i18n.tr_with_args(
                "dialog-timeout-info",
                &[("minutes", &minutes.to_string())],
            ))
            .size(typography::CAPTION),
            Space::new().width(Length::Fill),
            button(text(i18n.tr("dialog-cancel-button")).size(typography::BODY))
                .on_press(Message::Cancel)
                .style(styles::button::secondary),
            button(text(i18n.tr("dialog-submit-button")).size(typography::BODY))
                .on_press(Message::Submit)
                .style(styles::button::primary),
        ]
        .spacing(spacing::XS)
        .align_y(iced::Alignment::Center)
        .width(Length::Fill),
    );

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::window)
        .into()
}

fn notice_banner<'a>(i18n: &'a I18n, notice: &'a Notice) -> Element<'a, Message> {
    let args: Vec<(&str, &str)> = notice
        .args
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    let message = if args.is_empty() {
        i18n.tr(&notice.key)
    } else {
        i18n.tr_with_args(&notice.key, &args)
    };

    let style = match notice.severity {
        Severity::Warning => styles::container::notice_warning,
        Severity::Error => styles::container::notice_error,
    };

    container(
        row![
            text(message).size(typography::BODY_SM),
            Space::new().width(Length::Fill),
            button(text("\u{00d7}").size(typography::BODY_SM))
                .on_press(Message::DismissNotice)
                .style(styles::button::secondary)
                .padding([0.0, spacing::XXS]),
        ]
        .align_y(iced::Alignment::Center),
    )
    .padding(spacing::XS)
    .width(Length::Fill)
    .style(style)
    .into()
}
