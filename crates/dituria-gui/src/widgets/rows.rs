use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::cover::{rounded_cover, CoverCache};

/// A catalog list row: cover thumbnail, title, up to two caption lines.
#[allow(clippy::too_many_arguments)]
pub fn media_row<'a, Message: Clone + 'static>(
    cs: &'a ColorScheme,
    covers: &'a CoverCache,
    cover_key: String,
    thumb_width: f32,
    thumb_height: f32,
    title: &'a str,
    subtitle: Option<&'a str>,
    caption: Option<&'a str>,
    on_press: Message,
) -> Element<'a, Message> {
    let thumb = rounded_cover(
        cs,
        covers,
        &cover_key,
        thumb_width,
        thumb_height,
        style::RADIUS_SM,
    );

    let mut info = column![text(title)
        .size(style::TEXT_BASE)
        .font(style::FONT_HEADING)
        .line_height(style::LINE_HEIGHT_NORMAL)]
    .spacing(style::SPACE_XXS);

    if let Some(subtitle) = subtitle {
        info = info.push(
            text(subtitle)
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }
    if let Some(caption) = caption {
        info = info.push(
            text(caption)
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }

    let content = row![thumb, info.width(Length::Fill)]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center);

    button(content)
        .width(Length::Fill)
        .padding([style::SPACE_XS, style::SPACE_MD])
        .on_press(on_press)
        .style(theme::list_item(cs))
        .into()
}

/// A plain bordered row for name-only children (chapters, exercises).
pub fn text_row<'a, Message: Clone + 'static>(
    cs: &'a ColorScheme,
    label: &'a str,
    on_press: Message,
) -> Element<'a, Message> {
    button(
        text(label)
            .size(style::TEXT_BASE)
            .line_height(style::LINE_HEIGHT_NORMAL),
    )
    .width(Length::Fill)
    .padding([style::SPACE_MD, style::SPACE_MD])
    .on_press(on_press)
    .style(theme::ghost_button(cs))
    .into()
}
