pub mod cover;
pub mod empty_state;
pub mod rows;

pub use cover::rounded_cover;
pub use empty_state::empty_state;
pub use rows::{media_row, text_row};

use iced::widget::{center, scrollable, text};
use iced::{Element, Length};

use crate::style;
use crate::theme::ColorScheme;

/// A scrollable with consistent direction across the application.
pub fn styled_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> scrollable::Scrollable<'a, Message> {
    scrollable(content).direction(scrollable::Direction::Vertical(
        scrollable::Scrollbar::new().width(6).scroller_width(4).margin(2),
    ))
}

/// Centered loading placeholder shown while a fetch is in flight.
pub fn loading<'a, Message: 'a>(cs: &ColorScheme) -> Element<'a, Message> {
    center(
        text("Loading...")
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Centered error placeholder with the failure message.
pub fn error_state<'a, Message: 'a>(cs: &ColorScheme, message: &'a str) -> Element<'a, Message> {
    center(
        text(message)
            .size(style::TEXT_SM)
            .color(cs.error)
            .line_height(style::LINE_HEIGHT_NORMAL),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(style::SPACE_3XL)
    .into()
}
