use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use dituria_api::catalog::types::Video;
use dituria_core::subjects::SubjectCategory;

use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{self, cover::CoverCache};

/// Detail view for one video, fed entirely by forwarded route
/// parameters — no fetch of its own.
pub struct VideoScreen {
    video: Video,
}

#[derive(Debug, Clone)]
pub enum Message {
    Watch,
}

impl VideoScreen {
    pub fn open(video: Video) -> Self {
        Self { video }
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::Watch => match &self.video.youtube_id {
                Some(id) => Action::OpenUrl(format!("https://www.youtube.com/watch?v={id}")),
                None => Action::None,
            },
        }
    }

    pub fn view<'a>(&'a self, cs: &'a ColorScheme, covers: &'a CoverCache) -> Element<'a, Message> {
        if self.video.youtube_id.is_none() {
            return widgets::error_state(cs, "No video ID provided");
        }

        let thumb = widgets::rounded_cover(
            cs,
            covers,
            &widgets::cover::key("video", &self.video.id),
            style::HERO_COVER_WIDTH,
            style::HERO_COVER_HEIGHT,
            style::RADIUS_LG,
        );

        let mut info = column![text(self.video.title.as_str())
            .size(style::TEXT_XL)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_TIGHT)]
        .spacing(style::SPACE_XS);

        if let Some(subject) = self.video.subject.as_deref() {
            info = info.push(
                text(SubjectCategory::display_name(subject))
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }

        let watch = button(
            row![
                lucide_icons::iced::icon_play().size(style::TEXT_SM).center(),
                text("Watch on YouTube")
                    .size(style::TEXT_SM)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            ]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center),
        )
        .padding([style::SPACE_SM, style::SPACE_XL])
        .on_press(Message::Watch)
        .style(theme::primary_button(cs));

        container(
            column![thumb, info, watch]
                .spacing(style::SPACE_LG)
                .align_x(Alignment::Center),
        )
        .center_x(Length::Fill)
        .padding(style::SPACE_3XL)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_watch_opens_the_youtube_url() {
        let video: Video = serde_json::from_value(json!({
            "id": "v1",
            "title": "Algebra Basics",
            "youtube_id": "dQw4w9WgXcQ"
        }))
        .unwrap();
        let mut screen = VideoScreen::open(video);

        match screen.update(Message::Watch) {
            Action::OpenUrl(url) => {
                assert_eq!(url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
            }
            _ => panic!("expected an external open"),
        }
    }

    #[test]
    fn test_missing_video_id_opens_nothing() {
        let video: Video =
            serde_json::from_value(json!({ "id": "v2", "title": "Calculus" })).unwrap();
        let mut screen = VideoScreen::open(video);
        assert!(matches!(screen.update(Message::Watch), Action::None));
    }
}
