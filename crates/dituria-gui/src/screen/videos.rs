use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length, Task};

use dituria_api::catalog::types::Video;
use dituria_api::catalog::CatalogClient;
use dituria_api::traits::CatalogService;
use dituria_core::filter;
use dituria_core::loadstate::{LoadState, Phase};
use dituria_core::subjects::SubjectCategory;

use crate::screen::{Action, PushTarget};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{self, cover::CoverCache};

/// Video catalog with a prefix search box and subject chips.
///
/// Filtering is recomputed from (collection, query, subject) on every
/// render via the pure filter; nothing is cached between the two.
pub struct Videos {
    state: LoadState<(), Vec<Video>>,
    query: String,
    subject: Option<SubjectCategory>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<Video>, String>),
    QueryChanged(String),
    ClearQuery,
    SubjectSelected(SubjectCategory),
    Open(usize),
}

impl Videos {
    /// Build the screen and fire its fetch.
    pub fn open(client: &CatalogClient) -> (Self, Task<Message>) {
        let mut state = LoadState::new();
        state.begin(());
        let client = client.clone();
        let task = Task::perform(
            async move { client.videos().await.map_err(|e| e.to_string()) },
            Message::Loaded,
        );
        (
            Self {
                state,
                query: String::new(),
                subject: None,
            },
            task,
        )
    }

    fn filtered(&self) -> Vec<Video> {
        let collection = self.state.data().map(Vec::as_slice).unwrap_or_default();
        filter::apply(collection, &self.query, self.subject.map(SubjectCategory::id))
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::Loaded(Ok(videos)) => {
                let covers = videos
                    .iter()
                    .map(|v| (widgets::cover::key("video", &v.id), v.cover.clone()))
                    .collect();
                if self.state.resolve(&(), videos) {
                    Action::RequestCovers(covers)
                } else {
                    Action::None
                }
            }
            Message::Loaded(Err(e)) => {
                tracing::warn!("failed to load videos: {e}");
                self.state.reject(&(), e);
                Action::None
            }
            Message::QueryChanged(query) => {
                self.query = query;
                Action::None
            }
            Message::ClearQuery => {
                self.query.clear();
                Action::None
            }
            Message::SubjectSelected(subject) => {
                // Re-selecting the active chip clears the filter.
                self.subject = if self.subject == Some(subject) {
                    None
                } else {
                    Some(subject)
                };
                Action::None
            }
            Message::Open(index) => match self.filtered().into_iter().nth(index) {
                Some(video) => Action::Push(PushTarget::Video(Box::new(video))),
                None => Action::None,
            },
        }
    }

    pub fn view<'a>(&'a self, cs: &'a ColorScheme, covers: &'a CoverCache) -> Element<'a, Message> {
        let header = column![self.search_bar(cs), self.chip_bar(cs)]
            .spacing(style::SPACE_SM)
            .padding([style::SPACE_SM, style::SPACE_LG]);

        let body: Element<'a, Message> = match self.state.phase() {
            Phase::Idle | Phase::Pending => widgets::loading(cs),
            Phase::Failed(message) => widgets::error_state(cs, message),
            Phase::Ready(_) => self.results(cs, covers),
        };

        column![header, body]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn results<'a>(&'a self, cs: &'a ColorScheme, covers: &'a CoverCache) -> Element<'a, Message> {
        let filtered = self.filtered();

        if filtered.is_empty() {
            let message = if !self.query.trim().is_empty() || self.subject.is_some() {
                "No videos found matching your criteria"
            } else {
                "No videos available"
            };
            return widgets::empty_state(
                cs,
                lucide_icons::iced::icon_play()
                    .size(style::TEXT_2XL)
                    .color(cs.outline)
                    .into(),
                message,
                "",
            );
        }

        let items: Vec<Element<'a, Message>> = filtered
            .iter()
            .enumerate()
            .map(|(index, video)| video_row(cs, covers, video, index))
            .collect();

        widgets::styled_scrollable(
            column(items)
                .spacing(style::SPACE_XXS)
                .padding([style::SPACE_XS, style::SPACE_LG]),
        )
        .height(Length::Fill)
        .into()
    }

    fn search_bar<'a>(&'a self, cs: &'a ColorScheme) -> Element<'a, Message> {
        let search_icon = lucide_icons::iced::icon_search()
            .size(style::TEXT_BASE)
            .color(cs.on_surface_variant);

        let input = text_input("Search videos...", &self.query)
            .on_input(Message::QueryChanged)
            .size(style::TEXT_BASE)
            .padding([style::SPACE_XS, style::SPACE_SM])
            .width(Length::Fill)
            .style(theme::text_input_borderless(cs));

        let mut bar = row![search_icon, input]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center);

        if !self.query.is_empty() {
            let clear_size = style::TEXT_SM + style::SPACE_XS * 2.0;
            bar = bar.push(
                button(
                    container(
                        lucide_icons::iced::icon_x()
                            .size(style::TEXT_SM)
                            .color(cs.on_surface_variant),
                    )
                    .center_x(Length::Fill)
                    .center_y(Length::Fill),
                )
                .on_press(Message::ClearQuery)
                .padding(0)
                .width(Length::Fixed(clear_size))
                .height(Length::Fixed(clear_size))
                .style(theme::icon_button(cs)),
            );
        }

        container(bar)
            .style(theme::search_bar(cs))
            .padding([style::SPACE_SM, style::SPACE_MD])
            .width(Length::Fill)
            .into()
    }

    /// The chip set is the full fixed enumeration, shown whether or
    /// not any loaded video belongs to a category.
    fn chip_bar<'a>(&self, cs: &'a ColorScheme) -> Element<'a, Message> {
        let chips: Vec<Element<'a, Message>> = SubjectCategory::ALL
            .iter()
            .map(|&subject| {
                let selected = self.subject == Some(subject);
                let mut content = row![].spacing(style::SPACE_XXS).align_y(Alignment::Center);
                if selected {
                    content =
                        content.push(lucide_icons::iced::icon_check().size(style::TEXT_XS));
                }
                content = content.push(
                    text(subject.name())
                        .size(style::TEXT_XS)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                );

                button(container(content).center_y(Length::Fill))
                    .height(Length::Fixed(style::CHIP_HEIGHT))
                    .padding([style::SPACE_XS, style::SPACE_MD])
                    .on_press(Message::SubjectSelected(subject))
                    .style(theme::filter_chip(selected, cs))
                    .into()
            })
            .collect();

        widgets::styled_scrollable(row(chips).spacing(style::SPACE_XS))
            .direction(iced::widget::scrollable::Direction::Horizontal(
                iced::widget::scrollable::Scrollbar::new().width(4).scroller_width(3),
            ))
            .width(Length::Fill)
            .into()
    }
}

fn video_row<'a>(
    cs: &'a ColorScheme,
    covers: &'a CoverCache,
    video: &Video,
    index: usize,
) -> Element<'a, Message> {
    let subject = video
        .subject
        .as_deref()
        .map(|id| SubjectCategory::display_name(id).to_string());

    let thumb = widgets::rounded_cover(
        cs,
        covers,
        &widgets::cover::key("video", &video.id),
        style::VIDEO_THUMB_WIDTH,
        style::VIDEO_THUMB_HEIGHT,
        style::RADIUS_SM,
    );

    let mut info = column![text(video.title.clone())
        .size(style::TEXT_BASE)
        .font(style::FONT_HEADING)
        .line_height(style::LINE_HEIGHT_NORMAL)]
    .spacing(style::SPACE_XXS);

    if let Some(subject) = subject {
        info = info.push(
            text(subject)
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }

    button(
        row![thumb, info.width(Length::Fill)]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([style::SPACE_XS, style::SPACE_MD])
    .on_press(Message::Open(index))
    .style(theme::list_item(cs))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn screen_with_videos() -> Videos {
        let videos: Vec<Video> = serde_json::from_value(json!([
            { "id": "v1", "title": "Algebra Basics", "subject": SubjectCategory::Mathematics.id() },
            { "id": "v2", "title": "Calculus" }
        ]))
        .unwrap();

        let mut state = LoadState::new();
        state.begin(());
        state.resolve(&(), videos);
        Videos {
            state,
            query: String::new(),
            subject: None,
        }
    }

    #[test]
    fn test_reselecting_the_active_chip_clears_the_filter() {
        let mut screen = screen_with_videos();

        screen.update(Message::SubjectSelected(SubjectCategory::Mathematics));
        assert_eq!(screen.subject, Some(SubjectCategory::Mathematics));
        assert_eq!(screen.filtered().len(), 1);

        screen.update(Message::SubjectSelected(SubjectCategory::Mathematics));
        assert_eq!(screen.subject, None);
        assert_eq!(screen.filtered().len(), 2);
    }

    #[test]
    fn test_query_narrows_to_prefix_matches() {
        let mut screen = screen_with_videos();
        screen.update(Message::QueryChanged("Al".into()));
        let filtered = screen.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Algebra Basics");

        screen.update(Message::QueryChanged("gebra".into()));
        assert!(screen.filtered().is_empty());
    }

    #[test]
    fn test_open_indexes_into_the_filtered_list() {
        let mut screen = screen_with_videos();
        screen.update(Message::QueryChanged("Calc".into()));
        match screen.update(Message::Open(0)) {
            Action::Push(PushTarget::Video(video)) => assert_eq!(video.id, "v2"),
            _ => panic!("expected a push to the video screen"),
        }
    }
}
