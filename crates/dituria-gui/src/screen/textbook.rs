use iced::widget::column;
use iced::{Element, Length, Task};

use dituria_api::catalog::types::ChapterSummary;
use dituria_api::catalog::CatalogClient;
use dituria_api::traits::CatalogService;
use dituria_core::hierarchy;
use dituria_core::loadstate::{LoadState, Phase};

use crate::screen::{Action, PushTarget};
use crate::style;
use crate::theme::ColorScheme;
use crate::widgets::{self, cover::CoverCache};

/// Chapter list for one textbook.
///
/// The textbook's own title usually arrives with the payload and is
/// published to the header once the fetch resolves.
pub struct TextbookScreen {
    state: LoadState<String, Vec<ChapterSummary>>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        id: String,
        result: Result<serde_json::Value, String>,
    },
    Open(usize),
}

impl TextbookScreen {
    /// Build the screen for `id` and fire its fetch.
    pub fn open(id: String, client: &CatalogClient) -> (Self, Task<Message>) {
        let mut state = LoadState::new();
        state.begin(id.clone());
        let client = client.clone();
        let task = Task::perform(
            async move {
                let result = client.textbook(&id).await.map_err(|e| e.to_string());
                (id, result)
            },
            |(id, result)| Message::Loaded { id, result },
        );
        (Self { state }, task)
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::Loaded { id, result } => match result {
                Ok(payload) => {
                    let title = hierarchy::text_field(&payload, "title");
                    let chapters = hierarchy::children(&payload, "chapters");
                    if self.state.resolve(&id, chapters) {
                        if let Some(title) = title {
                            return Action::SetTitle(title);
                        }
                    }
                    Action::None
                }
                Err(e) => {
                    tracing::warn!("failed to load textbook {id}: {e}");
                    self.state.reject(&id, e);
                    Action::None
                }
            },
            Message::Open(index) => {
                match self.state.data().and_then(|chapters| chapters.get(index)) {
                    Some(chapter) => Action::Push(PushTarget::Chapter {
                        id: chapter.id.clone(),
                    }),
                    None => Action::None,
                }
            }
        }
    }

    pub fn view<'a>(&'a self, cs: &'a ColorScheme, _covers: &'a CoverCache) -> Element<'a, Message> {
        match self.state.phase() {
            Phase::Idle | Phase::Pending => widgets::loading(cs),
            Phase::Failed(message) => widgets::error_state(cs, message),
            Phase::Ready(chapters) if chapters.is_empty() => widgets::empty_state(
                cs,
                lucide_icons::iced::icon_book()
                    .size(style::TEXT_2XL)
                    .color(cs.outline)
                    .into(),
                "No chapters",
                "This textbook has no chapters yet.",
            ),
            Phase::Ready(chapters) => {
                let items: Vec<Element<'a, Message>> = chapters
                    .iter()
                    .enumerate()
                    .map(|(index, chapter)| {
                        widgets::text_row(cs, &chapter.name, Message::Open(index))
                    })
                    .collect();

                widgets::styled_scrollable(
                    column(items)
                        .spacing(style::SPACE_SM)
                        .padding([style::SPACE_LG, style::SPACE_LG]),
                )
                .height(Length::Fill)
                .into()
            }
        }
    }
}
