use iced::widget::column;
use iced::{Element, Length, Task};

use dituria_api::catalog::types::ExerciseSummary;
use dituria_api::catalog::CatalogClient;
use dituria_api::traits::CatalogService;
use dituria_core::hierarchy;
use dituria_core::loadstate::{LoadState, Phase};

use crate::screen::{Action, PushTarget};
use crate::style;
use crate::theme::ColorScheme;
use crate::widgets::{self, cover::CoverCache};

/// Exercise list for one chapter.
///
/// Pushed without a forwarded title: the header shows the "Chapter"
/// placeholder until the payload's name arrives.
pub struct ChapterScreen {
    state: LoadState<String, Vec<ExerciseSummary>>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        id: String,
        result: Result<serde_json::Value, String>,
    },
    Open(usize),
}

impl ChapterScreen {
    /// Build the screen for `id` and fire its fetch.
    pub fn open(id: String, client: &CatalogClient) -> (Self, Task<Message>) {
        let mut state = LoadState::new();
        state.begin(id.clone());
        let client = client.clone();
        let task = Task::perform(
            async move {
                let result = client.chapter(&id).await.map_err(|e| e.to_string());
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
                    let name = hierarchy::text_field(&payload, "name");
                    let exercises = hierarchy::children(&payload, "exercises");
                    if self.state.resolve(&id, exercises) {
                        if let Some(name) = name {
                            return Action::SetTitle(name);
                        }
                    }
                    Action::None
                }
                Err(e) => {
                    tracing::warn!("failed to load chapter {id}: {e}");
                    self.state.reject(&id, e);
                    Action::None
                }
            },
            Message::Open(index) => {
                match self.state.data().and_then(|exercises| exercises.get(index)) {
                    Some(exercise) => Action::Push(PushTarget::Exercise {
                        id: exercise.id.clone(),
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
            Phase::Ready(exercises) if exercises.is_empty() => widgets::empty_state(
                cs,
                lucide_icons::iced::icon_list()
                    .size(style::TEXT_2XL)
                    .color(cs.outline)
                    .into(),
                "No exercises",
                "This chapter has no exercises yet.",
            ),
            Phase::Ready(exercises) => {
                let items: Vec<Element<'a, Message>> = exercises
                    .iter()
                    .enumerate()
                    .map(|(index, exercise)| {
                        widgets::text_row(cs, &exercise.name, Message::Open(index))
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
