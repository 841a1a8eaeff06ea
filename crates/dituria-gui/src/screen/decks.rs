use iced::widget::column;
use iced::{Element, Length, Task};

use dituria_api::catalog::types::DeckSummary;
use dituria_api::catalog::CatalogClient;
use dituria_api::traits::CatalogService;
use dituria_core::loadstate::{LoadState, Phase};

use crate::screen::{Action, PushTarget};
use crate::style;
use crate::theme::ColorScheme;
use crate::widgets::{self, cover::CoverCache};

/// Root list of all flashcard decks.
pub struct Decks {
    state: LoadState<(), Vec<DeckSummary>>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<DeckSummary>, String>),
    Open(usize),
}

impl Decks {
    /// Build the screen and fire its fetch.
    pub fn open(client: &CatalogClient) -> (Self, Task<Message>) {
        let mut state = LoadState::new();
        state.begin(());
        let client = client.clone();
        let task = Task::perform(
            async move { client.decks().await.map_err(|e| e.to_string()) },
            Message::Loaded,
        );
        (Self { state }, task)
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::Loaded(Ok(decks)) => {
                let covers = decks
                    .iter()
                    .map(|d| (widgets::cover::key("deck", &d.id), d.cover.clone()))
                    .collect();
                if self.state.resolve(&(), decks) {
                    Action::RequestCovers(covers)
                } else {
                    Action::None
                }
            }
            Message::Loaded(Err(e)) => {
                tracing::warn!("failed to load decks: {e}");
                self.state.reject(&(), e);
                Action::None
            }
            Message::Open(index) => match self.state.data().and_then(|decks| decks.get(index)) {
                Some(deck) => Action::Push(PushTarget::Deck {
                    id: deck.id.clone(),
                    title: deck.name.clone(),
                }),
                None => Action::None,
            },
        }
    }

    pub fn view<'a>(&'a self, cs: &'a ColorScheme, covers: &'a CoverCache) -> Element<'a, Message> {
        match self.state.phase() {
            Phase::Idle | Phase::Pending => widgets::loading(cs),
            Phase::Failed(message) => widgets::error_state(cs, message),
            Phase::Ready(decks) if decks.is_empty() => widgets::empty_state(
                cs,
                lucide_icons::iced::icon_layers()
                    .size(style::TEXT_2XL)
                    .color(cs.outline)
                    .into(),
                "No decks available",
                "The catalog has nothing here yet.",
            ),
            Phase::Ready(decks) => {
                let items: Vec<Element<'a, Message>> = decks
                    .iter()
                    .enumerate()
                    .map(|(index, deck)| {
                        widgets::media_row(
                            cs,
                            covers,
                            widgets::cover::key("deck", &deck.id),
                            style::THUMB_WIDTH,
                            style::THUMB_HEIGHT,
                            &deck.name,
                            None,
                            None,
                            Message::Open(index),
                        )
                    })
                    .collect();

                widgets::styled_scrollable(
                    column(items)
                        .spacing(style::SPACE_XXS)
                        .padding([style::SPACE_XS, style::SPACE_LG]),
                )
                .height(Length::Fill)
                .into()
            }
        }
    }
}
