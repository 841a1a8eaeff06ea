use std::collections::HashSet;

use iced::widget::{button, column, container, row, text};
use iced::{Element, Length, Task};

use dituria_api::catalog::types::Flashcard;
use dituria_api::catalog::CatalogClient;
use dituria_api::traits::CatalogService;
use dituria_core::hierarchy;
use dituria_core::loadstate::{LoadState, Phase};

use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{self, cover::CoverCache};

const CARDS_PER_ROW: usize = 3;

/// Flip-card study view for one deck.
///
/// Each card is a self-contained two-state toggle: clicking shows the
/// back, clicking again shows the front.
pub struct DeckScreen {
    state: LoadState<String, Vec<Flashcard>>,
    flipped: HashSet<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        id: String,
        result: Result<serde_json::Value, String>,
    },
    Flip(String),
}

impl DeckScreen {
    /// Build the screen for `id` and fire its fetch.
    pub fn open(id: String, client: &CatalogClient) -> (Self, Task<Message>) {
        let mut state = LoadState::new();
        state.begin(id.clone());
        let client = client.clone();
        let task = Task::perform(
            async move {
                let result = client.deck(&id).await.map_err(|e| e.to_string());
                (id, result)
            },
            |(id, result)| Message::Loaded { id, result },
        );
        (
            Self {
                state,
                flipped: HashSet::new(),
            },
            task,
        )
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::Loaded { id, result } => match result {
                Ok(payload) => {
                    let name = hierarchy::text_field(&payload, "name");
                    let flashcards = hierarchy::children(&payload, "flashcards");
                    if self.state.resolve(&id, flashcards) {
                        if let Some(name) = name {
                            return Action::SetTitle(name);
                        }
                    }
                    Action::None
                }
                Err(e) => {
                    tracing::warn!("failed to load deck {id}: {e}");
                    self.state.reject(&id, e);
                    Action::None
                }
            },
            Message::Flip(card_id) => {
                if !self.flipped.remove(&card_id) {
                    self.flipped.insert(card_id);
                }
                Action::None
            }
        }
    }

    pub fn view<'a>(&'a self, cs: &'a ColorScheme, _covers: &'a CoverCache) -> Element<'a, Message> {
        let flashcards = match self.state.phase() {
            Phase::Idle | Phase::Pending => return widgets::loading(cs),
            Phase::Failed(message) => return widgets::error_state(cs, message),
            Phase::Ready(flashcards) => flashcards,
        };

        if flashcards.is_empty() {
            return widgets::empty_state(
                cs,
                lucide_icons::iced::icon_layers()
                    .size(style::TEXT_2XL)
                    .color(cs.outline)
                    .into(),
                "No flashcards",
                "This deck has no cards yet.",
            );
        }

        let rows: Vec<Element<'a, Message>> = flashcards
            .chunks(CARDS_PER_ROW)
            .map(|chunk| {
                let cards: Vec<Element<'a, Message>> = chunk
                    .iter()
                    .map(|card| self.flashcard(cs, card))
                    .collect();
                row(cards).spacing(style::SPACE_MD).into()
            })
            .collect();

        widgets::styled_scrollable(
            column(rows)
                .spacing(style::SPACE_MD)
                .padding([style::SPACE_LG, style::SPACE_LG]),
        )
        .height(Length::Fill)
        .into()
    }

    fn flashcard<'a>(&'a self, cs: &'a ColorScheme, card: &'a Flashcard) -> Element<'a, Message> {
        let is_flipped = self.flipped.contains(&card.id);
        let face = if is_flipped {
            &card.back.text
        } else {
            &card.front.text
        };

        button(
            container(
                text(face)
                    .size(style::TEXT_BASE)
                    .line_height(style::LINE_HEIGHT_NORMAL)
                    .center(),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        )
        .width(Length::Fixed(style::CARD_WIDTH))
        .height(Length::Fixed(style::CARD_HEIGHT))
        .padding(style::SPACE_MD)
        .on_press(Message::Flip(card.id.clone()))
        .style(theme::flashcard(is_flipped, cs))
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn screen_with_pending(id: &str) -> DeckScreen {
        let mut state = LoadState::new();
        state.begin(id.to_string());
        DeckScreen {
            state,
            flipped: HashSet::new(),
        }
    }

    #[test]
    fn test_http_failure_reaches_failed_without_title() {
        let mut screen = screen_with_pending("D9");
        let action = screen.update(Message::Loaded {
            id: "D9".into(),
            result: Err("API error (status 404): deck not found".into()),
        });

        assert!(matches!(action, Action::None));
        assert!(screen.state.error().unwrap().contains("404"));
    }

    #[test]
    fn test_successful_load_publishes_deck_name() {
        let mut screen = screen_with_pending("D1");
        let payload = json!({
            "id": "D1",
            "name": "Biology basics",
            "flashcards": [
                { "id": "c1", "front": { "text": "cell" }, "back": { "text": "basic unit of life" } }
            ]
        });
        let action = screen.update(Message::Loaded {
            id: "D1".into(),
            result: Ok(payload),
        });

        match action {
            Action::SetTitle(title) => assert_eq!(title, "Biology basics"),
            _ => panic!("expected a title publish"),
        }
        assert_eq!(screen.state.data().unwrap().len(), 1);
    }

    #[test]
    fn test_flip_is_a_two_state_toggle() {
        let mut screen = screen_with_pending("D1");
        screen.update(Message::Flip("c1".into()));
        assert!(screen.flipped.contains("c1"));
        screen.update(Message::Flip("c1".into()));
        assert!(!screen.flipped.contains("c1"));
    }
}
