use iced::widget::column;
use iced::{Element, Length, Task};

use dituria_api::catalog::types::Textbook;
use dituria_api::catalog::CatalogClient;
use dituria_api::traits::CatalogService;
use dituria_core::loadstate::{LoadState, Phase};

use crate::screen::{Action, PushTarget};
use crate::style;
use crate::theme::ColorScheme;
use crate::widgets::{self, cover::CoverCache};

/// Root list of all textbooks.
pub struct Textbooks {
    state: LoadState<(), Vec<Textbook>>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<Textbook>, String>),
    Open(usize),
}

impl Textbooks {
    /// Build the screen and fire its fetch.
    pub fn open(client: &CatalogClient) -> (Self, Task<Message>) {
        let mut state = LoadState::new();
        state.begin(());
        let client = client.clone();
        let task = Task::perform(
            async move { client.textbooks().await.map_err(|e| e.to_string()) },
            Message::Loaded,
        );
        (Self { state }, task)
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::Loaded(Ok(textbooks)) => {
                let covers = textbooks
                    .iter()
                    .map(|t| (widgets::cover::key("textbook", &t.id), t.cover.clone()))
                    .collect();
                if self.state.resolve(&(), textbooks) {
                    Action::RequestCovers(covers)
                } else {
                    Action::None
                }
            }
            Message::Loaded(Err(e)) => {
                tracing::warn!("failed to load textbooks: {e}");
                self.state.reject(&(), e);
                Action::None
            }
            Message::Open(index) => match self.state.data().and_then(|books| books.get(index)) {
                Some(book) => Action::Push(PushTarget::Textbook {
                    id: book.id.clone(),
                    title: book.title.clone(),
                }),
                None => Action::None,
            },
        }
    }

    pub fn view<'a>(&'a self, cs: &'a ColorScheme, covers: &'a CoverCache) -> Element<'a, Message> {
        match self.state.phase() {
            Phase::Idle | Phase::Pending => widgets::loading(cs),
            Phase::Failed(message) => widgets::error_state(cs, message),
            Phase::Ready(books) if books.is_empty() => widgets::empty_state(
                cs,
                lucide_icons::iced::icon_book()
                    .size(style::TEXT_2XL)
                    .color(cs.outline)
                    .into(),
                "No textbooks available",
                "The catalog has nothing here yet.",
            ),
            Phase::Ready(books) => {
                let items: Vec<Element<'a, Message>> = books
                    .iter()
                    .enumerate()
                    .map(|(index, book)| {
                        widgets::media_row(
                            cs,
                            covers,
                            widgets::cover::key("textbook", &book.id),
                            style::THUMB_WIDTH,
                            style::THUMB_HEIGHT,
                            &book.title,
                            book.author.as_deref(),
                            Some(book.publisher_name()),
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
