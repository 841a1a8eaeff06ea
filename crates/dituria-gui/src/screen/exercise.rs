use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Task};

use dituria_api::catalog::types::ExerciseDetail;
use dituria_api::catalog::CatalogClient;
use dituria_api::traits::CatalogService;
use dituria_core::loadstate::{LoadState, Phase};

use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{self, cover::CoverCache};

/// Detail view for one exercise: the question resource plus the
/// canonical solution, both rendered externally.
pub struct ExerciseScreen {
    state: LoadState<String, ExerciseDetail>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        id: String,
        result: Result<serde_json::Value, String>,
    },
    OpenQuestion,
    OpenSolution,
}

impl ExerciseScreen {
    /// Build the screen for `id` and fire its fetch.
    pub fn open(id: String, client: &CatalogClient) -> (Self, Task<Message>) {
        let mut state = LoadState::new();
        state.begin(id.clone());
        let client = client.clone();
        let task = Task::perform(
            async move {
                let result = client.exercise(&id).await.map_err(|e| e.to_string());
                (id, result)
            },
            |(id, result)| Message::Loaded { id, result },
        );
        (Self { state }, task)
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::Loaded { id, result } => match result {
                Ok(payload) => match serde_json::from_value::<ExerciseDetail>(payload) {
                    Ok(detail) => {
                        let title = format!("Exercise {}", detail.name);
                        if self.state.resolve(&id, detail) {
                            Action::SetTitle(title)
                        } else {
                            Action::None
                        }
                    }
                    Err(e) => {
                        tracing::warn!("malformed exercise payload for {id}: {e}");
                        self.state.reject(&id, "Could not load exercise.");
                        Action::None
                    }
                },
                Err(e) => {
                    tracing::warn!("failed to load exercise {id}: {e}");
                    self.state.reject(&id, e);
                    Action::None
                }
            },
            Message::OpenQuestion => {
                match self
                    .state
                    .data()
                    .and_then(|detail| detail.question_webview_url.clone())
                {
                    Some(url) => Action::OpenUrl(url),
                    None => Action::None,
                }
            }
            Message::OpenSolution => {
                match self
                    .state
                    .data()
                    .and_then(|detail| detail.canonical_solution())
                    .and_then(|solution| solution.webview_url.clone())
                {
                    Some(url) => Action::OpenUrl(url),
                    None => Action::None,
                }
            }
        }
    }

    pub fn view<'a>(&'a self, cs: &'a ColorScheme, _covers: &'a CoverCache) -> Element<'a, Message> {
        let detail = match self.state.phase() {
            Phase::Idle | Phase::Pending => return widgets::loading(cs),
            Phase::Failed(message) => return widgets::error_state(cs, message),
            Phase::Ready(detail) => detail,
        };

        if detail.question_webview_url.is_none() {
            return widgets::error_state(cs, "Could not load exercise.");
        }

        let mut sections = column![section(
            cs,
            "Question",
            "Open the question in your browser.",
            button(text("Open question").size(style::TEXT_SM))
                .padding([style::SPACE_SM, style::SPACE_XL])
                .on_press(Message::OpenQuestion)
                .style(theme::ghost_button(cs))
                .into(),
        )]
        .spacing(style::SPACE_LG);

        // The solved view is only reachable when a solution exists;
        // the first one in server order is canonical.
        if detail
            .canonical_solution()
            .is_some_and(|s| s.webview_url.is_some())
        {
            sections = sections.push(section(
                cs,
                "Solution",
                "Open the worked solution in your browser.",
                button(text("Open solution").size(style::TEXT_SM))
                    .padding([style::SPACE_SM, style::SPACE_XL])
                    .on_press(Message::OpenSolution)
                    .style(theme::primary_button(cs))
                    .into(),
            ));
        }

        container(sections)
            .padding(style::SPACE_XL)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// One titled card section with a trailing action.
fn section<'a>(
    cs: &'a ColorScheme,
    title: &'a str,
    subtitle: &'a str,
    action: Element<'a, Message>,
) -> Element<'a, Message> {
    container(
        row![
            column![
                text(title)
                    .size(style::TEXT_LG)
                    .font(style::FONT_HEADING)
                    .line_height(style::LINE_HEIGHT_TIGHT),
                text(subtitle)
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            ]
            .spacing(style::SPACE_XXS)
            .width(Length::Fill),
            action,
        ]
        .spacing(style::SPACE_MD)
        .align_y(Alignment::Center),
    )
    .style(theme::card(cs))
    .padding(style::SPACE_LG)
    .width(Length::Fill)
    .into()
}
