use std::path::PathBuf;

use iced::widget::{button, column, container, row, rule, text};
use iced::{Alignment, Element, Length, Task, Theme};

use dituria_api::catalog::{CatalogClient, DEFAULT_BASE_URL};
use dituria_core::config::AppConfig;
use dituria_core::nav::{NavStack, ScreenId};

use crate::screen::{
    chapter, deck, decks, exercise, textbook, textbooks, video, videos, Action, PushTarget,
    Screen, ScreenMessage, Tab,
};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::cover::{self, CoverCache, CoverState};

/// Application state — a navigation rail, a screen stack, and the
/// shared catalog client.
///
/// The app is a slim router: screens own their load state, and every
/// cross-screen effect travels through an [`Action`] interpreted here.
pub struct Dituria {
    client: CatalogClient,
    tab: Tab,
    stack: NavStack<Screen>,
    scheme: ColorScheme,
    covers: CoverCache,
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    Back,
    /// A message addressed to one stack entry. Results for popped
    /// entries are dropped here, not in the screens.
    Screen(ScreenId, ScreenMessage),
    CoverLoaded {
        key: String,
        result: Result<PathBuf, String>,
    },
}

impl Dituria {
    pub fn new(base_override: Option<String>) -> (Self, Task<Message>) {
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("falling back to default config: {e}");
            AppConfig::default()
        });

        let base_url = base_override.unwrap_or_else(|| config.api.base_url.clone());
        let client = CatalogClient::new(&base_url).unwrap_or_else(|e| {
            tracing::warn!("invalid base URL {base_url:?}: {e}");
            CatalogClient::new(DEFAULT_BASE_URL).expect("built-in base URL is valid")
        });

        let scheme = theme::resolve(config.appearance.mode);

        let mut app = Self {
            client,
            tab: Tab::default(),
            stack: NavStack::new(),
            scheme,
            covers: CoverCache::default(),
        };
        let task = app.open_root(Tab::default());
        (app, task)
    }

    pub fn title(&self) -> String {
        String::from("Dituria")
    }

    pub fn theme(&self) -> Theme {
        theme::build_theme(&self.scheme)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                if self.tab == tab && self.stack.depth() == 1 {
                    return Task::none();
                }
                self.tab = tab;
                self.open_root(tab)
            }
            Message::Back => {
                self.stack.pop();
                Task::none()
            }
            Message::Screen(id, msg) => {
                let Some(entry) = self.stack.entry_mut(id) else {
                    // The screen was popped while its work was in
                    // flight; its result must not touch anything.
                    tracing::debug!("dropping message for popped screen");
                    return Task::none();
                };
                let action = match (&mut entry.screen, msg) {
                    (Screen::Textbooks(s), ScreenMessage::Textbooks(m)) => s.update(m),
                    (Screen::Textbook(s), ScreenMessage::Textbook(m)) => s.update(m),
                    (Screen::Chapter(s), ScreenMessage::Chapter(m)) => s.update(m),
                    (Screen::Exercise(s), ScreenMessage::Exercise(m)) => s.update(m),
                    (Screen::Decks(s), ScreenMessage::Decks(m)) => s.update(m),
                    (Screen::Deck(s), ScreenMessage::Deck(m)) => s.update(m),
                    (Screen::Videos(s), ScreenMessage::Videos(m)) => s.update(m),
                    (Screen::Video(s), ScreenMessage::Video(m)) => s.update(m),
                    _ => Action::None,
                };
                self.perform(id, action)
            }
            Message::CoverLoaded { key, result } => {
                let state = match result {
                    Ok(path) => CoverState::Loaded(path),
                    Err(_) => CoverState::Failed,
                };
                self.covers.states.insert(key, state);
                Task::none()
            }
        }
    }

    /// Interpret an Action returned by a screen.
    fn perform(&mut self, id: ScreenId, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::Push(target) => self.push(target),
            Action::SetTitle(title) => {
                if !self.stack.set_title(id, title) {
                    tracing::debug!("dropping title for popped screen");
                }
                Task::none()
            }
            Action::Run(task) => task.map(move |m| Message::Screen(id, m)),
            Action::RequestCovers(items) => self.request_covers(items),
            Action::OpenUrl(url) => {
                if let Err(e) = open::that(&url) {
                    tracing::warn!("failed to open {url}: {e}");
                }
                Task::none()
            }
        }
    }

    /// Reset the stack to a section's root screen.
    fn open_root(&mut self, tab: Tab) -> Task<Message> {
        let (screen, title, task) = match tab {
            Tab::Textbooks => {
                let (s, t) = textbooks::Textbooks::open(&self.client);
                (
                    Screen::Textbooks(s),
                    "Textbooks",
                    t.map(ScreenMessage::Textbooks),
                )
            }
            Tab::Videos => {
                let (s, t) = videos::Videos::open(&self.client);
                (Screen::Videos(s), "Videos", t.map(ScreenMessage::Videos))
            }
            Tab::Decks => {
                let (s, t) = decks::Decks::open(&self.client);
                (Screen::Decks(s), "Decks", t.map(ScreenMessage::Decks))
            }
        };
        let id = self.stack.reset(screen, title);
        task.map(move |m| Message::Screen(id, m))
    }

    /// Push a detail screen. Titles known to the navigating screen are
    /// forwarded and shown immediately; the rest start as placeholders
    /// overwritten when the fetch resolves.
    fn push(&mut self, target: PushTarget) -> Task<Message> {
        let (screen, title, task) = match target {
            PushTarget::Textbook { id, title } => {
                let (s, t) = textbook::TextbookScreen::open(id, &self.client);
                (Screen::Textbook(s), title, t.map(ScreenMessage::Textbook))
            }
            PushTarget::Chapter { id } => {
                let (s, t) = chapter::ChapterScreen::open(id, &self.client);
                (
                    Screen::Chapter(s),
                    "Chapter".to_string(),
                    t.map(ScreenMessage::Chapter),
                )
            }
            PushTarget::Exercise { id } => {
                let (s, t) = exercise::ExerciseScreen::open(id, &self.client);
                (
                    Screen::Exercise(s),
                    "Exercise".to_string(),
                    t.map(ScreenMessage::Exercise),
                )
            }
            PushTarget::Deck { id, title } => {
                let (s, t) = deck::DeckScreen::open(id, &self.client);
                (Screen::Deck(s), title, t.map(ScreenMessage::Deck))
            }
            PushTarget::Video(v) => {
                let title = v.title.clone();
                let s = video::VideoScreen::open(*v);
                (Screen::Video(s), title, Task::none())
            }
        };
        let id = self.stack.push(screen, title);
        task.map(move |m| Message::Screen(id, m))
    }

    /// Start cover downloads for entities that don't have one yet.
    fn request_covers(&mut self, items: Vec<(String, Option<String>)>) -> Task<Message> {
        let mut tasks = Vec::new();
        for (key, url) in items {
            let Some(url) = url else {
                // No URL — mark failed so the placeholder renders.
                self.covers
                    .states
                    .entry(key)
                    .or_insert(CoverState::Failed);
                continue;
            };
            if self.covers.states.contains_key(&key) {
                continue;
            }
            let path = cover::cover_path(&key);
            if path.exists() {
                self.covers.states.insert(key, CoverState::Loaded(path));
                continue;
            }
            self.covers
                .states
                .insert(key.clone(), CoverState::Loading);
            tasks.push(Task::perform(
                cover::fetch_cover(key.clone(), url),
                move |result| Message::CoverLoaded {
                    key: key.clone(),
                    result,
                },
            ));
        }
        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = &self.scheme;
        let rail = self.nav_rail(cs);
        let header = self.header(cs);

        let body: Element<'_, Message> = match self.stack.top() {
            Some(entry) => {
                let id = entry.id;
                let inner: Element<'_, ScreenMessage> = match &entry.screen {
                    Screen::Textbooks(s) => {
                        s.view(cs, &self.covers).map(ScreenMessage::Textbooks)
                    }
                    Screen::Textbook(s) => s.view(cs, &self.covers).map(ScreenMessage::Textbook),
                    Screen::Chapter(s) => s.view(cs, &self.covers).map(ScreenMessage::Chapter),
                    Screen::Exercise(s) => s.view(cs, &self.covers).map(ScreenMessage::Exercise),
                    Screen::Decks(s) => s.view(cs, &self.covers).map(ScreenMessage::Decks),
                    Screen::Deck(s) => s.view(cs, &self.covers).map(ScreenMessage::Deck),
                    Screen::Videos(s) => s.view(cs, &self.covers).map(ScreenMessage::Videos),
                    Screen::Video(s) => s.view(cs, &self.covers).map(ScreenMessage::Video),
                };
                inner.map(move |m| Message::Screen(id, m))
            }
            None => container(text("")).into(),
        };

        let content = column![header, rule::horizontal(1), body].height(Length::Fill);

        row![rail, content].height(Length::Fill).into()
    }

    /// Header bar: back button (when there is somewhere to go back to)
    /// plus the top entry's display title.
    fn header<'a>(&'a self, cs: &'a ColorScheme) -> Element<'a, Message> {
        let title = self.stack.top().map(|e| e.title.as_str()).unwrap_or("");

        let mut bar = row![]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center);

        if self.stack.depth() > 1 {
            bar = bar.push(
                button(
                    lucide_icons::iced::icon_arrow_left()
                        .size(style::TEXT_LG)
                        .color(cs.on_surface)
                        .center(),
                )
                .padding(style::SPACE_XS)
                .on_press(Message::Back)
                .style(theme::icon_button(cs)),
            );
        }

        bar = bar.push(
            text(title)
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
        );

        container(bar)
            .padding([style::SPACE_SM, style::SPACE_LG])
            .height(Length::Fixed(style::HEADER_HEIGHT))
            .align_y(Alignment::Center)
            .width(Length::Fill)
            .into()
    }

    fn nav_rail<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let nav_item = |icon: iced::widget::Text<'static>, label: &'static str, tab: Tab| {
            let active = self.tab == tab;
            button(
                column![
                    icon.size(style::NAV_ICON_SIZE).center(),
                    text(label)
                        .size(style::NAV_LABEL_SIZE)
                        .line_height(style::LINE_HEIGHT_LOOSE)
                        .center(),
                ]
                .align_x(Alignment::Center)
                .spacing(style::SPACE_XXS)
                .width(Length::Fill),
            )
            .width(Length::Fixed(64.0))
            .padding([style::SPACE_SM, style::SPACE_XS])
            .on_press(Message::TabSelected(tab))
            .style(theme::nav_rail_item(active, cs))
        };

        use lucide_icons::iced as icons;

        let rail = column![
            nav_item(icons::icon_book(), "Textbooks", Tab::Textbooks),
            nav_item(icons::icon_play(), "Videos", Tab::Videos),
            nav_item(icons::icon_layers(), "Decks", Tab::Decks),
        ]
        .spacing(style::SPACE_XS)
        .align_x(Alignment::Center)
        .width(Length::Fill);

        container(rail)
            .style(theme::nav_rail_bg(cs))
            .width(Length::Fixed(style::NAV_RAIL_WIDTH))
            .height(Length::Fill)
            .padding(iced::Padding::new(0.0).top(style::SPACE_LG))
            .into()
    }
}
