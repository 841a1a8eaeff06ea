pub mod chapter;
pub mod deck;
pub mod decks;
pub mod exercise;
pub mod textbook;
pub mod textbooks;
pub mod video;
pub mod videos;

use iced::Task;

use dituria_api::catalog::types::Video;

/// Catalog sections selectable from the navigation rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Textbooks,
    Videos,
    Decks,
}

/// Per-screen state, one variant per screen family.
pub enum Screen {
    Textbooks(textbooks::Textbooks),
    Textbook(textbook::TextbookScreen),
    Chapter(chapter::ChapterScreen),
    Exercise(exercise::ExerciseScreen),
    Decks(decks::Decks),
    Deck(deck::DeckScreen),
    Videos(videos::Videos),
    Video(video::VideoScreen),
}

/// A message addressed to one stack entry.
///
/// The app router delivers these by ScreenId; a message for an entry
/// that has been popped is dropped, which is what makes in-flight
/// fetch results safe across navigation.
#[derive(Debug, Clone)]
pub enum ScreenMessage {
    Textbooks(textbooks::Message),
    Textbook(textbook::Message),
    Chapter(chapter::Message),
    Exercise(exercise::Message),
    Decks(decks::Message),
    Deck(deck::Message),
    Videos(videos::Message),
    Video(video::Message),
}

/// What a screen asks the router to do after handling a message.
///
/// Screens return these from `update()` instead of mutating shared
/// state directly — the app interprets them in one place.
pub enum Action {
    /// No side-effect.
    None,
    /// Push a new screen onto the current stack.
    Push(PushTarget),
    /// Publish the title discovered for this screen's stack entry.
    SetTitle(String),
    /// Run an async task addressed back to this screen.
    Run(Task<ScreenMessage>),
    /// Download covers for the given (key, url) pairs.
    RequestCovers(Vec<(String, Option<String>)>),
    /// Open an external resource in the system browser.
    OpenUrl(String),
}

/// Destinations a screen can navigate to.
#[derive(Debug, Clone)]
pub enum PushTarget {
    /// Title is known from the list row and passed forward.
    Textbook { id: String, title: String },
    /// Title is unknown until the chapter payload arrives.
    Chapter { id: String },
    /// Title is unknown until the exercise payload arrives.
    Exercise { id: String },
    /// Title is known from the list row and passed forward.
    Deck { id: String, title: String },
    /// The video screen is fed entirely by forwarded parameters.
    Video(Box<Video>),
}
