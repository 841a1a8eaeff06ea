//! Trait definition for the catalog service seam.
//!
//! Screens and the core are written against this trait rather than the
//! concrete client, so a fixture implementation can stand in during
//! testing.

use std::future::Future;

use serde_json::Value;

use crate::catalog::types::{DeckSummary, Textbook, Video};

/// The remote catalog: collection listings plus per-resource detail
/// payloads.
///
/// Detail endpoints return the payload as raw JSON because the server
/// answers with either a bare child array or a wrapped detail object;
/// normalization is the caller's concern.
pub trait CatalogService: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// List all textbooks.
    fn textbooks(&self) -> impl Future<Output = Result<Vec<Textbook>, Self::Error>> + Send;

    /// Fetch one textbook's detail payload (title + chapter list).
    fn textbook(&self, id: &str) -> impl Future<Output = Result<Value, Self::Error>> + Send;

    /// Fetch one chapter's detail payload (name + exercise list).
    fn chapter(&self, id: &str) -> impl Future<Output = Result<Value, Self::Error>> + Send;

    /// Fetch one exercise's detail payload (question + solutions).
    fn exercise(&self, id: &str) -> impl Future<Output = Result<Value, Self::Error>> + Send;

    /// List all flashcard decks.
    fn decks(&self) -> impl Future<Output = Result<Vec<DeckSummary>, Self::Error>> + Send;

    /// Fetch one deck's detail payload (name + flashcards).
    fn deck(&self, id: &str) -> impl Future<Output = Result<Value, Self::Error>> + Send;

    /// List all videos.
    fn videos(&self) -> impl Future<Output = Result<Vec<Video>, Self::Error>> + Send;
}
