use chrono::{DateTime, Utc};
use serde::Deserialize;

// ── Shared references ────────────────────────────────────────────

/// A named reference embedded in a summary (subject, grade, publisher).
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

// ── Textbooks ────────────────────────────────────────────────────

/// A textbook summary as returned by the collection endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Textbook {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub cover_blur_hash: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub subject: Option<NamedRef>,
    #[serde(default)]
    pub grade: Option<NamedRef>,
    #[serde(default)]
    pub publisher: Option<NamedRef>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Textbook {
    /// Publisher name for display.
    pub fn publisher_name(&self) -> &str {
        self.publisher
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("Unknown Publisher")
    }
}

/// One chapter row inside a textbook's child collection.
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterSummary {
    pub id: String,
    pub name: String,
}

/// One exercise row inside a chapter's child collection.
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseSummary {
    pub id: String,
    pub name: String,
}

/// A solution attached to an exercise, rendered externally.
#[derive(Debug, Clone, Deserialize)]
pub struct Solution {
    pub id: String,
    #[serde(default)]
    pub webview_url: Option<String>,
}

/// Full exercise detail with its renderable question and solutions.
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseDetail {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub question_webview_url: Option<String>,
    #[serde(default)]
    pub solutions: Vec<Solution>,
}

impl ExerciseDetail {
    /// The canonical solution: the first one in server order, if any.
    pub fn canonical_solution(&self) -> Option<&Solution> {
        self.solutions.first()
    }
}

// ── Decks ────────────────────────────────────────────────────────

/// A flashcard deck summary.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cover: Option<String>,
}

/// One face of a flashcard.
#[derive(Debug, Clone, Deserialize)]
pub struct CardFace {
    #[serde(default)]
    pub text: String,
}

/// A flashcard with exactly two faces.
#[derive(Debug, Clone, Deserialize)]
pub struct Flashcard {
    pub id: String,
    pub front: CardFace,
    pub back: CardFace,
}

// ── Videos ───────────────────────────────────────────────────────

/// A video lesson. `subject` is a raw category id, mapped to a display
/// name client-side.
#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub youtube_id: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_textbook_list() {
        let json = r#"[
            {
                "id": "t1",
                "slug": "algebra-i",
                "title": "Algebra I",
                "author": "A. Author",
                "cover": "https://cdn.example.com/covers/t1.jpg",
                "cover_blur_hash": "LEHV6nWB2yk8",
                "external_url": null,
                "subject": { "_id": "s1", "name": "Matematikë" },
                "grade": { "_id": "g1", "name": "Klasa 10" },
                "publisher": { "_id": "p1", "name": "Botime X" },
                "createdAt": "2025-02-13T09:30:00.000Z",
                "updatedAt": "2025-02-14T10:00:00.000Z"
            },
            {
                "id": "t2",
                "title": "Fizika"
            }
        ]"#;

        let books: Vec<Textbook> = serde_json::from_str(json).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, "t1");
        assert_eq!(books[0].title, "Algebra I");
        assert_eq!(books[0].publisher_name(), "Botime X");
        assert_eq!(books[0].subject.as_ref().unwrap().name, "Matematikë");
        assert!(books[0].created_at.is_some());
        // Sparse summary still parses; publisher falls back.
        assert_eq!(books[1].publisher_name(), "Unknown Publisher");
        assert!(books[1].cover.is_none());
    }

    #[test]
    fn test_deserialize_exercise_with_solutions() {
        let json = r#"{
            "id": "e1",
            "name": "1.4",
            "question_webview_url": "https://example.com/q/e1",
            "solutions": [
                { "id": "s1", "webview_url": "https://example.com/s/s1" },
                { "id": "s2", "webview_url": "https://example.com/s/s2" }
            ]
        }"#;

        let detail: ExerciseDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.name, "1.4");
        assert_eq!(detail.solutions.len(), 2);
        // The first solution in server order is canonical.
        assert_eq!(detail.canonical_solution().unwrap().id, "s1");
    }

    #[test]
    fn test_deserialize_exercise_without_solutions() {
        let json = r#"{ "id": "e2", "name": "2.1", "question_webview_url": "https://example.com/q/e2" }"#;
        let detail: ExerciseDetail = serde_json::from_str(json).unwrap();
        assert!(detail.solutions.is_empty());
        assert!(detail.canonical_solution().is_none());
    }

    #[test]
    fn test_deserialize_flashcards() {
        let json = r#"[
            { "id": "c1", "front": { "text": "photosynthesis" }, "back": { "text": "light → chemical energy" } },
            { "id": "c2", "front": { "text": "mitosis" }, "back": {} }
        ]"#;

        let cards: Vec<Flashcard> = serde_json::from_str(json).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].front.text, "photosynthesis");
        // A face with no text still has two well-formed sides.
        assert_eq!(cards[1].back.text, "");
    }

    #[test]
    fn test_deserialize_video_with_and_without_subject() {
        let json = r#"[
            {
                "id": "v1",
                "title": "Algebra Basics",
                "cover": "https://cdn.example.com/v1.jpg",
                "youtube_id": "dQw4w9WgXcQ",
                "subject": "67add41bbda4fc7efa50752e"
            },
            { "id": "v2", "title": "Calculus" }
        ]"#;

        let videos: Vec<Video> = serde_json::from_str(json).unwrap();
        assert_eq!(videos[0].subject.as_deref(), Some("67add41bbda4fc7efa50752e"));
        assert!(videos[1].subject.is_none());
        assert!(videos[1].youtube_id.is_none());
    }
}
