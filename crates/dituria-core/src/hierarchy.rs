//! Normalization of parent payload shapes into child collections.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Extract the ordered child collection from a parent payload.
///
/// Detail endpoints answer with either a bare array of children or an
/// object carrying a named child-collection field. Anything else
/// degrades to an empty list, so a malformed payload renders as "no
/// items" instead of a failure. Items that fail to deserialize are
/// skipped. Server order is preserved; nothing is sorted, paginated,
/// or deduplicated.
pub fn children<T: DeserializeOwned>(payload: &Value, field: &str) -> Vec<T> {
    let items = match payload {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get(field) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => {
                tracing::debug!("payload has no {field} collection, rendering empty");
                return Vec::new();
            }
        },
        _ => {
            tracing::debug!("unexpected payload shape for {field}, rendering empty");
            return Vec::new();
        }
    };

    items
        .iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect()
}

/// Read a top-level string field from a payload — the parent's display
/// title lives here. A bare-array payload has no such field.
pub fn text_field(payload: &Value, name: &str) -> Option<String> {
    payload.get(name).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dituria_api::catalog::types::{ChapterSummary, ExerciseSummary};
    use serde_json::json;

    #[test]
    fn test_wrapped_object_yields_inner_list() {
        let payload = json!({
            "id": "c1",
            "name": "Thyesat",
            "exercises": [
                { "id": "e1", "name": "1.1" },
                { "id": "e2", "name": "1.2" }
            ]
        });

        let exercises: Vec<ExerciseSummary> = children(&payload, "exercises");
        assert_eq!(exercises.len(), 2);
        assert_eq!(exercises[0].id, "e1");
        assert_eq!(exercises[1].name, "1.2");
    }

    #[test]
    fn test_bare_array_passes_through_unchanged() {
        let payload = json!([
            { "id": "e1", "name": "1.1" },
            { "id": "e2", "name": "1.2" },
            { "id": "e3", "name": "1.3" }
        ]);

        let exercises: Vec<ExerciseSummary> = children(&payload, "exercises");
        assert_eq!(
            exercises.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            ["e1", "e2", "e3"]
        );
    }

    #[test]
    fn test_empty_object_yields_empty_list() {
        let payload = json!({});
        let exercises: Vec<ExerciseSummary> = children(&payload, "exercises");
        assert!(exercises.is_empty());
    }

    #[test]
    fn test_malformed_shapes_degrade_to_empty() {
        let chapters: Vec<ChapterSummary> = children(&json!("oops"), "chapters");
        assert!(chapters.is_empty());

        let chapters: Vec<ChapterSummary> = children(&json!({ "chapters": "oops" }), "chapters");
        assert!(chapters.is_empty());

        let chapters: Vec<ChapterSummary> = children(&json!(null), "chapters");
        assert!(chapters.is_empty());
    }

    #[test]
    fn test_undecodable_items_are_skipped() {
        let payload = json!({
            "chapters": [
                { "id": "c1", "name": "Ch.1" },
                { "name": "missing id" },
                { "id": "c3", "name": "Ch.3" }
            ]
        });

        let chapters: Vec<ChapterSummary> = children(&payload, "chapters");
        assert_eq!(
            chapters.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            ["c1", "c3"]
        );
    }

    #[test]
    fn test_text_field() {
        let payload = json!({ "title": "Algebra I", "chapters": [] });
        assert_eq!(text_field(&payload, "title").as_deref(), Some("Algebra I"));
        assert_eq!(text_field(&payload, "name"), None);
        assert_eq!(text_field(&json!([1, 2]), "title"), None);
    }
}
