//! Client-side filtering for the video catalog.

use dituria_api::catalog::types::Video;

/// Apply the search query and subject filter to a loaded collection.
///
/// The query is a case-insensitive **prefix** match on the title — a
/// "starts with" search box, not substring search. The subject filter
/// compares raw category ids exactly. The two compose by conjunction;
/// an empty query or absent subject is a pass-through. Pure over its
/// three inputs, and server order is preserved.
pub fn apply(collection: &[Video], query: &str, subject: Option<&str>) -> Vec<Video> {
    let q = query.trim().to_lowercase();
    collection
        .iter()
        .filter(|video| q.is_empty() || video.title.to_lowercase().starts_with(&q))
        .filter(|video| subject.map_or(true, |s| video.subject.as_deref() == Some(s)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, title: &str, subject: Option<&str>) -> Video {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "subject": subject,
        }))
        .unwrap()
    }

    fn fixture() -> Vec<Video> {
        vec![
            video("v1", "Algebra Basics", Some("67add41bbda4fc7efa50752e")),
            video("v2", "Calculus", Some("67add41bbda4fc7efa50752e")),
            video("v3", "algjebra lineare", Some("67add41bbda4fc7efa507530")),
            video("v4", "Photosynthesis", None),
        ]
    }

    fn ids(videos: &[Video]) -> Vec<&str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn test_no_filters_is_identity() {
        let collection = fixture();
        let filtered = apply(&collection, "", None);
        assert_eq!(ids(&filtered), ids(&collection));
    }

    #[test]
    fn test_prefix_match_not_substring() {
        let collection = fixture();
        assert_eq!(ids(&apply(&collection, "Al", None)), ["v1", "v3"]);
        // "gebra" appears inside both titles but is not a prefix.
        assert!(apply(&collection, "gebra", None).is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive_and_trimmed() {
        let collection = fixture();
        assert_eq!(ids(&apply(&collection, "aLGEBRA", None)), ["v1"]);
        assert_eq!(ids(&apply(&collection, "  calc ", None)), ["v2"]);
    }

    #[test]
    fn test_subject_filter_is_exact() {
        let collection = fixture();
        let filtered = apply(&collection, "", Some("67add41bbda4fc7efa50752e"));
        assert_eq!(ids(&filtered), ["v1", "v2"]);
        // A video without a subject never matches a subject filter.
        assert!(apply(&collection, "", Some("no-such-id")).is_empty());
    }

    #[test]
    fn test_filters_compose_by_conjunction() {
        let collection = fixture();
        let filtered = apply(&collection, "al", Some("67add41bbda4fc7efa50752e"));
        assert_eq!(ids(&filtered), ["v1"]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let collection = fixture();
        let once = apply(&collection, "al", Some("67add41bbda4fc7efa50752e"));
        let twice = apply(&once, "al", Some("67add41bbda4fc7efa50752e"));
        assert_eq!(ids(&once), ids(&twice));
    }
}
