//! Navigation stack with write-only title propagation.

/// Opaque identifier for one pushed screen instance. Ids are unique
/// for the lifetime of the stack and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(u64);

/// One stack entry: a screen payload plus its display title.
#[derive(Debug)]
pub struct NavEntry<S> {
    pub id: ScreenId,
    pub screen: S,
    pub title: String,
}

/// A stack of screens, each with a display title owned by the stack.
///
/// Titles are write-only from the screens' side: a screen publishes a
/// title for its own entry once its data arrives, and `set_title` for
/// an entry that has already been popped is a silent no-op. That
/// no-op is what makes late async resolutions safe — a result landing
/// after navigation away must not touch anything.
#[derive(Debug)]
pub struct NavStack<S> {
    entries: Vec<NavEntry<S>>,
    next_id: u64,
}

impl<S> NavStack<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    fn allocate(&mut self) -> ScreenId {
        let id = ScreenId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Push a screen with its initial title (forwarded from the
    /// navigating screen, or a placeholder until the fetch resolves).
    pub fn push(&mut self, screen: S, title: impl Into<String>) -> ScreenId {
        let id = self.allocate();
        self.entries.push(NavEntry {
            id,
            screen,
            title: title.into(),
        });
        id
    }

    /// Pop the top entry. The root entry stays put.
    pub fn pop(&mut self) -> Option<NavEntry<S>> {
        if self.entries.len() > 1 {
            self.entries.pop()
        } else {
            None
        }
    }

    /// Clear the stack and push a new root.
    pub fn reset(&mut self, screen: S, title: impl Into<String>) -> ScreenId {
        self.entries.clear();
        self.push(screen, title)
    }

    /// Publish a title for `id`'s entry. Idempotent; returns `false`
    /// (and changes nothing) when the entry is no longer on the stack.
    pub fn set_title(&mut self, id: ScreenId, title: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.title = title.into();
                true
            }
            None => false,
        }
    }

    pub fn top(&self) -> Option<&NavEntry<S>> {
        self.entries.last()
    }

    pub fn entry_mut(&mut self, id: ScreenId) -> Option<&mut NavEntry<S>> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

impl<S> Default for NavStack<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy;
    use crate::loadstate::LoadState;
    use dituria_api::catalog::types::ChapterSummary;
    use serde_json::json;

    #[test]
    fn test_push_pop_and_titles() {
        let mut stack: NavStack<&str> = NavStack::new();
        let root = stack.reset("textbooks", "Textbooks");
        let detail = stack.push("textbook", "Algebra I");

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top().unwrap().title, "Algebra I");

        stack.pop();
        assert_eq!(stack.top().unwrap().id, root);
        assert_eq!(stack.top().unwrap().title, "Textbooks");
        assert_ne!(root, detail);
    }

    #[test]
    fn test_root_entry_is_not_poppable() {
        let mut stack: NavStack<&str> = NavStack::new();
        stack.reset("textbooks", "Textbooks");
        assert!(stack.pop().is_none());
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_set_title_after_pop_is_a_noop() {
        let mut stack: NavStack<&str> = NavStack::new();
        stack.reset("textbooks", "Textbooks");
        let detail = stack.push("chapter", "Chapter");
        stack.pop();

        // The late resolution lands after navigation away: dropped.
        assert!(!stack.set_title(detail, "Thyesat"));
        assert_eq!(stack.top().unwrap().title, "Textbooks");
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut stack: NavStack<&str> = NavStack::new();
        stack.reset("root", "Root");
        let first = stack.push("a", "A");
        stack.pop();
        let second = stack.push("b", "B");
        assert_ne!(first, second);
    }

    /// The full screen flow for a textbook detail: placeholder title
    /// on push, one fetch, one title publish on READY, children
    /// rendered from the normalized payload.
    #[test]
    fn test_textbook_flow_publishes_title_once() {
        let mut stack: NavStack<&str> = NavStack::new();
        stack.reset("textbooks", "Textbooks");
        let screen = stack.push("textbook", "Textbook");

        let mut state: LoadState<&str, Vec<ChapterSummary>> = LoadState::new();
        state.begin("T1");

        let payload = json!({
            "title": "Algebra I",
            "chapters": [{ "id": "C1", "name": "Ch.1" }]
        });

        let chapters: Vec<ChapterSummary> = hierarchy::children(&payload, "chapters");
        let title = hierarchy::text_field(&payload, "title");

        let mut publishes = 0;
        if state.resolve(&"T1", chapters) {
            if let Some(title) = title {
                assert!(stack.set_title(screen, title));
                publishes += 1;
            }
        }
        // A duplicate resolution must not publish again.
        if state.resolve(&"T1", Vec::new()) {
            publishes += 1;
        }

        assert_eq!(publishes, 1);
        assert_eq!(stack.top().unwrap().title, "Algebra I");
        let chapters = state.data().unwrap();
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].name, "Ch.1");
    }

    /// A 404 drives the state to Failed and never touches the title.
    #[test]
    fn test_failed_fetch_leaves_placeholder_title() {
        let mut stack: NavStack<&str> = NavStack::new();
        stack.reset("decks", "Decks");
        let screen = stack.push("deck", "Deck");

        let mut state: LoadState<&str, Vec<ChapterSummary>> = LoadState::new();
        state.begin("D9");
        assert!(state.reject(&"D9", "API error (status 404): deck not found"));

        assert!(state.error().unwrap().contains("404"));
        // No publish happened; the placeholder stays.
        assert_eq!(stack.top().unwrap().id, screen);
        assert_eq!(stack.top().unwrap().title, "Deck");
    }
}
