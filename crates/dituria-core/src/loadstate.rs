//! Per-screen load lifecycle with a stale-response guard.

/// Phase of the load associated with the current identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase<T> {
    /// No load requested yet.
    Idle,
    /// A fetch for the current identity is in flight.
    Pending,
    /// The fetch resolved and its data applies to the current identity.
    Ready(T),
    /// The fetch failed, or the identity was missing to begin with.
    Failed(String),
}

/// Tracks the lifecycle of one screen's remote load.
///
/// `begin` must be called synchronously before the fetch starts so the
/// identity is captured at request time, not re-read when the response
/// lands. `resolve`/`reject` drop results whose identity no longer
/// matches, or whose identity has already transitioned: at most one
/// result is ever applied per requested identity.
#[derive(Debug)]
pub struct LoadState<K, T> {
    current: Option<K>,
    phase: Phase<T>,
}

impl<K: PartialEq, T> LoadState<K, T> {
    pub fn new() -> Self {
        Self {
            current: None,
            phase: Phase::Idle,
        }
    }

    /// Record `key` as the current identity and enter `Pending`.
    ///
    /// Any in-flight load for a previous identity is superseded: its
    /// eventual result will no longer match and will be dropped.
    pub fn begin(&mut self, key: K) {
        self.current = Some(key);
        self.phase = Phase::Pending;
    }

    /// Apply a successful result for `key`. Returns whether the result
    /// was applied; a stale or duplicate result is dropped.
    pub fn resolve(&mut self, key: &K, data: T) -> bool {
        if self.current.as_ref() == Some(key) && matches!(self.phase, Phase::Pending) {
            self.phase = Phase::Ready(data);
            true
        } else {
            false
        }
    }

    /// Apply a failure for `key`. Same guard as [`LoadState::resolve`].
    pub fn reject(&mut self, key: &K, message: impl Into<String>) -> bool {
        if self.current.as_ref() == Some(key) && matches!(self.phase, Phase::Pending) {
            self.phase = Phase::Failed(message.into());
            true
        } else {
            false
        }
    }

    /// Fail without any fetch — used when a required identity is
    /// absent from the route parameters.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.current = None;
        self.phase = Phase::Failed(message.into());
    }

    pub fn phase(&self) -> &Phase<T> {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.phase {
            Phase::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The identity the state is currently tracking.
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }
}

impl<K: PartialEq, T> Default for LoadState<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_applies_for_current_identity() {
        let mut state: LoadState<&str, u32> = LoadState::new();
        state.begin("t1");
        assert!(state.is_pending());
        assert!(state.resolve(&"t1", 7));
        assert_eq!(state.data(), Some(&7));
    }

    #[test]
    fn test_stale_resolve_does_not_touch_newer_identity() {
        let mut state: LoadState<&str, u32> = LoadState::new();
        state.begin("t1");
        state.begin("t2");

        // t1's response arrives after t2 was requested: dropped.
        assert!(!state.resolve(&"t1", 1));
        assert!(state.is_pending());
        assert_eq!(state.current(), Some(&"t2"));

        assert!(state.resolve(&"t2", 2));
        assert_eq!(state.data(), Some(&2));
    }

    #[test]
    fn test_stale_reject_is_dropped() {
        let mut state: LoadState<&str, u32> = LoadState::new();
        state.begin("t1");
        state.begin("t2");

        assert!(!state.reject(&"t1", "boom"));
        assert!(state.is_pending());

        assert!(state.reject(&"t2", "API error (status 404): not found"));
        assert!(state.error().unwrap().contains("404"));
    }

    #[test]
    fn test_at_most_one_transition_per_identity() {
        let mut state: LoadState<&str, u32> = LoadState::new();
        state.begin("t1");
        assert!(state.resolve(&"t1", 1));
        // A duplicate result for the same identity is a no-op.
        assert!(!state.resolve(&"t1", 99));
        assert!(!state.reject(&"t1", "late failure"));
        assert_eq!(state.data(), Some(&1));
    }

    #[test]
    fn test_missing_identity_fails_without_fetch() {
        let mut state: LoadState<String, u32> = LoadState::new();
        state.fail("no textbook id in route");
        assert_eq!(state.error(), Some("no textbook id in route"));
        assert!(state.current().is_none());
    }

    #[test]
    fn test_reentering_after_failure_restarts_the_lifecycle() {
        let mut state: LoadState<&str, u32> = LoadState::new();
        state.begin("t1");
        state.reject(&"t1", "network down");
        assert!(state.error().is_some());

        state.begin("t1");
        assert!(state.is_pending());
        assert!(state.resolve(&"t1", 3));
        assert_eq!(state.data(), Some(&3));
    }
}
