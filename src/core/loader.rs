//! Generation-tracked data loading
//!
//! A [`Loader`] holds the last loaded value together with a freshness flag.
//! Marking it dirty asks for a reload; each reload gets a [`Generation`], and
//! only the newest generation may publish its result. A slow response for an
//! older fetch can therefore never overwrite fresher data.

use crate::core::api::ApiError;

/// Identifies one fetch started by [`Loader::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Where a loader currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// A fetch is running (or none has finished yet)
    #[default]
    Loading,
    /// The value reflects the last successful fetch
    Ready,
    /// The last fetch failed; the previous value is kept
    Failed(String),
}

/// Loading state machine for one data source
#[derive(Debug, Clone, PartialEq)]
pub struct Loader<T> {
    value: T,
    phase: LoadPhase,
    /// Bumped by every `mark_dirty`
    requested: u64,
    /// Revision the current value was loaded for
    loaded: u64,
    /// Bumped by every `begin`
    fetches: u64,
    /// The fetch allowed to publish, until it finishes
    latest: Option<Generation>,
    /// Revision `latest` was started for
    started_for: u64,
}

impl<T> Loader<T> {
    /// New loader holding `default`, dirty so that the first render fetches
    pub fn new(default: T) -> Self {
        Self {
            value: default,
            phase: LoadPhase::Loading,
            requested: 1,
            loaded: 0,
            fetches: 0,
            latest: None,
            started_for: 0,
        }
    }

    /// Signal that the backing data changed and must be fetched again
    pub fn mark_dirty(&mut self) {
        self.requested += 1;
    }

    /// Whether a change was signalled that no finished fetch has caught up with
    pub fn is_dirty(&self) -> bool {
        self.loaded < self.requested
    }

    /// Revision counter, changes on every `mark_dirty`
    pub fn revision(&self) -> u64 {
        self.requested
    }

    /// Whether a fetch for the current revision is still running
    pub fn is_fetching_current(&self) -> bool {
        self.latest.is_some() && self.started_for == self.requested
    }

    /// Start a fetch for the current revision.
    ///
    /// Any fetch started earlier is superseded, even one for the same revision.
    pub fn begin(&mut self) -> Generation {
        self.fetches += 1;
        let generation = Generation(self.fetches);
        self.latest = Some(generation);
        self.started_for = self.requested;
        self.phase = LoadPhase::Loading;
        generation
    }

    /// Publish the outcome of a fetch.
    ///
    /// Returns `false` and changes nothing when `generation` was superseded.
    /// A successful fetch clears the dirty flag for the revision it started at.
    pub fn finish(&mut self, generation: Generation, result: Result<T, ApiError>) -> bool {
        if self.latest != Some(generation) {
            return false;
        }
        self.latest = None;
        self.loaded = self.loaded.max(self.started_for);

        match result {
            Ok(value) => {
                self.value = value;
                self.phase = LoadPhase::Ready;
            }
            Err(err) => self.phase = LoadPhase::Failed(err.message()),
        }
        true
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Error message of the last fetch, if it failed
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T: Default> Default for Loader<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_loader_is_dirty_and_loading() {
        let loader = Loader::new(0);

        assert!(loader.is_dirty());
        assert!(loader.is_loading());
        assert_eq!(*loader.value(), 0);
    }

    #[test]
    fn test_finish_publishes_value_and_clears_dirty() {
        let mut loader = Loader::new(Vec::<u32>::new());

        let generation = loader.begin();
        assert!(loader.finish(generation, Ok(vec![1, 2])));

        assert!(!loader.is_dirty());
        assert_eq!(loader.phase(), &LoadPhase::Ready);
        assert_eq!(loader.value(), &vec![1, 2]);
    }

    #[test]
    fn test_mark_dirty_after_ready() {
        let mut loader = Loader::new(0);
        let generation = loader.begin();
        loader.finish(generation, Ok(1));

        loader.mark_dirty();

        assert!(loader.is_dirty());
        // Value stays visible until the reload completes
        assert_eq!(*loader.value(), 1);
    }

    #[test]
    fn test_superseded_fetch_is_discarded() {
        let mut loader = Loader::new("initial");

        let first = loader.begin();
        loader.mark_dirty();
        let second = loader.begin();

        assert!(loader.finish(second, Ok("fresh")));
        assert!(!loader.finish(first, Ok("stale")));

        assert_eq!(*loader.value(), "fresh");
        assert!(!loader.is_dirty());
    }

    #[test]
    fn test_stale_finish_before_newer_one_does_not_clear_dirty() {
        let mut loader = Loader::new(0);

        let first = loader.begin();
        loader.mark_dirty();
        let second = loader.begin();

        assert!(!loader.finish(first, Ok(1)));
        assert!(loader.is_dirty());
        assert!(loader.is_loading());

        assert!(loader.finish(second, Ok(2)));
        assert_eq!(*loader.value(), 2);
    }

    #[test]
    fn test_dirty_during_flight_survives_finish() {
        let mut loader = Loader::new(0);

        let generation = loader.begin();
        loader.mark_dirty();
        assert!(loader.finish(generation, Ok(1)));

        // The change signalled mid-flight still needs its own fetch
        assert!(loader.is_dirty());
        assert_eq!(*loader.value(), 1);
    }

    #[test]
    fn test_restart_at_same_revision_supersedes_first_fetch() {
        let mut loader = Loader::new("initial");

        let first = loader.begin();
        let second = loader.begin();
        assert_ne!(first, second);

        assert!(loader.finish(second, Ok("fresh")));
        assert!(!loader.finish(first, Ok("stale")));
        assert_eq!(*loader.value(), "fresh");
    }

    #[test]
    fn test_generation_finishes_once() {
        let mut loader = Loader::new(0);

        let generation = loader.begin();
        assert!(loader.is_fetching_current());
        assert!(loader.finish(generation, Ok(1)));
        assert!(!loader.is_fetching_current());
        assert!(!loader.finish(generation, Ok(2)));
        assert_eq!(*loader.value(), 1);
    }

    #[test]
    fn test_fetch_for_old_revision_is_not_current() {
        let mut loader = Loader::new(0);

        loader.begin();
        loader.mark_dirty();

        assert!(!loader.is_fetching_current());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_value() {
        let mut loader = Loader::new(0);
        let generation = loader.begin();
        loader.finish(generation, Ok(42));

        loader.mark_dirty();
        let generation = loader.begin();
        loader.finish(
            generation,
            Err(ApiError::Network("connection refused".to_string())),
        );

        assert_eq!(*loader.value(), 42);
        assert_eq!(loader.error(), Some("Network error: connection refused"));
        assert!(!loader.is_dirty());
    }
}
