//! Id allocation - collision-checked identifiers for students and subjects
//!
//! A source proposes candidates; the allocator asks storage whether each one
//! is taken and stops after a fixed number of attempts.

use sicei_domain::RepositoryError;
use tracing::{debug, warn};

use crate::error::{Result, UseCaseError};

pub use sicei_domain::IdSource;

/// Attempts made before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Bounded retry over an [`IdSource`]
pub struct IdAllocator<'a> {
    source: &'a dyn IdSource,
    max_attempts: u32,
}

impl<'a> IdAllocator<'a> {
    pub fn new(source: &'a dyn IdSource) -> Self {
        Self {
            source,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// At least one attempt is always made
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Return the first candidate for which `exists` answers `false`
    pub fn allocate<F>(&self, mut exists: F) -> Result<String>
    where
        F: FnMut(&str) -> std::result::Result<bool, RepositoryError>,
    {
        for attempt in 1..=self.max_attempts {
            let candidate = self.source.candidate();
            if !exists(&candidate)? {
                debug!(attempt, id = %candidate, "allocated id");
                return Ok(candidate);
            }
            debug!(attempt, id = %candidate, "id already taken, retrying");
        }

        warn!(
            max_attempts = self.max_attempts,
            "no free id found, giving up"
        );
        Err(UseCaseError::CannotCreate(format!(
            "Could not allocate a free id after {} attempts",
            self.max_attempts
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Hands out a fixed list of candidates, then repeats the last one
    struct ScriptedSource {
        candidates: Mutex<VecDeque<String>>,
        calls: Mutex<u32>,
    }

    impl ScriptedSource {
        fn new(candidates: &[&str]) -> Self {
            Self {
                candidates: Mutex::new(candidates.iter().map(|c| c.to_string()).collect()),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    impl IdSource for ScriptedSource {
        fn candidate(&self) -> String {
            *self.calls.lock().unwrap() += 1;
            let mut candidates = self.candidates.lock().unwrap();
            if candidates.len() > 1 {
                candidates.pop_front().unwrap()
            } else {
                candidates.front().cloned().unwrap_or_default()
            }
        }
    }

    #[test]
    fn test_collision_triggers_one_retry() {
        let source = ScriptedSource::new(&["A25000001", "A25000002"]);
        let taken = ["A25000001"];

        let id = IdAllocator::new(&source)
            .allocate(|c| Ok(taken.contains(&c)))
            .unwrap();

        assert_eq!(id, "A25000002");
        assert_eq!(source.calls(), 2);
    }

    #[test]
    fn test_exhaustion_is_cannot_create() {
        let source = ScriptedSource::new(&["A25000001"]);

        let err = IdAllocator::new(&source)
            .with_max_attempts(3)
            .allocate(|_| Ok(true))
            .unwrap_err();

        assert!(matches!(err, UseCaseError::CannotCreate(_)));
        assert_eq!(source.calls(), 3);
    }

    #[test]
    fn test_repository_failure_stops_allocation() {
        let source = ScriptedSource::new(&["A25000001"]);

        let err = IdAllocator::new(&source)
            .allocate(|_| {
                Err(RepositoryError::PersistenceError {
                    message: "offline".to_string(),
                })
            })
            .unwrap_err();

        assert!(matches!(err, UseCaseError::Repository(_)));
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn test_zero_attempts_is_clamped() {
        let source = ScriptedSource::new(&["x"]);
        assert_eq!(IdAllocator::new(&source).with_max_attempts(0).max_attempts(), 1);
    }
}
