use crate::index::types::QueryMatch;
use std::sync::{Mutex, PoisonError};

/// Receives the matches of one file at a time. Called from worker threads.
pub trait QueryMatchListener: Send + Sync {
    /// Called once per file that has at least one match
    fn on_query_matches(&self, matches: Vec<QueryMatch>);
}

impl<F> QueryMatchListener for F
where
    F: Fn(Vec<QueryMatch>) + Send + Sync,
{
    fn on_query_matches(&self, matches: Vec<QueryMatch>) {
        self(matches)
    }
}

/// Collects every match it receives
#[derive(Debug, Default)]
pub struct MatchCollector {
    matches: Mutex<Vec<QueryMatch>>,
}

impl MatchCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the matches received so far
    pub fn matches(&self) -> Vec<QueryMatch> {
        self.matches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn into_matches(self) -> Vec<QueryMatch> {
        self.matches
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl QueryMatchListener for MatchCollector {
    fn on_query_matches(&self, matches: Vec<QueryMatch>) {
        self.matches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(matches);
    }
}
