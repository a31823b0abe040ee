//! List-page fetch state with stale-response protection.
//!
//! Every fetch is keyed by a generation token taken from [`RecordsState::begin`].
//! When a response settles, [`RecordsState::resolve`] only applies it if no
//! newer fetch has started since; a late answer for a superseded selection is
//! discarded instead of overwriting the display.

use crate::net::error::ApiError;

/// Where a fetched list currently stands.
///
/// `Ready` with an empty vec ("nothing on the server") is deliberately a
/// different state from `Loading` ("don't know yet") and from a filtered-out
/// view, which the filtering layer derives from `Ready`.
#[derive(Clone, Debug, PartialEq)]
pub enum ListPhase<T> {
    Loading,
    Failed(String),
    Ready(Vec<T>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordsState<T> {
    pub phase: ListPhase<T>,
    generation: u64,
}

impl<T> Default for RecordsState<T> {
    fn default() -> Self {
        Self { phase: ListPhase::Loading, generation: 0 }
    }
}

impl<T> RecordsState<T> {
    /// Start a (re-)fetch. Returns the token the response must present.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.phase = ListPhase::Loading;
        self.generation
    }

    /// Apply a settled fetch. Returns `false` when the token is stale and
    /// the result was dropped.
    pub fn resolve(&mut self, generation: u64, result: Result<Vec<T>, ApiError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = match result {
            Ok(items) => ListPhase::Ready(items),
            Err(err) => ListPhase::Failed(err.to_string()),
        };
        true
    }

    pub fn items(&self) -> Option<&[T]> {
        match &self.phase {
            ListPhase::Ready(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ListPhase::Loading)
    }
}

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;
