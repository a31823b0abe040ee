use super::*;
use crate::net::error::ApiError;

// =============================================================
// Phases
// =============================================================

#[test]
fn starts_loading() {
    let state = RecordsState::<u32>::default();
    assert!(state.is_loading());
    assert!(state.items().is_none());
}

#[test]
fn resolve_success_is_ready() {
    let mut state = RecordsState::default();
    let generation = state.begin();
    assert!(state.resolve(generation, Ok(vec![1, 2, 3])));
    assert_eq!(state.items(), Some(&[1, 2, 3][..]));
}

#[test]
fn ready_empty_is_distinct_from_loading() {
    let mut state = RecordsState::<u32>::default();
    let generation = state.begin();
    state.resolve(generation, Ok(Vec::new()));
    assert!(!state.is_loading());
    assert_eq!(state.items(), Some(&[][..]));
}

#[test]
fn resolve_failure_enters_failed_with_message() {
    let mut state = RecordsState::<u32>::default();
    let generation = state.begin();
    state.resolve(generation, Err(ApiError::Network("timeout".into())));
    assert_eq!(state.phase, ListPhase::Failed("request failed: timeout".into()));
    assert!(state.items().is_none());
}

// =============================================================
// Stale responses
// =============================================================

#[test]
fn stale_response_is_discarded() {
    let mut state = RecordsState::default();
    let first = state.begin();
    let second = state.begin();
    // The older fetch settles last; it must not win.
    assert!(state.resolve(second, Ok(vec![20])));
    assert!(!state.resolve(first, Ok(vec![10])));
    assert_eq!(state.items(), Some(&[20][..]));
}

#[test]
fn stale_failure_cannot_clobber_fresh_data() {
    let mut state = RecordsState::default();
    let first = state.begin();
    let second = state.begin();
    assert!(state.resolve(second, Ok(vec![7])));
    assert!(!state.resolve(first, Err(ApiError::Network("late".into()))));
    assert_eq!(state.items(), Some(&[7][..]));
}

#[test]
fn refetch_returns_to_loading() {
    let mut state = RecordsState::default();
    let generation = state.begin();
    state.resolve(generation, Ok(vec![1]));
    state.begin();
    assert!(state.is_loading());
}

#[test]
fn refetch_after_mutation_replaces_the_whole_list() {
    // The universal refresh strategy: a successful create re-fetches
    // everything, so the view shows exactly what the server returned.
    let mut state = RecordsState::default();
    let generation = state.begin();
    state.resolve(generation, Ok(vec![1, 2, 3]));

    let generation = state.begin();
    state.resolve(generation, Ok(vec![1, 2, 3, 4]));
    assert_eq!(state.items().map(<[i32]>::len), Some(4));

    let generation = state.begin();
    state.resolve(generation, Ok(vec![2, 3, 4]));
    assert_eq!(state.items(), Some(&[2, 3, 4][..]));
}
