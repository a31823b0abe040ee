use super::*;
use crate::net::types::{AuthResponse, Role, User};

fn sample_auth() -> AuthResponse {
    AuthResponse {
        access_token: "acc".into(),
        refresh_token: "ref".into(),
        user: User {
            id: "usr_1".into(),
            name: "Asha".into(),
            phone: "9876543210".into(),
            email: Some("asha@example.com".into()),
            role: Role::Client,
        },
    }
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn starts_loading_and_unauthenticated() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert!(state.role().is_none());
}

#[test]
fn sign_in_installs_user_and_tokens() {
    let mut state = SessionState::default();
    state.sign_in(sample_auth());
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.role(), Some(Role::Client));
    assert_eq!(state.tokens.as_ref().map(|t| t.access.as_str()), Some("acc"));
}

#[test]
fn sign_out_clears_everything_but_stays_settled() {
    let mut state = SessionState::default();
    state.sign_in(sample_auth());
    state.sign_out();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert!(state.tokens.is_none());
}

#[test]
fn restore_without_stored_session_just_settles() {
    // Outside the browser there is no storage, so restore only clears loading.
    let mut state = SessionState::default();
    state.restore();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}
