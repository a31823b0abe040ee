//! Authenticated identity and session tokens.
//!
//! The store starts in a `loading` state until the stored session has been
//! checked, so guarded pages can tell "not signed in" apart from "not
//! restored yet". Tokens are persisted to `localStorage` and cleared on
//! logout.

use serde::{Deserialize, Serialize};

use crate::net::types::{AuthResponse, Role, User};
use crate::util::storage;

const STORAGE_KEY: &str = "cheftable_session";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access: String,
    pub refresh: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub tokens: Option<SessionTokens>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, tokens: None, loading: true }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.tokens.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Install a verified login and persist it for the next visit.
    pub fn sign_in(&mut self, auth: AuthResponse) {
        let tokens = SessionTokens { access: auth.access_token, refresh: auth.refresh_token };
        persist(&auth.user, &tokens);
        self.user = Some(auth.user);
        self.tokens = Some(tokens);
        self.loading = false;
    }

    /// Drop the session and its stored copy.
    pub fn sign_out(&mut self) {
        storage::remove_item(STORAGE_KEY);
        self.user = None;
        self.tokens = None;
        self.loading = false;
    }

    /// Load the stored session, if any, and leave the loading state.
    pub fn restore(&mut self) {
        if let Some((user, tokens)) = read_stored() {
            self.user = Some(user);
            self.tokens = Some(tokens);
        }
        self.loading = false;
    }
}

#[derive(Serialize, Deserialize)]
struct StoredSession {
    user: User,
    tokens: SessionTokens,
}

fn persist(user: &User, tokens: &SessionTokens) {
    let stored = StoredSession { user: user.clone(), tokens: tokens.clone() };
    if let Ok(json) = serde_json::to_string(&stored) {
        storage::set_item(STORAGE_KEY, &json);
    }
}

fn read_stored() -> Option<(User, SessionTokens)> {
    let json = storage::get_item(STORAGE_KEY)?;
    let stored: StoredSession = serde_json::from_str(&json).ok()?;
    Some((stored.user, stored.tokens))
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
