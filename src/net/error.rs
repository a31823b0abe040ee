//! Error taxonomy for backend calls.

use thiserror::Error;

/// Failure of a single REST call.
///
/// Every error is handled at the component that initiated the call: logged,
/// surfaced as a toast or an inline state, never propagated to a global
/// handler. There are no retries.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("{status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// No session token was available for an authenticated endpoint.
    #[error("not signed in")]
    Unauthenticated,

    /// Server-side render stub; real calls only run in the browser.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response. A 401 means the session token was
    /// missing or expired; everything else keeps its status and body.
    pub fn from_status(status: u16, message: String) -> Self {
        if status == 401 {
            Self::Unauthenticated
        } else {
            Self::Status { status, message }
        }
    }

    /// Whether this error means the requested resource does not exist.
    ///
    /// The backend is inconsistent here: some endpoints return a clean 404,
    /// others a generic status with a "not found" message, so both are
    /// accepted.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Status { status, message } => {
                *status == 404 || message.to_lowercase().contains("not found")
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
