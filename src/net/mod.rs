//! REST client for the ChefTable backend.
//!
//! `ApiClient` owns the base URL and attaches the bearer token from the
//! session store; each domain file adds the thin endpoint wrappers for one
//! backend area. Real HTTP runs only in the browser (`hydrate`); on the
//! server every call resolves to [`error::ApiError::Unavailable`].

pub mod api;
pub mod auth;
pub mod bank_accounts;
pub mod bookings;
pub mod dashboard;
pub mod documents;
pub mod error;
pub mod providers;
pub mod reviews;
pub mod types;
