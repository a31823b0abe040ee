//! Route-level page components.

pub mod bank_accounts;
pub mod contact;
pub mod dashboard;
pub mod documents;
pub mod gallery;
pub mod home;
pub mod legal;
pub mod login;
pub mod orders;
pub mod services;
pub mod venue;
