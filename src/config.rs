//! Backend endpoint configuration.
//!
//! One knob: `CHEFTABLE_API_URL` selects the REST backend base URL. The WASM
//! build bakes it in at compile time (`option_env!`); the SSR binary also
//! honors the runtime environment. Absent both, a local development address
//! is used.

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Resolve the backend base URL, without a trailing slash.
pub fn api_base() -> String {
    #[cfg(feature = "ssr")]
    if let Ok(value) = std::env::var("CHEFTABLE_API_URL") {
        if !value.trim().is_empty() {
            return normalize(&value);
        }
    }
    normalize(option_env!("CHEFTABLE_API_URL").unwrap_or(DEFAULT_API_BASE))
}

fn normalize(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
