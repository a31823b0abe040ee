//! Provider profile endpoint.
//!
//! Returns not-found until the provider has completed onboarding; callers
//! use [`crate::net::error::ApiError::is_not_found`] to show the
//! prerequisite message instead of a generic failure.

use super::api::ApiClient;
use super::error::ApiError;
use super::types::ProviderProfile;

impl ApiClient {
    pub async fn provider_profile(&self) -> Result<ProviderProfile, ApiError> {
        self.get_json("/providers/me").await
    }
}
