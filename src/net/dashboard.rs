//! Role-dependent dashboard summaries.

use super::api::ApiClient;
use super::error::ApiError;
use super::types::{ClientSummary, ProviderSummary};

impl ApiClient {
    pub async fn client_summary(&self) -> Result<ClientSummary, ApiError> {
        self.get_json("/dashboard/client").await
    }

    pub async fn provider_summary(&self) -> Result<ProviderSummary, ApiError> {
        self.get_json("/dashboard/provider").await
    }
}
