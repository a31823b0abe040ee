//! Verification document endpoints. Creation is a multipart upload and is
//! therefore browser-only.

use super::api::ApiClient;
use super::error::ApiError;
use super::types::Document;

impl ApiClient {
    pub async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        self.get_json("/documents").await
    }

    #[cfg(feature = "hydrate")]
    pub async fn upload_document(
        &self,
        name: &str,
        file: &web_sys::File,
    ) -> Result<Document, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("form construction failed".into()))?;
        let _ = form.append_with_str("name", name);
        form.append_with_blob("attachment", file)
            .map_err(|_| ApiError::Network("attachment append failed".into()))?;
        self.post_form("/documents", &form).await
    }

    pub async fn delete_document(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/documents/{id}")).await
    }
}
