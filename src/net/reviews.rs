//! Review submission for completed bookings.

use serde::Serialize;

use super::api::ApiClient;
use super::error::ApiError;

/// A review is tied to the booking plus both party ids; the backend rejects
/// mismatched triples.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReviewPayload {
    pub booking_id: String,
    pub provider_id: String,
    pub client_id: String,
    pub rating: u8,
    pub comment: String,
}

impl ApiClient {
    pub async fn submit_review(&self, review: &ReviewPayload) -> Result<(), ApiError> {
        self.post_json_discard("/reviews", review).await
    }
}
