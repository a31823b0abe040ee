//! Booking list endpoint. Details are embedded in the list shape; there is
//! no separate details endpoint to call.

use super::api::ApiClient;
use super::error::ApiError;
use super::types::Booking;

impl ApiClient {
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_json("/bookings").await
    }
}
