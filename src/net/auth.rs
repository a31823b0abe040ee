//! OTP login endpoints.
//!
//! The backend owns the whole flow; this side only relays the phone number
//! and the code the user typed.

use serde::Serialize;

use super::api::ApiClient;
use super::error::ApiError;
use super::types::{AuthResponse, OtpChallenge};

#[derive(Serialize)]
struct OtpRequestBody<'a> {
    phone: &'a str,
}

#[derive(Serialize)]
struct OtpVerifyBody<'a> {
    phone: &'a str,
    request_id: &'a str,
    code: &'a str,
}

impl ApiClient {
    /// Ask the backend to text a login code to `phone`.
    pub async fn request_otp(&self, phone: &str) -> Result<OtpChallenge, ApiError> {
        self.post_json("/auth/otp/request", &OtpRequestBody { phone }).await
    }

    /// Exchange the received code for session tokens.
    pub async fn verify_otp(
        &self,
        phone: &str,
        request_id: &str,
        code: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/otp/verify", &OtpVerifyBody { phone, request_id, code }).await
    }
}
