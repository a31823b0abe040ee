//! Bank account CRUD and the per-account transaction ledger.

use serde::Serialize;

use super::api::ApiClient;
use super::error::ApiError;
use super::types::{BankAccount, Transaction};

/// Fields the user supplies; activation and balance are backend-owned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BankAccountPayload {
    pub account_number: String,
    pub bank_name: String,
    pub ifsc_code: String,
}

impl ApiClient {
    pub async fn list_bank_accounts(&self) -> Result<Vec<BankAccount>, ApiError> {
        self.get_json("/bank-accounts").await
    }

    pub async fn create_bank_account(
        &self,
        payload: &BankAccountPayload,
    ) -> Result<BankAccount, ApiError> {
        self.post_json("/bank-accounts", payload).await
    }

    pub async fn update_bank_account(
        &self,
        id: &str,
        payload: &BankAccountPayload,
    ) -> Result<BankAccount, ApiError> {
        self.put_json(&format!("/bank-accounts/{id}"), payload).await
    }

    pub async fn delete_bank_account(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/bank-accounts/{id}")).await
    }

    /// Full ledger for one account. Search and category filtering happen
    /// client-side, so no filter params are sent.
    pub async fn list_transactions(&self, account_id: &str) -> Result<Vec<Transaction>, ApiError> {
        self.get_json(&format!("/bank-accounts/{account_id}/transactions")).await
    }
}
