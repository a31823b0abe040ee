//! Data shapes as the backend serves them.
//!
//! Everything here is owned and mutated server-side; the frontend holds
//! transient copies that are discarded on unmount and re-fetched on the next
//! visit. The one locally computed figure is [`Booking::total_paid`].

use serde::{Deserialize, Serialize};

// =============================================================
// Bank accounts and transactions
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: String,
    pub account_number: String,
    pub bank_name: String,
    pub ifsc_code: String,
    pub is_active: bool,
    pub balance: f64,
}

/// Immutable ledger entry; read-only to the frontend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub reference: String,
    pub balance_after: f64,
    pub created_at: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl TransactionType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        }
    }
}

// =============================================================
// Bookings
// =============================================================

/// Aggregate booking document with its payments embedded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub request_status: RequestStatus,
    pub start_date: String,
    pub end_date: String,
    pub meal_timings: Vec<String>,
    pub guests: u32,
    pub payments: Vec<Payment>,
    pub event_address: EventAddress,
    pub provider_id: Option<String>,
    pub client_id: Option<String>,
}

impl Booking {
    /// Sum of settled payment amounts, shown as "Total Paid".
    ///
    /// This duplicates a figure that conceptually belongs to the backend; it
    /// exists because the list endpoint does not return it.
    pub fn total_paid(&self) -> f64 {
        self.payments
            .iter()
            .filter(|p| p.status.is_settled())
            .map(|p| p.amount)
            .sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Confirmed,
    Completed,
}

impl RequestStatus {
    pub const ALL: [Self; 5] =
        [Self::Pending, Self::Approved, Self::Rejected, Self::Confirmed, Self::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
        }
    }

    /// CSS modifier class; the status drives display color only.
    pub fn status_class(self) -> &'static str {
        match self {
            Self::Pending => "status status--pending",
            Self::Approved => "status status--approved",
            Self::Rejected => "status status--rejected",
            Self::Confirmed => "status status--confirmed",
            Self::Completed => "status status--completed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventAddress {
    pub line1: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl EventAddress {
    pub fn display(&self) -> String {
        format!("{}, {}, {} {}", self.line1, self.city, self.state, self.pincode)
    }
}

// =============================================================
// Payments (embedded in bookings; never mutated here)
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub payment_type: PaymentType,
    pub status: PaymentStatus,
    pub amount: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Token,
    Final,
}

impl PaymentType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Token => "Token advance",
            Self::Final => "Final payment",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Created,
    Pending,
    Captured,
    Success,
    Failed,
    Refunded,
}

impl PaymentStatus {
    /// Whether this payment counts toward the "Total Paid" figure.
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Captured | Self::Success)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Pending => "Pending",
            Self::Captured => "Captured",
            Self::Success => "Success",
            Self::Failed => "Failed",
            Self::Refunded => "Refunded",
        }
    }
}

// =============================================================
// Documents
// =============================================================

/// A user-uploaded verification file reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub status: DocumentStatus,
    pub attachment: String,
    pub created_date: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Approved,
    Rejected,
    Pending,
}

impl DocumentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Pending => "Pending",
        }
    }

    pub fn status_class(self) -> &'static str {
        match self {
            Self::Approved => "status status--approved",
            Self::Rejected => "status status--rejected",
            Self::Pending => "status status--pending",
        }
    }
}

// =============================================================
// Identity and dashboard
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub role: Role,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Provider,
}

/// OTP challenge returned when a login code is sent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OtpChallenge {
    pub request_id: String,
}

/// Successful OTP verification: session tokens plus the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub total_bookings: u32,
    pub upcoming_bookings: u32,
    pub completed_bookings: u32,
    pub total_spent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProviderSummary {
    pub total_orders: u32,
    pub pending_requests: u32,
    pub completed_orders: u32,
    pub total_earnings: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub id: String,
    pub display_name: String,
    pub cuisine_styles: Vec<String>,
    pub is_verified: bool,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
