use super::*;

fn payment(id: &str, payment_type: PaymentType, status: PaymentStatus, amount: f64) -> Payment {
    Payment { id: id.into(), payment_type, status, amount }
}

fn booking_with_payments(payments: Vec<Payment>) -> Booking {
    Booking {
        id: "bkg_1".into(),
        request_status: RequestStatus::Confirmed,
        start_date: "2026-01-10".into(),
        end_date: "2026-01-11".into(),
        meal_timings: vec!["Lunch".into(), "Dinner".into()],
        guests: 24,
        payments,
        event_address: EventAddress {
            line1: "14 Rose Villa".into(),
            city: "Pune".into(),
            state: "MH".into(),
            pincode: "411001".into(),
        },
        provider_id: Some("prv_9".into()),
        client_id: Some("cli_3".into()),
    }
}

// =============================================================
// total_paid
// =============================================================

#[test]
fn total_paid_sums_only_settled_payments() {
    let booking = booking_with_payments(vec![
        payment("p1", PaymentType::Token, PaymentStatus::Captured, 500.0),
        payment("p2", PaymentType::Final, PaymentStatus::Success, 1500.0),
        payment("p3", PaymentType::Final, PaymentStatus::Failed, 1500.0),
        payment("p4", PaymentType::Final, PaymentStatus::Pending, 200.0),
        payment("p5", PaymentType::Token, PaymentStatus::Refunded, 500.0),
    ]);
    assert!((booking.total_paid() - 2000.0).abs() < f64::EPSILON);
}

#[test]
fn total_paid_is_zero_without_payments() {
    let booking = booking_with_payments(Vec::new());
    assert!(booking.total_paid().abs() < f64::EPSILON);
}

// =============================================================
// serde wire shapes
// =============================================================

#[test]
fn transaction_type_uses_screaming_snake_case() {
    let tx: Transaction = serde_json::from_str(
        r#"{
            "id": "txn_1",
            "transaction_type": "DEPOSIT",
            "amount": 450.5,
            "reference": "REF1001",
            "balance_after": 1450.5,
            "created_at": "2026-02-01T09:30:00Z"
        }"#,
    )
    .expect("transaction decodes");
    assert_eq!(tx.transaction_type, TransactionType::Deposit);
}

#[test]
fn request_status_decodes_lowercase() {
    let status: RequestStatus = serde_json::from_str("\"completed\"").expect("status decodes");
    assert_eq!(status, RequestStatus::Completed);
}

#[test]
fn auth_response_decodes_tokens_and_user() {
    let auth: AuthResponse = serde_json::from_str(
        r#"{
            "access_token": "acc",
            "refresh_token": "ref",
            "user": {
                "id": "usr_1",
                "name": "Asha",
                "phone": "9876543210",
                "email": null,
                "role": "provider"
            }
        }"#,
    )
    .expect("auth response decodes");
    assert_eq!(auth.user.role, Role::Provider);
    assert_eq!(auth.access_token, "acc");
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn status_class_is_a_color_modifier_only() {
    assert_eq!(RequestStatus::Pending.status_class(), "status status--pending");
    assert_eq!(RequestStatus::Completed.status_class(), "status status--completed");
}

#[test]
fn event_address_joins_fields() {
    let booking = booking_with_payments(Vec::new());
    assert_eq!(booking.event_address.display(), "14 Rose Villa, Pune, MH 411001");
}

#[test]
fn all_request_statuses_are_listed_once() {
    let labels: Vec<&str> = RequestStatus::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["Pending", "Approved", "Rejected", "Confirmed", "Completed"]);
}
