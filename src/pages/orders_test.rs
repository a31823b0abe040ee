use super::*;
use crate::net::types::{EventAddress, Payment, PaymentStatus, PaymentType};

fn booking(id: &str, status: RequestStatus) -> Booking {
    Booking {
        id: id.into(),
        request_status: status,
        start_date: "2026-03-01".into(),
        end_date: "2026-03-02".into(),
        meal_timings: vec!["Dinner".into()],
        guests: 12,
        payments: vec![Payment {
            id: format!("{id}_p1"),
            payment_type: PaymentType::Token,
            status: PaymentStatus::Captured,
            amount: 500.0,
        }],
        event_address: EventAddress {
            line1: "2 Lake View".into(),
            city: "Mumbai".into(),
            state: "MH".into(),
            pincode: "400001".into(),
        },
        provider_id: Some("prv_1".into()),
        client_id: Some("cli_1".into()),
    }
}

// =============================================================
// visible
// =============================================================

#[test]
fn empty_selection_shows_all_bookings() {
    let bookings =
        vec![booking("b1", RequestStatus::Pending), booking("b2", RequestStatus::Completed)];
    let selection = Selection::default();
    assert_eq!(visible(&bookings, &selection).len(), 2);
}

#[test]
fn selection_restricts_to_chosen_statuses_in_order() {
    let bookings = vec![
        booking("b1", RequestStatus::Pending),
        booking("b2", RequestStatus::Completed),
        booking("b3", RequestStatus::Pending),
        booking("b4", RequestStatus::Confirmed),
    ];
    let mut selection = Selection::default();
    selection.toggle("Pending");
    selection.toggle("Confirmed");
    let shown: Vec<&str> = visible(&bookings, &selection).iter().map(|b| b.id.as_str()).collect();
    assert_eq!(shown, vec!["b1", "b3", "b4"]);
}

// =============================================================
// review_target
// =============================================================

#[test]
fn completed_booking_with_both_ids_is_reviewable() {
    let b = booking("b1", RequestStatus::Completed);
    assert_eq!(review_target(&b), Some(("prv_1".to_owned(), "cli_1".to_owned())));
}

#[test]
fn non_completed_bookings_are_not_reviewable() {
    for status in [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
        RequestStatus::Confirmed,
    ] {
        assert!(review_target(&booking("b1", status)).is_none());
    }
}

#[test]
fn missing_provider_reference_blocks_the_review() {
    let mut b = booking("b1", RequestStatus::Completed);
    b.provider_id = None;
    assert!(review_target(&b).is_none());

    let mut b = booking("b2", RequestStatus::Completed);
    b.client_id = None;
    assert!(review_target(&b).is_none());
}
