//! Read-only booking details modal.
//!
//! Renders the fetched aggregate as-is; the only computed figure is the
//! settled-payments total.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::net::types::Booking;
use crate::util::format::{format_amount, format_date};

#[component]
pub fn BookingDetails(booking: Booking, on_close: Callback<()>) -> impl IntoView {
    let total = booking.total_paid();

    let payments_section = if booking.payments.is_empty() {
        view! { <p class="modal__hint">"No payments recorded yet."</p> }.into_any()
    } else {
        let rows = booking
            .payments
            .iter()
            .map(|payment| {
                view! {
                    <tr>
                        <td>{payment.payment_type.label()}</td>
                        <td>{payment.status.label()}</td>
                        <td class="amount">"\u{20b9}" {format_amount(payment.amount)}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <table class="booking-details__payments">
                <thead>
                    <tr>
                        <th>"Type"</th>
                        <th>"Status"</th>
                        <th>"Amount"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <Modal title="Booking details".to_owned() on_close=on_close>
            <dl class="booking-details">
                <dt>"Status"</dt>
                <dd>
                    <span class=booking.request_status.status_class()>
                        {booking.request_status.label()}
                    </span>
                </dd>
                <dt>"Dates"</dt>
                <dd>
                    {format!(
                        "{} to {}",
                        format_date(&booking.start_date),
                        format_date(&booking.end_date),
                    )}
                </dd>
                <dt>"Meal timings"</dt>
                <dd>{booking.meal_timings.join(", ")}</dd>
                <dt>"Guests"</dt>
                <dd>{booking.guests}</dd>
                <dt>"Venue"</dt>
                <dd>{booking.event_address.display()}</dd>
            </dl>

            <h3 class="booking-details__subtitle">"Payments"</h3>
            {payments_section}
            <p class="booking-details__total">
                "Total paid: \u{20b9}" {format_amount(total)}
            </p>
        </Modal>
    }
}
