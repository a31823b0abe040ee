//! Orders page: booking list with a status filter, details modal, and a
//! review dialog for completed bookings.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::booking_details::BookingDetails;
use crate::components::layout::DashboardShell;
use crate::components::modal::Modal;
use crate::components::multi_select::{MultiSelect, Selection};
use crate::net::api::ApiClient;
use crate::net::reviews::ReviewPayload;
use crate::net::types::{Booking, RequestStatus};
use crate::state::records::{ListPhase, RecordsState};
use crate::state::session::SessionState;
use crate::state::toast::{ToastLevel, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::report_error;
use crate::util::format::{format_amount, format_date};

#[derive(Clone, Debug, PartialEq)]
enum OrdersModal {
    Details(Booking),
    Review(Booking),
}

/// Status filter over the fetched list; an empty selection shows everything.
fn visible<'a>(bookings: &'a [Booking], selection: &Selection) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| selection.admits(b.request_status.label()))
        .collect()
}

/// Party ids a review must carry. Only completed bookings qualify, and only
/// when the backend actually populated both references.
fn review_target(booking: &Booking) -> Option<(String, String)> {
    if booking.request_status != RequestStatus::Completed {
        return None;
    }
    match (&booking.provider_id, &booking.client_id) {
        (Some(provider), Some(client)) => Some((provider.clone(), client.clone())),
        _ => None,
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let records = RwSignal::new(RecordsState::<Booking>::default());
    let modal = RwSignal::new(None::<OrdersModal>);
    let status_filter = RwSignal::new(Selection::default());

    {
        let api = api.clone();
        Effect::new(move || {
            let api = api.clone();
            let generation = records.try_update(RecordsState::begin).unwrap_or_default();
            leptos::task::spawn_local(async move {
                let result = api.list_bookings().await;
                let _ = records.try_update(|r| r.resolve(generation, result));
            });
        });
    }

    let close = Callback::new(move |()| modal.set(None));

    let on_review = move |booking: Booking| {
        if review_target(&booking).is_some() {
            modal.set(Some(OrdersModal::Review(booking)));
        } else {
            toast.update(|t| {
                t.push(
                    ToastLevel::Error,
                    "This booking has no provider reference yet, so it cannot be reviewed.",
                );
            });
        }
    };

    let body = move || match records.get().phase {
        ListPhase::Loading => view! { <p class="page__hint">"Loading orders..."</p> }.into_any(),
        ListPhase::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
        ListPhase::Ready(bookings) => {
            if bookings.is_empty() {
                return view! { <p class="page__hint">"No orders yet."</p> }.into_any();
            }
            let shown: Vec<Booking> = status_filter
                .with(|selection| visible(&bookings, selection))
                .into_iter()
                .cloned()
                .collect();
            if shown.is_empty() {
                return view! {
                    <p class="page__hint">"No orders match the selected statuses."</p>
                }
                .into_any();
            }
            let cards = shown
                .into_iter()
                .map(|booking| {
                    let details_booking = booking.clone();
                    let review_booking = booking.clone();
                    let reviewable = booking.request_status == RequestStatus::Completed;
                    view! {
                        <li class="order-card">
                            <div class="order-card__info">
                                <span class=booking.request_status.status_class()>
                                    {booking.request_status.label()}
                                </span>
                                <span class="order-card__dates">
                                    {format!(
                                        "{} to {}",
                                        format_date(&booking.start_date),
                                        format_date(&booking.end_date),
                                    )}
                                </span>
                                <span class="order-card__guests">
                                    {format!("{} guests", booking.guests)}
                                </span>
                                <span class="order-card__paid">
                                    "Paid \u{20b9}" {format_amount(booking.total_paid())}
                                </span>
                            </div>
                            <div class="order-card__actions">
                                <button
                                    class="btn"
                                    on:click=move |_| {
                                        modal.set(
                                            Some(OrdersModal::Details(details_booking.clone())),
                                        );
                                    }
                                >
                                    "View details"
                                </button>
                                {reviewable.then(|| {
                                    let booking = review_booking.clone();
                                    view! {
                                        <button
                                            class="btn"
                                            on:click=move |_| on_review(booking.clone())
                                        >
                                            "Leave review"
                                        </button>
                                    }
                                })}
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>();
            view! { <ul class="order-list">{cards}</ul> }.into_any()
        }
    };

    let modal_view = move || {
        modal.get().map(|current| match current {
            OrdersModal::Details(booking) => {
                view! { <BookingDetails booking=booking on_close=close/> }.into_any()
            }
            OrdersModal::Review(booking) => {
                view! { <ReviewDialog booking=booking on_close=close/> }.into_any()
            }
        })
    };

    let status_options: Vec<String> =
        RequestStatus::ALL.iter().map(|s| s.label().to_owned()).collect();

    view! {
        <DashboardShell title="Orders".to_owned()>
            <MultiSelect
                label="Filter by status".to_owned()
                options=status_options
                selection=status_filter
            />
            {body}
            {modal_view}
        </DashboardShell>
    }
}

/// Review dialog for one completed booking.
#[component]
fn ReviewDialog(booking: Booking, on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let rating = RwSignal::new(5_u8);
    let comment = RwSignal::new(String::new());
    let target = review_target(&booking);
    let booking_id = booking.id.clone();

    let submit = Callback::new(move |()| {
        let Some((provider_id, client_id)) = target.clone() else {
            return;
        };
        let review = ReviewPayload {
            booking_id: booking_id.clone(),
            provider_id,
            client_id,
            rating: rating.get_untracked(),
            comment: comment.get_untracked().trim().to_owned(),
        };
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.submit_review(&review).await {
                    Ok(()) => {
                        toast.update(|t| {
                            t.push(ToastLevel::Info, "Thanks for your review.");
                        });
                        on_close.run(());
                    }
                    Err(err) => report_error(toast, "Could not submit review", &err),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &toast, review);
        }
    });

    let stars = move || {
        (1..=5_u8)
            .map(|n| {
                view! {
                    <button
                        class=move || {
                            if rating.get() >= n { "star star--on" } else { "star" }
                        }
                        on:click=move |_| rating.set(n)
                    >
                        "\u{2605}"
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Modal title="Leave a review".to_owned() on_close=on_close>
            <div class="review__stars">{stars}</div>
            <label class="field">
                "Comment"
                <textarea
                    prop:value=move || comment.get()
                    on:input=move |ev| comment.set(event_target_value(&ev))
                ></textarea>
            </label>
            <div class="modal__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" on:click=move |_| submit.run(())>
                    "Submit review"
                </button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;
