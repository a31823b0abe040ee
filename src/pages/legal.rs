//! Legal pages: terms of service and privacy policy.

use leptos::prelude::*;

use crate::components::layout::PageShell;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <PageShell>
            <section class="legal">
                <h1>"Terms of Service"</h1>
                <h2>"Bookings"</h2>
                <p>
                    "A booking request is an offer; it becomes binding when the chef "
                    "confirms and the token advance is captured. Cancellation before "
                    "confirmation is free."
                </p>
                <h2>"Payments"</h2>
                <p>
                    "Payments are processed by our payment partner. ChefTable never "
                    "stores card or bank credentials; payout accounts are held with "
                    "the payment partner and referenced here by masked number only."
                </p>
                <h2>"Provider obligations"</h2>
                <p>
                    "Providers must keep their verification documents current. "
                    "Expired or rejected documents suspend new bookings until "
                    "replacements are approved."
                </p>
            </section>
        </PageShell>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <PageShell>
            <section class="legal">
                <h1>"Privacy Policy"</h1>
                <h2>"What we store"</h2>
                <p>
                    "Your name, phone number, booking history, and any documents you "
                    "upload for verification. Session tokens are kept in your "
                    "browser's local storage and removed when you sign out."
                </p>
                <h2>"What we share"</h2>
                <p>
                    "Event details are shared with the chef you book. Payout details "
                    "are shared with the payment partner. Nothing is sold to third "
                    "parties."
                </p>
                <h2>"Removal"</h2>
                <p>
                    "Write to hello@cheftable.in to have your account and documents "
                    "removed; ledger entries required for accounting are retained "
                    "for the statutory period."
                </p>
            </section>
        </PageShell>
    }
}
