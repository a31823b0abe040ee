//! Contact page.

use leptos::prelude::*;

use crate::components::layout::PageShell;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <PageShell>
            <section class="contact">
                <h1>"Contact"</h1>
                <p>"Questions about a booking, the venue, or becoming a provider?"</p>
                <ul class="contact__channels">
                    <li>
                        "Email: "
                        <a href="mailto:hello@cheftable.in">"hello@cheftable.in"</a>
                    </li>
                    <li>"Phone: +91 98765 00000 (10:00 to 18:00 IST, Mon to Sat)"</li>
                    <li>"Office: 3rd Floor, Lane 7, Koregaon Park, Pune 411001"</li>
                </ul>
                <p class="contact__note">
                    "Providers looking to join: sign in and upload your verification "
                    "documents; our team reviews them within two working days."
                </p>
            </section>
        </PageShell>
    }
}
