//! Venue page for the partner event space.

use leptos::prelude::*;

use crate::components::layout::PageShell;

#[component]
pub fn VenuePage() -> impl IntoView {
    view! {
        <PageShell>
            <section class="venue">
                <h1>"The ChefTable Venue"</h1>
                <p class="venue__lead">
                    "Prefer not to host at home? Our partner venue in Koregaon Park "
                    "seats up to 60 guests with a full service kitchen on site."
                </p>
                <ul class="venue__facts">
                    <li>"Indoor dining hall and covered courtyard"</li>
                    <li>"Commercial kitchen available to every booked chef"</li>
                    <li>"Parking for 25 cars"</li>
                    <li>"Audio system and projector included"</li>
                </ul>
                <p>
                    "Venue availability is confirmed together with your chef booking; "
                    "mention the venue in your booking request notes."
                </p>
                <a class="btn btn--primary" href="/contact">"Ask about dates"</a>
            </section>
        </PageShell>
    }
}
