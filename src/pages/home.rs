//! Landing page.

use leptos::prelude::*;

use crate::components::layout::PageShell;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageShell>
            <section class="hero">
                <h1>"Private chefs, booked for your table"</h1>
                <p class="hero__lead">
                    "ChefTable brings professional chefs to your home, venue, or "
                    "office. Pick the dates and meals; we handle the rest."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/services">"Browse services"</a>
                    <a class="btn" href="/login">"Book a chef"</a>
                </div>
            </section>

            <section class="highlights">
                <div class="highlight">
                    <h3>"Curated chefs"</h3>
                    <p>"Every provider is document-verified before their first booking."</p>
                </div>
                <div class="highlight">
                    <h3>"Transparent payments"</h3>
                    <p>"A token advance holds your dates; the balance settles after the event."</p>
                </div>
                <div class="highlight">
                    <h3>"Any occasion"</h3>
                    <p>"Intimate dinners, multi-day festivities, corporate lunches."</p>
                </div>
            </section>
        </PageShell>
    }
}
