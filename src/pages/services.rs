//! Services page listing the standard booking packages.

use leptos::prelude::*;

use crate::components::layout::PageShell;

struct Package {
    name: &'static str,
    description: &'static str,
    detail: &'static str,
}

const PACKAGES: [Package; 4] = [
    Package {
        name: "Dinner party",
        description: "A chef for one evening, menu planned with you.",
        detail: "Up to 20 guests, single meal service.",
    },
    Package {
        name: "Multi-day event",
        description: "Weddings and festivities across consecutive days.",
        detail: "Breakfast, lunch, and dinner timings per day.",
    },
    Package {
        name: "Corporate catering",
        description: "Recurring office lunches or one-off team events.",
        detail: "Weekday scheduling, invoice billing.",
    },
    Package {
        name: "Cooking class",
        description: "A hands-on session in your own kitchen.",
        detail: "Two to eight participants.",
    },
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    let cards = PACKAGES
        .iter()
        .map(|package| {
            view! {
                <div class="service-card">
                    <h3>{package.name}</h3>
                    <p>{package.description}</p>
                    <p class="service-card__detail">{package.detail}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <PageShell>
            <section class="services">
                <h1>"Services"</h1>
                <div class="services__grid">{cards}</div>
                <p class="services__note">
                    "All bookings are requested through the dashboard and confirmed by the "
                    "chef before any payment is taken."
                </p>
            </section>
        </PageShell>
    }
}
