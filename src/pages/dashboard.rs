//! Dashboard overview, role-dependent: clients see booking and spend
//! figures, providers see order and earnings figures plus their profile.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::DashboardShell;
use crate::net::api::ApiClient;
use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::format::format_amount;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let body = move || match session.get().role() {
        None => view! { <p class="page__hint">"Checking your session..."</p> }.into_any(),
        Some(Role::Client) => view! { <ClientOverview/> }.into_any(),
        Some(Role::Provider) => view! { <ProviderOverview/> }.into_any(),
    };

    view! { <DashboardShell title="Overview".to_owned()>{body}</DashboardShell> }
}

#[component]
fn StatCard(label: String, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}

#[component]
fn ClientOverview() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let summary = LocalResource::new(move || {
        let api = api.clone();
        async move { api.client_summary().await }
    });

    view! {
        <Suspense fallback=move || view! { <p class="page__hint">"Loading summary..."</p> }>
            {move || {
                summary
                    .get()
                    .map(|result| match result {
                        Ok(s) => view! {
                            <div class="stat-grid">
                                <StatCard
                                    label="Total bookings".to_owned()
                                    value=s.total_bookings.to_string()
                                />
                                <StatCard
                                    label="Upcoming".to_owned()
                                    value=s.upcoming_bookings.to_string()
                                />
                                <StatCard
                                    label="Completed".to_owned()
                                    value=s.completed_bookings.to_string()
                                />
                                <StatCard
                                    label="Total spent".to_owned()
                                    value=format!("\u{20b9}{}", format_amount(s.total_spent))
                                />
                            </div>
                        }
                        .into_any(),
                        Err(err) => {
                            view! { <p class="page__error">{err.to_string()}</p> }.into_any()
                        }
                    })
            }}
        </Suspense>
    }
}

#[component]
fn ProviderOverview() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let summary = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.provider_summary().await }
        }
    });
    let profile = LocalResource::new(move || {
        let api = api.clone();
        async move { api.provider_profile().await }
    });

    let profile_section = move || {
        profile.get().map(|result| match result {
            Ok(p) => view! {
                <div class="profile-card">
                    <h2>{p.display_name}</h2>
                    <p class="profile-card__cuisines">{p.cuisine_styles.join(" \u{00b7} ")}</p>
                    {p.is_verified.then(|| {
                        view! { <span class="badge badge--active">"Verified"</span> }
                    })}
                </div>
            }
            .into_any(),
            Err(err) if err.is_not_found() => view! {
                <div class="callout">
                    <p>
                        "Your provider profile is not live yet. Upload your verification "
                        "documents to finish onboarding."
                    </p>
                    <a class="btn btn--primary" href="/dashboard/documents">
                        "Go to documents"
                    </a>
                </div>
            }
            .into_any(),
            Err(err) => view! { <p class="page__error">{err.to_string()}</p> }.into_any(),
        })
    };

    view! {
        <Suspense fallback=move || view! { <p class="page__hint">"Loading summary..."</p> }>
            {profile_section}
            {move || {
                summary
                    .get()
                    .map(|result| match result {
                        Ok(s) => view! {
                            <div class="stat-grid">
                                <StatCard
                                    label="Total orders".to_owned()
                                    value=s.total_orders.to_string()
                                />
                                <StatCard
                                    label="Pending requests".to_owned()
                                    value=s.pending_requests.to_string()
                                />
                                <StatCard
                                    label="Completed".to_owned()
                                    value=s.completed_orders.to_string()
                                />
                                <StatCard
                                    label="Total earnings".to_owned()
                                    value=format!("\u{20b9}{}", format_amount(s.total_earnings))
                                />
                            </div>
                        }
                        .into_any(),
                        Err(err) => {
                            view! { <p class="page__error">{err.to_string()}</p> }.into_any()
                        }
                    })
            }}
        </Suspense>
    }
}
