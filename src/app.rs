//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config;
use crate::net::api::ApiClient;
use crate::pages::bank_accounts::BankAccountsPage;
use crate::pages::contact::ContactPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::documents::DocumentsPage;
use crate::pages::gallery::GalleryPage;
use crate::pages::home::HomePage;
use crate::pages::legal::{PrivacyPage, TermsPage};
use crate::pages::login::LoginPage;
use crate::pages::orders::OrdersPage;
use crate::pages::services::ServicesPage;
use crate::pages::venue::VenuePage;
use crate::state::progress::ProgressState;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the three shared stores and the API client, provides them via
/// context, and sets up client-side routing. The stores live exactly as
/// long as the app; signing out resets them in place.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let progress = RwSignal::new(ProgressState::default());
    let toast = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(progress);
    provide_context(toast);
    provide_context(ApiClient::new(config::api_base(), session, progress));

    // Restore any stored session once the browser takes over.
    Effect::new(move || session.update(SessionState::restore));

    view! {
        <Stylesheet id="leptos" href="/pkg/cheftable.css"/>
        <Title text="ChefTable"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("services") view=ServicesPage/>
                <Route path=StaticSegment("gallery") view=GalleryPage/>
                <Route path=StaticSegment("venue") view=VenuePage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route path=StaticSegment("terms") view=TermsPage/>
                <Route path=StaticSegment("privacy") view=PrivacyPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("orders"))
                    view=OrdersPage
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("documents"))
                    view=DocumentsPage
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("accounts"))
                    view=BankAccountsPage
                />
            </Routes>
        </Router>
    }
}
