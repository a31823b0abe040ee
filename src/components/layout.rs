//! Page scaffolding: marketing shell, dashboard shell, nav and footer.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::progress_bar::ProgressBar;
use crate::components::toast_host::ToastHost;
use crate::state::session::SessionState;
use crate::util::theme;

/// Top navigation shared by every page.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let dark = RwSignal::new(false);

    // Apply the stored theme once the browser is in charge.
    Effect::new(move || {
        let enabled = theme::read_preference();
        theme::apply(enabled);
        dark.set(enabled);
    });

    let on_toggle = move |_| {
        dark.set(theme::toggle(dark.get_untracked()));
    };

    let account_link = move || {
        if session.get().is_authenticated() {
            view! { <a class="nav__cta" href="/dashboard">"Dashboard"</a> }.into_any()
        } else {
            view! { <a class="nav__cta" href="/login">"Sign in"</a> }.into_any()
        }
    };

    view! {
        <nav class="nav">
            <a class="nav__brand" href="/">"ChefTable"</a>
            <div class="nav__links">
                <a href="/services">"Services"</a>
                <a href="/gallery">"Gallery"</a>
                <a href="/venue">"Venue"</a>
                <a href="/contact">"Contact"</a>
            </div>
            <div class="nav__actions">
                <button class="nav__theme" on:click=on_toggle title="Toggle dark mode">
                    {move || if dark.get() { "\u{2600}" } else { "\u{263e}" }}
                </button>
                {account_link}
            </div>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__links">
                <a href="/terms">"Terms of Service"</a>
                <a href="/privacy">"Privacy Policy"</a>
                <a href="/contact">"Contact"</a>
            </div>
            <p class="footer__note">"ChefTable. Private chefs for your table."</p>
        </footer>
    }
}

/// Marketing page wrapper: nav, content, footer, global indicators.
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <ProgressBar/>
            <NavBar/>
            <main class="page__main">{children()}</main>
            <Footer/>
            <ToastHost/>
        </div>
    }
}

/// Dashboard wrapper: side navigation plus the signed-in user's header.
#[component]
pub fn DashboardShell(title: String, children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let user_name = move || {
        session.get().user.map(|u| u.name).unwrap_or_default()
    };

    let on_sign_out = move |_| {
        session.update(SessionState::sign_out);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="dashboard">
            <ProgressBar/>
            <aside class="dashboard__nav">
                <a class="dashboard__brand" href="/">"ChefTable"</a>
                <a href="/dashboard">"Overview"</a>
                <a href="/dashboard/orders">"Orders"</a>
                <a href="/dashboard/documents">"Documents"</a>
                <a href="/dashboard/accounts">"Bank accounts"</a>
                <button class="dashboard__signout" on:click=on_sign_out>
                    "Sign out"
                </button>
            </aside>
            <div class="dashboard__content">
                <header class="dashboard__header">
                    <h1>{title}</h1>
                    <span class="dashboard__user">{user_name}</span>
                </header>
                <main class="dashboard__main">{children()}</main>
            </div>
            <ToastHost/>
        </div>
    }
}
