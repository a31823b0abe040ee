//! Top-of-page activity indicator driven by the progress store.

use leptos::prelude::*;

use crate::state::progress::ProgressState;

#[component]
pub fn ProgressBar() -> impl IntoView {
    let progress = expect_context::<RwSignal<ProgressState>>();

    let class = move || {
        if progress.get().is_busy() {
            "progress-bar progress-bar--busy"
        } else {
            "progress-bar"
        }
    };

    view! { <div class=class aria-hidden="true"></div> }
}
