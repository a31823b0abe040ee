//! Renders the toast queue in a fixed corner stack.
//!
//! Each toast auto-dismisses after a few seconds in the browser; the manual
//! dismiss button exists for both builds.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastLevel, ToastState};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_SECS: u64 = 5;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toast.get().toasts().to_vec()
                key=|item| item.id
                children=move |item: Toast| {
                    let id = item.id;
                    #[cfg(feature = "hydrate")]
                    {
                        leptos::task::spawn_local(async move {
                            gloo_timers::future::sleep(std::time::Duration::from_secs(
                                AUTO_DISMISS_SECS,
                            ))
                            .await;
                            let _ = toast.try_update(|t| t.dismiss(id));
                        });
                    }
                    let class = match item.level {
                        ToastLevel::Info => "toast toast--info",
                        ToastLevel::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status">
                            <span class="toast__message">{item.message.clone()}</span>
                            <button
                                class="toast__dismiss"
                                on:click=move |_| toast.update(|t| t.dismiss(id))
                            >
                                "Dismiss"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
