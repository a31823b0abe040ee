//! Shared modal dialog shell.
//!
//! Clicking the backdrop closes the dialog; clicks inside are stopped from
//! bubbling out so they do not count as backdrop clicks.

use leptos::prelude::*;

#[component]
pub fn Modal(title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=move |ev| ev.stop_propagation()>
                <header class="modal__header">
                    <h2 class="modal__title">{title}</h2>
                    <button class="modal__close" on:click=move |_| on_close.run(())>
                        "\u{00d7}"
                    </button>
                </header>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
