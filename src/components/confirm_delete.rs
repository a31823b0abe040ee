//! Generic delete confirmation modal. The page owning the record issues the
//! request; this surface only confirms intent.

use leptos::prelude::*;

use crate::components::modal::Modal;

#[component]
pub fn ConfirmDelete(
    title: String,
    message: String,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_cancel>
            <p class="modal__message">{message}</p>
            <div class="modal__actions">
                <button class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                    "Delete"
                </button>
            </div>
        </Modal>
    }
}
