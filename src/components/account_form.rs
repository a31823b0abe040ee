//! Create/edit bank account form modal.
//!
//! Field checks run synchronously and block the request; the backend call
//! happens only once they pass. Success hands control back to the page via
//! `on_saved` (which re-fetches the list); failure leaves the form as-is
//! and reports through the toast channel.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::net::api::ApiClient;
use crate::net::bank_accounts::BankAccountPayload;
use crate::net::types::BankAccount;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::report_error;
use crate::util::validate::{is_valid_account_number, is_valid_ifsc};

#[component]
pub fn AccountForm(
    existing: Option<BankAccount>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let is_edit = existing.is_some();
    let account_id = existing.as_ref().map(|a| a.id.clone());
    let bank_name =
        RwSignal::new(existing.as_ref().map(|a| a.bank_name.clone()).unwrap_or_default());
    let account_number =
        RwSignal::new(existing.as_ref().map(|a| a.account_number.clone()).unwrap_or_default());
    let ifsc_code =
        RwSignal::new(existing.as_ref().map(|a| a.ifsc_code.clone()).unwrap_or_default());
    let field_error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        let payload = BankAccountPayload {
            account_number: account_number.get().trim().to_owned(),
            bank_name: bank_name.get().trim().to_owned(),
            ifsc_code: ifsc_code.get().trim().to_uppercase(),
        };
        if payload.bank_name.is_empty() {
            field_error.set(Some("Bank name is required.".into()));
            return;
        }
        if !is_valid_account_number(&payload.account_number) {
            field_error.set(Some("Account number must be 9 to 18 digits.".into()));
            return;
        }
        if !is_valid_ifsc(&payload.ifsc_code) {
            field_error.set(Some("IFSC code must look like HDFC0001234.".into()));
            return;
        }
        field_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let account_id = account_id.clone();
            leptos::task::spawn_local(async move {
                let result = match account_id.as_deref() {
                    Some(id) => api.update_bank_account(id, &payload).await.map(|_| ()),
                    None => api.create_bank_account(&payload).await.map(|_| ()),
                };
                match result {
                    Ok(()) => on_saved.run(()),
                    Err(err) => report_error(toast, "Could not save bank account", &err),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &account_id, &toast, on_saved, payload);
        }
    });

    let title = if is_edit { "Edit bank account" } else { "Add bank account" };

    view! {
        <Modal title=title.to_owned() on_close=on_close>
            <label class="field">
                "Bank name"
                <input
                    type="text"
                    prop:value=move || bank_name.get()
                    on:input=move |ev| bank_name.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                "Account number"
                <input
                    type="text"
                    inputmode="numeric"
                    prop:value=move || account_number.get()
                    on:input=move |ev| account_number.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                "IFSC code"
                <input
                    type="text"
                    prop:value=move || ifsc_code.get()
                    on:input=move |ev| ifsc_code.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || field_error.get().is_some()>
                <p class="field__error">{move || field_error.get().unwrap_or_default()}</p>
            </Show>
            <div class="modal__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" on:click=move |_| submit.run(())>
                    {if is_edit { "Save changes" } else { "Add account" }}
                </button>
            </div>
        </Modal>
    }
}
