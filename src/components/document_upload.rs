//! Document upload modal: a name plus one attached file, sent as multipart.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::net::api::ApiClient;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::report_error;

#[component]
pub fn DocumentUpload(on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let name = RwSignal::new(String::new());
    let field_error = RwSignal::new(None::<String>);
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let submit = Callback::new(move |()| {
        let document_name = name.get().trim().to_owned();
        if document_name.is_empty() {
            field_error.set(Some("Document name is required.".into()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                field_error.set(Some("Choose a file to upload.".into()));
                return;
            };
            field_error.set(None);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.upload_document(&document_name, &file).await {
                    Ok(_) => on_saved.run(()),
                    Err(err) => report_error(toast, "Could not upload document", &err),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &toast, on_saved, document_name);
        }
    });

    view! {
        <Modal title="Upload document".to_owned() on_close=on_close>
            <label class="field">
                "Document name"
                <input
                    type="text"
                    placeholder="e.g. Food safety certificate"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                "File"
                <input type="file" node_ref=file_input/>
            </label>
            <Show when=move || field_error.get().is_some()>
                <p class="field__error">{move || field_error.get().unwrap_or_default()}</p>
            </Show>
            <div class="modal__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" on:click=move |_| submit.run(())>
                    "Upload"
                </button>
            </div>
        </Modal>
    }
}
