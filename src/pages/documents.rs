//! Documents page: verification uploads with list, create, delete.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_delete::ConfirmDelete;
use crate::components::document_upload::DocumentUpload;
use crate::components::layout::DashboardShell;
use crate::net::api::ApiClient;
use crate::net::types::Document;
use crate::state::records::{ListPhase, RecordsState};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::report_error;
use crate::util::format::format_date;

#[derive(Clone, Debug, PartialEq)]
enum DocumentsModal {
    Upload,
    Delete(Document),
}

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let records = RwSignal::new(RecordsState::<Document>::default());
    let modal = RwSignal::new(None::<DocumentsModal>);

    let load = {
        let api = api.clone();
        move || {
            let api = api.clone();
            let generation = records.try_update(RecordsState::begin).unwrap_or_default();
            leptos::task::spawn_local(async move {
                let result = api.list_documents().await;
                let _ = records.try_update(|r| r.resolve(generation, result));
            });
        }
    };

    {
        let load = load.clone();
        Effect::new(move || load());
    }

    let close = Callback::new(move |()| modal.set(None));
    let reload_and_close = {
        let load = load.clone();
        Callback::new(move |()| {
            modal.set(None);
            load();
        })
    };

    let on_delete_confirm = {
        let api = api.clone();
        let load = load.clone();
        Callback::new(move |()| {
            let Some(DocumentsModal::Delete(document)) = modal.get_untracked() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let load = load.clone();
                leptos::task::spawn_local(async move {
                    match api.delete_document(&document.id).await {
                        Ok(()) => {
                            modal.set(None);
                            load();
                        }
                        Err(err) => report_error(toast, "Could not delete document", &err),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, &load, &toast, document);
            }
        })
    };

    let body = move || match records.get().phase {
        ListPhase::Loading => view! { <p class="page__hint">"Loading documents..."</p> }.into_any(),
        ListPhase::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
        ListPhase::Ready(documents) => {
            if documents.is_empty() {
                return view! {
                    <p class="page__hint">
                        "No documents uploaded yet. Verification documents unlock provider payouts."
                    </p>
                }
                .into_any();
            }
            let rows = documents
                .into_iter()
                .map(|document| {
                    let delete_document = document.clone();
                    view! {
                        <tr>
                            <td>{document.name.clone()}</td>
                            <td>
                                <span class=document.status.status_class()>
                                    {document.status.label()}
                                </span>
                            </td>
                            <td>{format_date(&document.created_date)}</td>
                            <td>
                                <a href=document.attachment.clone() target="_blank" rel="noreferrer">
                                    "View"
                                </a>
                            </td>
                            <td>
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| {
                                        modal.set(
                                            Some(DocumentsModal::Delete(delete_document.clone())),
                                        );
                                    }
                                >
                                    "Delete"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <table class="documents">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Status"</th>
                            <th>"Uploaded"</th>
                            <th>"File"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            }
            .into_any()
        }
    };

    let modal_view = move || {
        modal.get().map(|current| match current {
            DocumentsModal::Upload => {
                view! { <DocumentUpload on_close=close on_saved=reload_and_close/> }.into_any()
            }
            DocumentsModal::Delete(document) => {
                let message = format!("Delete \"{}\"? This cannot be undone.", document.name);
                view! {
                    <ConfirmDelete
                        title="Delete document".to_owned()
                        message=message
                        on_cancel=close
                        on_confirm=on_delete_confirm
                    />
                }
                .into_any()
            }
        })
    };

    view! {
        <DashboardShell title="Documents".to_owned()>
            <div class="page__toolbar">
                <button
                    class="btn btn--primary"
                    on:click=move |_| modal.set(Some(DocumentsModal::Upload))
                >
                    "+ Upload document"
                </button>
            </div>
            {body}
            {modal_view}
        </DashboardShell>
    }
}
