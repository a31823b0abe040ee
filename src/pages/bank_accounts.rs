//! Bank accounts page: list, create/edit/delete, per-account transactions.
//!
//! The page keeps one `Option<AccountsModal>` so opening a modal
//! structurally closes whichever was open, and the selected record travels
//! inside the variant. Every successful mutation re-fetches the whole list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::account_form::AccountForm;
use crate::components::confirm_delete::ConfirmDelete;
use crate::components::layout::DashboardShell;
use crate::components::transactions_modal::TransactionsModal;
use crate::net::api::ApiClient;
use crate::net::types::BankAccount;
use crate::state::records::{ListPhase, RecordsState};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::report_error;
use crate::util::format::{format_amount, mask_account_number};

/// Which modal the page currently shows. A single value, so two can never
/// be open at once; closing drops the selected record with it.
#[derive(Clone, Debug, PartialEq)]
pub enum AccountsModal {
    Create,
    Edit(BankAccount),
    Delete(BankAccount),
    Transactions(BankAccount),
}

impl AccountsModal {
    /// The record this modal is bound to, if any.
    pub fn record(&self) -> Option<&BankAccount> {
        match self {
            Self::Create => None,
            Self::Edit(account) | Self::Delete(account) | Self::Transactions(account) => {
                Some(account)
            }
        }
    }
}

#[component]
pub fn BankAccountsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // Redirect once the session has settled unauthenticated.
    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let records = RwSignal::new(RecordsState::<BankAccount>::default());
    let modal = RwSignal::new(None::<AccountsModal>);

    let load = {
        let api = api.clone();
        move || {
            let api = api.clone();
            let generation = records.try_update(RecordsState::begin).unwrap_or_default();
            leptos::task::spawn_local(async move {
                let result = api.list_bank_accounts().await;
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
            let Some(AccountsModal::Delete(account)) = modal.get_untracked() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let load = load.clone();
                leptos::task::spawn_local(async move {
                    match api.delete_bank_account(&account.id).await {
                        Ok(()) => {
                            modal.set(None);
                            load();
                        }
                        Err(err) => report_error(toast, "Could not delete bank account", &err),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, &load, &toast, account);
            }
        })
    };

    let body = move || match records.get().phase {
        ListPhase::Loading => view! { <p class="page__hint">"Loading accounts..."</p> }.into_any(),
        ListPhase::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
        ListPhase::Ready(accounts) => {
            if accounts.is_empty() {
                return view! {
                    <p class="page__hint">"No bank accounts yet. Add one to receive payouts."</p>
                }
                .into_any();
            }
            let cards = accounts
                .into_iter()
                .map(|account| {
                    let edit_account = account.clone();
                    let delete_account = account.clone();
                    let tx_account = account.clone();
                    view! {
                        <li class="account-card">
                            <div class="account-card__info">
                                <span class="account-card__bank">{account.bank_name.clone()}</span>
                                <span class="account-card__number">
                                    {mask_account_number(&account.account_number)}
                                </span>
                                <span class="account-card__ifsc">{account.ifsc_code.clone()}</span>
                                {account.is_active.then(|| {
                                    view! { <span class="badge badge--active">"Active"</span> }
                                })}
                            </div>
                            <span class="account-card__balance">
                                "\u{20b9}" {format_amount(account.balance)}
                            </span>
                            <div class="account-card__actions">
                                <button
                                    class="btn"
                                    on:click=move |_| {
                                        modal.set(
                                            Some(AccountsModal::Transactions(tx_account.clone())),
                                        );
                                    }
                                >
                                    "Transactions"
                                </button>
                                <button
                                    class="btn"
                                    on:click=move |_| {
                                        modal.set(Some(AccountsModal::Edit(edit_account.clone())));
                                    }
                                >
                                    "Edit"
                                </button>
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| {
                                        modal.set(
                                            Some(AccountsModal::Delete(delete_account.clone())),
                                        );
                                    }
                                >
                                    "Delete"
                                </button>
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>();
            view! { <ul class="account-list">{cards}</ul> }.into_any()
        }
    };

    let modal_view = move || {
        modal.get().map(|current| match current {
            AccountsModal::Create => view! {
                <AccountForm existing=None on_close=close on_saved=reload_and_close/>
            }
            .into_any(),
            AccountsModal::Edit(account) => view! {
                <AccountForm existing=Some(account) on_close=close on_saved=reload_and_close/>
            }
            .into_any(),
            AccountsModal::Delete(account) => {
                let message = format!(
                    "Remove {} {}? Past transactions stay on record.",
                    account.bank_name,
                    mask_account_number(&account.account_number),
                );
                view! {
                    <ConfirmDelete
                        title="Delete bank account".to_owned()
                        message=message
                        on_cancel=close
                        on_confirm=on_delete_confirm
                    />
                }
                .into_any()
            }
            AccountsModal::Transactions(account) => view! {
                <TransactionsModal account=account on_close=close/>
            }
            .into_any(),
        })
    };

    view! {
        <DashboardShell title="Bank accounts".to_owned()>
            <div class="page__toolbar">
                <button
                    class="btn btn--primary"
                    on:click=move |_| modal.set(Some(AccountsModal::Create))
                >
                    "+ Add account"
                </button>
            </div>
            {body}
            {modal_view}
        </DashboardShell>
    }
}

#[cfg(test)]
#[path = "bank_accounts_test.rs"]
mod bank_accounts_test;
