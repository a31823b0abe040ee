//! Transactions modal: one fetch per open, then purely client-side search.
//!
//! The ledger is fetched when the modal opens for an account; the search
//! term and category chips re-filter the in-memory list on every change
//! without touching the network. A response that arrives after the modal
//! switched accounts is dropped by the records generation token.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::net::api::ApiClient;
use crate::net::types::{BankAccount, Transaction, TransactionType};
use crate::state::records::{ListPhase, RecordsState};
use crate::state::transactions::{CategoryFilter, TransactionFilter};
use crate::util::format::{format_amount, format_date, mask_account_number};

#[component]
pub fn TransactionsModal(account: BankAccount, on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let records = RwSignal::new(RecordsState::<Transaction>::default());
    let term = RwSignal::new(String::new());
    let category = RwSignal::new(CategoryFilter::All);

    let subtitle = format!("{} {}", account.bank_name, mask_account_number(&account.account_number));

    let account_id = account.id.clone();
    Effect::new(move || {
        let api = api.clone();
        let account_id = account_id.clone();
        let generation = records.try_update(RecordsState::begin).unwrap_or_default();
        leptos::task::spawn_local(async move {
            let result = api.list_transactions(&account_id).await;
            let _ = records.try_update(|r| r.resolve(generation, result));
        });
    });

    let category_chips = move || {
        CategoryFilter::ALL_OPTIONS
            .into_iter()
            .map(|option| {
                view! {
                    <button
                        class=move || {
                            if category.get() == option {
                                "chip chip--active"
                            } else {
                                "chip"
                            }
                        }
                        on:click=move |_| category.set(option)
                    >
                        {option.label()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let body = move || match records.get().phase {
        ListPhase::Loading => {
            view! { <p class="modal__hint">"Loading transactions..."</p> }.into_any()
        }
        ListPhase::Failed(message) => view! { <p class="modal__error">{message}</p> }.into_any(),
        ListPhase::Ready(items) => {
            if items.is_empty() {
                return view! { <p class="modal__hint">"No transactions on this account yet."</p> }
                    .into_any();
            }
            let filter = TransactionFilter { term: term.get(), category: category.get() };
            let rows: Vec<Transaction> = filter.apply(&items).into_iter().cloned().collect();
            if rows.is_empty() {
                return view! { <p class="modal__hint">"No transactions match your search."</p> }
                    .into_any();
            }
            let rendered = rows
                .into_iter()
                .map(|tx| {
                    let sign = match tx.transaction_type {
                        TransactionType::Deposit => "+",
                        TransactionType::Withdrawal => "-",
                    };
                    view! {
                        <tr>
                            <td>{format_date(&tx.created_at)}</td>
                            <td>{tx.transaction_type.label()}</td>
                            <td class="reference">{tx.reference}</td>
                            <td class="amount">{sign} "\u{20b9}" {format_amount(tx.amount)}</td>
                            <td class="amount">"\u{20b9}" {format_amount(tx.balance_after)}</td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <table class="transactions">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Type"</th>
                            <th>"Reference"</th>
                            <th>"Amount"</th>
                            <th>"Balance"</th>
                        </tr>
                    </thead>
                    <tbody>{rendered}</tbody>
                </table>
            }
            .into_any()
        }
    };

    view! {
        <Modal title="Transactions".to_owned() on_close=on_close>
            <p class="modal__subtitle">{subtitle}</p>
            <div class="transactions__controls">
                <input
                    class="transactions__search"
                    type="search"
                    placeholder="Search by reference or amount"
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <div class="transactions__chips">{category_chips}</div>
            </div>
            {body}
        </Modal>
    }
}
