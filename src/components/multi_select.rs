//! Filterable multi-select over a closed set of options.
//!
//! The core is a plain order-preserving selection plus a substring filter;
//! the component wires both to an input and a toggle-button list. An empty
//! selection means "no filter applied", not "match nothing".

use leptos::prelude::*;

/// Selected option values, kept in the order the user picked them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    values: Vec<String>,
}

impl Selection {
    /// Add the value, or remove it if already selected.
    pub fn toggle(&mut self, value: &str) {
        if let Some(pos) = self.values.iter().position(|v| v == value) {
            self.values.remove(pos);
        } else {
            self.values.push(value.to_owned());
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Whether a record with this value passes the filter.
    pub fn admits(&self, value: &str) -> bool {
        self.is_empty() || self.contains(value)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// Case-insensitive substring filter over the option list, order preserved.
pub fn filter_options<'a>(options: &'a [String], query: &str) -> Vec<&'a String> {
    let query = query.trim().to_lowercase();
    options
        .iter()
        .filter(|opt| query.is_empty() || opt.to_lowercase().contains(&query))
        .collect()
}

#[component]
pub fn MultiSelect(
    label: String,
    options: Vec<String>,
    selection: RwSignal<Selection>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let options = StoredValue::new(options);

    view! {
        <div class="multi-select">
            <div class="multi-select__head">
                <span class="multi-select__label">{label}</span>
                <Show when=move || !selection.with(Selection::is_empty)>
                    <button
                        class="multi-select__clear"
                        on:click=move |_| selection.update(Selection::clear)
                    >
                        "Clear"
                    </button>
                </Show>
            </div>
            <input
                class="multi-select__search"
                type="search"
                placeholder="Filter options"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <ul class="multi-select__options">
                {move || {
                    let current = query.get();
                    options.with_value(|opts| {
                        filter_options(opts, &current)
                            .into_iter()
                            .map(|opt| {
                                let value = opt.clone();
                                let toggle_value = value.clone();
                                let class_value = value.clone();
                                view! {
                                    <li>
                                        <button
                                            class=move || {
                                                if selection.with(|s| s.contains(&class_value)) {
                                                    "multi-select__option multi-select__option--active"
                                                } else {
                                                    "multi-select__option"
                                                }
                                            }
                                            on:click=move |_| {
                                                selection.update(|s| s.toggle(&toggle_value));
                                            }
                                        >
                                            {value.clone()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
#[path = "multi_select_test.rs"]
mod multi_select_test;
