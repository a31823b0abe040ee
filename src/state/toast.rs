//! Toast queue for surfacing request outcomes.

use leptos::prelude::RwSignal;
use leptos::prelude::Update;

use crate::net::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, level, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Log a failed call and surface it to the user.
///
/// This is the single error path for mutations: the page state is left
/// untouched by the caller and nothing is retried.
pub fn report_error(toast: RwSignal<ToastState>, context: &str, err: &ApiError) {
    leptos::logging::warn!("{context}: {err}");
    toast.update(|t| {
        t.push(ToastLevel::Error, format!("{context}: {err}"));
    });
}

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;
