//! Reusable view components: layout shells, modal surfaces, and the shared
//! progress/toast indicators.

pub mod account_form;
pub mod booking_details;
pub mod confirm_delete;
pub mod document_upload;
pub mod layout;
pub mod modal;
pub mod multi_select;
pub mod progress_bar;
pub mod toast_host;
pub mod transactions_modal;
