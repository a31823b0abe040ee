//! Application state containers.
//!
//! Each store is a plain struct held in an `RwSignal` created by `App` and
//! provided via context; nothing here is a process-wide singleton. Stores
//! live for the lifetime of the application shell and are reset, not
//! replaced, on logout.

pub mod progress;
pub mod records;
pub mod session;
pub mod toast;
pub mod transactions;
