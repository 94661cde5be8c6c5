//! UI Components
//!
//! Leptos components mounted next to the server-rendered page.

mod toast_host;

pub use toast_host::ToastHost;
