//! Seat Admin App
//!
//! Root component: provides the admin context, wires the page bindings once
//! and renders the toast host.

use leptos::prelude::*;

use crate::components::ToastHost;
use crate::context::AdminContext;
use crate::editor::SeatLayoutEditor;
use crate::{globals, interceptor};

#[component]
pub fn AdminApp(ctx: AdminContext) -> impl IntoView {
    provide_context(ctx);

    if let Err(err) = globals::install_page_globals(ctx) {
        log::error!("[APP] {}", err);
    }
    if let Err(err) = interceptor::install_modal_interceptor(ctx) {
        log::error!("[APP] {}", err);
    }
    match SeatLayoutEditor::attach(ctx) {
        Ok(Some(_)) => {}
        Ok(None) => log::debug!("[APP] No seat map on this page"),
        Err(err) => log::error!("[APP] {}", err),
    }

    view! { <ToastHost /> }
}
