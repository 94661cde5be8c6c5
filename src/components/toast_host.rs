//! Toast Host Component
//!
//! Stack of transient notifications. Click a toast to dismiss it early.

use leptos::prelude::*;

use crate::context::AdminContext;
use crate::store::{store_remove_toast, AdminStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext should be provided");
    let store = ctx.store;

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.css_class()
                            on:click=move |_| store_remove_toast(&store, id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
