//! Modal Form Interceptor
//!
//! One delegated `submit` listener turns every form inside `#modal` into an
//! asynchronous request.

use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlButtonElement, HtmlFormElement};

use crate::commands;
use crate::context::AdminContext;
use crate::dom;
use crate::error::AdminError;
use crate::layout::ICON_PROCESSING;
use crate::models::{ModalOutcome, ToastKind};

const MODAL_FORM_SELECTOR: &str = "#modal form";
const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";

/// Disabled submit button showing a spinner; `restore` puts the label back
struct BusyButton {
    button: HtmlButtonElement,
    label: String,
}

impl BusyButton {
    fn engage(form: &HtmlFormElement) -> Option<Self> {
        let button = form
            .query_selector(SUBMIT_BUTTON_SELECTOR)
            .ok()??
            .dyn_into::<HtmlButtonElement>()
            .ok()?;
        let label = button.inner_html();
        button.set_disabled(true);
        button.set_inner_html(&format!("{ICON_PROCESSING} Processing..."));
        Some(Self { button, label })
    }

    fn restore(self) {
        self.button.set_disabled(false);
        self.button.set_inner_html(&self.label);
    }
}

/// Form inside the modal that an event came from, if any
fn modal_form(ev: &Event) -> Option<HtmlFormElement> {
    ev.target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(MODAL_FORM_SELECTOR)
        .ok()??
        .dyn_into::<HtmlFormElement>()
        .ok()
}

pub fn install_modal_interceptor(ctx: AdminContext) -> Result<(), AdminError> {
    let on_submit = Closure::<dyn Fn(Event)>::new(move |ev: Event| {
        let Some(form) = modal_form(&ev) else { return };
        ev.prevent_default();

        let busy = BusyButton::engage(&form);
        let csrf = ctx.csrf_token();
        spawn_local(async move {
            match commands::submit_modal_form(&form, csrf.as_deref()).await {
                Ok(ModalOutcome::Reload) => {
                    dom::close_modal();
                    dom::reload_page();
                }
                Ok(ModalOutcome::ReplaceContent(html)) => {
                    log::info!("[MODAL] Server re-rendered the form");
                    if let Err(err) = dom::replace_modal_content(&html) {
                        ctx.report(&err);
                    }
                }
                Ok(ModalOutcome::Notify(message)) => {
                    log::warn!("[MODAL] {}", message);
                    ctx.notify(message, ToastKind::Error);
                }
                Err(err) => ctx.report(&err),
            }
            if let Some(busy) = busy {
                busy.restore();
            }
        });
    });

    dom::document()?
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|_| AdminError::Dom("failed to bind modal submit listener".to_string()))?;
    on_submit.forget();
    Ok(())
}
