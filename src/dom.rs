//! DOM Helpers
//!
//! Lookups and mutations on the server-rendered admin page.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::AdminError;

pub const MODAL_ID: &str = "modal";
pub const MODAL_CONTENT_ID: &str = "modal-content";
const HIDDEN_CLASS: &str = "hidden";

pub fn window() -> Result<Window, AdminError> {
    web_sys::window().ok_or_else(|| AdminError::dom("window"))
}

pub fn document() -> Result<Document, AdminError> {
    window()?.document().ok_or_else(|| AdminError::dom("document"))
}

pub fn element(id: &str) -> Result<Element, AdminError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| AdminError::dom(&format!("#{id}")))
}

/// `value` of any form control (input, select, textarea) with this id
pub fn input_value(id: &str) -> Option<String> {
    let el = document().ok()?.get_element_by_id(id)?;
    js_sys::Reflect::get(&el, &JsValue::from_str("value"))
        .ok()?
        .as_string()
}

/// Elements matching `selector` under `root`
pub fn query_all<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn reload_page() {
    if let Ok(window) = window() {
        if let Err(e) = window.location().reload() {
            log::error!("[DOM] Reload failed: {:?}", e);
        }
    }
}

// ========================
// Modal
// ========================

pub fn replace_modal_content(html: &str) -> Result<(), AdminError> {
    element(MODAL_CONTENT_ID)?.set_inner_html(html);
    Ok(())
}

pub fn open_modal(html: &str) -> Result<(), AdminError> {
    replace_modal_content(html)?;
    element(MODAL_ID)?
        .class_list()
        .remove_1(HIDDEN_CLASS)
        .map_err(|_| AdminError::Dom("failed to show #modal".to_string()))
}

/// Hide the modal and drop its content. A page without a modal is left alone.
pub fn close_modal() {
    let Ok(document) = document() else { return };
    if let Some(modal) = document.get_element_by_id(MODAL_ID) {
        let _ = modal.class_list().add_1(HIDDEN_CLASS);
    }
    if let Some(content) = document.get_element_by_id(MODAL_CONTENT_ID) {
        content.set_inner_html("");
    }
}

/// Text content of an element, trimmed
pub fn trimmed_text(el: &HtmlElement) -> String {
    el.text_content().unwrap_or_default().trim().to_string()
}
