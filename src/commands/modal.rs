//! Modal Commands
//!
//! Loading entity forms into the modal and posting forms rendered inside it.

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{FormData, HtmlFormElement};

use crate::error::AdminError;
use crate::models::{ActionResponse, ModalOutcome};
use crate::routes::EntityRoute;
use crate::scope::PageScope;

use super::{decode, with_csrf, AJAX_HEADER, AJAX_VALUE};

const MODAL_SUBMIT_FALLBACK: &str = "Request failed";

/// Text fields of a FormData; file entries are skipped
fn text_entries(data: &FormData) -> Vec<(String, String)> {
    let Ok(Some(iter)) = js_sys::try_iter(data) else {
        return Vec::new();
    };
    iter.filter_map(Result::ok)
        .filter_map(|entry| {
            let pair = js_sys::Array::from(&entry);
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

/// Send a modal form with its own method and action.
///
/// GET forms carry their fields in the query string; anything else is posted
/// as multipart.
pub async fn submit_modal_form(
    form: &HtmlFormElement,
    csrf: Option<&str>,
) -> Result<ModalOutcome, AdminError> {
    let data = FormData::new_with_form(form)
        .map_err(|_| AdminError::Dom("failed to read modal form".to_string()))?;
    let action = form.action();
    let method = form.method().to_ascii_lowercase();
    log::info!("[MODAL] {} {}", method, action);

    let response = if method == "get" {
        let fields = text_entries(&data);
        with_csrf(Request::get(&action), csrf)
            .header(AJAX_HEADER, AJAX_VALUE)
            .query(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .send()
            .await?
    } else {
        with_csrf(Request::post(&action), csrf)
            .header(AJAX_HEADER, AJAX_VALUE)
            .body(JsValue::from(data))?
            .send()
            .await?
    };

    let envelope: ActionResponse = decode(response).await?;
    Ok(envelope.modal_outcome(MODAL_SUBMIT_FALLBACK))
}

/// Fetch the server-rendered form for an entity action
pub async fn load_entity_modal(route: &EntityRoute, scope: &PageScope) -> Result<String, AdminError> {
    let url = route.path(scope)?;
    log::info!("[MODAL] load {}", url);
    let response = Request::get(&url)
        .header(AJAX_HEADER, AJAX_VALUE)
        .send()
        .await?;
    let envelope: ActionResponse = decode(response).await?;
    envelope.into_html(&format!("Unable to load {} form", route.kind.as_str()))
}
