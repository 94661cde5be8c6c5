//! Server Commands
//!
//! Fetch wrappers for the admin routes, organized by concern.

mod entity;
mod layout;
mod modal;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::csrf::CSRF_HEADER;
use crate::error::AdminError;
use crate::models::FormPayload;

pub use entity::*;
pub use layout::*;
pub use modal::*;

const AJAX_HEADER: &str = "X-Requested-With";
const AJAX_VALUE: &str = "XMLHttpRequest";

// ========================
// Transport
// ========================

fn with_csrf(builder: RequestBuilder, csrf: Option<&str>) -> RequestBuilder {
    match csrf {
        Some(token) => builder.header(CSRF_HEADER, token),
        None => builder,
    }
}

fn to_form_data(payload: &FormPayload) -> Result<FormData, AdminError> {
    let data = FormData::new().map_err(|_| AdminError::Dom("failed to create FormData".to_string()))?;
    for (name, value) in payload.entries() {
        data.append_with_str(name, value)
            .map_err(|_| AdminError::Dom(format!("failed to append form field {name}")))?;
    }
    Ok(data)
}

/// Parse the JSON envelope whatever the status; the server reports
/// rejections (403 included) as `{ok: false}` bodies.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AdminError> {
    let status = response.status();
    let url = response.url();
    let raw = response.text().await?;
    log::debug!("[HTTP] {} -> {}", url, status);
    serde_json::from_str(&raw).map_err(|e| {
        log::warn!("[HTTP] {} returned non-JSON body (status {})", url, status);
        AdminError::Decode(e.to_string())
    })
}

/// POST a multipart form
pub async fn post_form<T: DeserializeOwned>(
    url: &str,
    payload: &FormPayload,
    csrf: Option<&str>,
) -> Result<T, AdminError> {
    let request = with_csrf(Request::post(url), csrf)
        .body(to_form_data(payload)?)?;
    decode(request.send().await?).await
}

/// POST a JSON body
pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    url: &str,
    body: &B,
    csrf: Option<&str>,
) -> Result<T, AdminError> {
    let request = with_csrf(Request::post(url), csrf)
        .json(body)?;
    decode(request.send().await?).await
}
