//! Admin Models
//!
//! Entity form payloads, server response envelopes and toast records.

use serde::{Deserialize, Serialize};

use crate::error::AdminError;
use crate::routes::{EntityAction, EntityKind};

// ========================
// Entity Forms
// ========================

/// Ordered multipart form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    entries: Vec<(&'static str, String)>,
}

impl FormPayload {
    pub fn new(action: EntityAction) -> Self {
        Self {
            entries: vec![("action", action.as_str().to_string())],
        }
    }

    pub fn push(&mut self, name: &'static str, value: String) {
        self.entries.push((name, value));
    }

    pub fn entries(&self) -> &[(&'static str, String)] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Trimmed value of input `id`, empty when the input is missing
fn input(read: &impl Fn(&str) -> Option<String>, id: &str) -> String {
    read(id).map(|v| v.trim().to_string()).unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    pub name: String,
    pub location: String,
}

impl Workspace {
    pub fn from_inputs(read: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            name: input(&read, "workspace-name"),
            location: input(&read, "workspace-location"),
        }
    }

    pub fn to_payload(&self, action: EntityAction) -> FormPayload {
        let mut payload = FormPayload::new(action);
        payload.push("name", self.name.clone());
        payload.push("location", self.location.clone());
        payload
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Space {
    pub name: String,
    pub width: String,
    pub height: String,
}

impl Space {
    pub fn from_inputs(read: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            name: input(&read, "space-name"),
            width: input(&read, "space-width"),
            height: input(&read, "space-height"),
        }
    }

    pub fn to_payload(&self, action: EntityAction) -> FormPayload {
        let mut payload = FormPayload::new(action);
        payload.push("name", self.name.clone());
        payload.push("width", self.width.clone());
        payload.push("height", self.height.clone());
        payload
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Seat {
    pub code: String,
    pub row: String,
    pub col: String,
}

impl Seat {
    pub fn from_inputs(read: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            code: input(&read, "seat-code"),
            row: input(&read, "seat-row"),
            col: input(&read, "seat-col"),
        }
    }

    pub fn to_payload(&self, action: EntityAction) -> FormPayload {
        let mut payload = FormPayload::new(action);
        payload.push("code", self.code.clone());
        payload.push("row", self.row.clone());
        payload.push("col", self.col.clone());
        payload
    }
}

/// Read the inputs for `kind` and build its form payload
pub fn entity_payload(
    kind: EntityKind,
    action: EntityAction,
    read: impl Fn(&str) -> Option<String>,
) -> FormPayload {
    match kind {
        EntityKind::Workspace => Workspace::from_inputs(read).to_payload(action),
        EntityKind::Space => Space::from_inputs(read).to_payload(action),
        EntityKind::Seat => Seat::from_inputs(read).to_payload(action),
    }
}

// ========================
// Responses
// ========================

/// `{ok, error?, html?}` envelope returned by entity and modal routes
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
}

/// What the modal should do with a response
#[derive(Debug, Clone, PartialEq)]
pub enum ModalOutcome {
    Reload,
    /// Server re-rendered the form (validation errors)
    ReplaceContent(String),
    Notify(String),
}

impl ActionResponse {
    fn error_or(&self, fallback: &str) -> String {
        self.error
            .clone()
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn into_result(self, fallback: &str) -> Result<(), AdminError> {
        if self.ok {
            Ok(())
        } else {
            Err(AdminError::Server(self.error_or(fallback)))
        }
    }

    pub fn modal_outcome(self, fallback: &str) -> ModalOutcome {
        if self.ok {
            return ModalOutcome::Reload;
        }
        match self.html.as_deref() {
            Some(html) if !html.is_empty() => ModalOutcome::ReplaceContent(html.to_string()),
            _ => ModalOutcome::Notify(self.error_or(fallback)),
        }
    }

    /// Modal markup from a successful GET
    pub fn into_html(self, fallback: &str) -> Result<String, AdminError> {
        if self.ok {
            if let Some(html) = self.html.as_deref().filter(|html| !html.is_empty()) {
                return Ok(html.to_string());
            }
        }
        Err(AdminError::Server(self.error_or(fallback)))
    }
}

/// Wire record for one seat in a save-positions request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatPosition {
    pub id: String,
    pub x: i64,
    pub y: i64,
}

impl SeatPosition {
    pub fn from_pixels(id: impl Into<String>, left: f64, top: f64) -> Self {
        Self {
            id: id.into(),
            x: left.round() as i64,
            y: top.round() as i64,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SavePositionsResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub updated: u32,
    /// Per-seat failures the server skipped over
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// ========================
// Toasts
// ========================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Lenient parse of the kind names used by page markup
    pub fn parse(kind: &str) -> Self {
        match kind.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" | "danger" => Self::Error,
            "warning" | "warn" => Self::Warning,
            _ => Self::Info,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
            Self::Warning => "toast toast-warning",
            Self::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}
