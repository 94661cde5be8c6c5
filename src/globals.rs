//! Page Globals
//!
//! Server-rendered markup calls into the admin UI through functions on
//! `window`, e.g. `onclick="submitSeat('edit', 42)"`.

use leptos::task::spawn_local;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::commands;
use crate::context::AdminContext;
use crate::dom;
use crate::error::AdminError;
use crate::models::ToastKind;
use crate::routes::{EntityAction, EntityKind, EntityRoute};
use crate::scope::PageScope;

/// Identifier passed from markup: a non-empty string or a non-zero number
fn js_identifier(value: &JsValue) -> Option<String> {
    if let Some(s) = value.as_string() {
        return Some(s.trim().to_string()).filter(|s| !s.is_empty());
    }
    let n = value.as_f64().filter(|n| n.is_finite() && *n != 0.0)?;
    Some(if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    })
}

fn parse_action(value: &JsValue) -> Result<EntityAction, AdminError> {
    let raw = value.as_string().unwrap_or_default();
    raw.parse()
}

fn run_entity_action(ctx: AdminContext, kind: EntityKind, action: JsValue, id: JsValue) {
    let action = match parse_action(&action) {
        Ok(action) => action,
        Err(err) => return ctx.report(&err),
    };
    let id = js_identifier(&id);
    let csrf = ctx.csrf_token();

    spawn_local(async move {
        let result = match kind {
            EntityKind::Workspace => commands::submit_workspace(action, id, csrf.as_deref()).await,
            EntityKind::Space => commands::submit_space(action, id, csrf.as_deref()).await,
            EntityKind::Seat => commands::submit_seat(action, id, csrf.as_deref()).await,
        };
        match result {
            Ok(()) => {
                dom::close_modal();
                dom::reload_page();
            }
            Err(err) => ctx.report(&err),
        }
    });
}

fn open_entity_modal(ctx: AdminContext, entity: JsValue, action: JsValue, id: JsValue) {
    let kind = match entity.as_string().unwrap_or_default().parse::<EntityKind>() {
        Ok(kind) => kind,
        Err(err) => return ctx.report(&err),
    };
    let action = match parse_action(&action) {
        Ok(action) => action,
        Err(err) => return ctx.report(&err),
    };
    let route = EntityRoute::new(kind, action, js_identifier(&id));

    spawn_local(async move {
        let opened = commands::load_entity_modal(&route, &PageScope::current())
            .await
            .and_then(|html| dom::open_modal(&html));
        if let Err(err) = opened {
            ctx.report(&err);
        }
    });
}

fn export<T: ?Sized + WasmClosure>(window: &Window, name: &str, closure: Closure<T>) -> Result<(), AdminError> {
    js_sys::Reflect::set(window, &JsValue::from_str(name), closure.as_ref())
        .map_err(|_| AdminError::Dom(format!("failed to export window.{name}")))?;
    closure.forget();
    Ok(())
}

/// Export `submitWorkspace`, `submitSpace`, `submitSeat`, `openAdminModal`,
/// `closeModal` and `showToast`. Existing page functions with these names
/// are replaced.
pub fn install_page_globals(ctx: AdminContext) -> Result<(), AdminError> {
    let window = dom::window()?;

    for (name, kind) in [
        ("submitWorkspace", EntityKind::Workspace),
        ("submitSpace", EntityKind::Space),
        ("submitSeat", EntityKind::Seat),
    ] {
        export(
            &window,
            name,
            Closure::<dyn Fn(JsValue, JsValue)>::new(move |action: JsValue, id: JsValue| {
                run_entity_action(ctx, kind, action, id)
            }),
        )?;
    }

    export(
        &window,
        "openAdminModal",
        Closure::<dyn Fn(JsValue, JsValue, JsValue)>::new(move |entity: JsValue, action: JsValue, id: JsValue| {
            open_entity_modal(ctx, entity, action, id)
        }),
    )?;

    export(&window, "closeModal", Closure::<dyn Fn()>::new(dom::close_modal))?;

    export(
        &window,
        "showToast",
        Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, kind: JsValue| {
            let message = message
                .as_string()
                .unwrap_or_else(|| format!("{:?}", message));
            let kind = ToastKind::parse(&kind.as_string().unwrap_or_default());
            ctx.notify(message, kind);
        }),
    )?;

    log::debug!("[GLOBALS] Page functions exported");
    Ok(())
}
