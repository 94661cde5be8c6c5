//! Entity Commands
//!
//! Create/edit/delete submissions for workspaces, spaces and seats.

use crate::dom;
use crate::error::AdminError;
use crate::models::{entity_payload, ActionResponse};
use crate::routes::{EntityAction, EntityKind, EntityRoute};
use crate::scope::PageScope;

use super::post_form;

/// Submit the entity inputs currently on the page.
///
/// Scope is checked before anything is sent; a missing `workspace` or
/// `space` query parameter fails without a request.
pub async fn submit_entity(
    route: &EntityRoute,
    scope: &PageScope,
    csrf: Option<&str>,
) -> Result<(), AdminError> {
    let url = route.path(scope)?;
    let payload = entity_payload(route.kind, route.action, dom::input_value);
    log::info!("[{}] {} -> {}", route.kind.as_str(), route.action, url);

    let response: ActionResponse = post_form(&url, &payload, csrf).await?;
    response.into_result(&route.kind.save_error())
}

pub async fn submit_workspace(
    action: EntityAction,
    pk: Option<String>,
    csrf: Option<&str>,
) -> Result<(), AdminError> {
    let route = EntityRoute::new(EntityKind::Workspace, action, pk);
    submit_entity(&route, &PageScope::current(), csrf).await
}

pub async fn submit_space(
    action: EntityAction,
    id: Option<String>,
    csrf: Option<&str>,
) -> Result<(), AdminError> {
    let route = EntityRoute::new(EntityKind::Space, action, id);
    submit_entity(&route, &PageScope::current(), csrf).await
}

pub async fn submit_seat(
    action: EntityAction,
    pk: Option<String>,
    csrf: Option<&str>,
) -> Result<(), AdminError> {
    let route = EntityRoute::new(EntityKind::Seat, action, pk);
    submit_entity(&route, &PageScope::current(), csrf).await
}
