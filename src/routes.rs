//! Entity Routes
//!
//! Server paths for workspace, space and seat actions.

use std::fmt;
use std::str::FromStr;

use crate::error::AdminError;
use crate::scope::{PageScope, ScopeParam};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Workspace,
    Space,
    Seat,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Workspace => "workspace",
            Self::Space => "space",
            Self::Seat => "seat",
        }
    }

    /// Query parameters that must be present before acting on this entity
    pub fn required_scope(self) -> &'static [ScopeParam] {
        match self {
            Self::Workspace => &[],
            Self::Space => &[ScopeParam::Workspace],
            Self::Seat => &[ScopeParam::Workspace, ScopeParam::Space],
        }
    }

    /// Message shown when the server rejects an action without saying why
    pub fn save_error(self) -> String {
        format!("Error saving {}", self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workspace" => Ok(Self::Workspace),
            "space" => Ok(Self::Space),
            "seat" => Ok(Self::Seat),
            other => Err(AdminError::Dom(format!("unknown entity \"{other}\""))),
        }
    }
}

/// Server routes call the update action `edit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityAction {
    Create,
    Update,
    Delete,
}

impl EntityAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "edit",
            Self::Delete => "delete",
        }
    }
}

impl FromStr for EntityAction {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "edit" | "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            _ => Err(AdminError::InvalidAction(s.to_string())),
        }
    }
}

impl fmt::Display for EntityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One action on one entity
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRoute {
    pub kind: EntityKind,
    pub action: EntityAction,
    pub id: Option<String>,
}

impl EntityRoute {
    /// An empty id is the same as no id
    pub fn new(kind: EntityKind, action: EntityAction, id: Option<String>) -> Self {
        Self {
            kind,
            action,
            id: id.filter(|id| !id.is_empty()),
        }
    }

    /// Server path for this action, checking the page scope first.
    ///
    /// Space and seat creation go to the parent's create route; every other
    /// action addresses the entity by id.
    pub fn path(&self, scope: &PageScope) -> Result<String, AdminError> {
        for param in self.kind.required_scope() {
            scope.require(*param)?;
        }

        let kind = self.kind.as_str();
        let action = self.action.as_str();
        let path = match (self.kind, self.id.as_deref()) {
            (_, Some(id)) => format!("/{kind}/{action}/{id}/"),
            (EntityKind::Workspace, None) => format!("/workspace/{action}/"),
            (EntityKind::Space, None) => {
                format!("/space/create/{}/", scope.require(ScopeParam::Workspace)?)
            }
            (EntityKind::Seat, None) => {
                format!("/seat/create/{}/", scope.require(ScopeParam::Space)?)
            }
        };
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(workspace: Option<&str>, space: Option<&str>) -> PageScope {
        PageScope {
            workspace: workspace.map(String::from),
            space: space.map(String::from),
        }
    }

    #[test]
    fn test_workspace_paths() {
        let none = PageScope::default();
        let create = EntityRoute::new(EntityKind::Workspace, EntityAction::Create, None);
        assert_eq!(create.path(&none).unwrap(), "/workspace/create/");

        let edit = EntityRoute::new(EntityKind::Workspace, EntityAction::Update, Some("5".into()));
        assert_eq!(edit.path(&none).unwrap(), "/workspace/edit/5/");

        let delete = EntityRoute::new(EntityKind::Workspace, EntityAction::Delete, Some("5".into()));
        assert_eq!(delete.path(&none).unwrap(), "/workspace/delete/5/");
    }

    #[test]
    fn test_space_paths() {
        let scoped = scope(Some("3"), None);
        let create = EntityRoute::new(EntityKind::Space, EntityAction::Create, None);
        assert_eq!(create.path(&scoped).unwrap(), "/space/create/3/");

        let edit = EntityRoute::new(EntityKind::Space, EntityAction::Update, Some("8".into()));
        assert_eq!(edit.path(&scoped).unwrap(), "/space/edit/8/");

        assert_eq!(
            edit.path(&PageScope::default()),
            Err(AdminError::MissingScope(ScopeParam::Workspace))
        );
    }

    #[test]
    fn test_seat_paths() {
        let scoped = scope(Some("3"), Some("8"));
        let create = EntityRoute::new(EntityKind::Seat, EntityAction::Create, None);
        assert_eq!(create.path(&scoped).unwrap(), "/seat/create/8/");

        let delete = EntityRoute::new(EntityKind::Seat, EntityAction::Delete, Some("42".into()));
        assert_eq!(delete.path(&scoped).unwrap(), "/seat/delete/42/");
    }

    #[test]
    fn test_seat_scope_checked_in_order() {
        let create = EntityRoute::new(EntityKind::Seat, EntityAction::Create, None);
        assert_eq!(
            create.path(&scope(None, Some("8"))),
            Err(AdminError::MissingScope(ScopeParam::Workspace))
        );
        let err = create.path(&scope(Some("3"), None)).unwrap_err();
        assert_eq!(err.to_string(), "Space not defined.");
    }

    #[test]
    fn test_empty_id_is_ignored() {
        let route = EntityRoute::new(EntityKind::Space, EntityAction::Create, Some(String::new()));
        assert_eq!(route.id, None);
        assert_eq!(route.path(&scope(Some("3"), None)).unwrap(), "/space/create/3/");
    }

    #[test]
    fn test_parse_action() {
        assert_eq!("create".parse::<EntityAction>(), Ok(EntityAction::Create));
        assert_eq!("update".parse::<EntityAction>(), Ok(EntityAction::Update));
        assert_eq!("Edit".parse::<EntityAction>(), Ok(EntityAction::Update));
        assert_eq!("delete".parse::<EntityAction>(), Ok(EntityAction::Delete));
        assert_eq!(
            "rename".parse::<EntityAction>(),
            Err(AdminError::InvalidAction("rename".into()))
        );
        assert_eq!(EntityAction::Update.to_string(), "edit");
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("seat".parse::<EntityKind>(), Ok(EntityKind::Seat));
        assert!("desk".parse::<EntityKind>().is_err());
        assert_eq!(EntityKind::Workspace.save_error(), "Error saving workspace");
    }
}
