//! Page Scope
//!
//! Workspace/space identifiers carried in the admin page's query string.

use std::fmt;

use crate::error::AdminError;

/// Query parameter that scopes space and seat actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeParam {
    Workspace,
    Space,
}

impl ScopeParam {
    pub fn query_key(self) -> &'static str {
        match self {
            Self::Workspace => "workspace",
            Self::Space => "space",
        }
    }
}

impl fmt::Display for ScopeParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Workspace => "Workspace",
            Self::Space => "Space",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageScope {
    pub workspace: Option<String>,
    pub space: Option<String>,
}

impl PageScope {
    /// Parse a query string, with or without the leading `?`.
    /// Only the first occurrence of a key counts; empty values are treated as absent.
    pub fn from_query(search: &str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);
        let first = |key: &str| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
                .filter(|v| !v.is_empty())
        };
        Self {
            workspace: first(ScopeParam::Workspace.query_key()),
            space: first(ScopeParam::Space.query_key()),
        }
    }

    /// Scope of the current page
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .map(|search| Self::from_query(&search))
            .unwrap_or_default()
    }

    pub fn get(&self, param: ScopeParam) -> Option<&str> {
        match param {
            ScopeParam::Workspace => self.workspace.as_deref(),
            ScopeParam::Space => self.space.as_deref(),
        }
    }

    pub fn require(&self, param: ScopeParam) -> Result<&str, AdminError> {
        self.get(param).ok_or(AdminError::MissingScope(param))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query() {
        let scope = PageScope::from_query("?workspace=3&space=12");
        assert_eq!(scope.workspace.as_deref(), Some("3"));
        assert_eq!(scope.space.as_deref(), Some("12"));

        let scope = PageScope::from_query("workspace=7");
        assert_eq!(scope.workspace.as_deref(), Some("7"));
        assert_eq!(scope.space, None);
    }

    #[test]
    fn test_empty_and_repeated_values() {
        let scope = PageScope::from_query("?workspace=&space=4&space=9");
        assert_eq!(scope.workspace, None);
        assert_eq!(scope.space.as_deref(), Some("4"));
    }

    #[test]
    fn test_decodes_values() {
        let scope = PageScope::from_query("?workspace=north%20wing&space=a+b");
        assert_eq!(scope.workspace.as_deref(), Some("north wing"));
        assert_eq!(scope.space.as_deref(), Some("a b"));
    }

    #[test]
    fn test_require() {
        let scope = PageScope::from_query("?workspace=1");
        assert_eq!(scope.require(ScopeParam::Workspace), Ok("1"));
        assert_eq!(
            scope.require(ScopeParam::Space),
            Err(AdminError::MissingScope(ScopeParam::Space))
        );
    }
}
