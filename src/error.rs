//! Admin Errors
//!
//! Every failure the admin UI can surface to the user.

use crate::scope::ScopeParam;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminError {
    /// Required query parameter is absent from the page URL
    #[error("{0} not defined.")]
    MissingScope(ScopeParam),
    #[error("Invalid action.")]
    InvalidAction(String),
    /// `ok: false` reported by the server
    #[error("{0}")]
    Server(String),
    #[error("Error: {0}")]
    Transport(String),
    #[error("Error: {0}")]
    Decode(String),
    #[error("{0}")]
    Dom(String),
}

impl AdminError {
    pub fn dom(context: &str) -> Self {
        Self::Dom(format!("{context} is unavailable"))
    }
}

impl From<gloo_net::Error> for AdminError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(AdminError::MissingScope(ScopeParam::Space).to_string(), "Space not defined.");
        assert_eq!(AdminError::MissingScope(ScopeParam::Workspace).to_string(), "Workspace not defined.");
        assert_eq!(AdminError::InvalidAction("rename".into()).to_string(), "Invalid action.");
        assert_eq!(AdminError::Server("Duplicate seat code in this space.".into()).to_string(), "Duplicate seat code in this space.");
        assert_eq!(AdminError::Transport("TypeError: Failed to fetch".into()).to_string(), "Error: TypeError: Failed to fetch");
        assert_eq!(AdminError::dom("#modal-content").to_string(), "#modal-content is unavailable");
    }
}
