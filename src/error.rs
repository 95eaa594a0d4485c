//! Load Errors

use thiserror::Error;

/// Why a record could not be shown
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The endpoint answered with an `error` field; shown verbatim
    #[error("{0}")]
    Remote(String),
    /// Unreachable endpoint, non-2xx status or unreadable body
    #[error("transport failure: {0}")]
    Transport(String),
}

impl LoadError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        LoadError::Transport(err.to_string())
    }

    /// Text for the page: remote messages verbatim, everything else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            LoadError::Remote(message) => message.clone(),
            LoadError::Transport(_) => fallback.to_string(),
        }
    }
}
