//! Error types for the jury client core

use thiserror::Error;

use crate::model::ItemId;

/// How the UI should react to an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Network or transport failure: notify the judge, keep local state
    Transport,
    /// A server-side precondition no longer holds (deliberation started): reload
    Precondition,
    /// The server answered with something we could not make sense of
    Payload,
    /// Misuse of a local session or bad configuration
    Local,
}

/// Main error type for the jury client core
#[derive(Error, Debug)]
pub enum JuryError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("deliberation in progress: {message}")]
    DeliberationLocked { message: String },

    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("not found: {resource}")]
    NotFound { resource: String },

    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    #[error("unknown project: {0}")]
    UnknownProject(String),

    #[error("session is locked for deliberation")]
    SessionLocked,

    #[error("a drag gesture is already active for item {0}")]
    DragInProgress(ItemId),

    #[error("no drag gesture is active")]
    NoActiveDrag,
}

impl JuryError {
    /// Classify the error into the reaction the UI should take
    pub fn class(&self) -> ErrorClass {
        match self {
            JuryError::Network { .. } | JuryError::Server { .. } => ErrorClass::Transport,
            JuryError::DeliberationLocked { .. } => ErrorClass::Precondition,
            JuryError::InvalidResponse { .. }
            | JuryError::NotFound { .. }
            | JuryError::Unauthorized { .. } => ErrorClass::Payload,
            JuryError::Config { .. }
            | JuryError::SessionLocked
            | JuryError::UnknownItem(_)
            | JuryError::UnknownProject(_)
            | JuryError::DragInProgress(_)
            | JuryError::NoActiveDrag => ErrorClass::Local,
        }
    }

    /// Whether local state is stale and the view must be reloaded
    #[inline]
    pub fn requires_reload(&self) -> bool {
        self.class() == ErrorClass::Precondition
    }
}

impl From<reqwest::Error> for JuryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            JuryError::InvalidResponse {
                message: err.to_string(),
            }
        } else {
            JuryError::Network {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for JuryError {
    fn from(err: serde_json::Error) -> Self {
        JuryError::InvalidResponse {
            message: err.to_string(),
        }
    }
}

/// Result type alias for the jury client core
pub type Result<T> = std::result::Result<T, JuryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        let network = JuryError::Network {
            message: "connection reset".to_string(),
        };
        assert_eq!(network.class(), ErrorClass::Transport);
        assert!(!network.requires_reload());

        let locked = JuryError::DeliberationLocked {
            message: "cannot rank".to_string(),
        };
        assert_eq!(locked.class(), ErrorClass::Precondition);
        assert!(locked.requires_reload());

        assert_eq!(JuryError::NoActiveDrag.class(), ErrorClass::Local);
    }

    #[test]
    fn test_error_display() {
        let err = JuryError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "server error 500: boom");
        assert_eq!(JuryError::UnknownItem(ItemId(7)).to_string(), "unknown item: 7");
    }
}
