//! Error types for the ARMOR client

use reqwest::StatusCode;
use thiserror::Error;

use crate::profile::ValidationError;

/// General ARMOR client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// No credential is stored locally; raised before any network call
    #[error("Not authenticated")]
    Unauthenticated,

    /// The server answered 401; the stored credential has been cleared
    #[error("Invalid password")]
    InvalidCredential,

    /// Any other non-success response
    #[error("{message}")]
    RequestFailed {
        status: StatusCode,
        message: String,
        errors: Vec<ValidationError>,
    },

    /// A body was required but the server answered 204
    #[error("Empty response from '{path}'")]
    EmptyResponse { path: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential store error: {0}")]
    Store(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// HTTP status carried by the error, if the server produced one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::InvalidCredential => Some(StatusCode::UNAUTHORIZED),
            ClientError::RequestFailed { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// True when the caller must (re-)enter a credential before retrying
    pub fn requires_login(&self) -> bool {
        matches!(self, ClientError::Unauthenticated | ClientError::InvalidCredential)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
