//! Error types for the Fantasy Premier League client

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FplError>;

/// Coarse failure category, so callers can tell causes apart without
/// matching on wrapped library errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    Decode,
    Validation,
    Authentication,
}

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Gameweek number should be between 1 and 38, got {gameweek}")]
    GameweekOutOfRange { gameweek: u32 },

    #[error("Missing required {what}")]
    MissingId { what: &'static str },

    #[error("Invalid {what}: {value}")]
    InvalidId { what: &'static str, value: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Authentication failed: {0}")]
    Authentication(#[from] AuthError),
}

impl FplError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FplError::Transport(_) => ErrorKind::Transport,
            FplError::Decode { .. } => ErrorKind::Decode,
            FplError::GameweekOutOfRange { .. }
            | FplError::MissingId { .. }
            | FplError::InvalidId { .. }
            | FplError::InvalidUrl(_)
            | FplError::InvalidHeader(_) => ErrorKind::Validation,
            FplError::Authentication(_) => ErrorKind::Authentication,
        }
    }

    pub(crate) fn decode(path: impl Into<String>, source: serde_json::Error) -> Self {
        FplError::Decode {
            path: path.into(),
            source,
        }
    }
}

/// Terminal failures of one login attempt. None of these are retried.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("login was rejected with status {status}")]
    Rejected { status: u16 },

    #[error("expected session cookie `{name}` was not set")]
    MissingSessionCookie { name: String },

    #[error("form field `{selector}` did not appear in time")]
    FormFieldTimeout { selector: String },

    #[error("invalid login URL `{url}`: {message}")]
    InvalidLoginUrl { url: String, message: String },

    #[error("post-login navigation did not complete: {message}")]
    Navigation { message: String },

    #[error("browser error: {message}")]
    Browser { message: String },

    #[error("proxy list is empty")]
    EmptyProxyPool,

    #[error("could not load proxy list: {0}")]
    ProxyList(#[source] reqwest::Error),

    #[error("login request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl From<fantoccini::error::CmdError> for AuthError {
    fn from(err: fantoccini::error::CmdError) -> Self {
        AuthError::Browser {
            message: err.to_string(),
        }
    }
}

impl From<fantoccini::error::NewSessionError> for AuthError {
    fn from(err: fantoccini::error::NewSessionError) -> Self {
        AuthError::Browser {
            message: err.to_string(),
        }
    }
}
