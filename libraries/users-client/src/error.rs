//! Error types for the users client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when fetching users.
#[derive(Error, Debug)]
pub enum UsersClientError {
    /// HTTP request failed (transport, non-success status or undecodable body)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid base URL in the client configuration
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl UsersClientError {
    /// HTTP status of a non-success response, if that is what failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Request(e) => e.status(),
            Self::InvalidUrl(_) => None,
        }
    }

    /// Whether the server answered with a non-success status code.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_status())
    }

    /// Whether the connection could not be established.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_connect())
    }

    /// Whether the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }

    /// Whether the response body could not be decoded as a list of users.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_decode())
    }
}

/// Result type for users client operations.
pub type Result<T> = std::result::Result<T, UsersClientError>;
