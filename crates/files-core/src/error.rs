//! Error types for the files module.
//!
//! - [`ClientError`] - Failures reported by a [`RemoteFileClient`]
//! - [`StoreError`] - Failures surfaced by dispatched actions
//!
//! [`RemoteFileClient`]: crate::RemoteFileClient

use thiserror::Error;

/// Remote file client failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The client could not issue the request at all
    #[error("client unavailable: {0}")]
    Unavailable(String),
    /// Network request failed (CORS, offline, aborted)
    #[error("network error: {0}")]
    Transport(String),
    /// Server answered with a non-success status
    #[error("HTTP error: {0}")]
    Status(u16),
    /// Request did not complete in time
    #[error("request timed out")]
    Timeout,
    /// Server response could not be interpreted
    #[error("invalid response")]
    InvalidResponse,
}

/// Errors returned from dispatched actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The server refused or failed to persist a favorite change
    #[error("failed to mark {path} as favorite: {source}")]
    Favorite {
        path: String,
        #[source]
        source: ClientError,
    },
}

impl StoreError {
    /// Path of the entry the failed action targeted.
    pub fn path(&self) -> &str {
        match self {
            Self::Favorite { path, .. } => path,
        }
    }
}
