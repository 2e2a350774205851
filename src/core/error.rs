//! Error types for the web shell.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ConfigError`] - Unusable server configuration

use files_core::ClientError;
use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (timeout, CORS, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

impl From<FetchError> for ClientError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NoWindow | FetchError::RequestCreationFailed => {
                ClientError::Unavailable(err.to_string())
            }
            FetchError::NetworkError(msg) => ClientError::Transport(msg),
            FetchError::HttpError(status) => ClientError::Status(status),
            FetchError::Timeout => ClientError::Timeout,
            FetchError::ResponseReadFailed
            | FetchError::InvalidContent
            | FetchError::JsonParseError(_) => ClientError::InvalidResponse,
        }
    }
}

/// Server configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No server URL configured and no window origin to fall back to
    #[error("no server URL configured")]
    MissingServerUrl,
    /// Configured server URL is not an http(s) URL with a host
    #[error("invalid server URL: {0}")]
    InvalidServerUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_to_client_error() {
        assert_eq!(ClientError::from(FetchError::HttpError(404)), ClientError::Status(404));
        assert_eq!(ClientError::from(FetchError::Timeout), ClientError::Timeout);
        assert_eq!(
            ClientError::from(FetchError::NetworkError("offline".into())),
            ClientError::Transport("offline".into())
        );
        assert_eq!(
            ClientError::from(FetchError::NoWindow),
            ClientError::Unavailable("Browser window not available".into())
        );
        assert_eq!(
            ClientError::from(FetchError::InvalidContent),
            ClientError::InvalidResponse
        );
    }
}
