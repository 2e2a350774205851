//! Server coordinates for WebDAV requests.

use crate::config::{DAV_FILES_ROOT, DEFAULT_USER, storage_keys};
use crate::core::error::ConfigError;
use crate::utils::{dom, encode_path, encode_segment, normalize_server_url};

/// Where and as whom the shell talks to the file server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Normalized base URL, no trailing slash
    base_url: String,
    /// WebDAV user name
    user: String,
    /// Optional bearer token
    token: Option<String>,
}

impl ServerConfig {
    pub fn new(base_url: &str, user: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_server_url(base_url)?,
            user: user.into(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Load from localStorage overrides, falling back to the page origin and
    /// [`DEFAULT_USER`].
    pub fn load() -> Result<Self, ConfigError> {
        let storage = dom::local_storage();
        let read = |key: &str| {
            storage
                .as_ref()
                .and_then(|s| s.get_item(key).ok().flatten())
                .filter(|v| !v.trim().is_empty())
        };

        let base_url = read(storage_keys::SERVER_URL)
            .or_else(dom::origin)
            .ok_or(ConfigError::MissingServerUrl)?;
        let user = read(storage_keys::USER).unwrap_or_else(|| DEFAULT_USER.to_string());

        let config = Self::new(&base_url, user)?;
        Ok(match read(storage_keys::TOKEN) {
            Some(token) => config.with_token(token),
            None => config,
        })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// DAV URL of a file, e.g. `{base}/remote.php/dav/files/{user}/docs/a.txt`.
    pub fn files_url(&self, path: &str) -> String {
        let root = format!("{}/{}/{}", self.base_url, DAV_FILES_ROOT, encode_segment(&self.user));
        let path = encode_path(path);
        if path.is_empty() {
            root
        } else {
            format!("{}/{}", root, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_url() {
        let config = ServerConfig::new("https://cloud.example.com/", "alice").unwrap();
        assert_eq!(
            config.files_url("/docs/a b.txt"),
            "https://cloud.example.com/remote.php/dav/files/alice/docs/a%20b.txt"
        );
        assert_eq!(
            config.files_url("/"),
            "https://cloud.example.com/remote.php/dav/files/alice"
        );
    }

    #[test]
    fn test_user_is_encoded() {
        let config = ServerConfig::new("http://localhost", "bob@example").unwrap();
        assert_eq!(
            config.files_url("x"),
            "http://localhost/remote.php/dav/files/bob%40example/x"
        );
    }

    #[test]
    fn test_user_with_slash_stays_one_level() {
        let config = ServerConfig::new("http://localhost", "team/alice").unwrap();
        assert_eq!(
            config.files_url("/docs/a.txt"),
            "http://localhost/remote.php/dav/files/team%2Falice/docs/a.txt"
        );
    }

    #[test]
    fn test_token() {
        let config = ServerConfig::new("http://localhost", "u").unwrap();
        assert_eq!(config.token(), None);
        assert_eq!(config.with_token("t0k").token(), Some("t0k"));
    }

    #[test]
    fn test_rejects_bad_url() {
        assert!(ServerConfig::new("localhost", "u").is_err());
    }
}
