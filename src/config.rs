//! Application configuration.
//!
//! Centralizes the constants used by the files shell. Server coordinates can
//! be overridden at runtime through localStorage (see [`ServerConfig`]).
//!
//! [`ServerConfig`]: crate::core::ServerConfig

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header.
pub const APP_NAME: &str = "Files";

// =============================================================================
// Server Configuration
// =============================================================================

/// WebDAV root for user files, relative to the server URL.
pub const DAV_FILES_ROOT: &str = "remote.php/dav/files";

/// XML namespace of the ownCloud property set (holds `oc:favorite`).
pub const OC_NAMESPACE: &str = "http://owncloud.org/ns";

/// User whose files are browsed when none is configured.
pub const DEFAULT_USER: &str = "admin";

/// localStorage keys for server overrides.
pub mod storage_keys {
    /// Server base URL (e.g. `https://cloud.example.com`).
    pub const SERVER_URL: &str = "files.server_url";
    /// WebDAV user name.
    pub const USER: &str = "files.user";
    /// Bearer token sent with every request.
    pub const TOKEN: &str = "files.token";
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Timeout for the favorite PROPPATCH request, in milliseconds.
pub const FAVORITE_TIMEOUT_MS: i32 = 10000;

/// Timeout for fetching the file manifest, in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// File list loaded at startup (JSON array of file entries).
pub const FILES_MANIFEST_URL: &str = "files.json";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
