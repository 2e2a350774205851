//! Browser and URL utilities.
//!
//! Provides:
//! - [`send`], [`fetch_json`] - Network requests with timeout
//! - [`encode_path`], [`encode_segment`], [`normalize_server_url`] - URL helpers for WebDAV

pub mod dom;
mod fetch;
mod url;

pub use fetch::{HttpRequest, fetch_json, send};
pub use url::{encode_path, encode_segment, normalize_server_url};
