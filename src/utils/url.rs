//! URL helpers for WebDAV requests.
//!
//! Server URL validation and percent-encoding of file paths.

use crate::core::error::ConfigError;

/// Validate a server base URL and normalize it (no trailing slash).
///
/// Checks:
/// 1. URL is not empty
/// 2. URL starts with http:// or https://
/// 3. URL has a host
pub fn normalize_server_url(url: &str) -> Result<String, ConfigError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ConfigError::MissingServerUrl);
    }

    let lower = url.to_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return Err(ConfigError::InvalidServerUrl(url.to_string()));
    }

    if extract_host(url).is_none() {
        return Err(ConfigError::InvalidServerUrl(url.to_string()));
    }

    Ok(url.trim_end_matches('/').to_string())
}

/// Extract host from a URL
fn extract_host(url: &str) -> Option<&str> {
    let without_protocol = url
        .split_once("://")
        .map(|(_, rest)| rest)?;

    let host_part = without_protocol.split('/').next()?;
    let host = host_part.split(':').next()?;

    if host.is_empty() { None } else { Some(host) }
}

/// Percent-encode a file path segment by segment, keeping `/` separators.
///
/// Leading and trailing slashes are dropped so the result can be appended
/// to a base URL with a single `/`. Empty inner segments are kept.
pub fn encode_path(path: &str) -> String {
    let path = path.trim_matches('/');
    if path.is_empty() {
        return String::new();
    }
    path.split('/')
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/")
}

/// Percent-encode one path segment (RFC 3986 unreserved characters pass).
///
/// A `/` inside the segment is encoded too, so the result is always a
/// single URL path level.
pub fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_server_url() {
        assert_eq!(
            normalize_server_url("https://cloud.example.com/"),
            Ok("https://cloud.example.com".to_string())
        );
        assert_eq!(
            normalize_server_url("  http://localhost:8080/oc "),
            Ok("http://localhost:8080/oc".to_string())
        );
    }

    #[test]
    fn test_invalid_server_urls() {
        assert_eq!(normalize_server_url(""), Err(ConfigError::MissingServerUrl));
        assert!(matches!(
            normalize_server_url("ftp://example.com"),
            Err(ConfigError::InvalidServerUrl(_))
        ));
        assert!(matches!(
            normalize_server_url("https://"),
            Err(ConfigError::InvalidServerUrl(_))
        ));
    }

    #[test]
    fn test_encode_path() {
        assert_eq!(encode_path("/docs/a.txt"), "docs/a.txt");
        assert_eq!(encode_path("/My Files/über#1.md"), "My%20Files/%C3%BCber%231.md");
        assert_eq!(encode_path("folder/"), "folder");
        assert_eq!(encode_path("/"), "");
        assert_eq!(encode_path("/a//b"), "a//b");
    }

    #[test]
    fn test_encode_segment_escapes_slash() {
        assert_eq!(encode_segment("team/alice"), "team%2Falice");
        assert_eq!(encode_segment("plain"), "plain");
        assert_eq!(encode_segment(""), "");
    }
}
