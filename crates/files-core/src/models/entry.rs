use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A file or folder as listed by the remote server.
///
/// Only `path` and `starred` are interpreted by the store. Everything else
/// the server sends (name, size, etag, mime type, ...) is kept verbatim in
/// `meta` so it survives a round trip through the UI.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FileEntry {
    /// Unique path, relative to the user's files root (e.g. `/docs/a.txt`)
    pub path: String,
    /// Favorite flag as last confirmed by the server
    #[serde(default)]
    pub starred: bool,
    /// Opaque server metadata
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

impl FileEntry {
    /// Create an unstarred entry with no metadata.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            starred: false,
            meta: Map::new(),
        }
    }

    pub fn with_starred(mut self, starred: bool) -> Self {
        self.starred = starred;
        self
    }

    /// Attach one opaque metadata field.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Display name: the `name` field if the server sent one, otherwise the
    /// last path segment.
    pub fn name(&self) -> &str {
        if let Some(Value::String(name)) = self.meta.get("name") {
            return name;
        }
        self.path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_path() {
        assert_eq!(FileEntry::new("/docs/a.txt").name(), "a.txt");
        assert_eq!(FileEntry::new("/docs/").name(), "docs");
        assert_eq!(FileEntry::new("plain").name(), "plain");
    }

    #[test]
    fn test_name_prefers_meta() {
        let entry = FileEntry::new("/docs/a.txt").with_meta("name", "Report");
        assert_eq!(entry.name(), "Report");
    }

    #[test]
    fn test_deserialize_keeps_unknown_fields() {
        let json = r#"{"path":"/a.txt","starred":true,"size":42,"etag":"abc"}"#;
        let entry: FileEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.path, "/a.txt");
        assert!(entry.starred);
        assert_eq!(entry.meta.get("size"), Some(&Value::from(42)));
        assert_eq!(entry.meta.get("etag"), Some(&Value::from("abc")));
    }

    #[test]
    fn test_starred_defaults_to_false() {
        let entry: FileEntry = serde_json::from_str(r#"{"path":"/b"}"#).unwrap();
        assert!(!entry.starred);
        assert!(entry.meta.is_empty());
    }

    #[test]
    fn test_structural_equality_includes_meta() {
        let a = FileEntry::new("/a").with_meta("size", 1);
        let b = FileEntry::new("/a").with_meta("size", 2);
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }
}
