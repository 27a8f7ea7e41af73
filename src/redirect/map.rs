//! Mapping file loading and entry shape resolution.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that make the whole mapping unusable.
///
/// Any of these aborts both validation and generation before any
/// filesystem mutation.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("failed to read {0}")]
    Io(String, #[source] std::io::Error),

    #[error("failed to parse {0}")]
    Parse(String, #[source] serde_json::Error),

    #[error("{0} must contain a JSON object")]
    NotAnObject(String),
}

/// The slug -> destination mapping, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct RedirectMap {
    entries: Map<String, Value>,
}

impl RedirectMap {
    /// Load and parse the mapping file.
    pub fn load(path: &Path) -> Result<Self, MapError> {
        let name = path.display().to_string();
        if !path.is_file() {
            return Err(MapError::NotFound(name));
        }
        let raw = fs::read_to_string(path).map_err(|e| MapError::Io(name.clone(), e))?;
        let value: Value =
            serde_json::from_str(&raw).map_err(|e| MapError::Parse(name.clone(), e))?;
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            _ => Err(MapError::NotAnObject(name)),
        }
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(slug, value)| (slug.as_str(), value))
    }

    /// Whether `slug` is a key of the current mapping.
    pub fn contains_slug(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
impl RedirectMap {
    /// Build a mapping directly from a JSON value (tests only).
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(entries) => Self { entries },
            _ => panic!("test mapping must be an object"),
        }
    }
}

/// How a mapping value resolves under the bare-string / object rule.
#[derive(Debug)]
pub enum EntryShape<'a> {
    /// Bare destination URL.
    Url(&'a str),
    /// Object form; `url` may still be missing or mistyped.
    Object(&'a Map<String, Value>),
    /// Neither a string nor an object.
    Invalid,
}

/// Classify a mapping value.
pub fn entry_shape(value: &Value) -> EntryShape<'_> {
    match value {
        Value::String(url) => EntryShape::Url(url),
        Value::Object(obj) => EntryShape::Object(obj),
        _ => EntryShape::Invalid,
    }
}

/// Resolve the destination URL of an entry, if it has a string one.
pub fn entry_url(value: &Value) -> Option<&str> {
    match value {
        Value::String(url) => Some(url),
        Value::Object(obj) => obj.get("url").and_then(Value::as_str),
        _ => None,
    }
}

/// Owner metadata, when present in object form.
pub fn entry_owner(value: &Value) -> Option<&str> {
    value
        .as_object()
        .and_then(|obj| obj.get("owner"))
        .and_then(Value::as_str)
}

/// Display label for a slug; the root entry has no path segment.
pub fn display_slug(slug: &str) -> &str {
    if slug.is_empty() { "(root)" } else { slug }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_mapping() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"gh": "https://github.com", "zz": {{"url": "https://z.example"}}}}"#)
            .unwrap();

        let map = RedirectMap::load(file.path()).unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.contains_slug("gh"));

        // preserve_order keeps declaration order
        let slugs: Vec<&str> = map.iter().map(|(slug, _)| slug).collect();
        assert_eq!(slugs, vec!["gh", "zz"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = RedirectMap::load(Path::new("/nonexistent/redirects.json")).unwrap_err();
        assert!(matches!(err, MapError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = RedirectMap::load(file.path()).unwrap_err();
        assert!(matches!(err, MapError::Parse(..)));
    }

    #[test]
    fn test_load_non_object_root() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"["not", "an", "object"]"#).unwrap();
        let err = RedirectMap::load(file.path()).unwrap_err();
        assert!(matches!(err, MapError::NotAnObject(_)));
    }

    #[test]
    fn test_entry_url_resolution() {
        assert_eq!(entry_url(&json!("https://a.example")), Some("https://a.example"));
        assert_eq!(
            entry_url(&json!({"url": "https://b.example", "owner": "me"})),
            Some("https://b.example")
        );
        assert_eq!(entry_url(&json!({"description": "no url"})), None);
        assert_eq!(entry_url(&json!(42)), None);
        assert_eq!(entry_url(&json!({"url": 42})), None);
    }

    #[test]
    fn test_entry_owner() {
        assert_eq!(entry_owner(&json!({"url": "https://a.example", "owner": "ops"})), Some("ops"));
        assert_eq!(entry_owner(&json!("https://a.example")), None);
    }

    #[test]
    fn test_display_slug() {
        assert_eq!(display_slug(""), "(root)");
        assert_eq!(display_slug("gh"), "gh");
    }
}
