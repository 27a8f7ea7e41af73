//! Whole-mapping validation.
//!
//! Collects every finding across the mapping in one pass; a bad entry
//! never stops the run. Only structural failures of the file itself
//! (see [`super::MapError`]) are fatal up front.

use std::fmt;

use rustc_hash::FxHashMap;
use serde_json::Value;

use super::map::{EntryShape, RedirectMap, display_slug, entry_shape};
use super::slug::validate_slug;
use super::url::{UrlError, validate_url};

/// Destinations longer than this draw an informational warning.
const LONG_URL_WARNING: usize = 500;

/// One validation finding, attributed to the slug it came from.
#[derive(Debug, Clone)]
pub struct Issue {
    /// Slug the finding belongs to; `None` for mapping-wide findings.
    pub slug: Option<String>,
    pub message: String,
}

impl Issue {
    fn for_slug(slug: &str, message: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.to_string()),
            message: message.into(),
        }
    }

    fn global(message: impl Into<String>) -> Self {
        Self {
            slug: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slug {
            Some(slug) => write!(f, "[{}] {}", display_slug(slug), self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Mapping-level statistics reported on success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingStats {
    /// Total entry count.
    pub total: usize,
    /// Entries using the object (metadata) form.
    pub with_metadata: usize,
}

/// Aggregate result of a validation run.
#[derive(Debug, Default)]
pub struct ValidationOutcome {
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub stats: MappingStats,
}

impl ValidationOutcome {
    /// Warnings never affect validity.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, slug: &str, message: impl Into<String>) {
        self.errors.push(Issue::for_slug(slug, message));
    }

    fn warn(&mut self, slug: &str, message: impl Into<String>) {
        self.warnings.push(Issue::for_slug(slug, message));
    }
}

/// Per-entry URL resolution for validation purposes.
enum ResolvedUrl<'a> {
    Ok(&'a str),
    /// `url` field present but not a string.
    NotAString,
    /// Entry too broken to check a URL at all.
    Skip,
}

/// Validate every entry of the mapping.
pub fn validate_redirects(map: &RedirectMap) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    if map.is_empty() {
        outcome.warnings.push(Issue::global("redirect mapping is empty"));
    }

    // URL -> first slug that used it, for duplicate-destination warnings
    let mut seen_urls: FxHashMap<&str, &str> = FxHashMap::default();

    for (slug, value) in map.iter() {
        let resolved = resolve_entry(slug, value, &mut outcome);

        if matches!(resolved, ResolvedUrl::Skip) {
            continue;
        }

        if let Err(e) = validate_slug(slug) {
            outcome.error(slug, format!("invalid slug: {e}"));
        }

        let url = match resolved {
            ResolvedUrl::Ok(url) => url,
            ResolvedUrl::NotAString => {
                outcome.error(slug, format!("invalid URL: {}", UrlError::NotAString));
                continue;
            }
            ResolvedUrl::Skip => unreachable!(),
        };

        if let Err(e) = validate_url(url) {
            outcome.error(slug, format!("invalid URL: {e}"));
        }

        if let Some(first) = seen_urls.get(url) {
            outcome.warn(slug, format!("duplicate URL detected: also used by `{first}`"));
        } else {
            seen_urls.insert(url, slug);
        }

        if url.len() > LONG_URL_WARNING {
            outcome.warn(slug, format!("URL is very long ({} characters)", url.len()));
        }
    }

    check_duplicate_slugs(map, &mut outcome);

    outcome.stats = MappingStats {
        total: map.len(),
        with_metadata: map.iter().filter(|(_, v)| v.is_object()).count(),
    };

    outcome
}

/// Apply the shape rule to one entry, recording shape and metadata errors.
fn resolve_entry<'a>(
    slug: &str,
    value: &'a Value,
    outcome: &mut ValidationOutcome,
) -> ResolvedUrl<'a> {
    match entry_shape(value) {
        EntryShape::Url(url) => ResolvedUrl::Ok(url),

        EntryShape::Object(obj) => {
            let url = obj.get("url");
            if matches!(url, None | Some(Value::Null))
                || matches!(url, Some(Value::String(s)) if s.is_empty())
            {
                outcome.error(slug, "missing required `url` field in object format");
                return ResolvedUrl::Skip;
            }

            // Metadata type mismatches are errors but don't block the
            // remaining checks for this entry
            for field in ["description", "owner"] {
                if let Some(v) = obj.get(field)
                    && !v.is_string()
                    && !v.is_null()
                {
                    outcome.error(slug, format!("{field} must be a string"));
                }
            }

            match url.and_then(Value::as_str) {
                Some(url) => ResolvedUrl::Ok(url),
                None => ResolvedUrl::NotAString,
            }
        }

        EntryShape::Invalid => {
            outcome.error(slug, "value must be a string URL or object with url field");
            ResolvedUrl::Skip
        }
    }
}

/// Case-insensitive duplicate-slug detection across the whole slug set.
///
/// A collision is fatal: two slugs that lowercase to the same path would
/// fight over one output directory.
fn check_duplicate_slugs(map: &RedirectMap, outcome: &mut ValidationOutcome) {
    let lowered: Vec<String> = map.iter().map(|(slug, _)| slug.to_lowercase()).collect();

    let mut duplicates: Vec<&str> = Vec::new();
    for (i, slug) in lowered.iter().enumerate() {
        if lowered[..i].contains(slug) && !duplicates.contains(&slug.as_str()) {
            duplicates.push(slug);
        }
    }

    if !duplicates.is_empty() {
        outcome.errors.push(Issue::global(format!(
            "duplicate slugs detected (case-insensitive): {}",
            duplicates.join(", ")
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(value: Value) -> ValidationOutcome {
        validate_redirects(&RedirectMap::from_json(value))
    }

    #[test]
    fn test_valid_mapping() {
        let outcome = validate(json!({
            "gh": "https://github.com/someone",
            "blog": {"url": "https://blog.example", "description": "posts", "owner": "me"},
        }));
        assert!(outcome.is_valid());
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.stats, MappingStats { total: 2, with_metadata: 1 });
    }

    #[test]
    fn test_empty_mapping_warns_but_passes() {
        let outcome = validate(json!({}));
        assert!(outcome.is_valid());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].message.contains("empty"));
    }

    #[test]
    fn test_duplicate_url_is_warning_only() {
        let outcome = validate(json!({
            "aa": "https://x.com",
            "bb": "https://x.com",
        }));
        assert!(outcome.is_valid());
        assert_eq!(outcome.errors.len(), 0);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].slug.as_deref(), Some("bb"));
        assert!(outcome.warnings[0].message.contains("`aa`"));
    }

    #[test]
    fn test_case_insensitive_duplicate_slug_is_fatal() {
        let outcome = validate(json!({
            "Foo": "https://x.com",
            "foo": "https://y.com",
        }));
        assert!(!outcome.is_valid());
        let dup = outcome
            .errors
            .iter()
            .find(|e| e.message.contains("duplicate slugs"))
            .expect("duplicate slug error");
        assert!(dup.message.contains("foo"));
    }

    #[test]
    fn test_invalid_entry_shape() {
        let outcome = validate(json!({"ab": 42, "cd": ["https://x.com"]}));
        assert_eq!(outcome.errors.len(), 2);
        assert!(outcome.errors[0].message.contains("string URL or object"));
    }

    #[test]
    fn test_missing_url_field() {
        let outcome = validate(json!({"ab": {"description": "no url here"}}));
        assert!(!outcome.is_valid());
        assert!(outcome.errors[0].message.contains("missing required `url`"));
    }

    #[test]
    fn test_non_string_url_field() {
        let outcome = validate(json!({"ab": {"url": 42}}));
        assert!(!outcome.is_valid());
        assert!(outcome.errors.iter().any(|e| e.message.contains("URL must be a string")));
    }

    #[test]
    fn test_metadata_type_mismatch_does_not_block_other_checks() {
        let outcome = validate(json!({
            "UPPER": {"url": "ftp://example.com", "description": 7},
        }));
        let messages: Vec<&str> = outcome.errors.iter().map(|e| e.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("description must be a string")));
        assert!(messages.iter().any(|m| m.contains("invalid slug")));
        assert!(messages.iter().any(|m| m.contains("invalid scheme `ftp`")));
    }

    #[test]
    fn test_long_url_warning() {
        let url = format!("https://example.com/{}", "a".repeat(600));
        let outcome = validate(json!({"ab": url}));
        assert!(outcome.is_valid());
        assert!(outcome.warnings[0].message.contains("very long"));
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::for_slug("gh", "invalid URL: invalid URL format");
        assert_eq!(issue.to_string(), "[gh] invalid URL: invalid URL format");

        let root = Issue::for_slug("", "something");
        assert_eq!(root.to_string(), "[(root)] something");
    }
}
