//! Slug format and reserved-word validation.

use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum slug length in characters.
pub const MIN_SLUG_LENGTH: usize = 2;

/// Maximum slug length in characters.
pub const MAX_SLUG_LENGTH: usize = 50;

/// Slugs that collide with infrastructure, environment, or legal paths.
const RESERVED_SLUGS: &[&str] = &[
    "admin", "api", "assets", "config", "files", "images", "public",
    "static", "uploads", "test", "staging", "prod", "production",
    "dev", "development", "www", "mail", "ftp", "ssh", "cdn",
    "help", "support", "docs", "documentation", "about", "contact",
    "legal", "privacy", "terms", "tos", "dmca", "abuse",
];

static RESERVED: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| RESERVED_SLUGS.iter().copied().collect());

/// Lowercase alphanumerics with hyphens, no leading/trailing hyphen.
static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").unwrap());

/// Why a slug was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug must be between {MIN_SLUG_LENGTH} and {MAX_SLUG_LENGTH} characters long")]
    Length,

    #[error(
        "slug must contain only lowercase letters, numbers, and hyphens, \
         and must start and end with a letter or number"
    )]
    Format,

    #[error("slug cannot contain consecutive hyphens")]
    ConsecutiveHyphens,

    #[error("slug `{0}` is reserved and cannot be used")]
    Reserved(String),
}

/// Validate a shortlink slug.
///
/// Checks run in a fixed order and stop at the first failure, so each
/// rule stays individually observable. The consecutive-hyphen rule is
/// kept as its own step even though the pattern could be tightened to
/// subsume it.
pub fn validate_slug(slug: &str) -> Result<(), SlugError> {
    let len = slug.chars().count();
    if !(MIN_SLUG_LENGTH..=MAX_SLUG_LENGTH).contains(&len) {
        return Err(SlugError::Length);
    }

    if !SLUG_PATTERN.is_match(slug) {
        return Err(SlugError::Format);
    }

    if slug.contains("--") {
        return Err(SlugError::ConsecutiveHyphens);
    }

    if RESERVED.contains(slug) {
        return Err(SlugError::Reserved(slug.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_slugs() {
        for slug in ["gh", "my-link-1", "a1", "x-2-y", "blog2024"] {
            assert_eq!(validate_slug(slug), Ok(()), "{slug} should be valid");
        }
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(validate_slug("a"), Err(SlugError::Length));
        assert_eq!(validate_slug(""), Err(SlugError::Length));
        assert_eq!(validate_slug(&"a".repeat(51)), Err(SlugError::Length));

        // Boundaries are inclusive
        assert_eq!(validate_slug("ab"), Ok(()));
        assert_eq!(validate_slug(&"a".repeat(50)), Ok(()));
    }

    #[test]
    fn test_format_violations() {
        for slug in ["Foo", "my_link", "my link", "café", "a.b"] {
            assert_eq!(validate_slug(slug), Err(SlugError::Format), "{slug}");
        }
    }

    #[test]
    fn test_hyphen_placement() {
        assert_eq!(validate_slug("-ab"), Err(SlugError::Format));
        assert_eq!(validate_slug("ab-"), Err(SlugError::Format));
        assert_eq!(validate_slug("a--b"), Err(SlugError::ConsecutiveHyphens));
    }

    #[test]
    fn test_reserved_slugs() {
        for slug in RESERVED_SLUGS {
            assert_eq!(
                validate_slug(slug),
                Err(SlugError::Reserved((*slug).to_string())),
                "{slug} should be reserved"
            );
        }
        // Near-misses are fine
        assert_eq!(validate_slug("admins"), Ok(()));
        assert_eq!(validate_slug("my-api"), Ok(()));
    }
}
