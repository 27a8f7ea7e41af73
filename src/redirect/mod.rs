//! Redirect mapping model and validation.
//!
//! The mapping file is the single source of truth: every generated page
//! can be reconstructed from it, so the output tree is treated as a
//! disposable cache.

mod map;
mod slug;
mod url;
mod validate;

pub use map::{EntryShape, MapError, RedirectMap, display_slug, entry_owner, entry_shape, entry_url};
pub use slug::{MAX_SLUG_LENGTH, MIN_SLUG_LENGTH, SlugError, validate_slug};
pub use url::{MAX_URL_LENGTH, UrlError, validate_url};
pub use validate::{Issue, MappingStats, ValidationOutcome, validate_redirects};
