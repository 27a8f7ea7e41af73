//! Destination URL validation.

use thiserror::Error;
use url::Url;

/// Maximum accepted destination length.
pub const MAX_URL_LENGTH: usize = 2000;

/// Schemes a destination may use.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Why a destination URL was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The mapping value for `url` was not a string. Raised by the set
    /// validator, which owns JSON shape inspection.
    #[error("URL must be a string")]
    NotAString,

    #[error("URL cannot be empty")]
    Empty,

    #[error("URL exceeds maximum length of {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("invalid URL format")]
    Malformed,

    #[error("invalid scheme `{0}`: only http, https, and mailto are allowed")]
    DisallowedScheme(String),

    #[error("localhost and private IP addresses cannot be used")]
    PrivateHost,
}

/// Validate a destination URL.
///
/// Checks run in a fixed order and stop at the first failure.
pub fn validate_url(url: &str) -> Result<(), UrlError> {
    if url.is_empty() {
        return Err(UrlError::Empty);
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(UrlError::TooLong);
    }

    let parsed = Url::parse(url).map_err(|_| UrlError::Malformed)?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(UrlError::DisallowedScheme(parsed.scheme().to_string()));
    }

    // mailto has no host; the check only applies to host-bearing URLs
    if let Some(host) = parsed.host_str()
        && is_private_host(host)
    {
        return Err(UrlError::PrivateHost);
    }

    Ok(())
}

/// Plain string-prefix check, deliberately not CIDR-aware.
fn is_private_host(host: &str) -> bool {
    host == "localhost"
        || host == "127.0.0.1"
        || host.starts_with("10.")
        || host.starts_with("172.")
        || host.starts_with("192.168.")
}
