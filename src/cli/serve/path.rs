//! Request path to filesystem path resolution.

use std::path::{Path, PathBuf};

/// Resolve a request URL to a file under the serve root.
///
/// Paths without a file extension get `index.html` appended, matching
/// the generated per-slug layout. Canonicalization keeps symlinked or
/// encoded traversal from escaping the serve root.
pub fn resolve_path(url: &str, serve_root: &Path) -> Option<PathBuf> {
    let mut clean = normalize_url(url);

    // Reject paths with suspicious patterns early
    if clean.contains("..") {
        return None;
    }

    if clean.is_empty() {
        clean = "index.html".to_string();
    } else if Path::new(&clean).extension().is_none() {
        clean = format!("{clean}/index.html");
    }

    let local = serve_root.join(&clean);

    let canonical = local.canonicalize().ok()?;
    let root_canonical = serve_root.canonicalize().ok()?;
    if !canonical.starts_with(&root_canonical) {
        // Path escapes serve_root - reject
        return None;
    }

    canonical.is_file().then_some(canonical)
}

/// Normalize URL: decode, strip query string, trim slashes
fn normalize_url(url: &str) -> String {
    use percent_encoding::percent_decode_str;
    let decoded = percent_decode_str(url)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    let path = decoded.split('?').next().unwrap_or(&decoded);
    path.trim_matches('/').to_string()
}
