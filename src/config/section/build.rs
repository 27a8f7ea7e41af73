//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! mapping = "redirects.json"  # slug -> destination mapping file
//! output = "."                # root the redirect tree is written into
//! protect = ["blog"]          # extra names cleanup must leave alone
//! ```

use serde::Deserialize;

/// Mapping and output tree settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Redirect mapping file, relative to the project root.
    pub mapping: String,

    /// Output root the redirect tree is written into, relative to the
    /// project root. The default writes next to the mapping file, which
    /// matches the usual "repo root is the deployed site" layout.
    pub output: String,

    /// Extra top-level names reconciliation must leave alone.
    pub protect: Vec<String>,
}

impl BuildConfig {
    /// Top-level names that are never shortlink output: version-control
    /// metadata, CI configuration, dependency and build directories,
    /// project manifests, the canonical error and landing pages, and the
    /// static content sections.
    pub const PROTECTED_BASE: &'static [&'static str] = &[
        ".git",
        ".github",
        "node_modules",
        "target",
        "src",
        "Cargo.toml",
        "Cargo.lock",
        "CNAME",
        "LICENSE",
        "README.md",
        "404.html",
        "index.html",
        "about",
        "terms",
        "privacy",
        "files",
        "resume.pdf",
    ];
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            mapping: "redirects.json".into(),
            output: ".".into(),
            protect: Vec::new(),
        }
    }
}
