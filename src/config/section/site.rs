//! `[site]` section configuration.

use serde::Deserialize;

/// Site identity settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Display name used for the root entry's page title and for the
    /// social-preview branding on every generated page.
    pub name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "shortlinks".into(),
        }
    }
}
