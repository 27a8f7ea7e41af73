//! Configuration management for `slink.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `[site]`  | Site identity (name used for the root page)      |
//! | `[build]` | Mapping file, output root, extra protected names |
//! | `[serve]` | Preview server (interface, port)                 |
//!
//! The config file is optional: a shortlink tree should work with zero
//! setup, so a missing file just means defaults with the project root at
//! the current directory.

pub mod section;

pub use section::{BuildConfig, ServeConfig, SiteConfig};

use crate::cli::Cli;
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure representing slink.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site identity
    pub site: SiteConfig,

    /// Mapping and output tree settings
    pub build: BuildConfig,

    /// Preview server settings
    pub serve: ServeConfig,
}

impl Config {
    /// Load configuration from CLI arguments.
    ///
    /// The project root is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let path = &cli.config;

        let mut config = if path.is_file() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            toml::from_str::<Self>(&raw)
                .with_context(|| format!("failed to parse {}", path.display()))?
        } else {
            Self::default()
        };

        config.config_path = path.clone();
        config.root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(config)
    }

    /// Path to the redirect mapping file.
    pub fn mapping_path(&self) -> PathBuf {
        self.root.join(&self.build.mapping)
    }

    /// Output root the redirect tree is generated into.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.build.output)
    }

    /// Top-level names reconciliation must never delete.
    ///
    /// The fixed base list plus the mapping file, the config file, and any
    /// user-supplied extras from `[build] protect`.
    pub fn protected_paths(&self) -> FxHashSet<String> {
        let mut set: FxHashSet<String> = BuildConfig::PROTECTED_BASE
            .iter()
            .map(|name| (*name).to_string())
            .collect();
        set.insert(self.build.mapping.clone());
        if let Some(name) = self.config_path.file_name() {
            set.insert(name.to_string_lossy().into_owned());
        }
        set.extend(self.build.protect.iter().cloned());
        set
    }
}

#[cfg(test)]
pub(crate) fn test_parse_config(raw: &str) -> Config {
    let mut config: Config = toml::from_str(raw).expect("config should parse");
    config.config_path = PathBuf::from("slink.toml");
    config.root = PathBuf::from(".");
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.mapping, "redirects.json");
        assert_eq!(config.build.output, ".");
        assert_eq!(config.serve.port, 8080);
        assert_eq!(config.site.name, "shortlinks");
    }

    #[test]
    fn test_section_overrides() {
        let config = test_parse_config(
            "[site]\nname = \"go.example.com\"\n\n\
             [build]\nmapping = \"links.json\"\noutput = \"public\"\n\n\
             [serve]\nport = 3000\n",
        );
        assert_eq!(config.site.name, "go.example.com");
        assert_eq!(config.build.mapping, "links.json");
        assert_eq!(config.build.output, "public");
        assert_eq!(config.serve.port, 3000);
    }

    #[test]
    fn test_protected_paths_include_project_files() {
        let config = test_parse_config("[build]\nmapping = \"links.json\"");
        let protected = config.protected_paths();

        assert!(protected.contains(".git"));
        assert!(protected.contains("Cargo.toml"));
        assert!(protected.contains("404.html"));
        assert!(protected.contains("index.html"));
        // The mapping and config files themselves are always protected.
        assert!(protected.contains("links.json"));
        assert!(protected.contains("slink.toml"));
    }

    #[test]
    fn test_protected_paths_extras() {
        let config = test_parse_config("[build]\nprotect = [\"blog\", \"cv.pdf\"]");
        let protected = config.protected_paths();
        assert!(protected.contains("blog"));
        assert!(protected.contains("cv.pdf"));
    }

    #[test]
    fn test_paths_resolve_under_root() {
        let mut config = test_parse_config("[build]\noutput = \"public\"");
        config.root = PathBuf::from("/srv/links");
        assert_eq!(config.mapping_path(), PathBuf::from("/srv/links/redirects.json"));
        assert_eq!(config.output_dir(), PathBuf::from("/srv/links/public"));
    }
}
