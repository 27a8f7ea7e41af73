//! Redirect page generation and output-tree reconciliation.

mod reconcile;
mod template;

pub use reconcile::reconcile;
pub use template::{GENERATOR_MARK, REFRESH_MARK, render_redirect_page};

use std::fs;
use std::path::Path;

use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::log;
use crate::redirect::{EntryShape, RedirectMap, display_slug, entry_owner, entry_shape};

/// Per-entry failure recorded during a generation run.
#[derive(Debug, Clone)]
pub struct EntryError {
    pub slug: String,
    pub reason: String,
}

/// Counts and failures accumulated across a full generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub generated: usize,
    pub skipped: usize,
    pub deleted: usize,
    pub errors: Vec<EntryError>,
}

impl GenerateReport {
    fn skip(&mut self, slug: &str, reason: impl Into<String>) {
        self.errors.push(EntryError {
            slug: slug.to_string(),
            reason: reason.into(),
        });
        self.skipped += 1;
    }
}

/// Generate a redirect page for every entry with a parseable destination.
///
/// Only URL parseability gates a write: slug rules are deliberately not
/// re-checked here, since validation is a separate pre-flight step and
/// generation trusts its caller. One entry's failure never aborts the
/// remaining entries.
pub fn generate(config: &Config, map: &RedirectMap) -> GenerateReport {
    let mut report = GenerateReport::default();
    let output = config.output_dir();

    for (slug, value) in map.iter() {
        let url = match entry_shape(value) {
            EntryShape::Url(url) => url,
            EntryShape::Object(obj) => match obj.get("url").and_then(Value::as_str) {
                Some(url) => url,
                None => {
                    report.skip(slug, "invalid URL format");
                    continue;
                }
            },
            EntryShape::Invalid => {
                report.skip(slug, "invalid entry format");
                continue;
            }
        };

        if Url::parse(url).is_err() {
            report.skip(slug, "invalid URL format");
            continue;
        }

        // Empty slug maps to the output root: the top-level landing page
        let dir = output.join(slug);
        match write_page(&dir, url, slug, &config.site.name) {
            Ok(()) => {
                let owner = entry_owner(value).map(|o| format!(" ({o})")).unwrap_or_default();
                log!("generate"; "{} → {}{}", display_slug(slug), url, owner);
                report.generated += 1;
            }
            Err(e) => report.skip(slug, e.to_string()),
        }
    }

    report
}

fn write_page(dir: &Path, url: &str, slug: &str, site_name: &str) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let html = render_redirect_page(url, slug, site_name);
    fs::write(dir.join("index.html"), html)
}
