//! Shortlink generation command.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::generator;
use crate::log;
use crate::redirect::{RedirectMap, display_slug};
use crate::utils::plural_count;

/// Generate the redirect tree, then reconcile stale entries.
///
/// Per-entry failures are reported in the summary and never fail the
/// command; only an unreadable mapping is fatal, and that aborts before
/// any file is touched.
pub fn run(config: &Config) -> Result<()> {
    let mapping = config.mapping_path();
    let map = RedirectMap::load(&mapping)
        .with_context(|| format!("cannot generate from {}", mapping.display()))?;

    log!("generate"; "processing {}", mapping.display());

    let mut report = generator::generate(config, &map);

    let protected = config.protected_paths();
    generator::reconcile(&config.output_dir(), &map, &protected, &mut report);
    if report.deleted == 0 {
        log!("clean"; "no stale shortlinks to clean up");
    }

    log!("generate"; "generated {}", plural_count(report.generated, "redirect"));
    log!("clean"; "deleted {}", plural_count(report.deleted, "stale shortlink"));
    if report.skipped > 0 {
        log!("generate"; "skipped {}", plural_count(report.skipped, "redirect"));
    }

    if !report.errors.is_empty() {
        eprintln!();
        eprintln!(
            "{} {}",
            "errors".red().bold(),
            format!("({})", report.errors.len()).dimmed()
        );
        for e in &report.errors {
            eprintln!("{} {}: {}", "→".red(), display_slug(&e.slug), e.reason);
        }
    }

    Ok(())
}
