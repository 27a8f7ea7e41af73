//! Mapping validation command.

use anyhow::Result;
use owo_colors::OwoColorize;

use super::ValidateArgs;
use crate::config::Config;
use crate::log;
use crate::redirect::{RedirectMap, validate_redirects};
use crate::utils::{plural_count, plural_s};

/// Validate the mapping and exit non-zero on any error.
///
/// An unreadable or unparsable mapping counts as a single fatal error;
/// everything else is collected across the full pass and reported in
/// aggregate.
pub fn run(config: &Config, args: &ValidateArgs) -> Result<()> {
    let mapping = config.mapping_path();
    log!("validate"; "checking {}", mapping.display());

    let map = match RedirectMap::load(&mapping) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("{} {:#}", "→".red(), anyhow::Error::new(e));
            return finish(1, args.warn_only);
        }
    };

    let outcome = validate_redirects(&map);

    if !outcome.errors.is_empty() {
        eprintln!();
        eprintln!(
            "{} {}",
            "errors".red().bold(),
            format!("({})", outcome.errors.len()).dimmed()
        );
        for issue in &outcome.errors {
            eprintln!("{} {}", "→".red(), issue);
        }
    }

    if !outcome.warnings.is_empty() {
        eprintln!();
        eprintln!(
            "{} {}",
            "warnings".yellow().bold(),
            format!("({})", outcome.warnings.len()).dimmed()
        );
        for issue in &outcome.warnings {
            eprintln!("{} {}", "→".yellow(), issue);
        }
    }

    if outcome.is_valid() {
        log!("validate"; "all checks passed");
        log!(
            "validate";
            "{} total, {} with metadata",
            plural_count(outcome.stats.total, "shortlink"),
            outcome.stats.with_metadata
        );
        Ok(())
    } else {
        finish(outcome.errors.len(), args.warn_only)
    }
}

fn finish(error_count: usize, warn_only: bool) -> Result<()> {
    if warn_only {
        log!(
            "validate";
            "found {} (ignored with --warn-only)",
            plural_count(error_count, "error")
        );
        return Ok(());
    }
    anyhow::bail!(
        "validation failed: {} error{}",
        error_count,
        plural_s(error_count)
    )
}
