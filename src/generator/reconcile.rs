//! Stale shortlink cleanup.
//!
//! Generated pages are a derived cache, so any top-level directory that
//! carries the generator mark but no longer has a mapping entry can be
//! deleted. Protected names and foreign content are left untouched, as is
//! anything that cannot be inspected.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;

use super::template::{GENERATOR_MARK, REFRESH_MARK};
use super::{EntryError, GenerateReport};
use crate::log;
use crate::redirect::RedirectMap;

/// Decide whether a directory holds a generated shortlink page.
///
/// Content-sniffs `index.html` for the refresh directive and the
/// generator tag. A page someone hand-edited enough to lose the tag is
/// foreign content from this point on.
fn is_shortlink_dir(dir: &Path) -> bool {
    match fs::read_to_string(dir.join("index.html")) {
        Ok(content) => content.contains(REFRESH_MARK) && content.contains(GENERATOR_MARK),
        Err(_) => false,
    }
}

/// Delete generated directories whose slug is absent from the mapping.
///
/// Failures are recorded on the report and never abort the pass.
pub fn reconcile(
    output: &Path,
    map: &RedirectMap,
    protected: &FxHashSet<String>,
    report: &mut GenerateReport,
) {
    let entries = match fs::read_dir(output) {
        Ok(entries) => entries,
        Err(e) => {
            report.errors.push(EntryError {
                slug: String::new(),
                reason: format!("failed to scan output root: {e}"),
            });
            return;
        }
    };

    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if protected.contains(&name) {
            continue;
        }

        let path = entry.path();

        // Anything that is not an inspectable directory is skipped;
        // permission errors mean "skip", never "delete"
        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => {}
            _ => continue,
        }

        if map.contains_slug(&name) {
            continue;
        }

        if !is_shortlink_dir(&path) {
            continue;
        }

        match fs::remove_dir_all(&path) {
            Ok(()) => {
                log!("clean"; "deleted: {}/", name);
                report.deleted += 1;
            }
            Err(e) => {
                report.errors.push(EntryError {
                    slug: name,
                    reason: format!("failed to delete: {e}"),
                });
            }
        }
    }
}
