//! Keeps the SDK's copy of the `.proto` files in sync with the checkout.

use anyhow::{Context, Result};
use proto_enum_codegen::rewrite::{PROTO_REPLACEMENTS, apply_replacements};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Remove every file directly inside `dir` except the names in `keep`.
///
/// Subdirectories are left alone. Returns the number of removed files.
pub fn clear_proto_dir(dir: &Path, keep: &[String]) -> Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if keep.iter().any(|k| *k == name) {
            debug!(file = %name, "keeping protected proto file");
            continue;
        }
        fs::remove_file(entry.path())
            .with_context(|| format!("failed to remove {}", entry.path().display()))?;
        removed += 1;
    }

    info!(path = %dir.display(), removed, "cleared proto output directory");
    Ok(removed)
}

/// Copy every file directly inside `from` into `to`, rewriting the Java
/// package options on the way.
///
/// Returns the number of copied files.
pub fn copy_modified_protos(from: &Path, to: &Path) -> Result<usize> {
    fs::create_dir_all(to).with_context(|| format!("failed to create {}", to.display()))?;

    let mut copied = 0;
    for entry in WalkDir::new(from).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to list {}", from.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let source = fs::read_to_string(entry.path())
            .with_context(|| format!("failed to read {}", entry.path().display()))?;
        let target = to.join(entry.file_name());
        fs::write(&target, apply_replacements(&source, PROTO_REPLACEMENTS))
            .with_context(|| format!("failed to write {}", target.display()))?;
        debug!(file = %target.display(), "wrote modified proto");
        copied += 1;
    }

    info!(path = %to.display(), copied, "generated modified proto files");
    Ok(copied)
}
