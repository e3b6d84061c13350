//! Directory-batch extraction.
//!
//! Applies the extractor to every matching file under a root directory:
//! walk the tree, filter with include/exclude globs, sort the matches for
//! deterministic ordering, then extract from each file in turn. A file
//! that cannot be read is kept in the output with its error; it does not
//! abort the rest of the batch.

use anyhow::{bail, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::extract::{extract_file, ExtractOptions};
use crate::models::Extraction;
use crate::source::SourceError;

/// Include patterns used when the caller supplies none.
pub const DEFAULT_INCLUDE_GLOBS: &[&str] = &["**/*.txt", "**/*.md"];

/// One file's extraction within a batch run.
#[derive(Debug)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub result: Result<Extraction, SourceError>,
}

/// Collect files under `root` matching the include globs and not the
/// exclude globs, sorted for deterministic ordering.
///
/// Globs match paths relative to `root`. `**/.git/**` is always excluded.
pub fn scan_files(
    root: &Path,
    include_globs: &[String],
    exclude_globs: &[String],
    follow_symlinks: bool,
) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        bail!("batch root does not exist: {}", root.display());
    }

    let include_set = build_globset(include_globs)?;

    let mut default_excludes = vec!["**/.git/**".to_string()];
    default_excludes.extend_from_slice(exclude_globs);
    let exclude_set = build_globset(&default_excludes)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(follow_symlinks) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().to_string();

        if exclude_set.is_match(&rel_str) {
            continue;
        }
        if !include_set.is_match(&rel_str) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Extract paragraphs from every matching file under `root`.
pub fn run_batch(
    root: &Path,
    include_globs: &[String],
    exclude_globs: &[String],
    follow_symlinks: bool,
    opts: &ExtractOptions,
) -> Result<Vec<BatchEntry>> {
    let files = scan_files(root, include_globs, exclude_globs, follow_symlinks)?;
    Ok(files
        .into_iter()
        .map(|path| {
            let result = extract_file(&path, opts);
            BatchEntry { path, result }
        })
        .collect())
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}
