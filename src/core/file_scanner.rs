use std::{ffi::OsStr, path::Path, vec};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::utils::to_slash_path;

/// Files selected for extraction, as repo-relative `/`-separated paths.
///
/// Sorted lexicographically over the full relative path so the scan order
/// does not depend on the filesystem's directory order.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<String>,
    /// Number of files skipped by an `ignores` pattern.
    pub ignored_count: usize,
}

impl IntoIterator for ScanResult {
    type Item = String;
    type IntoIter = vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

/// Walk `root` and collect every file with one of `extensions`.
///
/// Directories named in `excluded_dirs` are pruned before descent, so they are
/// never opened. Any traversal error aborts the scan.
pub fn scan_files(
    root: &Path,
    extensions: &[String],
    excluded_dirs: &[String],
    ignore_patterns: &[String],
) -> Result<ScanResult> {
    let patterns = ignore_patterns
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid ignore pattern '{}'", p)))
        .collect::<Result<Vec<_>>>()?;

    let mut files = Vec::new();
    let mut ignored_count = 0;

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, excluded_dirs));

    for entry in walker {
        let entry = entry.with_context(|| format!("Cannot traverse {}", root.display()))?;
        if !entry.file_type().is_file() || !has_extension(entry.path(), extensions) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let relative = to_slash_path(relative);

        if patterns.iter().any(|p| p.matches(&relative)) {
            ignored_count += 1;
            continue;
        }

        files.push(relative);
    }

    files.sort();

    Ok(ScanResult {
        files,
        ignored_count,
    })
}

fn is_excluded_dir(entry: &DirEntry, excluded_dirs: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excluded_dirs.iter().any(|d| d == name))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}
