use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Entry of a run directory matched by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryMatch {
    pub name: String,
    pub path: PathBuf,
}

/// List the direct children of `dir` whose name satisfies `matches`,
/// sorted by file name.
///
/// Children of any type are returned; callers decide what to do with entries
/// that are not regular files.
pub fn matching_entries<F>(dir: &Path, matches: F) -> Result<Vec<DirEntryMatch>>
where
    F: Fn(&str) -> bool,
{
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if matches(&name) {
            found.push(DirEntryMatch {
                name,
                path: entry.into_path(),
            });
        }
    }

    Ok(found)
}

/// Entries of `dir` whose name starts with `prefix`
pub fn entries_with_prefix(dir: &Path, prefix: &str) -> Result<Vec<DirEntryMatch>> {
    matching_entries(dir, |name| name.starts_with(prefix))
}

/// Entries of `dir` whose name ends with `suffix`
pub fn entries_with_suffix(dir: &Path, suffix: &str) -> Result<Vec<DirEntryMatch>> {
    matching_entries(dir, |name| name.ends_with(suffix))
}
