/// Artifact discovery
///
/// Walks a test output directory and collects the TableTest artifact files
/// written during a test run.
use crate::error::{ReportError, Result};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

pub const FILE_PREFIX: &str = "TABLETEST-";
pub const FILE_EXTENSION: &str = ".yaml";

/// Walk `dir` and return every artifact file as a path relative to `dir`, sorted.
///
/// Any walk failure, including a missing root, is fatal.
pub fn find_artifact_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(|source| ReportError::Scan { path: dir.to_path_buf(), source })?;
        if !is_regular_file(&entry) || !is_artifact_file_name(&entry.file_name().to_string_lossy()) {
            continue;
        }
        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        files.push(relative.to_path_buf());
    }

    files.sort();
    debug!("Found {} artifact file(s) under {:?}", files.len(), dir);
    Ok(files)
}

/// Check whether there is at least one artifact file under `dir`.
///
/// Unreadable or missing directories count as empty.
pub fn has_artifact_files(dir: &Path) -> bool {
    dir.is_dir() && find_artifact_files(dir).map(|files| !files.is_empty()).unwrap_or(false)
}

/// Directories are walked without following links, but a link to a regular file counts as a file.
fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        entry.path().is_file()
    } else {
        entry.file_type().is_file()
    }
}

fn is_artifact_file_name(file_name: &str) -> bool {
    file_name.starts_with(FILE_PREFIX) && file_name.ends_with(FILE_EXTENSION)
}

#[cfg(test)]
#[path = "scanner_test.rs"]
mod scanner_test;
