//! File intake: the three entry points normalized to candidate files.
//!
//! Picker selections, dropped files/folders and OS "open with" paths all end
//! up as the same flat sequence of [`CandidateFile`]s. Extension filtering
//! happens downstream in the dispatcher; intake only expands directories and
//! skips OS artifacts.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::CandidateFile;

/// System artifacts skipped during directory expansion.
const IGNORED_NAMES: [&str; 3] = [".DS_Store", "Thumbs.db", "desktop.ini"];

fn is_ignored(name: &str) -> bool {
    IGNORED_NAMES.contains(&name)
}

/// Flat file-picker selection.
pub fn from_picker(paths: &[PathBuf]) -> Vec<CandidateFile> {
    paths.iter().cloned().map(CandidateFile::new).collect()
}

/// OS file-association open delivers a single path.
pub fn from_file_association(path: impl Into<PathBuf>) -> CandidateFile {
    CandidateFile::new(path)
}

/// Dropped entries: files pass through, directories expand recursively.
///
/// Sibling order within a directory is whatever the filesystem yields; no
/// ordering is guaranteed.
pub fn from_drop(entries: &[PathBuf]) -> Vec<CandidateFile> {
    let mut candidates = Vec::new();
    for entry in entries {
        expand(entry, &mut candidates);
    }
    debug!("Intake resolved {} candidate file(s)", candidates.len());
    candidates
}

fn expand(entry: &Path, candidates: &mut Vec<CandidateFile>) {
    if entry.is_dir() {
        let walker = WalkDir::new(entry).into_iter().filter_map(|item| match item {
            Ok(item) => Some(item),
            Err(err) => {
                warn!("Skipping unreadable entry under {}: {}", entry.display(), err);
                None
            }
        });
        for item in walker {
            if item.file_type().is_file() {
                push_file(item.path(), candidates);
            }
        }
    } else {
        push_file(entry, candidates);
    }
}

fn push_file(path: &Path, candidates: &mut Vec<CandidateFile>) {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    if is_ignored(name) {
        debug!("Skipping ignorable artifact {}", path.display());
        return;
    }
    // Entries offered as files can still stat as directories.
    if path.is_dir() {
        return;
    }
    candidates.push(CandidateFile::new(path.to_path_buf()));
}
