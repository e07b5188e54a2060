//! Core types for candidate files and dispatch outcomes.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One file offered for compression.
///
/// Created by the intake pipeline and consumed exactly once by the
/// dispatcher. Intake does not filter by extension; unsupported files are
/// rejected downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateFile {
    /// Absolute path to the source file
    pub path: PathBuf,
    /// Display name (the file name component)
    pub name: String,
    /// Lower-cased extension, empty when the file has none
    pub extension: String,
}

impl CandidateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        Self { path, name, extension }
    }
}

/// Successful result of one dispatch.
///
/// Failures travel as [`crate::utils::ShrinkerError`]; an outcome is relayed
/// once and not retained.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShrinkOutcome {
    /// Path of the compressed output
    pub output_path: String,
    /// Source file size in bytes
    pub original_size: u64,
    /// Compressed file size in bytes
    pub compressed_size: u64,
}
