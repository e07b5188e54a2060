use std::path::{Path, PathBuf};
use tokio::fs;

use crate::core::Settings;
use crate::utils::{ShrinkerError, ShrinkerResult};

/// Marker inserted between base name and extension when the suffix setting is on.
pub const OUTPUT_SUFFIX: &str = ".min";

/// Get file size in bytes
pub async fn file_size(path: impl AsRef<Path>) -> ShrinkerResult<u64> {
    fs::metadata(path.as_ref())
        .await
        .map(|m| m.len())
        .map_err(|e| {
            ShrinkerError::filesystem(format!(
                "Failed to get size of {}: {}",
                path.as_ref().display(),
                e
            ))
        })
}

/// Compute the destination path for a compressed output.
///
/// The directory is the source file's directory unless `folderswitch` is off
/// and an alternate `savepath` is configured. The directory is created if
/// absent (idempotent). With the suffix setting on, `photo.JPG` becomes
/// `photo.min.JPG`; the extension keeps its original case.
///
/// Deterministic: the same source path and settings always yield the same
/// path string.
pub async fn compute_output_path(source: &Path, settings: &Settings) -> ShrinkerResult<PathBuf> {
    let source_dir = source.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
    let dir = match (&settings.savepath, settings.folderswitch) {
        (Some(alternate), false) => alternate.clone(),
        _ => source_dir,
    };

    fs::create_dir_all(&dir).await.map_err(|e| {
        ShrinkerError::filesystem(format!(
            "Failed to create output directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let suffix = if settings.suffix { OUTPUT_SUFFIX } else { "" };

    let file_name = match source.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}{suffix}.{ext}"),
        None => format!("{stem}{suffix}"),
    };

    Ok(dir.join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn suffix_goes_before_the_extension_and_case_is_kept() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("photo.JPG");

        let out = compute_output_path(&source, &Settings::default()).await.unwrap();
        assert_eq!(out, dir.path().join("photo.min.JPG"));
    }

    #[tokio::test]
    async fn suffix_can_be_disabled() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("photo.png");
        let settings = Settings {
            suffix: false,
            ..Settings::default()
        };

        let out = compute_output_path(&source, &settings).await.unwrap();
        assert_eq!(out, dir.path().join("photo.png"));
    }

    #[tokio::test]
    async fn alternate_directory_is_used_and_created() {
        let dir = TempDir::new().unwrap();
        let alternate = dir.path().join("shrunk");
        let settings = Settings {
            folderswitch: false,
            savepath: Some(alternate.clone()),
            ..Settings::default()
        };

        let out = compute_output_path(Path::new("/somewhere/else/photo.gif"), &settings)
            .await
            .unwrap();
        assert_eq!(out, alternate.join("photo.min.gif"));
        assert!(alternate.is_dir());
    }

    #[tokio::test]
    async fn alternate_directory_is_ignored_while_folderswitch_is_on() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("photo.svg");
        let settings = Settings {
            folderswitch: true,
            savepath: Some(dir.path().join("unused")),
            ..Settings::default()
        };

        let out = compute_output_path(&source, &settings).await.unwrap();
        assert_eq!(out, dir.path().join("photo.min.svg"));
        assert!(!dir.path().join("unused").exists());
    }

    #[tokio::test]
    async fn output_path_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("photo.jpeg");

        let first = compute_output_path(&source, &Settings::default()).await.unwrap();
        let second = compute_output_path(&source, &Settings::default()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn size_of_missing_file_is_a_filesystem_error() {
        let dir = TempDir::new().unwrap();
        let err = file_size(dir.path().join("missing.png")).await.unwrap_err();
        assert!(matches!(err, ShrinkerError::Filesystem(_)));
    }
}
