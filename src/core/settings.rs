//! User settings and their JSON store.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::utils::{ShrinkerError, ShrinkerResult};

/// Process-wide user settings.
///
/// Every key has a default, and the struct deserializes documents with
/// missing keys by filling them in, so files written by older versions keep
/// loading. Components receive an explicit snapshot of this struct rather
/// than reading ambient global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Desktop notification on success (consumed by the presentation layer)
    pub notification: bool,
    /// true = output beside the source file; false = use `savepath`
    pub folderswitch: bool,
    /// Clear the prior results list on a new batch (presentation-side)
    pub clearlist: bool,
    /// Append the `.min` marker to output file names
    pub suffix: bool,
    /// Startup update check (handled by the host shell)
    pub updatecheck: bool,
    /// Prepend an XML declaration to SVG output if absent
    pub addxmltag: bool,
    /// Pretty-print SVG output
    pub prettifysvg: bool,
    /// JPEG re-encode quality (1-100)
    pub jpegquality: u32,
    /// JPEG progressive encoding
    pub jpegprogressive: bool,
    /// Alternate output directory, used when `folderswitch` is off
    pub savepath: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notification: true,
            folderswitch: true,
            clearlist: false,
            suffix: true,
            updatecheck: true,
            addxmltag: false,
            prettifysvg: false,
            jpegquality: 80,
            jpegprogressive: true,
            savepath: None,
        }
    }
}

impl Settings {
    /// Effective JPEG quality: a stored 0 falls back to the default of 80.
    pub fn jpeg_quality(&self) -> u32 {
        if self.jpegquality == 0 {
            80
        } else {
            self.jpegquality
        }
    }
}

/// Validates loaded settings values
pub fn validate_settings(settings: &Settings) -> ShrinkerResult<()> {
    if settings.jpegquality > 100 {
        return Err(ShrinkerError::settings(format!(
            "Invalid jpegquality value: {}. Must be between 1 and 100",
            settings.jpegquality
        )));
    }

    Ok(())
}

/// JSON-backed settings store.
///
/// Persistence mechanics beyond this file live with the host shell; the core
/// only needs load-with-defaults and save-whole-document.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at the default platform location.
    pub fn default_location() -> ShrinkerResult<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| ShrinkerError::filesystem("No configuration directory available"))?;
        Ok(Self::at(dir.join("image-shrinker").join("settings.json")))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load settings, filling defaults for any missing key.
    ///
    /// A missing file yields pure defaults. The merged document is written
    /// back so every key is present on disk afterwards, matching the
    /// first-launch bootstrap of the settings file.
    pub fn load(&self) -> ShrinkerResult<Settings> {
        let settings = match std::fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                ShrinkerError::settings(format!("Failed to parse {}: {}", self.path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {}, using defaults", self.path.display());
                Settings::default()
            }
            Err(e) => return Err(e.into()),
        };

        validate_settings(&settings)?;
        self.save(&settings)?;
        Ok(settings)
    }

    /// Persist the full settings document.
    pub fn save(&self, settings: &Settings) -> ShrinkerResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(settings)
            .map_err(|e| ShrinkerError::settings(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_as_defaults_and_bootstraps_the_document() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::at(dir.path().join("settings.json"));

        let settings = store.load().unwrap();
        assert_eq!(settings, Settings::default());
        assert!(dir.path().join("settings.json").is_file());
    }

    #[test]
    fn partial_document_fills_missing_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"prettifysvg": true, "jpegquality": 55}"#).unwrap();

        let settings = SettingsStore::at(&path).load().unwrap();
        assert!(settings.prettifysvg);
        assert_eq!(settings.jpegquality, 55);
        // Everything absent from the document keeps its default.
        assert!(settings.notification);
        assert!(settings.suffix);
        assert_eq!(settings.savepath, None);
    }

    #[test]
    fn zero_quality_falls_back_to_the_default() {
        let settings = Settings {
            jpegquality: 0,
            ..Settings::default()
        };
        assert_eq!(settings.jpeg_quality(), 80);
    }

    #[test]
    fn out_of_range_quality_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"jpegquality": 101}"#).unwrap();

        let err = SettingsStore::at(&path).load().unwrap_err();
        assert!(matches!(err, ShrinkerError::Settings(_)));
    }

    #[test]
    fn settings_round_trip_through_the_store() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::at(dir.path().join("settings.json"));

        let settings = Settings {
            folderswitch: false,
            savepath: Some(dir.path().join("out")),
            jpegprogressive: false,
            ..Settings::default()
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }
}
