//! Settings persistence
//!
//! Reads and writes [`BoardSettings`] as JSON. The default location is
//! `settings.json` in the platform config directory, e.g.
//! `~/.config/chessy/settings.json` on Linux.
//!
//! # Error Handling
//!
//! - A missing file is not an error; defaults are used.
//! - An explicit path that fails to parse is an error for the caller.
//! - A broken file at the default location is logged and replaced by defaults.

use super::error::{CoreError, CoreResult};
use super::BoardSettings;
use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Default settings path, falling back to the working directory
pub fn default_settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "chessy", "Chessy") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings from `path`, `Ok(None)` when the file does not exist
pub fn load_settings(path: &Path) -> CoreResult<Option<BoardSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path).map_err(|source| CoreError::SettingsIo {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: BoardSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(Some(settings))
}

/// Resolve the settings used for this run
///
/// An explicit path must load cleanly. Without one, the default location is
/// tried and any failure there degrades to defaults.
pub fn resolve_settings(explicit: Option<&Path>) -> CoreResult<BoardSettings> {
    if let Some(path) = explicit {
        return match load_settings(path)? {
            Some(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                Ok(settings)
            }
            None => {
                info!("[SETTINGS] No settings file at {:?}. Using defaults.", path);
                Ok(BoardSettings::default())
            }
        };
    }

    let path = default_settings_path();
    match load_settings(&path) {
        Ok(Some(settings)) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            Ok(settings)
        }
        Ok(None) => {
            info!(
                "[SETTINGS] No settings file found at {:?}. Using defaults.",
                path
            );
            Ok(BoardSettings::default())
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings at {:?}: {}. Using defaults.",
                path,
                e
            );
            Ok(BoardSettings::default())
        }
    }
}

/// Write settings as pretty JSON, creating parent directories
pub fn save_settings(path: &Path, settings: &BoardSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| CoreError::SettingsIo {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).map_err(|source| CoreError::SettingsIo {
        path: path.to_path_buf(),
        source,
    })?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardTheme;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("chessy-settings-{}-{}", std::process::id(), name))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_missing_file_loads_none() {
        let path = scratch_path("missing");
        assert!(
            load_settings(&path).expect("missing file is not an error").is_none()
        );
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("save");
        let settings = BoardSettings {
            tile_size: 64.0,
            theme: BoardTheme::Classic,
            ..Default::default()
        };
        save_settings(&path, &settings).expect("save succeeds");
        let loaded = load_settings(&path).expect("load succeeds");
        assert_eq!(loaded, Some(settings));
        let _ = fs::remove_dir_all(path.parent().expect("scratch dir"));
    }

    #[test]
    fn test_explicit_invalid_file_is_error() {
        let path = scratch_path("invalid");
        fs::create_dir_all(path.parent().expect("scratch dir")).expect("mkdir");
        fs::write(&path, "{ not json").expect("write");
        assert!(matches!(
            resolve_settings(Some(path.as_path())),
            Err(CoreError::SettingsSerialization(_))
        ));
        let _ = fs::remove_dir_all(path.parent().expect("scratch dir"));
    }

    #[test]
    fn test_explicit_out_of_range_values_are_error() {
        let path = scratch_path("range");
        fs::create_dir_all(path.parent().expect("scratch dir")).expect("mkdir");
        fs::write(&path, r#"{ "tile_size": -1.0 }"#).expect("write");
        assert!(matches!(
            resolve_settings(Some(path.as_path())),
            Err(CoreError::InvalidSettings { .. })
        ));
        let _ = fs::remove_dir_all(path.parent().expect("scratch dir"));
    }
}
