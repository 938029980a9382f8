//! Load and save settings.
//!
//! Settings live in the platform config folder:
//! - macOS: ~/Library/Application Support/com.petadopt.Pet-Adoption/
//! - Windows: %APPDATA%/petadopt/Pet Adoption/config/
//! - Linux: ~/.config/petadoption/

use super::Settings;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "petadopt";
const APP_NAME: &str = "Pet Adoption";
const CONFIG_FILENAME: &str = "settings.toml";

/// Why settings could not be written.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine the settings path")]
    NoConfigDir,

    #[error("failed to create config directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write settings file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings, falling back to defaults when the file is missing or
/// unreadable.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Settings::default();
    };
    load_from(&path)
}

pub(crate) fn load_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match Settings::from_toml(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "unparsable settings, using defaults");
                Settings::default()
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "unreadable settings, using defaults");
            Settings::default()
        }
    }
}

/// Save settings, creating the config directory if needed.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
    save_to(settings, &path)
}

pub(crate) fn save_to(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SettingsError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content).map_err(|source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "saved settings");
    Ok(())
}
