//! Settings persistence - load and save settings to disk.
//!
//! Settings are stored in the platform-specific application data folder:
//! - macOS: ~/Library/Application Support/com.navsync.Table-History-Demo/
//! - Windows: %APPDATA%/navsync/Table History Demo/config/
//! - Linux: ~/.config/tablehistorydemo/

use super::Settings;
use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "navsync";
const APP_NAME: &str = "Table History Demo";
const CONFIG_FILENAME: &str = "settings.toml";

/// Path to the settings file, if the platform directory can be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from disk.
///
/// Falls back to the defaults when the file is missing or unreadable.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Settings::default();
    };
    load_settings_from(&path)
}

pub(crate) fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No settings file found at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}

/// Save settings to disk, creating the config directory if needed.
pub fn save_settings(settings: &Settings) -> Result<()> {
    let path = settings_path().ok_or_else(|| anyhow!("could not determine settings path"))?;
    save_settings_to(settings, &path)
}

pub(crate) fn save_settings_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(settings).context("serialize settings")?;
    fs::write(path, content).with_context(|| format!("write settings file {}", path.display()))?;

    tracing::info!("Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use navsync_core::InitStrategy;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("navsync-gui-{}-{}", std::process::id(), name))
            .join(CONFIG_FILENAME)
    }

    #[test]
    fn test_settings_round_trip() {
        let mut settings = Settings::default();
        settings.navigation.strategy = InitStrategy::SeedFromDefault;
        settings.display.row_count = 7;
        settings.start_url = "/History/TableDemo/table/3/".to_string();

        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_file("save");
        let mut settings = Settings::default();
        settings.display.dark_mode = true;

        save_settings_to(&settings, &path).unwrap();
        assert_eq!(load_settings_from(&path), settings);

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_missing_or_broken_file_gives_defaults() {
        let path = scratch_file("broken");
        assert_eq!(load_settings_from(&path), Settings::default());

        save_settings_to(&Settings::default(), &path).unwrap();
        fs::write(&path, "display = 3").unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }
}
