// src/config.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub const DATA_DIR_ENV: &str = "TP_DATA_DIR";
pub const DATA_DIR_NAME: &str = ".tp";
pub const BOOKMARKS_FILE_NAME: &str = "bookmarks.json";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// User configuration, read from `config.json` in the data directory.
///
/// Unknown keys are ignored and every field has a default, so old and new
/// releases can share one file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Compare aliases byte for byte instead of case-insensitively.
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Default data directory: `~/.tp`. `None` when no home directory can be
/// determined for the current user.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}

pub fn bookmarks_file(data_dir: &Path) -> PathBuf {
    data_dir.join(BOOKMARKS_FILE_NAME)
}

pub fn config_file(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}

/// Loads settings from `config_file`.
///
/// A missing or unreadable file and malformed JSON all fall back to the
/// defaults. Configuration must never be the reason a command fails.
#[instrument(level = "debug")]
pub fn load_settings(config_file: &Path) -> Settings {
    match fs::read_to_string(config_file) {
        Ok(content) => match serde_json::from_str::<Settings>(&content) {
            Ok(settings) => settings,
            Err(e) => {
                debug!("Ignoring malformed config {}: {}", config_file.display(), e);
                Settings::default()
            }
        },
        Err(e) => {
            debug!("No readable config at {}: {}", config_file.display(), e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_missing_file_when_load_settings_then_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let settings = load_settings(&temp_dir.path().join("config.json"));

        assert!(!settings.case_sensitive);
    }

    #[test]
    fn given_malformed_file_when_load_settings_then_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ this is not json").unwrap();

        let settings = load_settings(&path);

        assert!(!settings.case_sensitive);
    }

    #[test]
    fn given_empty_object_when_load_settings_then_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let settings = load_settings(&path);

        assert!(!settings.case_sensitive);
    }

    #[test]
    fn given_case_sensitive_true_when_load_settings_then_flag_set() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"caseSensitive": true}"#).unwrap();

        let settings = load_settings(&path);

        assert!(settings.case_sensitive);
    }

    #[test]
    fn given_unknown_keys_when_load_settings_then_known_fields_still_parse() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"caseSensitive": true, "futureOption": 42}"#).unwrap();

        let settings = load_settings(&path);

        assert!(settings.case_sensitive);
    }

    #[test]
    fn given_data_dir_when_building_paths_then_file_names_fixed() {
        let data_dir = Path::new("/home/user/.tp");

        assert_eq!(
            bookmarks_file(data_dir),
            PathBuf::from("/home/user/.tp/bookmarks.json")
        );
        assert_eq!(
            config_file(data_dir),
            PathBuf::from("/home/user/.tp/config.json")
        );
    }

    #[test]
    fn given_home_directory_when_default_data_dir_then_dot_tp_under_home() {
        if let Some(data_dir) = default_data_dir() {
            assert!(data_dir.ends_with(DATA_DIR_NAME));
        }
    }
}
