//! User configuration loaded from a TOML file.
//!
//! Every field has a default, so a missing file, a partial file, and a
//! malformed file all yield a usable `Settings` value. Parse failures are
//! logged and never abort startup.

use std::path::{Path, PathBuf};

use jstricks_core::prelude::*;
use serde::{Deserialize, Serialize};

/// Top-level configuration, `~/.config/jstricks/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub behavior: BehaviorSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    /// Show the precomputed result line under each snippet
    pub show_results: bool,
    /// Show the explanation paragraph under each snippet
    pub show_explanations: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_results: true,
            show_explanations: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BehaviorSettings {
    /// Ask for confirmation before clearing all favorites
    pub confirm_clear: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_clear: true,
        }
    }
}

/// Default config file location, if the platform exposes a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("jstricks").join("config.toml"))
}

/// Load settings from `path`, falling back to defaults when the file is
/// missing or unreadable or fails to parse.
pub fn load_settings(path: &Path) -> Settings {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no config file at {}, using defaults", path.display());
            return Settings::default();
        }
        Err(e) => {
            warn!("cannot read {}: {e}, using defaults", path.display());
            return Settings::default();
        }
    };

    match toml::from_str(&contents) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("invalid config at {}: {e}, using defaults", path.display());
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.ui.show_results);
        assert!(settings.ui.show_explanations);
        assert!(settings.behavior.confirm_clear);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = load_settings(&dir.path().join("absent.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\nshow_results = false\n").unwrap();

        let settings = load_settings(&path);
        assert!(!settings.ui.show_results);
        assert!(settings.ui.show_explanations);
        assert!(settings.behavior.confirm_clear);
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "this is not { toml").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_full_file_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let written = Settings {
            ui: UiSettings {
                show_results: false,
                show_explanations: false,
            },
            behavior: BehaviorSettings {
                confirm_clear: false,
            },
        };
        fs::write(&path, toml::to_string(&written).unwrap()).unwrap();

        assert_eq!(load_settings(&path), written);
    }
}
