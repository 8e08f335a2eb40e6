//! Tinct configuration file handling

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tinct_dialog::{DialogOptions, DEFAULT_MOUNT_ID};
use tinct_theme::ThemePreference;

/// Name looked up in the working directory when no path is given
pub const CONFIG_FILE: &str = "tinct.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level Tinct configuration (tinct.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TinctConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub dialog: DialogConfig,
}

/// Theme configuration
#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ThemeConfig {
    /// `light`, `dark` or `system`
    #[serde(default)]
    pub preference: ThemePreference,
}

/// Dialog defaults
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DialogConfig {
    #[serde(default = "default_true")]
    pub close_on_overlay: bool,
    #[serde(default = "default_true")]
    pub close_on_esc: bool,
    #[serde(default = "default_true")]
    pub trap_focus: bool,
    /// Id of the element dialogs portal into
    #[serde(default = "default_mount_id")]
    pub mount_id: String,
}

fn default_true() -> bool {
    true
}

fn default_mount_id() -> String {
    DEFAULT_MOUNT_ID.to_string()
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            close_on_overlay: true,
            close_on_esc: true,
            trap_focus: true,
            mount_id: default_mount_id(),
        }
    }
}

impl DialogConfig {
    pub fn options(&self) -> DialogOptions {
        DialogOptions::new()
            .close_on_overlay(self.close_on_overlay)
            .close_on_esc(self.close_on_esc)
            .trap_focus(self.trap_focus)
            .fallback_mount_id(self.mount_id.clone())
    }
}

impl TinctConfig {
    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, `tinct.toml` in the
    /// working directory is used when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::load_file(path),
            None => {
                let fallback = Path::new(CONFIG_FILE);
                if fallback.exists() {
                    Self::load_file(fallback)
                } else {
                    tracing::debug!("no {CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: TinctConfig = toml::from_str("").unwrap();
        assert_eq!(config, TinctConfig::default());
        assert_eq!(config.theme.preference, ThemePreference::System);
        assert_eq!(config.dialog.options(), DialogOptions::default());
    }

    #[test]
    fn test_partial_sections() {
        let config: TinctConfig = toml::from_str(
            r#"
            [theme]
            preference = "dark"

            [dialog]
            close_on_esc = false
            mount_id = "overlays"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme.preference, ThemePreference::Dark);
        let options = config.dialog.options();
        assert!(!options.close_on_esc);
        assert!(options.close_on_overlay);
        assert!(options.trap_focus);
        assert_eq!(options.fallback_mount_id, "overlays");
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[theme]\npreference = \"light\"").unwrap();

        let config = TinctConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.theme.preference, ThemePreference::Light);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            TinctConfig::load(Some(&path)),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_bad_preference_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[theme]\npreference = \"sepia\"").unwrap();

        let err = TinctConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = TinctConfig::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("preference = \"system\""));
        assert_eq!(toml::from_str::<TinctConfig>(&text).unwrap(), config);
    }
}
