use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_remote_mods_dir() -> String {
    "/mods".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_port() -> u16 {
    22
}

/// Application settings stored in settings.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsConfig {
    /// Absolute path of the mods folder on the server
    #[serde(default = "default_remote_mods_dir")]
    pub remote_mods_dir: String,
    /// Overrides the platform default `.minecraft/mods` location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_mods_dir: Option<PathBuf>,
    #[serde(default = "default_timeout")]
    pub connection_timeout_secs: u64,
    /// Prefilled host on the login screen
    #[serde(default)]
    pub default_host: String,
    #[serde(default = "default_port")]
    pub default_port: u16,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            remote_mods_dir: default_remote_mods_dir(),
            local_mods_dir: None,
            connection_timeout_secs: default_timeout(),
            default_host: String::new(),
            default_port: default_port(),
        }
    }
}

impl SettingsConfig {
    /// Load from the default settings file, falling back to defaults if it is missing
    pub fn load() -> Result<Self, ConfigError> {
        let path = super::paths::settings_file().ok_or_else(|| ConfigError::ReadFile {
            path: PathBuf::from("settings.toml"),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine settings file path",
            ),
        })?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!("Loading settings from: {:?}", path);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Save to the default settings file
    pub fn save(&self) -> Result<(), ConfigError> {
        super::paths::ensure_config_dir().map_err(ConfigError::CreateDir)?;

        let path = super::paths::settings_file().ok_or_else(|| ConfigError::WriteFile {
            path: PathBuf::from("settings.toml"),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine settings file path",
            ),
        })?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        super::write_atomic(path, &content).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Resolved local mods folder
    pub fn local_mods_dir(&self) -> PathBuf {
        self.local_mods_dir
            .clone()
            .or_else(super::paths::default_local_mods_dir)
            .unwrap_or_else(|| PathBuf::from("mods"))
    }

    pub fn connection_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.connection_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().expect("temp dir");
        let settings = SettingsConfig::load_from(&dir.path().join("settings.toml"))
            .expect("load settings");
        assert_eq!(settings, SettingsConfig::default());
        assert_eq!(settings.remote_mods_dir, "/mods");
        assert_eq!(settings.connection_timeout_secs, 30);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "remote_mods_dir = \"/srv/mc/mods\"\n").expect("write settings");

        let settings = SettingsConfig::load_from(&path).expect("load settings");
        assert_eq!(settings.remote_mods_dir, "/srv/mc/mods");
        assert_eq!(settings.default_port, 22);
        assert!(settings.local_mods_dir.is_none());
    }

    #[test]
    fn save_then_load_keeps_overrides() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        let settings = SettingsConfig {
            local_mods_dir: Some(dir.path().join("mods")),
            default_host: "mc.example.com".to_string(),
            default_port: 2022,
            ..Default::default()
        };
        settings.save_to(&path).expect("save settings");

        let loaded = SettingsConfig::load_from(&path).expect("load settings");
        assert_eq!(loaded, settings);
        assert_eq!(loaded.local_mods_dir(), dir.path().join("mods"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "connection_timeout_secs = \"soon\"").expect("write settings");

        assert!(matches!(
            SettingsConfig::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
