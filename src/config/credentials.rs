//! "Remember me" credential file
//!
//! The password is stored base64 encoded. That is an encoding, not
//! encryption: anyone who can read the file can recover the password.

use std::path::{Path, PathBuf};

use data_encoding::BASE64;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::security_log;

use super::SessionConfig;

/// On-disk credential record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub host: String,
    pub port: u16,
    pub user: String,
    /// Base64 of the UTF-8 password
    pub password: String,
}

impl StoredCredentials {
    pub fn from_session(session: &SessionConfig) -> Self {
        Self {
            host: session.host.clone(),
            port: session.port,
            user: session.username.clone(),
            password: BASE64.encode(session.password.expose_secret().as_bytes()),
        }
    }

    /// Decode the record back into session parameters
    pub fn to_session(&self) -> Result<SessionConfig, ConfigError> {
        let bytes = BASE64
            .decode(self.password.as_bytes())
            .map_err(|_| ConfigError::InvalidPassword)?;
        let password = String::from_utf8(bytes).map_err(|_| ConfigError::InvalidPassword)?;
        Ok(SessionConfig::new(
            self.host.clone(),
            self.port,
            self.user.clone(),
            password,
        ))
    }

    /// Load the remembered credentials, if any
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from(&credentials_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Persist to the default credentials file
    pub fn save(&self) -> Result<(), ConfigError> {
        super::paths::ensure_config_dir().map_err(ConfigError::CreateDir)?;
        self.save_to(&credentials_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        super::write_private(path, &content).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        security_log::log_credentials_stored(&self.host, &self.user);
        Ok(())
    }

    /// Forget remembered credentials
    pub fn clear() -> Result<(), ConfigError> {
        Self::clear_at(&credentials_path()?)
    }

    pub fn clear_at(path: &Path) -> Result<(), ConfigError> {
        match std::fs::remove_file(path) {
            Ok(()) => {
                tracing::info!("Removed remembered credentials");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConfigError::WriteFile {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }
}

fn credentials_path() -> Result<PathBuf, ConfigError> {
    super::paths::credentials_file().ok_or_else(|| ConfigError::ReadFile {
        path: PathBuf::from("credentials.json"),
        source: std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine credentials file path",
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn session() -> SessionConfig {
        SessionConfig::new("mc.example.com", 2022, "steve", "p@ss wörd")
    }

    #[test]
    fn password_is_base64_on_disk() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("credentials.json");
        StoredCredentials::from_session(&session())
            .save_to(&path)
            .expect("save credentials");

        let raw = std::fs::read_to_string(&path).expect("read credentials");
        assert!(!raw.contains("p@ss wörd"));
        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(value["host"], "mc.example.com");
        assert_eq!(value["port"], 2022);
        assert_eq!(value["user"], "steve");
        assert_eq!(
            value["password"],
            BASE64.encode("p@ss wörd".as_bytes()).as_str()
        );
    }

    #[test]
    fn load_restores_session_parameters() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("credentials.json");
        StoredCredentials::from_session(&session())
            .save_to(&path)
            .expect("save credentials");

        let stored = StoredCredentials::load_from(&path)
            .expect("load credentials")
            .expect("credentials present");
        let restored = stored.to_session().expect("decode password");
        assert_eq!(restored.host, "mc.example.com");
        assert_eq!(restored.port, 2022);
        assert_eq!(restored.username, "steve");
        assert_eq!(restored.password.expose_secret(), "p@ss wörd");
    }

    #[test]
    fn missing_file_means_no_credentials() {
        let dir = tempdir().expect("temp dir");
        let loaded = StoredCredentials::load_from(&dir.path().join("credentials.json"))
            .expect("load credentials");
        assert!(loaded.is_none());
    }

    #[test]
    fn clear_removes_file_and_tolerates_absence() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("credentials.json");
        StoredCredentials::from_session(&session())
            .save_to(&path)
            .expect("save credentials");

        StoredCredentials::clear_at(&path).expect("clear credentials");
        assert!(!path.exists());
        StoredCredentials::clear_at(&path).expect("second clear is a no-op");
    }

    #[test]
    fn garbage_password_is_rejected() {
        let stored = StoredCredentials {
            host: "h".to_string(),
            port: 22,
            user: "u".to_string(),
            password: "not base64!!".to_string(),
        };
        assert!(matches!(
            stored.to_session(),
            Err(ConfigError::InvalidPassword)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn credentials_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("credentials.json");
        StoredCredentials::from_session(&session())
            .save_to(&path)
            .expect("save credentials");

        let mode = std::fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
