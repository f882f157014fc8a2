//! Trust-on-first-use host key store

use std::path::PathBuf;

use russh::keys::{self, HashAlg, PublicKey};

use crate::config::paths;
use crate::error::SftpError;

/// Result of checking a host key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostKeyStatus {
    /// Key matches a stored key
    Known,
    /// No key stored for this host yet
    Unknown { fingerprint: String },
    /// A different key is stored for this host (possible MITM)
    Changed { fingerprint: String, reason: String },
}

/// known_hosts file in the app config directory
pub struct KnownHosts {
    path: Option<PathBuf>,
}

impl KnownHosts {
    pub fn new() -> Self {
        Self::with_path(paths::known_hosts_file())
    }

    /// Create a store with an explicit path (useful for tests)
    pub fn with_path(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Get the fingerprint of a public key
    pub fn fingerprint(key: &PublicKey) -> String {
        key.fingerprint(HashAlg::Sha256).to_string()
    }

    /// Check a server key against the stored entries
    pub fn check(&self, host: &str, port: u16, key: &PublicKey) -> HostKeyStatus {
        let fingerprint = Self::fingerprint(key);
        let Some(path) = &self.path else {
            return HostKeyStatus::Unknown { fingerprint };
        };

        match keys::known_hosts::check_known_hosts_path(host, port, key, path) {
            Ok(true) => HostKeyStatus::Known,
            Ok(false) => HostKeyStatus::Unknown { fingerprint },
            Err(e) => HostKeyStatus::Changed {
                fingerprint,
                reason: e.to_string(),
            },
        }
    }

    /// Remember a host key
    pub fn learn(&self, host: &str, port: u16, key: &PublicKey) -> Result<(), SftpError> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| SftpError::HostKey("No known_hosts path configured".to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SftpError::HostKey(format!(
                    "Failed to create known_hosts directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        keys::known_hosts::learn_known_hosts_path(host, port, key, path).map_err(|e| {
            SftpError::HostKey(format!(
                "Failed to write known_hosts {}: {}",
                path.display(),
                e
            ))
        })
    }
}

impl Default for KnownHosts {
    fn default() -> Self {
        Self::new()
    }
}
