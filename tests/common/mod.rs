//! Common test utilities
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use modsync::error::SftpError;
use modsync::sftp::FileEntry;
use modsync::sync::ModStore;
use tempfile::TempDir;

/// Test environment with isolated configuration and mods directories
pub struct TestEnvironment {
    pub root: TempDir,
    pub config_dir: PathBuf,
    pub local_mods: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let config_dir = root.path().join("config");
        let local_mods = root.path().join("minecraft").join("mods");
        Self {
            root,
            config_dir,
            local_mods,
        }
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.config_dir.join("credentials.json")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join("settings.toml")
    }

    /// Create local mod files with their names as contents
    pub fn with_local_mods(self, names: &[&str]) -> Self {
        std::fs::create_dir_all(&self.local_mods).expect("create mods dir");
        for name in names {
            std::fs::write(self.local_mods.join(name), name).expect("write local mod");
        }
        self
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

/// Remote mods folder held in memory
#[derive(Clone, Default)]
pub struct FakeServer {
    files: Vec<(String, i64)>,
    reachable: bool,
    downloads: Arc<Mutex<Vec<String>>>,
}

impl FakeServer {
    pub fn new(files: &[(&str, i64)]) -> Self {
        Self {
            files: files.iter().map(|(n, t)| (n.to_string(), *t)).collect(),
            reachable: true,
            downloads: Arc::default(),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::default()
        }
    }

    pub fn downloads(&self) -> Vec<String> {
        self.downloads.lock().expect("download log").clone()
    }
}

impl ModStore for FakeServer {
    async fn list_entries(&self) -> Result<Vec<FileEntry>, SftpError> {
        if !self.reachable {
            return Err(SftpError::ConnectionFailed("connection refused".to_string()));
        }
        Ok(self
            .files
            .iter()
            .map(|(name, mtime)| FileEntry {
                name: name.clone(),
                is_dir: false,
                size: name.len() as u64,
                modified: Utc.timestamp_opt(*mtime, 0).single(),
            })
            .collect())
    }

    async fn fetch(&self, name: &str, dest: &Path) -> Result<u64, SftpError> {
        if !self.reachable {
            return Err(SftpError::ConnectionFailed("connection refused".to_string()));
        }
        if !self.files.iter().any(|(n, _)| n == name) {
            return Err(SftpError::Transfer(format!("No such file: {}", name)));
        }
        std::fs::write(dest, name).map_err(|e| SftpError::LocalIo(e.to_string()))?;
        self.downloads.lock().expect("download log").push(name.to_string());
        Ok(name.len() as u64)
    }
}
