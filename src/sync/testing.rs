//! In-memory mod store for unit tests

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::error::SftpError;
use crate::sftp::FileEntry;

use super::store::ModStore;

pub fn at(secs: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0).single()
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Vec<FileEntry>,
    fail_listing: bool,
    failing_fetches: HashSet<String>,
    fetched: Arc<Mutex<Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mod(mut self, name: &str, mtime: i64) -> Self {
        self.entries.push(FileEntry {
            name: name.to_string(),
            is_dir: false,
            size: name.len() as u64,
            modified: at(mtime),
        });
        self
    }

    pub fn with_dir(mut self, name: &str) -> Self {
        self.entries.push(FileEntry {
            name: name.to_string(),
            is_dir: true,
            size: 0,
            modified: None,
        });
        self
    }

    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub fn failing_fetch(mut self, name: &str) -> Self {
        self.failing_fetches.insert(name.to_string());
        self
    }

    /// Names passed to `fetch`, in call order
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().expect("fetch log").clone()
    }
}

impl ModStore for MemoryStore {
    async fn list_entries(&self) -> Result<Vec<FileEntry>, SftpError> {
        if self.fail_listing {
            return Err(SftpError::ConnectionFailed("server unreachable".to_string()));
        }
        Ok(self.entries.clone())
    }

    async fn fetch(&self, name: &str, dest: &Path) -> Result<u64, SftpError> {
        self.fetched.lock().expect("fetch log").push(name.to_string());
        if self.failing_fetches.contains(name) {
            return Err(SftpError::Transfer(format!("{} vanished", name)));
        }
        let entry = self
            .entries
            .iter()
            .find(|e| e.name == name && !e.is_dir)
            .ok_or_else(|| SftpError::Transfer(format!("No such file: {}", name)))?;

        // Contents are the file name so tests can check what landed where
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SftpError::LocalIo(e.to_string()))?;
        }
        std::fs::write(dest, entry.name.as_bytes()).map_err(|e| SftpError::LocalIo(e.to_string()))?;
        Ok(entry.size)
    }
}
