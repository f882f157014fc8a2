//! Remote mod listings

use chrono::{DateTime, Utc};

use crate::error::SyncError;

use super::MOD_EXTENSION;
use super::store::ModStore;

/// A remote mod and its modification time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModTimestamp {
    pub name: String,
    /// `None` when the server did not report an mtime; sorts as oldest
    pub modified: Option<DateTime<Utc>>,
}

impl ModTimestamp {
    pub fn new(name: impl Into<String>, modified: Option<DateTime<Utc>>) -> Self {
        Self {
            name: name.into(),
            modified,
        }
    }

    /// `YYYY-MM-DD HH:MM` in local time, or an empty string
    pub fn formatted_modified(&self) -> String {
        self.modified
            .map(|dt| {
                dt.with_timezone(&chrono::Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
            })
            .unwrap_or_default()
    }
}

/// Stable sort, newest first
pub fn sort_newest_first(mods: &mut [ModTimestamp]) {
    mods.sort_by(|a, b| b.modified.cmp(&a.modified));
}

/// Remote mod file names, sorted lexicographically
pub async fn list_remote_mods<S: ModStore>(store: &S) -> Result<Vec<String>, SyncError> {
    let mut names: Vec<String> = fetch_remote_mods(store, "list_remote_mods")
        .await?
        .into_iter()
        .map(|m| m.name)
        .collect();
    names.sort();
    tracing::info!("Listed {} remote mods", names.len());
    Ok(names)
}

/// Remote mods with modification times, newest first
pub async fn list_remote_mod_timestamps<S: ModStore>(
    store: &S,
) -> Result<Vec<ModTimestamp>, SyncError> {
    let mut mods = fetch_remote_mods(store, "list_remote_mod_timestamps").await?;
    sort_newest_first(&mut mods);
    tracing::info!("Found {} remote mod timestamps", mods.len());
    Ok(mods)
}

async fn fetch_remote_mods<S: ModStore>(
    store: &S,
    operation: &str,
) -> Result<Vec<ModTimestamp>, SyncError> {
    let entries = store.list_entries().await.map_err(|e| {
        tracing::error!("{} failed: {}", operation, e);
        SyncError::from(e)
    })?;

    Ok(entries
        .into_iter()
        .filter(|entry| entry.has_extension(MOD_EXTENSION))
        .map(|entry| ModTimestamp::new(entry.name, entry.modified))
        .collect())
}
