//! Single-file download

use std::path::Path;

use crate::error::SyncError;
use crate::sftp::format_size;
use crate::validation::validate_mod_file_name;

use super::store::ModStore;

/// Result of downloading one mod
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub name: String,
    /// Bytes written, or a message for the toast
    pub result: Result<u64, String>,
}

impl DownloadOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&str> {
        self.result.as_ref().err().map(String::as_str)
    }
}

/// Download `name` into `local_dir`, overwriting any existing file.
pub async fn download_mod<S: ModStore>(store: &S, name: &str, local_dir: &Path) -> DownloadOutcome {
    let result = try_download(store, name, local_dir).await;

    match &result {
        Ok(bytes) => tracing::info!("Downloaded {} ({})", name, format_size(*bytes)),
        Err(e) => tracing::error!("download_mod({}) failed: {}", name, e),
    }

    DownloadOutcome {
        name: name.to_string(),
        result: result.map_err(|e| e.to_string()),
    }
}

async fn try_download<S: ModStore>(
    store: &S,
    name: &str,
    local_dir: &Path,
) -> Result<u64, SyncError> {
    validate_mod_file_name(name).map_err(|e| SyncError::InvalidName {
        name: name.to_string(),
        reason: e.message,
    })?;

    tokio::fs::create_dir_all(local_dir)
        .await
        .map_err(|e| SyncError::LocalIo {
            path: local_dir.to_path_buf(),
            source: e,
        })?;

    let bytes = store.fetch(name, &local_dir.join(name)).await?;
    Ok(bytes)
}
