//! SFTP session for listing and downloading

use std::path::Path;

use chrono::{TimeZone, Utc};
use russh::Disconnect;
use russh::client::Handle;
use russh_sftp::client::SftpSession as RusshSftpSession;
use tokio::fs::OpenOptions;
use tokio::io::{self, AsyncWriteExt};

use crate::error::SftpError;

use super::handler::ClientHandler;
use super::types::FileEntry;

/// One open SFTP session. Dropped (or closed) after a single operation.
pub struct SftpSession {
    sftp: RusshSftpSession,
    handle: Handle<ClientHandler>,
}

impl std::fmt::Debug for SftpSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SftpSession").finish_non_exhaustive()
    }
}

impl SftpSession {
    pub fn new(sftp: RusshSftpSession, handle: Handle<ClientHandler>) -> Self {
        Self { sftp, handle }
    }

    /// List directory contents (no `..` entry)
    pub async fn list_dir(&self, path: &str) -> Result<Vec<FileEntry>, SftpError> {
        let read_dir = self.sftp.read_dir(path.to_string()).await.map_err(|e| {
            SftpError::Listing(format!("Failed to read directory {}: {}", path, e))
        })?;

        let mut result = Vec::new();
        for entry in read_dir {
            let name = entry.file_name();
            if name == "." || name == ".." {
                continue;
            }
            let metadata = entry.metadata();

            let modified = metadata
                .mtime
                .and_then(|mtime| Utc.timestamp_opt(mtime as i64, 0).single());

            result.push(FileEntry {
                name,
                is_dir: metadata.is_dir(),
                size: metadata.size.unwrap_or(0),
                modified,
            });
        }

        Ok(result)
    }

    /// Download a file from remote to local, replacing any existing file
    pub async fn download(&self, remote_path: &str, local_path: &Path) -> Result<u64, SftpError> {
        if let Some(parent) = local_path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                SftpError::LocalIo(format!(
                    "Failed to create local directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut remote = self.sftp.open(remote_path.to_string()).await.map_err(|e| {
            SftpError::Transfer(format!("Failed to open remote file {}: {}", remote_path, e))
        })?;

        let mut local = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(local_path)
            .await
            .map_err(|e| {
                SftpError::LocalIo(format!(
                    "Failed to write local file {}: {}",
                    local_path.display(),
                    e
                ))
            })?;

        let bytes = io::copy(&mut remote, &mut local).await.map_err(|e| {
            SftpError::Transfer(format!(
                "Failed to download {} to {}: {}",
                remote_path,
                local_path.display(),
                e
            ))
        })?;

        local.flush().await.map_err(|e| {
            SftpError::LocalIo(format!(
                "Failed to flush {}: {}",
                local_path.display(),
                e
            ))
        })?;

        Ok(bytes)
    }

    /// Close the SFTP channel and the SSH connection
    pub async fn close(self) {
        if let Err(e) = self.sftp.close().await {
            tracing::debug!("SFTP close failed: {}", e);
        }
        if let Err(e) = self
            .handle
            .disconnect(Disconnect::ByApplication, "session finished", "en")
            .await
        {
            tracing::debug!("SSH disconnect failed: {}", e);
        }
    }
}
