//! Remote side of the mod sync

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use crate::config::{SessionConfig, SettingsConfig};
use crate::error::SftpError;
use crate::sftp::{FileEntry, SftpClient};

/// Where mods are listed and fetched from.
///
/// The production implementation is [`SftpModStore`]; tests use an
/// in-memory store.
pub trait ModStore: Send + Sync + 'static {
    /// All entries of the remote mods folder, unfiltered
    fn list_entries(&self) -> impl Future<Output = Result<Vec<FileEntry>, SftpError>> + Send;

    /// Copy the remote file `name` to `dest`, returning the byte count
    fn fetch(
        &self,
        name: &str,
        dest: &Path,
    ) -> impl Future<Output = Result<u64, SftpError>> + Send;
}

/// Mod store backed by an SFTP server.
///
/// Every call opens its own session and closes it afterwards.
#[derive(Clone)]
pub struct SftpModStore {
    session: Arc<SessionConfig>,
    client: Arc<SftpClient>,
    remote_dir: String,
}

impl SftpModStore {
    pub fn new(session: Arc<SessionConfig>, settings: &SettingsConfig) -> Self {
        Self {
            session,
            client: Arc::new(SftpClient::new(settings.connection_timeout())),
            remote_dir: settings.remote_mods_dir.clone(),
        }
    }

    /// Open and immediately close a session to check the credentials
    pub async fn test_connection(&self) -> Result<(), SftpError> {
        let sftp = self.client.connect(&self.session).await?;
        sftp.close().await;
        Ok(())
    }
}

/// Join a file name onto a remote directory path
pub fn remote_path(dir: &str, name: &str) -> String {
    format!("{}/{}", dir.trim_end_matches('/'), name)
}

impl ModStore for SftpModStore {
    async fn list_entries(&self) -> Result<Vec<FileEntry>, SftpError> {
        let sftp = self.client.connect(&self.session).await?;
        let result = sftp.list_dir(&self.remote_dir).await;
        sftp.close().await;
        result
    }

    async fn fetch(&self, name: &str, dest: &Path) -> Result<u64, SftpError> {
        let sftp = self.client.connect(&self.session).await?;
        let result = sftp.download(&remote_path(&self.remote_dir, name), dest).await;
        sftp.close().await;
        result
    }
}
