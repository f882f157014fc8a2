use std::future::Future;
use std::sync::Arc;

use russh::client::Handler;
use russh::keys::PublicKey;
use tokio::sync::Mutex;

use crate::error::SftpError;
use crate::security_log;

use super::known_hosts::{HostKeyStatus, KnownHosts};

/// SSH client handler: verifies the server key against known_hosts
pub struct ClientHandler {
    host: String,
    port: u16,
    known_hosts: Arc<Mutex<KnownHosts>>,
}

impl ClientHandler {
    pub fn new(host: String, port: u16, known_hosts: Arc<Mutex<KnownHosts>>) -> Self {
        Self {
            host,
            port,
            known_hosts,
        }
    }
}

impl Handler for ClientHandler {
    type Error = SftpError;

    fn check_server_key(
        &mut self,
        server_public_key: &PublicKey,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send {
        let host = self.host.clone();
        let port = self.port;
        let known_hosts = self.known_hosts.clone();
        let key = server_public_key.clone();

        async move {
            tokio::task::spawn_blocking(move || {
                let store = known_hosts.blocking_lock();
                match store.check(&host, port, &key) {
                    HostKeyStatus::Known => {
                        tracing::debug!("Host key verified for {}:{}", host, port);
                        Ok(true)
                    }
                    HostKeyStatus::Unknown { fingerprint } => {
                        store.learn(&host, port, &key)?;
                        security_log::log_host_key_learned(&host, port, &fingerprint);
                        Ok(true)
                    }
                    HostKeyStatus::Changed {
                        fingerprint,
                        reason,
                    } => {
                        security_log::log_host_key_mismatch(&host, port, &fingerprint, &reason);
                        Err(SftpError::HostKey(format!(
                            "Host key for {}:{} changed ({})",
                            host, port, fingerprint
                        )))
                    }
                }
            })
            .await
            .map_err(|e| SftpError::HostKey(format!("Host key check failed: {}", e)))?
        }
    }
}
