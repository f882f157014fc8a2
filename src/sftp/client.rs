//! SFTP client for establishing connections

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use russh::client::{self, Config};
use russh_sftp::client::SftpSession as RusshSftpSession;
use secrecy::ExposeSecret;
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio::time::timeout;

use crate::config::SessionConfig;
use crate::error::SftpError;
use crate::security_log;

use super::handler::ClientHandler;
use super::known_hosts::KnownHosts;
use super::session::SftpSession;

static KNOWN_HOSTS: OnceLock<Arc<Mutex<KnownHosts>>> = OnceLock::new();

/// Process-wide known_hosts store shared by every connection
pub fn shared_known_hosts() -> Arc<Mutex<KnownHosts>> {
    KNOWN_HOSTS
        .get_or_init(|| Arc::new(Mutex::new(KnownHosts::new())))
        .clone()
}

/// SFTP client for establishing connections
pub struct SftpClient {
    config: Arc<Config>,
    known_hosts: Arc<Mutex<KnownHosts>>,
    connection_timeout: Duration,
}

impl SftpClient {
    pub fn new(connection_timeout: Duration) -> Self {
        Self::with_known_hosts(connection_timeout, shared_known_hosts())
    }

    pub fn with_known_hosts(
        connection_timeout: Duration,
        known_hosts: Arc<Mutex<KnownHosts>>,
    ) -> Self {
        let config = Config {
            inactivity_timeout: Some(Duration::from_secs(3600)),
            keepalive_interval: Some(Duration::from_secs(60)),
            keepalive_max: 3,
            ..Default::default()
        };

        Self {
            config: Arc::new(config),
            known_hosts,
            connection_timeout,
        }
    }

    /// Connect, authenticate with the session password and open the SFTP subsystem
    pub async fn connect(&self, session: &SessionConfig) -> Result<SftpSession, SftpError> {
        let addr = session.address();

        let stream = timeout(self.connection_timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| SftpError::ConnectionFailed(format!("Connection timed out to {}", addr)))?
            .map_err(|e| {
                SftpError::ConnectionFailed(format!("Failed to connect to {}: {}", addr, e))
            })?;

        match timeout(
            self.connection_timeout,
            self.establish_sftp_session(session, stream),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(SftpError::ConnectionFailed(format!(
                "SFTP session setup timed out for {}",
                addr
            ))),
        }
    }

    async fn establish_sftp_session(
        &self,
        session: &SessionConfig,
        stream: TcpStream,
    ) -> Result<SftpSession, SftpError> {
        let handler = ClientHandler::new(
            session.host.clone(),
            session.port,
            self.known_hosts.clone(),
        );

        let mut handle = client::connect_stream(self.config.clone(), stream, handler)
            .await
            .map_err(|e| match e {
                SftpError::HostKey(reason) => SftpError::HostKey(reason),
                other => SftpError::ConnectionFailed(format!(
                    "SSH handshake failed for {}: {}",
                    session.address(),
                    other
                )),
            })?;

        self.authenticate(&mut handle, session).await?;

        let channel = handle
            .channel_open_session()
            .await
            .map_err(|e| SftpError::ConnectionFailed(format!("Failed to open channel: {}", e)))?;

        channel
            .request_subsystem(true, "sftp")
            .await
            .map_err(|e| {
                SftpError::ConnectionFailed(format!("Failed to request SFTP subsystem: {}", e))
            })?;

        let sftp = RusshSftpSession::new(channel.into_stream())
            .await
            .map_err(|e| {
                SftpError::ConnectionFailed(format!("Failed to initialize SFTP session: {}", e))
            })?;

        tracing::debug!("SFTP session open to {}", session.address());
        Ok(SftpSession::new(sftp, handle))
    }

    async fn authenticate(
        &self,
        handle: &mut client::Handle<ClientHandler>,
        session: &SessionConfig,
    ) -> Result<(), SftpError> {
        security_log::log_auth_attempt(&session.host, session.port, &session.username);

        let result = match handle
            .authenticate_password(&session.username, session.password.expose_secret())
            .await
        {
            Ok(result) => result,
            Err(e) => {
                let reason = format!("Password auth failed: {}", e);
                security_log::log_auth_failure(
                    &session.host,
                    session.port,
                    &session.username,
                    &reason,
                );
                return Err(SftpError::Authentication(reason));
            }
        };

        if !result.success() {
            let reason = "Authentication rejected by server";
            security_log::log_auth_failure(&session.host, session.port, &session.username, reason);
            return Err(SftpError::Authentication(reason.to_string()));
        }

        security_log::log_auth_success(&session.host, session.port, &session.username);
        Ok(())
    }
}
