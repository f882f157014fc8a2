//! Connection parameters for one logged-in session

use secrecy::SecretString;

/// Host, port and credentials for the SFTP server.
///
/// Built by the login screen and dropped on logout. Remote operations take
/// it explicitly instead of reading connection state from globals.
#[derive(Debug)]
pub struct SessionConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
}

impl SessionConfig {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// `host:port` as shown in the title bar
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
