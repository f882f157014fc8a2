use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid credentials file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write config file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Stored password is not valid base64")]
    InvalidPassword,

    #[error("Failed to create config directory: {0}")]
    CreateDir(std::io::Error),
}

/// SFTP-related errors
#[derive(Error, Debug)]
pub enum SftpError {
    #[error("SFTP connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Host key verification failed: {0}")]
    HostKey(String),

    #[error("Listing failed: {0}")]
    Listing(String),

    #[error("Transfer failed: {0}")]
    Transfer(String),

    #[error("Local I/O error: {0}")]
    LocalIo(String),
}

impl From<russh::Error> for SftpError {
    fn from(err: russh::Error) -> Self {
        SftpError::ConnectionFailed(err.to_string())
    }
}

/// Mod listing, download and cleanup errors
#[derive(Error, Debug)]
pub enum SyncError {
    #[error(transparent)]
    Remote(#[from] SftpError),

    #[error("Local mods folder '{path}': {source}")]
    LocalIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Refusing to download '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Background task failed: {0}")]
    Task(String),
}

/// Reasons a batch download cannot start
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("A download is already running")]
    Busy,

    #[error("Nothing to download")]
    Empty,
}
