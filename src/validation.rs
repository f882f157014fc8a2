//! Input validation for login fields and remote file names.
//!
//! Everything typed into the login form or reported by the server passes
//! through here before it reaches the network or the filesystem.

use std::net::IpAddr;

use regex::Regex;
use std::sync::LazyLock;

/// Validation error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

static DNS_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?$").unwrap());

// Hosted SFTP logins look like `steve.1a2b3c4d` or `steve@panel.example`.
static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+$").unwrap());

/// Validate a hostname (DNS name or IP address).
///
/// # Errors
///
/// Returns `ValidationError` if the hostname is empty, too long, or malformed.
pub fn validate_hostname(hostname: &str) -> Result<(), ValidationError> {
    let hostname = hostname.trim();

    if hostname.is_empty() {
        return Err(ValidationError::new("hostname", "Host is required"));
    }

    if hostname.len() > 253 {
        return Err(ValidationError::new(
            "hostname",
            "Hostname exceeds maximum length of 253 characters",
        ));
    }

    if hostname.parse::<IpAddr>().is_ok() {
        return Ok(());
    }

    for label in hostname.split('.') {
        if label.is_empty() || label.len() > 63 {
            return Err(ValidationError::new(
                "hostname",
                "Hostname labels must be 1-63 characters",
            ));
        }

        if !DNS_LABEL_REGEX.is_match(label) {
            return Err(ValidationError::new(
                "hostname",
                format!(
                    "Invalid hostname label '{}': must start and end with alphanumeric, may contain hyphens",
                    label
                ),
            ));
        }
    }

    Ok(())
}

/// Validate a port number string and parse it.
///
/// # Errors
///
/// Returns `ValidationError` if the port is not a valid number in range 1-65535.
pub fn validate_port(port_str: &str) -> Result<u16, ValidationError> {
    let port_str = port_str.trim();

    if port_str.is_empty() {
        return Err(ValidationError::new("port", "Port is required"));
    }

    match port_str.parse::<u16>() {
        Ok(port) if port >= 1 => Ok(port),
        _ => Err(ValidationError::new(
            "port",
            "Port must be a number (1-65535)",
        )),
    }
}

/// Validate an SFTP username: anything non-empty without whitespace.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::new("username", "Username is required"));
    }

    if !USERNAME_REGEX.is_match(username) {
        return Err(ValidationError::new(
            "username",
            "Username must not contain spaces",
        ));
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::new("password", "Password is required"));
    }
    Ok(())
}

/// Check that a remote file name is a plain name that cannot escape the
/// local mods folder.
pub fn validate_mod_file_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("file", "Empty file name"));
    }
    if name == "." || name == ".." {
        return Err(ValidationError::new(
            "file",
            format!("'{}' is not a file name", name),
        ));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(ValidationError::new(
            "file",
            format!("'{}' contains a path separator", name),
        ));
    }
    if cfg!(windows) && name.contains(':') {
        return Err(ValidationError::new(
            "file",
            format!("'{}' contains a drive separator", name),
        ));
    }
    Ok(())
}
