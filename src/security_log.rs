//! Security event logging for audit trails.
//!
//! All security events are logged with `target: "security"` so they can be
//! filtered separately:
//! ```bash
//! RUST_LOG=security=info modsync
//! ```

use tracing::{info, warn};

/// Log an SFTP authentication attempt.
pub fn log_auth_attempt(host: &str, port: u16, username: &str) {
    info!(
        target: "security",
        event = "auth_attempt",
        host = %host,
        port = port,
        username = %username,
        method = "password",
        "SFTP authentication attempt"
    );
}

/// Log a successful SFTP authentication.
pub fn log_auth_success(host: &str, port: u16, username: &str) {
    info!(
        target: "security",
        event = "auth_success",
        host = %host,
        port = port,
        username = %username,
        "SFTP authentication succeeded"
    );
}

/// Log a failed SFTP authentication attempt.
pub fn log_auth_failure(host: &str, port: u16, username: &str, reason: &str) {
    warn!(
        target: "security",
        event = "auth_failure",
        host = %host,
        port = port,
        username = %username,
        reason = %reason,
        "SFTP authentication failed"
    );
}

/// Log a host key learned on first connection.
pub fn log_host_key_learned(host: &str, port: u16, fingerprint: &str) {
    info!(
        target: "security",
        event = "host_key_learned",
        host = %host,
        port = port,
        fingerprint = %fingerprint,
        "Trusting new host key on first use"
    );
}

/// Log a host key that no longer matches the stored one.
pub fn log_host_key_mismatch(host: &str, port: u16, fingerprint: &str, reason: &str) {
    warn!(
        target: "security",
        event = "host_key_mismatch",
        host = %host,
        port = port,
        fingerprint = %fingerprint,
        reason = %reason,
        "Host key rejected"
    );
}

/// Log that credentials were written to disk with reversible encoding.
pub fn log_credentials_stored(host: &str, username: &str) {
    warn!(
        target: "security",
        event = "credentials_stored",
        host = %host,
        username = %username,
        "Remembered password is base64 encoded, not encrypted"
    );
}
