pub mod credentials;
pub mod paths;
pub mod session;
pub mod settings;

pub use credentials::StoredCredentials;
pub use session::SessionConfig;
pub use settings::SettingsConfig;

use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `content` to a sibling temp file and rename it over `path`.
pub(crate) fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    write_via_temp(path, content, false)
}

/// Like [`write_atomic`], but the file is readable by the owner only on Unix.
pub(crate) fn write_private(path: &Path, content: &str) -> std::io::Result<()> {
    write_via_temp(path, content, true)
}

fn write_via_temp(path: &Path, content: &str, private: bool) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    // A leftover temp file would keep its old mode, since `mode` only applies on create
    match std::fs::remove_file(&tmp) {
        Ok(()) => tracing::debug!("Removed stale temp file {}", tmp.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    let mut options = std::fs::OpenOptions::new();
    options.create(true).write(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        if private {
            options.mode(0o600);
        }
    }
    #[cfg(not(unix))]
    let _ = private;

    let mut file = options.open(&tmp)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    drop(file);

    std::fs::rename(&tmp, path)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
