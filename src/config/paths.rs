use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "modsync", "modsync")
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// Get the path to the settings file
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.toml"))
}

/// Get the path to the remembered credentials file
pub fn credentials_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("credentials.json"))
}

/// Get the path to the known_hosts file
pub fn known_hosts_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("known_hosts"))
}

/// Ensure the config directory exists with proper permissions
pub fn ensure_config_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine config directory",
        )
    })?;

    create_private_dir(&dir)?;
    Ok(dir)
}

/// Get the log directory path
pub fn log_dir() -> Option<PathBuf> {
    if let Ok(raw) = std::env::var("MODSYNC_LOG_DIR") {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        return Some(PathBuf::from(trimmed));
    }

    config_dir().map(|d| d.join("logs"))
}

/// Ensure the log directory exists with proper permissions
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    if std::env::var_os("MODSYNC_LOG_DIR").is_none() {
        ensure_config_dir()?;
    }

    let dir = log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine log directory",
        )
    })?;

    create_private_dir(&dir)?;
    Ok(dir)
}

fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
        // Owner-only access on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(dir, std::fs::Permissions::from_mode(0o700))?;
        }
    }
    Ok(())
}

/// Default location of the local Minecraft mods folder.
///
/// Windows launchers keep `.minecraft` under `%APPDATA%`; elsewhere the
/// vanilla launcher's per-platform location is used.
pub fn default_local_mods_dir() -> Option<PathBuf> {
    if let Some(appdata) = std::env::var_os("APPDATA") {
        return Some(minecraft_mods_under_appdata(Path::new(&appdata)));
    }

    let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())?;
    if cfg!(target_os = "macos") {
        Some(
            home.join("Library")
                .join("Application Support")
                .join("minecraft")
                .join("mods"),
        )
    } else {
        Some(home.join(".minecraft").join("mods"))
    }
}

fn minecraft_mods_under_appdata(appdata: &Path) -> PathBuf {
    appdata.join(".minecraft").join("mods")
}
