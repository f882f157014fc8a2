//! Local mods folder operations

use std::path::{Path, PathBuf};

use crate::error::SyncError;

use super::MOD_EXTENSION;

/// Local mod file names, sorted lexicographically.
///
/// A folder that does not exist yet is an empty listing.
pub async fn list_local_mods(dir: &Path) -> Result<Vec<String>, SyncError> {
    let dir = dir.to_path_buf();
    tokio::task::spawn_blocking(move || list_local_mods_sync(&dir))
        .await
        .map_err(|e| SyncError::Task(e.to_string()))?
}

pub fn list_local_mods_sync(dir: &Path) -> Result<Vec<String>, SyncError> {
    if !dir.exists() {
        tracing::warn!("Local mods folder {} does not exist", dir.display());
        return Ok(Vec::new());
    }

    let result = read_mod_names(dir).map_err(|e| SyncError::LocalIo {
        path: dir.to_path_buf(),
        source: e,
    });

    match result {
        Ok(mut names) => {
            names.sort();
            tracing::info!("Listed {} local mods", names.len());
            Ok(names)
        }
        Err(e) => {
            tracing::error!("list_local_mods failed: {}", e);
            Err(e)
        }
    }
}

fn read_mod_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(MOD_EXTENSION) {
            names.push(name);
        }
    }
    Ok(names)
}

/// Delete every mod file in `dir`, returning the deleted names.
pub async fn delete_local_mods(dir: &Path) -> Result<Vec<String>, SyncError> {
    let dir = dir.to_path_buf();
    tokio::task::spawn_blocking(move || delete_local_mods_sync(&dir))
        .await
        .map_err(|e| SyncError::Task(e.to_string()))?
}

pub fn delete_local_mods_sync(dir: &Path) -> Result<Vec<String>, SyncError> {
    let names = list_local_mods_sync(dir)?;
    let mut deleted = Vec::with_capacity(names.len());

    for name in names {
        let path: PathBuf = dir.join(&name);
        std::fs::remove_file(&path).map_err(|e| {
            tracing::error!("Failed to delete {}: {}", path.display(), e);
            SyncError::LocalIo {
                path: path.clone(),
                source: e,
            }
        })?;
        tracing::info!("Deleted local mod: {}", name);
        deleted.push(name);
    }

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn lists_only_jar_files_sorted() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("b.jar"), "b").expect("write");
        fs::write(dir.path().join("a.jar"), "a").expect("write");
        fs::write(dir.path().join("options.txt"), "x").expect("write");
        fs::write(dir.path().join("c.jar.disabled"), "c").expect("write");
        fs::create_dir(dir.path().join("folder.jar")).expect("mkdir");

        let names = list_local_mods(dir.path()).await.expect("listing");
        assert_eq!(names, vec!["a.jar", "b.jar"]);
    }

    #[tokio::test]
    async fn missing_folder_is_empty() {
        let dir = tempdir().expect("temp dir");
        let names = list_local_mods(&dir.path().join("nope")).await.expect("listing");
        assert!(names.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn unreadable_path_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let file = dir.path().join("not-a-dir");
        fs::write(&file, "x").expect("write");

        assert!(matches!(
            list_local_mods(&file).await,
            Err(SyncError::LocalIo { .. })
        ));
    }

    #[tokio::test]
    async fn delete_removes_only_mods() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("a.jar"), "a").expect("write");
        fs::write(dir.path().join("b.jar"), "b").expect("write");
        fs::write(dir.path().join("keep.txt"), "k").expect("write");

        let deleted = delete_local_mods(dir.path()).await.expect("delete");
        assert_eq!(deleted, vec!["a.jar", "b.jar"]);
        assert!(!dir.path().join("a.jar").exists());
        assert!(dir.path().join("keep.txt").exists());
    }

    #[tokio::test]
    async fn delete_in_missing_folder_is_noop() {
        let dir = tempdir().expect("temp dir");
        let deleted = delete_local_mods(&dir.path().join("nope")).await.expect("delete");
        assert!(deleted.is_empty());
    }
}
