//! Mod listing, reconciliation and downloads

pub mod batch;
pub mod download;
pub mod lister;
pub mod local;
pub mod reconcile;
pub mod selection;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use batch::{
    BatchEvent, BatchGuard, BatchKind, BatchPhase, BatchProgress, BatchSource, BatchSummary,
    run_batch,
};
pub use download::{DownloadOutcome, download_mod};
pub use lister::{ModTimestamp, list_remote_mod_timestamps, list_remote_mods};
pub use local::{delete_local_mods, list_local_mods};
pub use reconcile::{ComparisonRow, Reconciliation, reconcile};
pub use selection::Selection;
pub use store::{ModStore, SftpModStore};

/// File suffix that marks a mod (case-sensitive)
pub const MOD_EXTENSION: &str = ".jar";

/// Size of the "Latest Mods" view
pub const LATEST_LIMIT: usize = 10;

/// Fetch both listings and reconcile them
pub async fn refresh<S: ModStore>(
    store: &S,
    local_dir: &std::path::Path,
) -> Result<Reconciliation, crate::error::SyncError> {
    let remote = list_remote_mod_timestamps(store).await?;
    let local = list_local_mods(local_dir).await?;
    Ok(reconcile(&remote, &local))
}
