//! Sequential batch downloads with progress reporting.
//!
//! A batch walks its source list one file at a time and reports progress
//! after each file. Only one batch of any kind may be in flight; the app
//! holds a single [`BatchGuard`] for that.

use std::path::PathBuf;

use async_stream::stream;
use futures::Stream;

use crate::error::BatchError;

use super::download::{DownloadOutcome, download_mod};
use super::lister::list_remote_mods;
use super::store::ModStore;

/// Which list a batch downloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    All,
    Latest,
    Selected,
}

impl BatchKind {
    pub fn label(&self) -> &'static str {
        match self {
            BatchKind::All => "all mods",
            BatchKind::Latest => "latest mods",
            BatchKind::Selected => "selected mods",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPhase {
    #[default]
    Idle,
    Running(BatchKind),
    /// Downloads are done; waiting for the refresh that follows
    Finishing(BatchKind),
}

/// Busy flag shared by every batch kind
#[derive(Debug, Default)]
pub struct BatchGuard {
    phase: BatchPhase,
}

impl BatchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> BatchPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase != BatchPhase::Idle
    }

    /// Take the guard for `source`.
    ///
    /// An empty listed source is rejected without taking the guard. A remote
    /// source is only known once the batch runs, so it always starts.
    pub fn try_start(&mut self, kind: BatchKind, source: &BatchSource) -> Result<(), BatchError> {
        if self.is_busy() {
            tracing::warn!(
                "Rejected {} download: {:?} in progress",
                kind.label(),
                self.phase
            );
            return Err(BatchError::Busy);
        }
        if source.is_empty() {
            return Err(BatchError::Empty);
        }
        self.phase = BatchPhase::Running(kind);
        Ok(())
    }

    pub fn finishing(&mut self) {
        if let BatchPhase::Running(kind) = self.phase {
            self.phase = BatchPhase::Finishing(kind);
        }
    }

    pub fn finish(&mut self) {
        self.phase = BatchPhase::Idle;
    }
}

/// Where a batch gets its file names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchSource {
    Listed(Vec<String>),
    /// Fresh remote listing taken when the batch starts
    Remote,
}

impl BatchSource {
    pub fn is_empty(&self) -> bool {
        matches!(self, BatchSource::Listed(names) if names.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    pub completed: usize,
    pub total: usize,
}

impl BatchProgress {
    /// `false` while Download All is still listing the remote folder
    pub fn is_known(&self) -> bool {
        self.total > 0
    }

    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f32 / self.total as f32
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub kind: BatchKind,
    pub total: usize,
    pub succeeded: usize,
    pub failed: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum BatchEvent {
    Progress {
        progress: BatchProgress,
        outcome: DownloadOutcome,
    },
    Finished(BatchSummary),
    /// The source listing could not be fetched; nothing was downloaded
    Failed(String),
}

/// Run a batch, yielding one `Progress` per file followed by `Finished`.
pub fn run_batch<S: ModStore>(
    store: S,
    kind: BatchKind,
    source: BatchSource,
    local_dir: PathBuf,
) -> impl Stream<Item = BatchEvent> + Send + 'static {
    stream! {
        let names = match source {
            BatchSource::Listed(names) => Ok(names),
            BatchSource::Remote => list_remote_mods(&store).await.map_err(|e| e.to_string()),
        };

        match names {
            Err(message) => {
                tracing::error!("Batch of {} aborted: {}", kind.label(), message);
                yield BatchEvent::Failed(message);
            }
            Ok(names) => {
                let total = names.len();
                tracing::info!("Starting download of {} ({} files)", kind.label(), total);

                let mut summary = BatchSummary {
                    kind,
                    total,
                    succeeded: 0,
                    failed: Vec::new(),
                };

                for (index, name) in names.iter().enumerate() {
                    let outcome = download_mod(&store, name, &local_dir).await;
                    if outcome.succeeded() {
                        summary.succeeded += 1;
                    } else {
                        summary.failed.push(name.clone());
                    }
                    let progress = BatchProgress {
                        completed: index + 1,
                        total,
                    };
                    tracing::debug!("Batch progress {}/{}", progress.completed, total);
                    yield BatchEvent::Progress { progress, outcome };
                }

                tracing::info!(
                    "Finished download of {}: {} ok, {} failed",
                    kind.label(),
                    summary.succeeded,
                    summary.failed.len()
                );
                yield BatchEvent::Finished(summary);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::testing::MemoryStore;
    use futures::StreamExt;
    use tempfile::tempdir;

    fn listed(names: &[&str]) -> BatchSource {
        BatchSource::Listed(names.iter().map(|s| s.to_string()).collect())
    }

    async fn collect(
        store: MemoryStore,
        kind: BatchKind,
        source: BatchSource,
        dir: PathBuf,
    ) -> Vec<BatchEvent> {
        run_batch(store, kind, source, dir).collect().await
    }

    #[tokio::test]
    async fn emits_one_progress_per_item_in_order() {
        let dir = tempdir().expect("temp dir");
        let store = MemoryStore::new()
            .with_mod("a.jar", 1)
            .with_mod("b.jar", 2)
            .with_mod("c.jar", 3)
            .with_mod("d.jar", 4);

        let events = collect(
            store.clone(),
            BatchKind::Selected,
            listed(&["c.jar", "a.jar", "d.jar", "b.jar"]),
            dir.path().to_path_buf(),
        )
        .await;

        let fractions: Vec<f32> = events
            .iter()
            .filter_map(|e| match e {
                BatchEvent::Progress { progress, .. } => Some(progress.fraction()),
                _ => None,
            })
            .collect();
        assert_eq!(fractions, vec![0.25, 0.5, 0.75, 1.0]);
        assert_eq!(store.fetched(), vec!["c.jar", "a.jar", "d.jar", "b.jar"]);
        assert!(matches!(
            events.last(),
            Some(BatchEvent::Finished(BatchSummary { succeeded: 4, .. }))
        ));
    }

    #[tokio::test]
    async fn failed_item_does_not_stop_the_batch() {
        let dir = tempdir().expect("temp dir");
        let store = MemoryStore::new()
            .with_mod("a.jar", 1)
            .with_mod("b.jar", 2)
            .failing_fetch("a.jar");

        let events = collect(
            store,
            BatchKind::Latest,
            listed(&["a.jar", "b.jar"]),
            dir.path().to_path_buf(),
        )
        .await;

        assert_eq!(events.len(), 3);
        match &events[2] {
            BatchEvent::Finished(summary) => {
                assert_eq!(summary.succeeded, 1);
                assert_eq!(summary.failed, vec!["a.jar"]);
            }
            other => panic!("expected Finished, got {:?}", other),
        }
        assert!(dir.path().join("b.jar").exists());
    }

    #[tokio::test]
    async fn remote_source_lists_fresh() {
        let dir = tempdir().expect("temp dir");
        let store = MemoryStore::new()
            .with_mod("z.jar", 1)
            .with_mod("a.jar", 2)
            .with_mod("readme.txt", 3);

        let events = collect(
            store.clone(),
            BatchKind::All,
            BatchSource::Remote,
            dir.path().to_path_buf(),
        )
        .await;

        assert_eq!(events.len(), 3);
        assert_eq!(store.fetched(), vec!["a.jar", "z.jar"]);
    }

    #[tokio::test]
    async fn remote_listing_failure_yields_failed() {
        let dir = tempdir().expect("temp dir");
        let store = MemoryStore::new().failing_listing();

        let events = collect(
            store,
            BatchKind::All,
            BatchSource::Remote,
            dir.path().to_path_buf(),
        )
        .await;

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], BatchEvent::Failed(_)));
    }

    #[test]
    fn guard_rejects_second_batch_of_any_kind() {
        let mut guard = BatchGuard::new();
        guard
            .try_start(BatchKind::All, &BatchSource::Remote)
            .expect("first batch starts");

        assert_eq!(
            guard.try_start(BatchKind::All, &BatchSource::Remote),
            Err(BatchError::Busy)
        );
        assert_eq!(
            guard.try_start(BatchKind::Selected, &listed(&["a.jar"])),
            Err(BatchError::Busy)
        );
        assert_eq!(guard.phase(), BatchPhase::Running(BatchKind::All));
    }

    #[test]
    fn guard_stays_busy_while_finishing() {
        let mut guard = BatchGuard::new();
        guard
            .try_start(BatchKind::Latest, &listed(&["a.jar"]))
            .expect("starts");
        guard.finishing();
        assert_eq!(guard.phase(), BatchPhase::Finishing(BatchKind::Latest));
        assert!(guard.is_busy());

        guard.finish();
        assert!(!guard.is_busy());
        assert!(guard.try_start(BatchKind::All, &BatchSource::Remote).is_ok());
    }

    #[test]
    fn empty_source_never_takes_guard() {
        let mut guard = BatchGuard::new();
        assert_eq!(
            guard.try_start(BatchKind::Selected, &listed(&[])),
            Err(BatchError::Empty)
        );
        assert!(!guard.is_busy());
    }

    #[test]
    fn finishing_is_ignored_when_idle() {
        let mut guard = BatchGuard::new();
        guard.finishing();
        assert_eq!(guard.phase(), BatchPhase::Idle);
    }

    #[test]
    fn unknown_total_shows_no_progress() {
        let listing = BatchProgress {
            completed: 0,
            total: 0,
        };
        assert!(!listing.is_known());
        assert_eq!(listing.fraction(), 0.0);

        let first = BatchProgress {
            completed: 1,
            total: 4,
        };
        assert!(first.is_known());
        assert!(listing.fraction() <= first.fraction());
    }
}
