use std::sync::Arc;

use iced::Task;

use crate::config::SessionConfig;
use crate::error::BatchError;
use crate::message::{LoginMessage, Message, ModTab, SyncMessage};
use crate::sync::{
    self, BatchKind, BatchPhase, BatchProgress, BatchSource, Reconciliation, SftpModStore, delete_local_mods,
    run_batch,
};
use crate::views::toast::Toast;

use super::{ModSync, Screen};

impl ModSync {
    fn store(&self) -> Option<SftpModStore> {
        self.session
            .as_ref()
            .map(|session| SftpModStore::new(Arc::clone(session), &self.settings))
    }

    /// Test the connection for `session`; the result arrives as `LoginMessage::Connected`
    pub(super) fn connect(&mut self, session: Arc<SessionConfig>, remember: bool) -> Task<Message> {
        self.login.connecting = true;
        self.login.error = None;
        tracing::info!("Logging in to {}", session.address());

        let store = SftpModStore::new(Arc::clone(&session), &self.settings);
        Task::perform(
            async move {
                let result = store.test_connection().await.map_err(|e| e.to_string());
                (session, result)
            },
            move |(session, result)| {
                Message::Login(LoginMessage::Connected {
                    session,
                    remember,
                    result,
                })
            },
        )
    }

    /// Re-list both folders; the result arrives as `SyncMessage::Refreshed`
    pub(super) fn refresh(&mut self) -> Task<Message> {
        let Some(store) = self.store() else {
            return Task::none();
        };
        self.refreshing = true;
        self.refresh_generation += 1;
        let generation = self.refresh_generation;
        let local_dir = self.settings.local_mods_dir();

        Task::perform(
            async move {
                sync::refresh(&store, &local_dir)
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| Message::Sync(SyncMessage::Refreshed(generation, result)),
        )
    }

    /// Apply a listing result unless a newer refresh has been issued since
    pub(super) fn apply_refresh(
        &mut self,
        generation: u64,
        result: Result<Reconciliation, String>,
    ) {
        if generation != self.refresh_generation {
            tracing::debug!(
                "Dropping refresh {} superseded by {}",
                generation,
                self.refresh_generation
            );
            return;
        }
        self.refreshing = false;
        match result {
            Ok(reconciliation) => {
                tracing::info!(
                    "Refreshed: {} remote, {} missing locally, {} extra",
                    reconciliation.comparison.len(),
                    reconciliation.missing_count(),
                    reconciliation.exceed.len()
                );
                self.reconciliation = reconciliation;
            }
            Err(e) => {
                tracing::error!("Refresh failed: {}", e);
                self.reconciliation = Reconciliation::default();
                self.toast_manager
                    .push(Toast::error(format!("Failed to list mods: {}", e)));
            }
        }

        self.comparison_selection
            .reset(self.reconciliation.comparison_names());
        self.latest_selection
            .reset(self.reconciliation.latest_names());

        // A finishing batch stays busy until the refresh it triggered (or a later one) lands
        if let BatchPhase::Finishing(kind) = self.batch.phase() {
            tracing::info!("Download of {} complete", kind.label());
            self.batch.finish();
            self.progress = None;
        }
    }

    fn batch_source(&self, kind: BatchKind) -> BatchSource {
        match kind {
            BatchKind::All => BatchSource::Remote,
            BatchKind::Latest => BatchSource::Listed(self.reconciliation.latest_names()),
            BatchKind::Selected => {
                let selected = match self.active_tab {
                    ModTab::Comparison => self.comparison_selection.selected().to_vec(),
                    ModTab::Latest => self.latest_selection.selected().to_vec(),
                    ModTab::Exceed => Vec::new(),
                };
                BatchSource::Listed(selected)
            }
        }
    }

    /// Start a batch download unless one is already in flight
    pub(super) fn start_batch(&mut self, kind: BatchKind) -> Task<Message> {
        let Some(store) = self.store() else {
            return Task::none();
        };
        let source = self.batch_source(kind);

        match self.batch.try_start(kind, &source) {
            Ok(()) => {}
            Err(BatchError::Busy) => {
                self.toast_manager
                    .push(Toast::warning("A download is already running"));
                return Task::none();
            }
            Err(BatchError::Empty) => {
                tracing::debug!("Nothing to download for {}", kind.label());
                if kind == BatchKind::Selected {
                    self.toast_manager.push(Toast::warning("No mods selected"));
                }
                return Task::none();
            }
        }

        let total = match &source {
            BatchSource::Listed(names) => names.len(),
            BatchSource::Remote => 0,
        };
        self.progress = Some(BatchProgress {
            completed: 0,
            total,
        });

        Task::run(
            run_batch(store, kind, source, self.settings.local_mods_dir()),
            |event| Message::Sync(SyncMessage::Batch(event)),
        )
    }

    pub(super) fn delete_all(&mut self) -> Task<Message> {
        if self.batch.is_busy() {
            self.toast_manager
                .push(Toast::warning("Wait for the download to finish"));
            return Task::none();
        }
        let local_dir = self.settings.local_mods_dir();
        Task::perform(
            async move { delete_local_mods(&local_dir).await.map_err(|e| e.to_string()) },
            |result| Message::Sync(SyncMessage::Deleted(result)),
        )
    }

    /// Drop the session and go back to the login form
    pub(super) fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!("Logged out of {}", session.address());
        }
        self.screen = Screen::Login;
        self.login.clear_password();
        self.login.connecting = false;
        self.reconciliation = Reconciliation::default();
        self.comparison_selection.reset(Vec::new());
        self.latest_selection.reset(Vec::new());
        self.active_tab = ModTab::Comparison;
        self.progress = None;
    }
}
