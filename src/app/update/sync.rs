//! Listing, selection and download message handlers

use iced::Task;

use crate::app::ModSync;
use crate::message::{Message, ModTab, SyncMessage};
use crate::sync::BatchEvent;
use crate::views::toast::Toast;

pub fn handle_sync(app: &mut ModSync, msg: SyncMessage) -> Task<Message> {
    match msg {
        SyncMessage::Refresh => {
            if app.refreshing {
                return Task::none();
            }
            app.refresh()
        }
        SyncMessage::Refreshed(generation, result) => {
            app.apply_refresh(generation, result);
            Task::none()
        }
        SyncMessage::TabSelected(tab) => {
            app.active_tab = tab;
            Task::none()
        }
        SyncMessage::Toggle(tab, name) => {
            match tab {
                ModTab::Comparison => {
                    app.comparison_selection.toggle(&name);
                }
                ModTab::Latest => {
                    app.latest_selection.toggle(&name);
                }
                ModTab::Exceed => {}
            }
            Task::none()
        }
        SyncMessage::ToggleAll(tab) => {
            match tab {
                ModTab::Comparison => app.comparison_selection.toggle_all(),
                ModTab::Latest => app.latest_selection.toggle_all(),
                ModTab::Exceed => {}
            }
            Task::none()
        }
        SyncMessage::Download(kind) => app.start_batch(kind),
        SyncMessage::Batch(event) => handle_batch_event(app, event),
        SyncMessage::DeleteAll => app.delete_all(),
        SyncMessage::Deleted(result) => {
            match result {
                Ok(deleted) => {
                    tracing::info!("Deleted {} local mods", deleted.len());
                    app.toast_manager
                        .push(Toast::success(format!("Deleted {} mods", deleted.len())));
                }
                Err(e) => {
                    tracing::error!("Delete all failed: {}", e);
                    app.toast_manager
                        .push(Toast::error(format!("Delete failed: {}", e)));
                }
            }
            app.refresh()
        }
    }
}

fn handle_batch_event(app: &mut ModSync, event: BatchEvent) -> Task<Message> {
    match event {
        BatchEvent::Progress { progress, outcome } => {
            app.progress = Some(progress);
            if let Some(error) = outcome.error() {
                app.toast_manager
                    .push(Toast::error(format!("{}: {}", outcome.name, error)));
            }
            Task::none()
        }
        BatchEvent::Finished(summary) => {
            app.batch.finishing();
            if summary.failed.is_empty() {
                app.toast_manager.push(Toast::success(format!(
                    "Downloaded {} of {} mods",
                    summary.succeeded, summary.total
                )));
            } else {
                app.toast_manager.push(Toast::warning(format!(
                    "Downloaded {} of {} mods, {} failed",
                    summary.succeeded,
                    summary.total,
                    summary.failed.len()
                )));
            }
            app.refresh()
        }
        BatchEvent::Failed(e) => {
            app.batch.finishing();
            app.toast_manager
                .push(Toast::error(format!("Download failed: {}", e)));
            app.refresh()
        }
    }
}
