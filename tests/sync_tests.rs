//! End-to-end sync flows against an in-memory server

mod common;

use common::{FakeServer, TestEnvironment};
use futures::StreamExt;
use modsync::error::BatchError;
use modsync::sync::{
    BatchEvent, BatchGuard, BatchKind, BatchSource, delete_local_mods, list_local_mods,
    list_remote_mods, refresh, run_batch,
};

#[tokio::test]
async fn two_remote_two_local_scenario() {
    let env = TestEnvironment::new().with_local_mods(&["b.jar", "c.jar"]);
    let server = FakeServer::new(&[("a.jar", 100), ("b.jar", 200)]);

    let rec = refresh(&server, &env.local_mods).await.expect("refresh");

    assert_eq!(rec.exceed, vec!["c.jar"]);
    let flags: Vec<(&str, bool)> = rec
        .comparison
        .iter()
        .map(|row| (row.name.as_str(), row.present_locally))
        .collect();
    assert_eq!(flags, vec![("a.jar", false), ("b.jar", true)]);
    assert_eq!(rec.latest_names(), vec!["b.jar", "a.jar"]);
}

#[tokio::test]
async fn unreachable_server_is_an_error_not_an_empty_listing() {
    let env = TestEnvironment::new();
    let server = FakeServer::unreachable();

    assert!(list_remote_mods(&server).await.is_err());
    assert!(refresh(&server, &env.local_mods).await.is_err());
}

#[tokio::test]
async fn download_all_then_refresh_shows_everything_present() {
    let env = TestEnvironment::new().with_local_mods(&["old.jar"]);
    let server = FakeServer::new(&[("a.jar", 1), ("b.jar", 2), ("c.jar", 3)]);

    let events: Vec<BatchEvent> = run_batch(
        server.clone(),
        BatchKind::All,
        BatchSource::Remote,
        env.local_mods.clone(),
    )
    .collect()
    .await;

    let fractions: Vec<f32> = events
        .iter()
        .filter_map(|e| match e {
            BatchEvent::Progress { progress, .. } => Some(progress.fraction()),
            _ => None,
        })
        .collect();
    assert_eq!(fractions.len(), 3);
    assert!(fractions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(fractions.last().copied(), Some(1.0));
    assert_eq!(server.downloads(), vec!["a.jar", "b.jar", "c.jar"]);

    let rec = refresh(&server, &env.local_mods).await.expect("refresh");
    assert_eq!(rec.missing_count(), 0);
    assert_eq!(rec.exceed, vec!["old.jar"]);
}

#[tokio::test]
async fn download_creates_missing_local_folder() {
    let env = TestEnvironment::new();
    let server = FakeServer::new(&[("a.jar", 1)]);
    assert!(!env.local_mods.exists());

    let events: Vec<BatchEvent> = run_batch(
        server,
        BatchKind::Selected,
        BatchSource::Listed(vec!["a.jar".to_string()]),
        env.local_mods.clone(),
    )
    .collect()
    .await;

    assert!(matches!(events.last(), Some(BatchEvent::Finished(s)) if s.succeeded == 1));
    assert_eq!(
        list_local_mods(&env.local_mods).await.expect("listing"),
        vec!["a.jar"]
    );
}

#[test]
fn second_download_all_is_rejected_while_first_runs() {
    let mut guard = BatchGuard::new();
    guard
        .try_start(BatchKind::All, &BatchSource::Remote)
        .expect("first batch");

    assert_eq!(
        guard.try_start(BatchKind::All, &BatchSource::Remote),
        Err(BatchError::Busy)
    );
}

#[tokio::test]
async fn delete_all_leaves_other_files() {
    let env = TestEnvironment::new().with_local_mods(&["a.jar", "b.jar"]);
    std::fs::write(env.local_mods.join("options.txt"), "keep").expect("write");

    let deleted = delete_local_mods(&env.local_mods).await.expect("delete");
    assert_eq!(deleted, vec!["a.jar", "b.jar"]);
    assert!(
        list_local_mods(&env.local_mods)
            .await
            .expect("listing")
            .is_empty()
    );
    assert!(env.local_mods.join("options.txt").exists());
}
