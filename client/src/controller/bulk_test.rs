use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Barrier;

use super::*;
use crate::controller::mock_api::{MockApi, ann_and_bo, rejected};

fn outcomes(successes: usize, total: usize) -> Vec<Result<(), ApiError>> {
    (0..total)
        .map(|i| if i < successes { Ok(()) } else { Err(rejected("User already exists")) })
        .collect()
}

fn batch_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Test Player {i}")).collect()
}

// =========================================================================
// BatchReport
// =========================================================================

#[test]
fn batch_report_counts() {
    let report = BatchReport::default()
        .record("A".into(), Ok(Player { id: "1".into(), name: "A".into(), points: 0, rank: 0 }))
        .record("B".into(), Err(ApiError::Unreachable("x".into())));
    assert_eq!(report.requested(), 2);
    assert_eq!(report.success_count(), 1);
    assert_eq!(report.failures[0].name, "B");
}

// =========================================================================
// create_batch aggregation
// =========================================================================

#[tokio::test]
async fn every_k_of_ten_aggregates_once_and_refreshes_iff_any_succeeded() {
    for k in 0..=GENERATE_BATCH_SIZE {
        let api = Arc::new(MockApi::new().with_creates(outcomes(k, GENERATE_BATCH_SIZE)));
        let ctrl = Controller::new(api.clone());

        let report = ctrl.create_batch(batch_names(GENERATE_BATCH_SIZE)).await;

        assert_eq!(report.success_count(), k, "k={k}");
        assert_eq!(report.requested(), GENERATE_BATCH_SIZE, "k={k}");
        assert_eq!(api.count("create:"), GENERATE_BATCH_SIZE, "k={k}");
        assert_eq!(api.count("list"), usize::from(k > 0), "k={k}");

        let expected = if k == 0 {
            messages::batch_failed(GENERATE_BATCH_SIZE)
        } else {
            messages::batch_created(k, GENERATE_BATCH_SIZE)
        };
        let state = ctrl.snapshot();
        assert_eq!(state.notification.message(), Some(expected.as_str()), "k={k}");
        assert!(!state.list.loading(), "k={k}");
    }
}

#[tokio::test]
async fn failures_do_not_stop_later_requests() {
    let mut scripted = outcomes(0, 3);
    scripted.push(Ok(()));
    let api = Arc::new(MockApi::new().with_creates(scripted));
    let ctrl = Controller::new(api.clone());

    let report = ctrl.create_batch(batch_names(4)).await;

    assert_eq!(report.success_count(), 1);
    assert_eq!(report.created[0].name, "Test Player 3");
    assert_eq!(report.failures.len(), 3);
}

#[tokio::test]
async fn all_requests_are_in_flight_together() {
    // Each create waits on a barrier sized to the whole batch; a sequential
    // implementation would never get past the first request.
    let api = Arc::new(MockApi::new().with_create_barrier(Arc::new(Barrier::new(GENERATE_BATCH_SIZE))));
    let ctrl = Controller::new(api.clone());

    let report = tokio::time::timeout(Duration::from_secs(5), ctrl.create_batch(batch_names(GENERATE_BATCH_SIZE)))
        .await
        .expect("batch requests were not issued concurrently");

    assert_eq!(report.success_count(), GENERATE_BATCH_SIZE);
}

#[tokio::test]
async fn refresh_resolving_mid_batch_keeps_loading() {
    // The test task is the extra party, so creates stay parked until it joins.
    let barrier = Arc::new(Barrier::new(GENERATE_BATCH_SIZE + 1));
    let api = Arc::new(MockApi::new().with_players(ann_and_bo()).with_create_barrier(barrier.clone()));
    let ctrl = Controller::new(api.clone());

    let batch = {
        let ctrl = ctrl.clone();
        tokio::spawn(async move { ctrl.create_batch(batch_names(GENERATE_BATCH_SIZE)).await })
    };
    while api.count("create:") < GENERATE_BATCH_SIZE {
        tokio::task::yield_now().await;
    }

    ctrl.refresh().await;
    assert!(ctrl.snapshot().list.loading(), "loading cleared while creates were still in flight");

    barrier.wait().await;
    let report = batch.await.unwrap();

    assert_eq!(report.success_count(), GENERATE_BATCH_SIZE);
    assert!(!ctrl.snapshot().list.loading());
}

#[tokio::test]
async fn successful_batch_refreshes_list() {
    let api = Arc::new(MockApi::new().with_players(ann_and_bo()));
    let ctrl = Controller::new(api.clone());

    ctrl.create_batch(batch_names(2)).await;

    let state = ctrl.snapshot();
    assert_eq!(state.list.players, ann_and_bo());
    assert_eq!(state.selection.player_id(), Some("a"));
}

#[tokio::test]
async fn empty_batch_does_nothing() {
    let api = Arc::new(MockApi::new());
    let ctrl = Controller::new(api.clone());

    let report = ctrl.create_batch(Vec::new()).await;

    assert_eq!(report, BatchReport::default());
    assert!(api.calls().is_empty());
    assert_eq!(ctrl.snapshot().notification.message(), None);
}

#[tokio::test]
async fn batch_after_shutdown_issues_nothing() {
    let api = Arc::new(MockApi::new());
    let ctrl = Controller::new(api.clone());
    ctrl.shutdown();

    ctrl.create_batch(batch_names(3)).await;

    assert!(api.calls().is_empty());
}

// =========================================================================
// generate_players
// =========================================================================

#[tokio::test]
async fn generate_test_players_sends_standard_batch() {
    let api = Arc::new(MockApi::new());
    let ctrl = Controller::new(api.clone());

    let report = ctrl.generate_test_players().await;

    assert_eq!(report.requested(), GENERATE_BATCH_SIZE);
    assert_eq!(api.count("create:"), GENERATE_BATCH_SIZE);
    for call in api.calls().iter().filter(|c| c.starts_with("create:")) {
        let name = call.trim_start_matches("create:");
        let (adjective, noun) = name.split_once(' ').unwrap();
        assert!(names::ADJECTIVES.contains(&adjective));
        assert!(names::NOUNS.contains(&noun));
    }
}

#[tokio::test]
async fn generate_players_honours_count() {
    let api = Arc::new(MockApi::new());
    let ctrl = Controller::new(api.clone());

    let report = ctrl.generate_players(3).await;

    assert_eq!(report.requested(), 3);
}
