mod helpers;

use dalal::{BatchSession, Dalal, TickerRegistry};
use dalal_core::Capability;
use dalal_mock::{DynamicMockConnector, DynamicMockController, MockBehavior};

use helpers::{snap, sym, two_names};

async fn seeded() -> (Dalal, DynamicMockController) {
    seeded_with(true).await
}

async fn seeded_with(reuse: bool) -> (Dalal, DynamicMockController) {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_snapshot_behavior(sym("INFY.NS"), MockBehavior::Return(snap("Technology", "1500")))
        .await;
    ctl.set_snapshot_behavior(sym("WIPRO.NS"), MockBehavior::Return(snap("Technology", "250")))
        .await;
    let dalal = Dalal::builder()
        .with_connector(conn)
        .reuse_batch(reuse)
        .build()
        .unwrap();
    (dalal, ctl)
}

#[tokio::test]
async fn second_request_reuses_batch() {
    let (dalal, ctl) = seeded().await;
    let session = BatchSession::new();
    let registry = two_names();

    let first = session.latest(&dalal, &registry).await;
    let second = session.latest(&dalal, &registry).await;

    assert_eq!(first, second);
    assert_eq!(ctl.total_calls(Capability::Snapshot).await, 2);
}

#[tokio::test]
async fn reuse_disabled_refetches() {
    let (dalal, ctl) = seeded_with(false).await;
    let session = BatchSession::new();
    let registry = two_names();

    session.latest(&dalal, &registry).await;
    session.latest(&dalal, &registry).await;

    assert_eq!(ctl.total_calls(Capability::Snapshot).await, 4);
}

#[tokio::test]
async fn different_registry_refresh_and_clear_refetch() {
    let (dalal, ctl) = seeded().await;
    let session = BatchSession::new();
    let registry = two_names();
    let only_infy = TickerRegistry::from_pairs([("Infosys", "INFY.NS")]).unwrap();

    session.latest(&dalal, &registry).await;
    let narrow = session.latest(&dalal, &only_infy).await;
    assert_eq!(narrow.table.len(), 1);
    assert_eq!(ctl.calls(Capability::Snapshot, &sym("INFY.NS")).await, 2);

    session.refresh(&dalal, &only_infy).await;
    assert_eq!(ctl.calls(Capability::Snapshot, &sym("INFY.NS")).await, 3);

    session.clear().await;
    session.latest(&dalal, &only_infy).await;
    assert_eq!(ctl.calls(Capability::Snapshot, &sym("INFY.NS")).await, 4);
}
