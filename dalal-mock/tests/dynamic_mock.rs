use std::time::Duration;

use dalal_core::{Capability, DalalError, HistorySpan, Symbol, TickerSnapshot};
use dalal_mock::{DynamicMockConnector, MockBehavior, MockConnector};
use dalal_core::DalalConnector;

fn sym(s: &str) -> Symbol {
    Symbol::new(s).expect("valid symbol")
}

#[tokio::test]
async fn test_mock_snapshot_return() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    let s = sym("INFY.NS");
    let snap = TickerSnapshot {
        sector: Some("Technology".into()),
        ..TickerSnapshot::default()
    };
    controller
        .set_snapshot_behavior(s.clone(), MockBehavior::Return(snap.clone()))
        .await;

    let sp = mock.as_snapshot_provider().expect("snapshot provider");
    let got = sp.snapshot(&s).await.expect("snapshot ok");
    assert_eq!(got, snap);
    assert_eq!(controller.calls(Capability::Snapshot, &s).await, 1);
}

#[tokio::test]
async fn test_mock_snapshot_fail() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    let s = sym("WIPRO.NS");
    let err = DalalError::connector("P0", "boom");
    controller
        .set_snapshot_behavior(s.clone(), MockBehavior::Fail(err.clone()))
        .await;

    let sp = mock.as_snapshot_provider().expect("snapshot provider");
    let got = sp.snapshot(&s).await.expect_err("err");
    assert_eq!(got, err);
}

#[tokio::test]
async fn test_mock_hang_never_resolves() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    let s = sym("WIPRO.NS");
    controller
        .set_history_behavior(s.clone(), MockBehavior::Hang)
        .await;

    let hp = mock.as_history_provider().expect("history provider");
    let res = tokio::time::timeout(
        Duration::from_millis(20),
        hp.history(&s, HistorySpan::default()),
    )
    .await;
    assert!(res.is_err(), "hang should not complete");
}

#[tokio::test]
async fn test_unconfigured_symbol_is_unsupported_and_counted() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    let s = sym("TCS.NS");
    let sp = mock.as_snapshot_provider().expect("snapshot provider");
    let err = sp.snapshot(&s).await.expect_err("unconfigured");
    assert!(matches!(err, DalalError::Unsupported { .. }));
    let _ = sp.snapshot(&s).await;
    assert_eq!(controller.total_calls(Capability::Snapshot).await, 2);

    controller.clear_all_behaviors().await;
    assert_eq!(controller.total_calls(Capability::Snapshot).await, 0);
}

#[tokio::test]
async fn test_static_mock_fixtures_and_forced_failure() {
    let mock = MockConnector::new();
    let sp = mock.as_snapshot_provider().expect("snapshot provider");

    let infy = sp.snapshot(&sym("INFY.NS")).await.expect("fixture");
    assert_eq!(infy.sector.as_deref(), Some("Technology"));
    assert_eq!(infy.previous_close, Some("1500.0".parse().unwrap()));

    let err = sp.snapshot(&sym("FAIL")).await.expect_err("forced failure");
    assert!(matches!(err, DalalError::Connector { .. }));

    let err = sp.snapshot(&sym("NOPE.NS")).await.expect_err("missing fixture");
    assert!(matches!(err, DalalError::NotFound { .. }));
}

#[tokio::test]
async fn test_static_mock_news_respects_limit() {
    let mock = MockConnector::new();
    let np = mock.as_news_provider().expect("news provider");
    let items = np.news(&sym("INFY.NS"), 5).await.expect("news");
    assert_eq!(items.len(), 5);
    assert_eq!(items[2].publisher_or_default(), "No Publisher");
    assert_eq!(items[3].title_or_default(), "No Title");
}
