use std::sync::Arc;
use std::time::Duration;

use dalal::Dalal;
use dalal_core::DalalError;

use crate::helpers::{MockConnector, snap, sym};

#[tokio::test(start_paused = true)]
async fn slow_provider_times_out_and_fallback_answers() {
    let slow = Arc::new(MockConnector {
        name: "slow",
        delay_ms: 500,
        snapshot_fn: Some(Arc::new(|_| Ok(snap("Energy", "1")))),
        ..Default::default()
    });
    let fast = Arc::new(MockConnector {
        name: "fast",
        snapshot_fn: Some(Arc::new(|_| Ok(snap("Technology", "2")))),
        ..Default::default()
    });

    let dalal = Dalal::builder()
        .with_connector(slow)
        .with_connector(fast)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let got = dalal.snapshot(&sym("INFY.NS")).await.unwrap();
    assert_eq!(got.sector.as_deref(), Some("Technology"));
}

#[tokio::test(start_paused = true)]
async fn lone_slow_provider_reports_provider_timeout() {
    let slow = Arc::new(MockConnector {
        name: "slow",
        delay_ms: 500,
        snapshot_fn: Some(Arc::new(|_| Ok(snap("Energy", "1")))),
        ..Default::default()
    });

    let dalal = Dalal::builder()
        .with_connector(slow)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = dalal.snapshot(&sym("INFY.NS")).await.unwrap_err();
    assert_eq!(err, DalalError::provider_timeout("slow", "snapshot"));
}
