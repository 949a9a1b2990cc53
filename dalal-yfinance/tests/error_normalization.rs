#![cfg(feature = "test-adapters")]

use std::sync::Arc;

use dalal_core::{DalalError, Symbol, connector::HistoryProvider};
use dalal_core::{HistorySpan, Interval, Lookback};
use dalal_yfinance::{YfConnector, adapter::FakeApi};

fn failing(msg: &'static str) -> YfConnector {
    let api = FakeApi::new().history(move |_, _| Err(DalalError::connector("yfinance", msg)));
    YfConnector::from_api(Arc::new(api))
}

async fn history_err(yf: &YfConnector) -> DalalError {
    yf.history(
        &Symbol::new("ZZZ.NS").unwrap(),
        HistorySpan::new(Lookback::M1, Interval::D1),
    )
    .await
    .unwrap_err()
}

#[tokio::test]
async fn not_found_messages_become_not_found() {
    let err = history_err(&failing("No data found, symbol may be delisted")).await;
    assert!(matches!(err, DalalError::NotFound { .. }));
    assert!(!err.is_actionable());
}

#[tokio::test]
async fn other_failures_are_tagged_with_connector_name() {
    let err = history_err(&failing("rate limit: history")).await;
    match err {
        DalalError::Connector { connector, msg } => {
            assert_eq!(connector, "dalal-yfinance");
            assert!(msg.contains("rate limit"));
        }
        other => panic!("expected connector error, got {other:?}"),
    }
}

#[tokio::test]
async fn unsupported_endpoint_passes_through() {
    let yf = YfConnector::from_api(Arc::new(FakeApi::new()));
    let err = history_err(&yf).await;
    assert!(matches!(err, DalalError::Unsupported { .. }));
}

#[test]
fn capabilities_are_all_advertised() {
    use dalal_core::DalalConnector;

    let yf = failing("unused");
    assert_eq!(yf.name(), "dalal-yfinance");
    assert_eq!(yf.key(), YfConnector::KEY);
    assert_eq!(yf.vendor(), "Yahoo Finance");
    assert!(yf.as_snapshot_provider().is_some());
    assert!(yf.as_company_info_provider().is_some());
    assert!(yf.as_history_provider().is_some());
    assert!(yf.as_news_provider().is_some());
    assert!(yf.as_income_statement_provider().is_some());
    assert!(yf.as_balance_sheet_provider().is_some());
    assert!(yf.as_cashflow_provider().is_some());
    assert!(yf.as_earnings_provider().is_some());
    assert!(yf.as_dividends_provider().is_some());
    assert!(yf.as_splits_provider().is_some());
    assert!(yf.as_recommendations_provider().is_some());
}
