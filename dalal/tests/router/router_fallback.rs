use std::sync::Arc;

use dalal::Dalal;
use dalal_core::{DalalError, ErrorKind};

use crate::helpers::{MockConnector, m_snap, snap, sym};

#[tokio::test]
async fn not_found_falls_through_to_next_connector() {
    let first = m_snap("first", Err(DalalError::not_found("snapshot for INFY.NS")));
    let second = m_snap("second", Ok(snap("Technology", "1500.0")));

    let dalal = Dalal::builder()
        .with_connector(first.clone())
        .with_connector(second.clone())
        .build()
        .unwrap();

    let got = dalal.snapshot(&sym("INFY.NS")).await.unwrap();
    assert_eq!(got.sector.as_deref(), Some("Technology"));
    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 1);
}

#[tokio::test]
async fn first_success_short_circuits() {
    let first = m_snap("first", Ok(snap("Energy", "10")));
    let second = m_snap("second", Ok(snap("Technology", "20")));

    let dalal = Dalal::builder()
        .with_connector(first.clone())
        .with_connector(second.clone())
        .build()
        .unwrap();

    let got = dalal.snapshot(&sym("RELIANCE.NS")).await.unwrap();
    assert_eq!(got.sector.as_deref(), Some("Energy"));
    assert_eq!(second.calls(), 0);
}

#[tokio::test]
async fn all_not_found_collapses_to_labelled_not_found() {
    let dalal = Dalal::builder()
        .with_connector(m_snap("a", Err(DalalError::not_found("x"))))
        .with_connector(m_snap("b", Err(DalalError::not_found("y"))))
        .build()
        .unwrap();

    let err = dalal.snapshot(&sym("NOPE.NS")).await.unwrap_err();
    assert_eq!(err, DalalError::not_found("snapshot for NOPE.NS"));
    assert_eq!(err.kind(), ErrorKind::MissingField);
}

#[tokio::test]
async fn mixed_failures_are_aggregated_and_tagged() {
    let dalal = Dalal::builder()
        .with_connector(m_snap("a", Err(DalalError::Data("bad payload".into()))))
        .with_connector(m_snap("b", Err(DalalError::connector("b", "HTTP 503"))))
        .build()
        .unwrap();

    let err = dalal.snapshot(&sym("INFY.NS")).await.unwrap_err();
    let DalalError::AllProvidersFailed(inner) = &err else {
        panic!("expected aggregate, got {err:?}");
    };
    assert_eq!(inner.len(), 2);
    assert!(matches!(&inner[0], DalalError::Connector { connector, .. } if connector == "a"));
    assert_eq!(err.kind(), ErrorKind::ProviderUnavailable);
}

#[tokio::test]
async fn single_failure_passes_through() {
    let dalal = Dalal::builder()
        .with_connector(m_snap("only", Err(DalalError::connector("only", "rate limited"))))
        .build()
        .unwrap();

    let err = dalal.snapshot(&sym("INFY.NS")).await.unwrap_err();
    assert_eq!(err, DalalError::connector("only", "rate limited"));
}

#[tokio::test]
async fn no_capable_connector_is_unsupported() {
    let dalal = Dalal::builder()
        .with_connector(m_snap("snap-only", Ok(snap("Energy", "1"))))
        .build()
        .unwrap();

    let err = dalal.news(&sym("INFY.NS"), 5).await.unwrap_err();
    assert!(matches!(err, DalalError::Unsupported { .. }));
    assert!(!err.is_actionable());
}

#[test]
fn builder_rejects_invalid_settings() {
    assert!(matches!(
        Dalal::builder().build(),
        Err(DalalError::InvalidArg(_))
    ));
    let c = Arc::new(MockConnector::default());
    assert!(matches!(
        Dalal::builder()
            .with_connector(c.clone())
            .max_concurrency(0)
            .build(),
        Err(DalalError::InvalidArg(_))
    ));
    assert!(matches!(
        Dalal::builder()
            .with_connector(c)
            .provider_timeout(std::time::Duration::ZERO)
            .build(),
        Err(DalalError::InvalidArg(_))
    ));
}
