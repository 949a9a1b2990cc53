use dalal::Dalal;
use dalal_core::DalalError;

use crate::helpers::{closes, d, m_hist, sym};

#[tokio::test]
async fn current_price_is_last_close() {
    let dalal = Dalal::builder()
        .with_connector(m_hist("h", Ok(closes(&["1498.0", "1511.3", "1530.0"]))))
        .build()
        .unwrap();

    assert_eq!(dalal.current_price(&sym("INFY.NS")).await.unwrap(), d("1530.0"));
}

#[tokio::test]
async fn empty_history_has_no_current_price() {
    let dalal = Dalal::builder()
        .with_connector(m_hist("h", Ok(Vec::new())))
        .build()
        .unwrap();

    let err = dalal.current_price(&sym("INFY.NS")).await.unwrap_err();
    assert!(matches!(err, DalalError::Data(_)));
}
