#![allow(dead_code)]
#![allow(unused_imports)]

// Re-export helpers so tests can `use helpers::*;`
pub mod mock_connector;

pub use mock_connector::{MockConnector, m_hist, m_snap};

use dalal_core::{PricePoint, Symbol, TickerRegistry, TickerSnapshot};
use rust_decimal::Decimal;

/// Parse a decimal literal in tests.
pub fn d(s: &str) -> Decimal {
    s.parse().expect("valid decimal literal")
}

/// Construct a `Symbol` for test usage with infallible expectations.
pub fn sym(s: &str) -> Symbol {
    Symbol::new(s).expect("valid static test symbol")
}

/// Small registry used by batch tests.
pub fn two_names() -> TickerRegistry {
    TickerRegistry::from_pairs([("Infosys", "INFY.NS"), ("Wipro", "WIPRO.NS")])
        .expect("valid fixture registry")
}

/// Snapshot with a sector and a previous close.
pub fn snap(sector: &str, prev: &str) -> TickerSnapshot {
    TickerSnapshot {
        sector: Some(sector.to_string()),
        previous_close: Some(d(prev)),
        ..TickerSnapshot::default()
    }
}

/// Daily closes starting at a fixed date.
pub fn closes(values: &[&str]) -> Vec<PricePoint> {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 8, 26)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
        .and_utc();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| PricePoint {
            ts: start + chrono::Duration::days(i64::try_from(i).expect("small index")),
            close: d(v),
        })
        .collect()
}
