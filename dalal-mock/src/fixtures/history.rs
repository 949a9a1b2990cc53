use dalal_core::PricePoint;

use super::{d, day};

pub fn by_symbol(s: &str) -> Option<Vec<PricePoint>> {
    match s {
        "INFY.NS" => Some(build(&[
            ("2024-08-26", "1498.0"),
            ("2024-08-27", "1502.5"),
            ("2024-08-28", "1511.3"),
            ("2024-08-29", "1500.0"),
            ("2024-08-30", "1530.0"),
        ])),
        "WIPRO.NS" => Some(build(&[
            ("2024-08-26", "246.2"),
            ("2024-08-27", "248.0"),
            ("2024-08-28", "251.7"),
            ("2024-08-29", "250.0"),
            ("2024-08-30", "252.4"),
        ])),
        "TCS.NS" => Some(build(&[
            ("2024-08-29", "3420.5"),
            ("2024-08-30", "3444.0"),
        ])),
        "HDFCBANK.NS" => Some(build(&[
            ("2024-08-29", "1702.3"),
            ("2024-08-30", "1689.9"),
        ])),
        "RELIANCE.NS" => Some(build(&[
            ("2024-08-29", "1390.1"),
            ("2024-08-30", "1399.6"),
        ])),
        _ => None,
    }
}

fn build(rows: &[(&str, &str)]) -> Vec<PricePoint> {
    rows.iter()
        .map(|(ts, close)| PricePoint {
            ts: day(ts),
            close: d(close),
        })
        .collect()
}
