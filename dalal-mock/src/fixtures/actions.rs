use dalal_core::{Dividend, Split};

use super::{d, day};

pub fn dividends_by_symbol(s: &str) -> Vec<Dividend> {
    match s {
        "INFY.NS" => [
            ("2019-10-22", "8.0"),
            ("2020-06-01", "9.5"),
            ("2020-10-26", "12.0"),
            ("2021-05-31", "15.0"),
            ("2021-10-26", "15.0"),
            ("2022-05-31", "16.0"),
            ("2022-10-27", "16.5"),
            ("2023-06-01", "17.5"),
            ("2023-10-25", "18.0"),
            ("2024-05-31", "28.0"),
            ("2024-10-29", "21.0"),
        ]
        .iter()
        .map(|(ts, amt)| Dividend {
            ts: day(ts),
            amount: d(amt),
        })
        .collect(),
        "WIPRO.NS" => vec![Dividend {
            ts: day("2024-01-24"),
            amount: d("1.0"),
        }],
        _ => vec![],
    }
}

pub fn splits_by_symbol(s: &str) -> Vec<Split> {
    match s {
        "INFY.NS" => vec![
            split("2015-06-15", 2, 1),
            split("2018-09-04", 2, 1),
        ],
        "WIPRO.NS" => vec![split("2019-03-06", 4, 3), split("2024-12-03", 2, 1)],
        _ => vec![],
    }
}

fn split(ts: &str, numerator: u32, denominator: u32) -> Split {
    Split {
        ts: day(ts),
        numerator,
        denominator,
    }
}
