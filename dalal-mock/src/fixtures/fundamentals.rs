use dalal_core::{
    EarningsReport, QuarterlyEarnings, StatementKind, StatementLine, StatementTable,
    YearlyEarnings,
};

use super::d;

pub fn statement_by_symbol(s: &str, kind: StatementKind) -> Option<StatementTable> {
    if s != "INFY.NS" {
        return None;
    }
    let lines: &[(&str, [&str; 2])] = match kind {
        StatementKind::Income => &[
            ("Total Revenue", ["1536700000000", "1467670000000"]),
            ("Gross Profit", ["465960000000", "445150000000"]),
            ("Operating Income", ["323540000000", "307010000000"]),
            ("Net Income", ["262330000000", "241080000000"]),
        ],
        StatementKind::BalanceSheet => &[
            ("Total Assets", ["1379350000000", "1253160000000"]),
            ("Total Liabilities", ["499360000000", "493820000000"]),
            ("Total Equity", ["879990000000", "759340000000"]),
            ("Cash", ["147860000000", "121730000000"]),
        ],
        StatementKind::Cashflow => &[
            ("Operating Cash Flow", ["252100000000", "229670000000"]),
            ("Capital Expenditures", ["-21010000000", "-25790000000"]),
            ("Free Cash Flow", ["231090000000", "203880000000"]),
        ],
    };
    Some(StatementTable {
        kind,
        periods: vec!["2024-03-31".to_string(), "2023-03-31".to_string()],
        lines: lines
            .iter()
            .map(|(label, vals)| StatementLine {
                label: (*label).to_string(),
                values: vals.iter().map(|v| Some(d(v))).collect(),
            })
            .collect(),
    })
}

pub fn earnings_by_symbol(s: &str) -> Option<EarningsReport> {
    match s {
        "INFY.NS" => Some(EarningsReport {
            yearly: vec![
                yearly(2023, "1467670000000", "241080000000"),
                yearly(2024, "1536700000000", "262330000000"),
            ],
            quarterly: vec![
                quarterly("2024Q1", "379230000000", "79690000000"),
                quarterly("2024Q2", "393150000000", "63680000000"),
            ],
        }),
        _ => None,
    }
}

fn yearly(year: i64, revenue: &str, earnings: &str) -> YearlyEarnings {
    YearlyEarnings {
        year,
        revenue: Some(d(revenue)),
        earnings: Some(d(earnings)),
    }
}

fn quarterly(period: &str, revenue: &str, earnings: &str) -> QuarterlyEarnings {
    QuarterlyEarnings {
        period: period.to_string(),
        revenue: Some(d(revenue)),
        earnings: Some(d(earnings)),
    }
}
