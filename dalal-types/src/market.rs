//! Market data records for the single-ticker detail view.

use core::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DalalError;

/// How far back a history request reaches, using Yahoo-style labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lookback {
    /// One trading day.
    #[serde(rename = "1d")]
    D1,
    /// Five trading days.
    #[serde(rename = "5d")]
    D5,
    /// One month.
    #[default]
    #[serde(rename = "1mo")]
    M1,
    /// Three months.
    #[serde(rename = "3mo")]
    M3,
    /// Six months.
    #[serde(rename = "6mo")]
    M6,
    /// One year.
    #[serde(rename = "1y")]
    Y1,
    /// Five years.
    #[serde(rename = "5y")]
    Y5,
}

impl Lookback {
    /// Calendar span covered by this lookback. Trading-day lookbacks are padded
    /// so that weekends and holidays still yield bars.
    #[must_use]
    pub fn span(self) -> chrono::Duration {
        let days = match self {
            Self::D1 => 1,
            Self::D5 => 7,
            Self::M1 => 31,
            Self::M3 => 92,
            Self::M6 => 183,
            Self::Y1 => 366,
            Self::Y5 => 5 * 366,
        };
        chrono::Duration::days(days)
    }

    /// Provider label, e.g. `"1mo"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
            Self::M6 => "6mo",
            Self::Y1 => "1y",
            Self::Y5 => "5y",
        }
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lookback {
    type Err = DalalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "1d" => Self::D1,
            "5d" => Self::D5,
            "1mo" => Self::M1,
            "3mo" => Self::M3,
            "6mo" => Self::M6,
            "1y" => Self::Y1,
            "5y" => Self::Y5,
            other => {
                return Err(DalalError::InvalidArg(format!("unknown lookback '{other}'")));
            }
        })
    }
}

/// Bar interval for history requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interval {
    /// One minute.
    #[serde(rename = "1m")]
    I1m,
    /// Five minutes.
    #[serde(rename = "5m")]
    I5m,
    /// Fifteen minutes.
    #[serde(rename = "15m")]
    I15m,
    /// One hour.
    #[serde(rename = "1h")]
    I1h,
    /// One day.
    #[default]
    #[serde(rename = "1d")]
    D1,
    /// One week.
    #[serde(rename = "1wk")]
    W1,
    /// One month.
    #[serde(rename = "1mo")]
    M1,
}

impl Interval {
    /// Provider label, e.g. `"1d"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I1m => "1m",
            Self::I5m => "5m",
            Self::I15m => "15m",
            Self::I1h => "1h",
            Self::D1 => "1d",
            Self::W1 => "1wk",
            Self::M1 => "1mo",
        }
    }
}

impl FromStr for Interval {
    type Err = DalalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "1m" => Self::I1m,
            "5m" => Self::I5m,
            "15m" => Self::I15m,
            "1h" => Self::I1h,
            "1d" => Self::D1,
            "1wk" => Self::W1,
            "1mo" => Self::M1,
            other => {
                return Err(DalalError::InvalidArg(format!("unknown interval '{other}'")));
            }
        })
    }
}

/// Lookback plus bar interval for a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HistorySpan {
    /// How far back to reach.
    pub lookback: Lookback,
    /// Bar size.
    pub interval: Interval,
}

impl HistorySpan {
    /// Construct a span from its parts.
    #[must_use]
    pub const fn new(lookback: Lookback, interval: Interval) -> Self {
        Self { lookback, interval }
    }
}

/// A single closing price in a history series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Bar timestamp (UTC).
    pub ts: DateTime<Utc>,
    /// Closing price.
    pub close: Decimal,
}

/// A news headline as listed in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    /// Article title.
    pub title: Option<String>,
    /// Publishing outlet.
    pub publisher: Option<String>,
}

impl Headline {
    /// Title, or `"No Title"` when the provider omitted it.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("No Title")
    }

    /// Publisher, or `"No Publisher"` when the provider omitted it.
    #[must_use]
    pub fn publisher_or_default(&self) -> &str {
        self.publisher.as_deref().unwrap_or("No Publisher")
    }
}

/// Which financial statement a [`StatementTable`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementKind {
    /// Income statement.
    Income,
    /// Balance sheet.
    BalanceSheet,
    /// Cash flow statement.
    Cashflow,
}

impl StatementKind {
    /// Panel title for this statement.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Income => "Income Statement",
            Self::BalanceSheet => "Balance Sheet",
            Self::Cashflow => "Cash Flow",
        }
    }
}

/// One labelled line of a statement, with one value per reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Line item label, e.g. "Total Revenue".
    pub label: String,
    /// Values aligned with [`StatementTable::periods`].
    pub values: Vec<Option<Decimal>>,
}

/// A financial statement laid out as line items by reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementTable {
    /// Which statement this is.
    pub kind: StatementKind,
    /// Period labels, newest first.
    pub periods: Vec<String>,
    /// Line items.
    pub lines: Vec<StatementLine>,
}

impl StatementTable {
    /// An empty table for `kind`.
    #[must_use]
    pub const fn empty(kind: StatementKind) -> Self {
        Self {
            kind,
            periods: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// True when the table has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Value of line `label` for the period at `idx`, if present.
    #[must_use]
    pub fn value(&self, label: &str, idx: usize) -> Option<Decimal> {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .and_then(|l| l.values.get(idx).copied().flatten())
    }
}

/// The three statements shown side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialStatements {
    /// Income statement, if available.
    pub income: Option<StatementTable>,
    /// Balance sheet, if available.
    pub balance_sheet: Option<StatementTable>,
    /// Cash flow statement, if available.
    pub cashflow: Option<StatementTable>,
}

/// A cash dividend event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dividend {
    /// Ex-date timestamp.
    pub ts: DateTime<Utc>,
    /// Amount per share.
    pub amount: Decimal,
}

/// A stock split event, `numerator:denominator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Effective timestamp.
    pub ts: DateTime<Utc>,
    /// New shares.
    pub numerator: u32,
    /// Old shares.
    pub denominator: u32,
}

impl Split {
    /// Split ratio as a decimal (2:1 -> 2).
    #[must_use]
    pub fn ratio(&self) -> Option<Decimal> {
        if self.denominator == 0 {
            return None;
        }
        Some(Decimal::from(self.numerator) / Decimal::from(self.denominator))
    }
}

/// Analyst recommendation counts for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Period label, e.g. "2024-08".
    pub period: String,
    /// Strong buy count.
    pub strong_buy: Option<u64>,
    /// Buy count.
    pub buy: Option<u64>,
    /// Hold count.
    pub hold: Option<u64>,
    /// Sell count.
    pub sell: Option<u64>,
    /// Strong sell count.
    pub strong_sell: Option<u64>,
}

/// Revenue and earnings for a fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyEarnings {
    /// Fiscal year.
    pub year: i64,
    /// Total revenue.
    pub revenue: Option<Decimal>,
    /// Net earnings.
    pub earnings: Option<Decimal>,
}

/// Revenue and earnings for a fiscal quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterlyEarnings {
    /// Quarter label, e.g. "2024Q1".
    pub period: String,
    /// Total revenue.
    pub revenue: Option<Decimal>,
    /// Net earnings.
    pub earnings: Option<Decimal>,
}

/// Yearly and quarterly earnings tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsReport {
    /// Yearly rows, oldest first.
    pub yearly: Vec<YearlyEarnings>,
    /// Quarterly rows, oldest first.
    pub quarterly: Vec<QuarterlyEarnings>,
}

/// Absolute and percentage change between two prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceChange {
    /// `current - base`.
    pub change: Decimal,
    /// `change / base * 100`.
    pub percent: Decimal,
}

impl PriceChange {
    /// Whether the change is negative.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.change.is_sign_negative() && !self.change.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookback_labels_parse_back() {
        for lb in [
            Lookback::D1,
            Lookback::D5,
            Lookback::M1,
            Lookback::M3,
            Lookback::M6,
            Lookback::Y1,
            Lookback::Y5,
        ] {
            assert_eq!(lb.as_str().parse::<Lookback>().unwrap(), lb);
        }
        assert!("2w".parse::<Lookback>().is_err());
    }

    #[test]
    fn default_span_is_one_month_daily() {
        let span = HistorySpan::default();
        assert_eq!(span.lookback, Lookback::M1);
        assert_eq!(span.interval, Interval::D1);
    }

    #[test]
    fn headline_defaults() {
        let h = Headline {
            title: None,
            publisher: Some("Mint".into()),
        };
        assert_eq!(h.title_or_default(), "No Title");
        assert_eq!(h.publisher_or_default(), "Mint");
    }

    #[test]
    fn split_ratio_handles_zero_denominator() {
        let ts = DateTime::<Utc>::from_timestamp(0, 0).unwrap();
        let s = Split {
            ts,
            numerator: 2,
            denominator: 1,
        };
        assert_eq!(s.ratio(), Some(Decimal::from(2)));
        let bad = Split {
            ts,
            numerator: 2,
            denominator: 0,
        };
        assert_eq!(bad.ratio(), None);
    }

    #[test]
    fn statement_value_lookup() {
        let t = StatementTable {
            kind: StatementKind::Income,
            periods: vec!["2024".into(), "2023".into()],
            lines: vec![StatementLine {
                label: "Net Income".into(),
                values: vec![Some(Decimal::from(10)), None],
            }],
        };
        assert_eq!(t.value("Net Income", 0), Some(Decimal::from(10)));
        assert_eq!(t.value("Net Income", 1), None);
        assert_eq!(t.value("Revenue", 0), None);
    }
}
