use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with orchestrator endpoints and keep the labels used in
/// timeouts and not-found messages consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Point-in-time snapshot (sector, industry, prices, ranges).
    Snapshot,
    /// Company metadata for the detail panel.
    CompanyInfo,
    /// Historical closing prices.
    History,
    /// Recent news headlines.
    News,
    /// Fundamentals: income statement.
    IncomeStatement,
    /// Fundamentals: balance sheet.
    BalanceSheet,
    /// Fundamentals: cashflow statement.
    Cashflow,
    /// Corporate actions: dividends.
    Dividends,
    /// Corporate actions: stock splits.
    Splits,
    /// Analysis: analyst recommendations.
    Recommendations,
    /// Fundamentals: yearly and quarterly earnings.
    Earnings,
    /// Batch snapshot fan-out across the registry.
    Summary,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Snapshot => "snapshot",
            Self::CompanyInfo => "company-info",
            Self::History => "history",
            Self::News => "news",
            Self::IncomeStatement => "income-statement",
            Self::BalanceSheet => "balance-sheet",
            Self::Cashflow => "cashflow",
            Self::Dividends => "dividends",
            Self::Splits => "splits",
            Self::Recommendations => "recommendations",
            Self::Earnings => "earnings",
            Self::Summary => "summary",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
