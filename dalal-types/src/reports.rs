//! Report envelopes produced by the orchestrator.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DalalError;
use crate::market::{
    Dividend, EarningsReport, FinancialStatements, Headline, PriceChange, PricePoint,
    Recommendation, Split,
};
use crate::snapshot::{CompanyInfo, TickerSnapshot};
use crate::summary::SummaryTable;
use crate::symbol::Symbol;

/// Result of a batch summary run.
///
/// The table always holds one row per registry entry; symbols whose snapshot
/// failed are listed in `failures` and appear in the table with absent fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Rows in registry order.
    pub table: SummaryTable,
    /// Per-symbol snapshot failures.
    pub failures: Vec<(Symbol, DalalError)>,
    /// When the batch was fetched.
    pub fetched_at: DateTime<Utc>,
}

/// Everything shown for a single ticker.
///
/// Sections that could not be fetched are `None` or empty; actionable causes
/// are collected in `warnings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailReport {
    /// Requested symbol.
    pub symbol: Symbol,
    /// Company metadata.
    pub info: Option<CompanyInfo>,
    /// Price and range fields.
    pub snapshot: Option<TickerSnapshot>,
    /// Most recent close.
    pub current_price: Option<Decimal>,
    /// Change against the previous close.
    pub todays_change: Option<PriceChange>,
    /// Change against the 52-week low.
    pub fifty_two_week_performance: Option<PriceChange>,
    /// Closing prices over the configured span.
    pub history: Vec<PricePoint>,
    /// Recent headlines.
    pub news: Vec<Headline>,
    /// Income, balance sheet and cash flow statements.
    pub statements: FinancialStatements,
    /// Most recent dividends.
    pub dividends: Vec<Dividend>,
    /// Most recent splits.
    pub splits: Vec<Split>,
    /// Most recent analyst recommendations.
    pub recommendations: Vec<Recommendation>,
    /// Yearly and quarterly earnings.
    pub earnings: Option<EarningsReport>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<DalalError>,
}

impl DetailReport {
    /// An empty report for `symbol`.
    #[must_use]
    pub const fn empty(symbol: Symbol) -> Self {
        Self {
            symbol,
            info: None,
            snapshot: None,
            current_price: None,
            todays_change: None,
            fifty_two_week_performance: None,
            history: Vec::new(),
            news: Vec::new(),
            statements: FinancialStatements {
                income: None,
                balance_sheet: None,
                cashflow: None,
            },
            dividends: Vec::new(),
            splits: Vec::new(),
            recommendations: Vec::new(),
            earnings: None,
            warnings: Vec::new(),
        }
    }

    /// Whether the provider recognised the ticker.
    #[must_use]
    pub fn is_recognised(&self) -> bool {
        self.info.as_ref().is_some_and(CompanyInfo::is_recognised)
    }

    /// Neither company info nor a snapshot came back for the symbol.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        !self.is_recognised() && self.snapshot.is_none()
    }
}
