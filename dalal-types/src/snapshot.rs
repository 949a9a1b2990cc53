//! Point-in-time records returned by providers for a single symbol.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// Snapshot of descriptive and price fields for one symbol.
///
/// Every field is optional: providers routinely omit some of them and callers
/// render absent values with [`crate::ABSENT`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerSnapshot {
    /// Sector classification, e.g. "Technology".
    pub sector: Option<String>,
    /// Industry classification, e.g. "Information Technology Services".
    pub industry: Option<String>,
    /// Previous session close.
    pub previous_close: Option<Decimal>,
    /// Current session open.
    pub open: Option<Decimal>,
    /// Current session high.
    pub day_high: Option<Decimal>,
    /// Current session low.
    pub day_low: Option<Decimal>,
    /// Lowest price over the trailing 52 weeks.
    pub fifty_two_week_low: Option<Decimal>,
    /// Highest price over the trailing 52 weeks.
    pub fifty_two_week_high: Option<Decimal>,
}

impl TickerSnapshot {
    /// True when the provider returned none of the fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Company metadata shown in the detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Symbol the record was fetched for.
    pub symbol: Symbol,
    /// Short display name; absent names mean the ticker is invalid or unavailable.
    pub short_name: Option<String>,
    /// Sector classification.
    pub sector: Option<String>,
    /// Industry classification.
    pub industry: Option<String>,
    /// Listing exchange as reported by the provider.
    pub exchange: Option<String>,
    /// Market capitalisation in the listing currency.
    pub market_cap: Option<Decimal>,
    /// Beta against the provider's benchmark.
    pub beta: Option<Decimal>,
    /// Trailing twelve-month price/earnings ratio.
    pub trailing_pe: Option<Decimal>,
    /// Dividend yield as reported by the provider.
    pub dividend_yield: Option<Decimal>,
    /// Company website.
    pub website: Option<String>,
}

impl CompanyInfo {
    /// An info record with only the symbol populated.
    #[must_use]
    pub const fn empty(symbol: Symbol) -> Self {
        Self {
            symbol,
            short_name: None,
            sector: None,
            industry: None,
            exchange: None,
            market_cap: None,
            beta: None,
            trailing_pe: None,
            dividend_yield: None,
            website: None,
        }
    }

    /// Whether the provider recognised the ticker (it returned a display name).
    #[must_use]
    pub const fn is_recognised(&self) -> bool {
        self.short_name.is_some()
    }
}
