//! Dalal builds a NIFTY 50 dashboard on top of pluggable market data providers.
//!
//! Overview
//! - Routes per-ticker requests to connectors implementing the `dalal_core` contracts,
//!   in registration order with per-provider timeouts and fallback.
//! - Builds a batch summary over a ticker registry with bounded concurrency; one
//!   failing symbol never aborts the batch.
//! - Sorts summaries by sector (stable) and exports them as CSV with `N/A` for
//!   missing fields.
//! - Assembles a single-ticker detail report whose sections degrade independently.
//!
//! Examples
//! Building an orchestrator and exporting the NIFTY 50 summary:
//! ```rust,ignore
//! use std::sync::Arc;
//! use dalal::{Dalal, TickerRegistry, export};
//!
//! let dalal = Dalal::builder()
//!     .with_connector(Arc::new(dalal_yfinance::YfConnector::try_new_default()?))
//!     .max_concurrency(8)
//!     .build()?;
//! let registry = TickerRegistry::nifty50();
//! let report = dalal.build_summary(&registry).await;
//! export::export(&report.table.sort_by_sector(), "nifty_50_sorted_by_sector.csv".as_ref())?;
//! ```
//!
//! Single-ticker detail:
//! ```rust,ignore
//! let symbol = Dalal::resolve("Infosys", &registry)?;
//! let detail = dalal.ticker_detail(&symbol).await;
//! if let Some(change) = &detail.todays_change {
//!     println!("{}", dalal::metrics::format_change(change));
//! }
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
pub mod detail;
pub mod export;
pub mod present;
mod router;
pub mod session;
pub mod summary;

pub use core::{Dalal, DalalBuilder};
pub use present::{Dashboard, ExportStatus, Presenter};
pub use router::util::collapse_errors;
pub use session::BatchSession;
pub use summary::SummaryBuilder;

// Re-export core types for convenience
pub use dalal_core::{
    ABSENT, COLUMNS, Capability, CompanyInfo, ConnectorKey, DalalConfig, DalalConnector,
    DalalError, DetailReport, Dividend, EarningsReport, ErrorKind, FinancialStatements, Headline,
    HistorySpan, Interval, Lookback, PriceChange, PricePoint, QuarterlyEarnings, Recommendation,
    RegistryEntry, Split, StatementKind, StatementLine, StatementTable, SummaryReport, SummaryRow,
    SummaryTable, Symbol, TickerRegistry, TickerSnapshot, YearlyEarnings, metrics,
};
