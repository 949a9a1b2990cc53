//! Dalal data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod market;
mod reports;
mod snapshot;
mod summary;
mod symbol;

pub mod error;

pub use capability::Capability;
pub use config::DalalConfig;
pub use connector::ConnectorKey;
pub use error::{DalalError, ErrorKind};
pub use market::{
    Dividend, EarningsReport, FinancialStatements, Headline, HistorySpan, Interval, Lookback,
    PriceChange, PricePoint, QuarterlyEarnings, Recommendation, Split, StatementKind,
    StatementLine, StatementTable, YearlyEarnings,
};
pub use reports::{DetailReport, SummaryReport};
pub use snapshot::{CompanyInfo, TickerSnapshot};
pub use summary::{ABSENT, COLUMNS, SummaryRow, SummaryTable};
pub use symbol::Symbol;
