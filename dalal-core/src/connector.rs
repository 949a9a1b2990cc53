use async_trait::async_trait;

pub use dalal_types::ConnectorKey;
use dalal_types::{
    CompanyInfo, DalalError, Dividend, EarningsReport, Headline, HistorySpan, PricePoint,
    Recommendation, Split, StatementTable, Symbol, TickerSnapshot,
};

/// Focused role trait for connectors that provide summary snapshots.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Fetch sector, industry, price and range fields for the given symbol.
    async fn snapshot(&self, symbol: &Symbol) -> Result<TickerSnapshot, DalalError>;
}

/// Focused role trait for connectors that provide company metadata.
#[async_trait]
pub trait CompanyInfoProvider: Send + Sync {
    /// Fetch company metadata for the given symbol.
    async fn company_info(&self, symbol: &Symbol) -> Result<CompanyInfo, DalalError>;
}

/// Focused role trait for connectors that provide closing-price history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch closing prices over `span`, oldest first.
    async fn history(
        &self,
        symbol: &Symbol,
        span: HistorySpan,
    ) -> Result<Vec<PricePoint>, DalalError>;
}

/// Focused role trait for connectors that provide news headlines.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch up to `limit` recent headlines for the given symbol.
    async fn news(&self, symbol: &Symbol, limit: usize) -> Result<Vec<Headline>, DalalError>;
}

// Fundamentals
/// Focused role trait for connectors that provide income statements.
#[async_trait]
pub trait IncomeStatementProvider: Send + Sync {
    /// Fetch the income statement; `quarterly` selects quarterly over annual periods.
    async fn income_statement(
        &self,
        symbol: &Symbol,
        quarterly: bool,
    ) -> Result<StatementTable, DalalError>;
}

/// Focused role trait for connectors that provide balance sheets.
#[async_trait]
pub trait BalanceSheetProvider: Send + Sync {
    /// Fetch the balance sheet; `quarterly` selects quarterly over annual periods.
    async fn balance_sheet(
        &self,
        symbol: &Symbol,
        quarterly: bool,
    ) -> Result<StatementTable, DalalError>;
}

/// Focused role trait for connectors that provide cashflow statements.
#[async_trait]
pub trait CashflowProvider: Send + Sync {
    /// Fetch the cashflow statement; `quarterly` selects quarterly over annual periods.
    async fn cashflow(
        &self,
        symbol: &Symbol,
        quarterly: bool,
    ) -> Result<StatementTable, DalalError>;
}

/// Focused role trait for connectors that provide yearly and quarterly earnings.
#[async_trait]
pub trait EarningsProvider: Send + Sync {
    /// Fetch earnings for the given symbol.
    async fn earnings(&self, symbol: &Symbol) -> Result<EarningsReport, DalalError>;
}

// Corporate actions
/// Focused role trait for connectors that provide dividend history.
#[async_trait]
pub trait DividendsProvider: Send + Sync {
    /// Fetch the full dividend history, oldest first.
    async fn dividends(&self, symbol: &Symbol) -> Result<Vec<Dividend>, DalalError>;
}

/// Focused role trait for connectors that provide split history.
#[async_trait]
pub trait SplitsProvider: Send + Sync {
    /// Fetch the full split history, oldest first.
    async fn splits(&self, symbol: &Symbol) -> Result<Vec<Split>, DalalError>;
}

/// Focused role trait for connectors that provide analyst recommendations.
#[async_trait]
pub trait RecommendationsProvider: Send + Sync {
    /// Fetch recommendation rows, oldest period first.
    async fn recommendations(&self, symbol: &Symbol) -> Result<Vec<Recommendation>, DalalError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait DalalConnector: Send + Sync {
    /// A stable identifier for logs and error tags (e.g., "dalal-yfinance").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise snapshot capability by returning a usable trait object reference when supported.
    fn as_snapshot_provider(&self) -> Option<&dyn SnapshotProvider> {
        None
    }
    /// If implemented, returns a trait object for company metadata.
    fn as_company_info_provider(&self) -> Option<&dyn CompanyInfoProvider> {
        None
    }
    /// If implemented, returns a trait object for price history.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }
    /// If implemented, returns a trait object for news headlines.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }

    /// If implemented, returns a trait object for income statements.
    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        None
    }
    /// If implemented, returns a trait object for balance sheets.
    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        None
    }
    /// If implemented, returns a trait object for cashflow statements.
    fn as_cashflow_provider(&self) -> Option<&dyn CashflowProvider> {
        None
    }
    /// If implemented, returns a trait object for earnings.
    fn as_earnings_provider(&self) -> Option<&dyn EarningsProvider> {
        None
    }

    /// If implemented, returns a trait object for dividends.
    fn as_dividends_provider(&self) -> Option<&dyn DividendsProvider> {
        None
    }
    /// If implemented, returns a trait object for splits.
    fn as_splits_provider(&self) -> Option<&dyn SplitsProvider> {
        None
    }
    /// If implemented, returns a trait object for analyst recommendations.
    fn as_recommendations_provider(&self) -> Option<&dyn RecommendationsProvider> {
        None
    }
}
