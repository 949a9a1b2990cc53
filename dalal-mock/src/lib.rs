//! Deterministic connectors for tests and offline demos.
//!
//! [`MockConnector`] serves static fixtures for a handful of NIFTY symbols.
//! The symbols `FAIL` and `TIMEOUT` force a connector error and a slow reply.
//! [`DynamicMockConnector`] defers every answer to a test-side controller.

use std::time::Duration;

use async_trait::async_trait;
use dalal_core::connector::{
    BalanceSheetProvider, CashflowProvider, CompanyInfoProvider, DalalConnector,
    DividendsProvider, EarningsProvider, HistoryProvider, IncomeStatementProvider, NewsProvider,
    RecommendationsProvider, SnapshotProvider, SplitsProvider,
};
use dalal_core::{
    CompanyInfo, DalalError, Dividend, EarningsReport, Headline, HistorySpan, PricePoint,
    Recommendation, Split, StatementKind, StatementTable, Symbol, TickerSnapshot,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// How long the `TIMEOUT` symbol stalls before answering.
pub const TIMEOUT_DELAY: Duration = Duration::from_millis(200);

/// Mock connector for CI-safe runs. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> DalalError {
        DalalError::not_found(what.to_string())
    }

    async fn maybe_fail_or_timeout(symbol: &Symbol, capability: &str) -> Result<(), DalalError> {
        match symbol.as_str() {
            "FAIL" => Err(DalalError::connector(
                "dalal-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // orchestrator may time out depending on config
                tokio::time::sleep(TIMEOUT_DELAY).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    async fn statement(
        symbol: &Symbol,
        kind: StatementKind,
        capability: &str,
    ) -> Result<StatementTable, DalalError> {
        Self::maybe_fail_or_timeout(symbol, capability).await?;
        fixtures::fundamentals::statement_by_symbol(symbol.as_str(), kind)
            .ok_or_else(|| Self::not_found(&format!("{capability} for {symbol}")))
    }
}

impl DalalConnector for MockConnector {
    fn name(&self) -> &'static str {
        "dalal-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_snapshot_provider(&self) -> Option<&dyn SnapshotProvider> {
        Some(self as &dyn SnapshotProvider)
    }
    fn as_company_info_provider(&self) -> Option<&dyn CompanyInfoProvider> {
        Some(self as &dyn CompanyInfoProvider)
    }
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        Some(self as &dyn IncomeStatementProvider)
    }
    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        Some(self as &dyn BalanceSheetProvider)
    }
    fn as_cashflow_provider(&self) -> Option<&dyn CashflowProvider> {
        Some(self as &dyn CashflowProvider)
    }
    fn as_earnings_provider(&self) -> Option<&dyn EarningsProvider> {
        Some(self as &dyn EarningsProvider)
    }
    fn as_dividends_provider(&self) -> Option<&dyn DividendsProvider> {
        Some(self as &dyn DividendsProvider)
    }
    fn as_splits_provider(&self) -> Option<&dyn SplitsProvider> {
        Some(self as &dyn SplitsProvider)
    }
    fn as_recommendations_provider(&self) -> Option<&dyn RecommendationsProvider> {
        Some(self as &dyn RecommendationsProvider)
    }
}

#[async_trait]
impl SnapshotProvider for MockConnector {
    async fn snapshot(&self, symbol: &Symbol) -> Result<TickerSnapshot, DalalError> {
        Self::maybe_fail_or_timeout(symbol, "snapshot").await?;
        fixtures::snapshots::by_symbol(symbol.as_str())
            .ok_or_else(|| Self::not_found(&format!("snapshot for {symbol}")))
    }
}

#[async_trait]
impl CompanyInfoProvider for MockConnector {
    async fn company_info(&self, symbol: &Symbol) -> Result<CompanyInfo, DalalError> {
        Self::maybe_fail_or_timeout(symbol, "company-info").await?;
        fixtures::profile::by_symbol(symbol.as_str())
            .ok_or_else(|| Self::not_found(&format!("company info for {symbol}")))
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        _span: HistorySpan,
    ) -> Result<Vec<PricePoint>, DalalError> {
        Self::maybe_fail_or_timeout(symbol, "history").await?;
        fixtures::history::by_symbol(symbol.as_str())
            .ok_or_else(|| Self::not_found(&format!("history for {symbol}")))
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, symbol: &Symbol, limit: usize) -> Result<Vec<Headline>, DalalError> {
        Self::maybe_fail_or_timeout(symbol, "news").await?;
        let mut items = fixtures::news::by_symbol(symbol.as_str());
        items.truncate(limit);
        Ok(items)
    }
}

#[async_trait]
impl IncomeStatementProvider for MockConnector {
    async fn income_statement(
        &self,
        symbol: &Symbol,
        _q: bool,
    ) -> Result<StatementTable, DalalError> {
        Self::statement(symbol, StatementKind::Income, "income-statement").await
    }
}

#[async_trait]
impl BalanceSheetProvider for MockConnector {
    async fn balance_sheet(
        &self,
        symbol: &Symbol,
        _q: bool,
    ) -> Result<StatementTable, DalalError> {
        Self::statement(symbol, StatementKind::BalanceSheet, "balance-sheet").await
    }
}

#[async_trait]
impl CashflowProvider for MockConnector {
    async fn cashflow(&self, symbol: &Symbol, _q: bool) -> Result<StatementTable, DalalError> {
        Self::statement(symbol, StatementKind::Cashflow, "cashflow").await
    }
}

#[async_trait]
impl EarningsProvider for MockConnector {
    async fn earnings(&self, symbol: &Symbol) -> Result<EarningsReport, DalalError> {
        Self::maybe_fail_or_timeout(symbol, "earnings").await?;
        fixtures::fundamentals::earnings_by_symbol(symbol.as_str())
            .ok_or_else(|| Self::not_found(&format!("earnings for {symbol}")))
    }
}

#[async_trait]
impl DividendsProvider for MockConnector {
    async fn dividends(&self, symbol: &Symbol) -> Result<Vec<Dividend>, DalalError> {
        Self::maybe_fail_or_timeout(symbol, "dividends").await?;
        Ok(fixtures::actions::dividends_by_symbol(symbol.as_str()))
    }
}

#[async_trait]
impl SplitsProvider for MockConnector {
    async fn splits(&self, symbol: &Symbol) -> Result<Vec<Split>, DalalError> {
        Self::maybe_fail_or_timeout(symbol, "splits").await?;
        Ok(fixtures::actions::splits_by_symbol(symbol.as_str()))
    }
}

#[async_trait]
impl RecommendationsProvider for MockConnector {
    async fn recommendations(&self, symbol: &Symbol) -> Result<Vec<Recommendation>, DalalError> {
        Self::maybe_fail_or_timeout(symbol, "recommendations").await?;
        Ok(fixtures::analysis::recommendations_by_symbol(symbol.as_str()))
    }
}
