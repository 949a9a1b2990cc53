//! dalal-yfinance
//!
//! Connector that implements `DalalConnector` on top of the `yfinance-rs`
//! client library. Exposes snapshots, company info, history, news,
//! financial statements, earnings, corporate actions and recommendations.
#![warn(missing_docs)]

/// The Yahoo endpoint seam and its production implementation.
pub mod adapter;
mod convert;

use std::sync::Arc;

use adapter::{LiveApi, YahooApi};
use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use dalal_core::{
    CompanyInfo, DalalError, Dividend, EarningsReport, Headline, HistorySpan, PricePoint,
    Recommendation, Split, StatementTable, Symbol, TickerSnapshot,
    connector::{
        BalanceSheetProvider, CashflowProvider, CompanyInfoProvider, ConnectorKey,
        DalalConnector, DividendsProvider, EarningsProvider, HistoryProvider,
        IncomeStatementProvider, NewsProvider, RecommendationsProvider, SnapshotProvider,
        SplitsProvider,
    },
};
use paft::market::requests::history::Interval as YfInterval;
use yfinance_rs as yf;

/// Days of daily candles used to derive session and 52-week fields.
const RANGE_WINDOW_DAYS: i64 = 366;

/// Yahoo Finance connector. Production users construct it with `YfConnector::try_new_default()`.
pub struct YfConnector {
    api: Arc<dyn YahooApi>,
}

impl YfConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("dalal-yfinance");

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("no matches")
    }

    fn normalize_error(e: DalalError, what: &str) -> DalalError {
        match e {
            DalalError::Connector { msg, .. } if Self::looks_like_not_found(&msg) => {
                DalalError::not_found(what.to_string())
            }
            DalalError::Connector { msg, .. } => DalalError::connector("dalal-yfinance", msg),
            other => other,
        }
    }

    /// Build with a fresh `yfinance_rs::YfClient` inside.
    ///
    /// # Errors
    /// Returns a connector error if the HTTP client cannot be constructed.
    pub fn try_new_default() -> Result<Self, DalalError> {
        Ok(Self::from_api(Arc::new(LiveApi::try_new_default()?)))
    }

    /// Build from an existing `yfinance_rs::YfClient`.
    #[must_use]
    pub fn new_with_client(client: yf::YfClient) -> Self {
        Self::from_api(Arc::new(LiveApi::new(client)))
    }

    /// Build from a provided `reqwest::Client`.
    ///
    /// The client should enable a cookie store for the Yahoo crumb flow.
    ///
    /// # Errors
    /// Returns an error if the internal `YfClient` cannot be constructed.
    pub fn try_new_with_reqwest_client(http: reqwest::Client) -> Result<Self, DalalError> {
        Ok(Self::from_api(Arc::new(LiveApi::try_with_reqwest_client(
            http,
        )?)))
    }

    /// Build on any [`YahooApi`], e.g. a fake in tests.
    #[must_use]
    pub fn from_api(api: Arc<dyn YahooApi>) -> Self {
        Self { api }
    }

    async fn quote(&self, symbol: &Symbol) -> Result<yf::core::Quote, DalalError> {
        let what = format!("quote for {symbol}");
        let raw = self
            .api
            .quotes(std::slice::from_ref(&symbol.to_string()))
            .await
            .map_err(|e| Self::normalize_error(e, &what))?;
        raw.into_iter()
            .next()
            .ok_or_else(|| DalalError::not_found(what))
    }

    async fn profile(&self, symbol: &Symbol) -> Result<yf::profile::Profile, DalalError> {
        self.api
            .profile(symbol.as_str())
            .await
            .map_err(|e| Self::normalize_error(e, &format!("profile for {symbol}")))
    }

    async fn candles(
        &self,
        symbol: &Symbol,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, DalalError> {
        self.api
            .history(symbol.as_str(), req)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("history for {symbol}")))
    }

    async fn actions(
        &self,
        symbol: &Symbol,
    ) -> Result<Vec<paft::market::action::Action>, DalalError> {
        let now = Utc::now();
        let epoch = Utc.timestamp_opt(0, 0).single().unwrap_or(now);
        let req = convert::history_request(epoch, now, YfInterval::M1, true);
        Ok(self.candles(symbol, req).await?.actions)
    }

    async fn recent_actions(
        &self,
        symbol: &Symbol,
    ) -> Result<Vec<paft::market::action::Action>, DalalError> {
        let now = Utc::now();
        let req = convert::history_request(
            now - Duration::days(RANGE_WINDOW_DAYS),
            now,
            YfInterval::M1,
            true,
        );
        Ok(self.candles(symbol, req).await?.actions)
    }
}

#[async_trait]
impl SnapshotProvider for YfConnector {
    async fn snapshot(&self, symbol: &Symbol) -> Result<TickerSnapshot, DalalError> {
        let now = Utc::now();
        let req = convert::history_request(
            now - Duration::days(RANGE_WINDOW_DAYS),
            now,
            YfInterval::D1,
            false,
        );
        let (quote, profile, history) = futures::join!(
            self.quote(symbol),
            self.profile(symbol),
            self.candles(symbol, req)
        );
        let quote = quote?;

        let mut snap = TickerSnapshot {
            previous_close: convert::amount(quote.previous_close.as_ref()),
            ..TickerSnapshot::default()
        };
        match profile {
            Ok(p) => convert::apply_profile(&mut snap.sector, &mut snap.industry, &p),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(symbol = %symbol, error = %_e, "snapshot without profile fields");
            }
        }
        match history {
            Ok(h) => convert::apply_candles(&mut snap, &h.candles),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(symbol = %symbol, error = %_e, "snapshot without range fields");
            }
        }
        Ok(snap)
    }
}

#[async_trait]
impl CompanyInfoProvider for YfConnector {
    async fn company_info(&self, symbol: &Symbol) -> Result<CompanyInfo, DalalError> {
        let (quote, profile, earnings, actions) = futures::join!(
            self.quote(symbol),
            self.profile(symbol),
            self.api.earnings(symbol.as_str()),
            self.recent_actions(symbol)
        );
        let (quote, profile) = match (quote, profile) {
            (Err(qe), Err(_)) => return Err(qe),
            (q, p) => (q.ok(), p.ok()),
        };
        let mut info = convert::company_info(symbol, quote.as_ref(), profile.as_ref());
        convert::apply_ratios(
            &mut info,
            quote.as_ref().and_then(|q| convert::amount(q.price.as_ref())),
            earnings.ok().as_ref(),
            &actions.unwrap_or_default(),
            Utc::now(),
        );
        Ok(info)
    }
}

#[async_trait]
impl HistoryProvider for YfConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        span: HistorySpan,
    ) -> Result<Vec<PricePoint>, DalalError> {
        let now = Utc::now();
        let req = convert::history_request(
            now - span.lookback.span(),
            now,
            convert::interval(span.interval),
            false,
        );
        let raw = self.candles(symbol, req).await?;
        Ok(convert::closes(&raw.candles))
    }
}

#[async_trait]
impl NewsProvider for YfConnector {
    async fn news(&self, symbol: &Symbol, limit: usize) -> Result<Vec<Headline>, DalalError> {
        let count = u32::try_from(limit).unwrap_or(u32::MAX);
        let raw = self
            .api
            .news(symbol.as_str(), count)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("news for {symbol}")))?;
        Ok(raw.into_iter().take(limit).map(convert::headline).collect())
    }
}

#[async_trait]
impl IncomeStatementProvider for YfConnector {
    async fn income_statement(
        &self,
        symbol: &Symbol,
        quarterly: bool,
    ) -> Result<StatementTable, DalalError> {
        let rows = self
            .api
            .income_statement(symbol.as_str(), quarterly)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("income statement for {symbol}")))?;
        Ok(convert::income_statement(&rows))
    }
}

#[async_trait]
impl BalanceSheetProvider for YfConnector {
    async fn balance_sheet(
        &self,
        symbol: &Symbol,
        quarterly: bool,
    ) -> Result<StatementTable, DalalError> {
        let rows = self
            .api
            .balance_sheet(symbol.as_str(), quarterly)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("balance sheet for {symbol}")))?;
        Ok(convert::balance_sheet(&rows))
    }
}

#[async_trait]
impl CashflowProvider for YfConnector {
    async fn cashflow(
        &self,
        symbol: &Symbol,
        quarterly: bool,
    ) -> Result<StatementTable, DalalError> {
        let rows = self
            .api
            .cashflow(symbol.as_str(), quarterly)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("cashflow for {symbol}")))?;
        Ok(convert::cashflow(&rows))
    }
}

#[async_trait]
impl EarningsProvider for YfConnector {
    async fn earnings(&self, symbol: &Symbol) -> Result<EarningsReport, DalalError> {
        let raw = self
            .api
            .earnings(symbol.as_str())
            .await
            .map_err(|e| Self::normalize_error(e, &format!("earnings for {symbol}")))?;
        Ok(convert::earnings(raw))
    }
}

#[async_trait]
impl DividendsProvider for YfConnector {
    async fn dividends(&self, symbol: &Symbol) -> Result<Vec<Dividend>, DalalError> {
        Ok(convert::dividends(&self.actions(symbol).await?))
    }
}

#[async_trait]
impl SplitsProvider for YfConnector {
    async fn splits(&self, symbol: &Symbol) -> Result<Vec<Split>, DalalError> {
        Ok(convert::splits(&self.actions(symbol).await?))
    }
}

#[async_trait]
impl RecommendationsProvider for YfConnector {
    async fn recommendations(&self, symbol: &Symbol) -> Result<Vec<Recommendation>, DalalError> {
        let rows = self
            .api
            .recommendations(symbol.as_str())
            .await
            .map_err(|e| Self::normalize_error(e, &format!("recommendations for {symbol}")))?;
        Ok(convert::recommendations(rows))
    }
}

impl DalalConnector for YfConnector {
    fn name(&self) -> &'static str {
        "dalal-yfinance"
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
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
