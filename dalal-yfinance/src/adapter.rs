use async_trait::async_trait;

use dalal_core::DalalError;
use yf::core::HistoryService;
use yf::core::services::HistoryRequest;
use yf::fundamentals::{BalanceSheetRow, CashflowRow, Earnings, IncomeStatementRow};
use yfinance_rs as yf;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";
const CONNECTOR: &str = "dalal-yfinance";

/// The Yahoo endpoints the connector calls.
///
/// [`LiveApi`] talks to Yahoo; with the `test-adapters` feature, `FakeApi`
/// answers from closures instead.
#[async_trait]
pub trait YahooApi: Send + Sync {
    /// Quotes for a batch of symbols.
    async fn quotes(&self, symbols: &[String]) -> Result<Vec<yf::core::Quote>, DalalError>;

    /// Company or fund profile.
    async fn profile(&self, symbol: &str) -> Result<yf::profile::Profile, DalalError>;

    /// Candles (and, when requested, corporate actions) for a symbol.
    async fn history(
        &self,
        symbol: &str,
        req: HistoryRequest,
    ) -> Result<yf::HistoryResponse, DalalError>;

    /// Up to `count` news articles.
    async fn news(&self, symbol: &str, count: u32)
    -> Result<Vec<yf::news::NewsArticle>, DalalError>;

    /// Income statement rows, newest first.
    async fn income_statement(
        &self,
        symbol: &str,
        quarterly: bool,
    ) -> Result<Vec<IncomeStatementRow>, DalalError>;

    /// Balance sheet rows, newest first.
    async fn balance_sheet(
        &self,
        symbol: &str,
        quarterly: bool,
    ) -> Result<Vec<BalanceSheetRow>, DalalError>;

    /// Cash flow rows, newest first.
    async fn cashflow(&self, symbol: &str, quarterly: bool)
    -> Result<Vec<CashflowRow>, DalalError>;

    /// Yearly and quarterly earnings.
    async fn earnings(&self, symbol: &str) -> Result<Earnings, DalalError>;

    /// Monthly analyst recommendation counts.
    async fn recommendations(
        &self,
        symbol: &str,
    ) -> Result<Vec<yf::analysis::RecommendationRow>, DalalError>;
}

/// Production API backed by a single `YfClient`.
/// `YfClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct LiveApi {
    client: yf::YfClient,
}

impl LiveApi {
    /// Build a `YfClient` with a browser user agent and a cookie store.
    ///
    /// # Errors
    /// Returns a connector error if the HTTP client or `YfClient` cannot be built.
    pub fn try_new_default() -> Result<Self, DalalError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .map_err(|e| DalalError::connector(CONNECTOR, e.to_string()))?;
        Self::try_with_reqwest_client(http)
    }

    /// Build from a provided `reqwest::Client`.
    ///
    /// The client should enable a cookie store for the Yahoo crumb flow.
    ///
    /// # Errors
    /// Returns a connector error if the `YfClient` cannot be built.
    pub fn try_with_reqwest_client(http: reqwest::Client) -> Result<Self, DalalError> {
        let client = yf::YfClient::builder()
            .custom_client(http)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DalalError::connector(CONNECTOR, e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing `YfClient`.
    #[must_use]
    pub const fn new(client: yf::YfClient) -> Self {
        Self { client }
    }

    fn fundamentals(&self, symbol: &str) -> yf::fundamentals::FundamentalsBuilder {
        yf::fundamentals::FundamentalsBuilder::new(&self.client, symbol.to_string())
    }
}

fn map_yf_err(e: &yf::YfError, context: &str) -> DalalError {
    match e {
        yf::YfError::NotFound { .. } => DalalError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            DalalError::connector(CONNECTOR, format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => {
            DalalError::connector(CONNECTOR, format!("server error {status}: {context}"))
        }
        yf::YfError::Status { status, .. } => {
            DalalError::connector(CONNECTOR, format!("status {status}: {context}"))
        }
        other => DalalError::connector(CONNECTOR, other.to_string()),
    }
}

#[async_trait]
impl YahooApi for LiveApi {
    async fn quotes(&self, symbols: &[String]) -> Result<Vec<yf::core::Quote>, DalalError> {
        yf::quote::quotes(&self.client, symbols.iter().cloned())
            .await
            .map_err(|e| map_yf_err(&e, "quotes"))
    }

    async fn profile(&self, symbol: &str) -> Result<yf::profile::Profile, DalalError> {
        yf::profile::load_profile(&self.client, symbol)
            .await
            .map_err(|e| map_yf_err(&e, &format!("profile for {symbol}")))
    }

    async fn history(
        &self,
        symbol: &str,
        req: HistoryRequest,
    ) -> Result<yf::HistoryResponse, DalalError> {
        self.client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("history for {symbol}")))
    }

    async fn news(
        &self,
        symbol: &str,
        count: u32,
    ) -> Result<Vec<yf::news::NewsArticle>, DalalError> {
        yf::news::NewsBuilder::new(&self.client, symbol)
            .count(count)
            .tab(yf::news::NewsTab::News)
            .fetch()
            .await
            .map_err(|e| map_yf_err(&e, &format!("news for {symbol}")))
    }

    async fn income_statement(
        &self,
        symbol: &str,
        quarterly: bool,
    ) -> Result<Vec<IncomeStatementRow>, DalalError> {
        self.fundamentals(symbol)
            .income_statement(quarterly, None)
            .await
            .map_err(|e| map_yf_err(&e, &format!("income statement for {symbol}")))
    }

    async fn balance_sheet(
        &self,
        symbol: &str,
        quarterly: bool,
    ) -> Result<Vec<BalanceSheetRow>, DalalError> {
        self.fundamentals(symbol)
            .balance_sheet(quarterly, None)
            .await
            .map_err(|e| map_yf_err(&e, &format!("balance sheet for {symbol}")))
    }

    async fn cashflow(
        &self,
        symbol: &str,
        quarterly: bool,
    ) -> Result<Vec<CashflowRow>, DalalError> {
        self.fundamentals(symbol)
            .cashflow(quarterly, None)
            .await
            .map_err(|e| map_yf_err(&e, &format!("cashflow for {symbol}")))
    }

    async fn earnings(&self, symbol: &str) -> Result<Earnings, DalalError> {
        self.fundamentals(symbol)
            .earnings(None)
            .await
            .map_err(|e| map_yf_err(&e, &format!("earnings for {symbol}")))
    }

    async fn recommendations(
        &self,
        symbol: &str,
    ) -> Result<Vec<yf::analysis::RecommendationRow>, DalalError> {
        yf::analysis::AnalysisBuilder::new(&self.client, symbol.to_string())
            .recommendations()
            .await
            .map_err(|e| map_yf_err(&e, &format!("recommendations for {symbol}")))
    }
}

#[cfg(feature = "test-adapters")]
pub use fake::FakeApi;

#[cfg(feature = "test-adapters")]
mod fake {
    use std::sync::Arc;

    use super::{
        BalanceSheetRow, CashflowRow, DalalError, Earnings, HistoryRequest, IncomeStatementRow,
        YahooApi, async_trait, yf,
    };

    type Handler<A, T> = Arc<dyn Fn(A) -> Result<T, DalalError> + Send + Sync>;

    fn call<A, T>(h: Option<&Handler<A, T>>, arg: A, endpoint: &str) -> Result<T, DalalError> {
        h.map_or_else(|| Err(DalalError::unsupported(endpoint)), |f| f(arg))
    }

    /// Closure-backed [`YahooApi`] for tests. Endpoints without a closure
    /// answer `Unsupported`.
    #[derive(Clone, Default)]
    pub struct FakeApi {
        quotes: Option<Handler<Vec<String>, Vec<yf::core::Quote>>>,
        profile: Option<Handler<String, yf::profile::Profile>>,
        history: Option<Handler<(String, HistoryRequest), yf::HistoryResponse>>,
        news: Option<Handler<(String, u32), Vec<yf::news::NewsArticle>>>,
        income: Option<Handler<(String, bool), Vec<IncomeStatementRow>>>,
        balance: Option<Handler<(String, bool), Vec<BalanceSheetRow>>>,
        cashflow: Option<Handler<(String, bool), Vec<CashflowRow>>>,
        earnings: Option<Handler<String, Earnings>>,
        recommendations: Option<Handler<String, Vec<yf::analysis::RecommendationRow>>>,
    }

    impl FakeApi {
        /// A fake with no endpoints.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer quote requests.
        #[must_use]
        pub fn quotes(
            mut self,
            f: impl Fn(Vec<String>) -> Result<Vec<yf::core::Quote>, DalalError> + Send + Sync + 'static,
        ) -> Self {
            self.quotes = Some(Arc::new(f));
            self
        }

        /// Answer profile requests.
        #[must_use]
        pub fn profile(
            mut self,
            f: impl Fn(String) -> Result<yf::profile::Profile, DalalError> + Send + Sync + 'static,
        ) -> Self {
            self.profile = Some(Arc::new(f));
            self
        }

        /// Answer history requests.
        #[must_use]
        pub fn history(
            mut self,
            f: impl Fn(String, HistoryRequest) -> Result<yf::HistoryResponse, DalalError>
            + Send
            + Sync
            + 'static,
        ) -> Self {
            self.history = Some(Arc::new(move |(s, r)| f(s, r)));
            self
        }

        /// Answer news requests.
        #[must_use]
        pub fn news(
            mut self,
            f: impl Fn(String, u32) -> Result<Vec<yf::news::NewsArticle>, DalalError>
            + Send
            + Sync
            + 'static,
        ) -> Self {
            self.news = Some(Arc::new(move |(s, n)| f(s, n)));
            self
        }

        /// Answer income statement requests.
        #[must_use]
        pub fn income_statement(
            mut self,
            f: impl Fn(String, bool) -> Result<Vec<IncomeStatementRow>, DalalError>
            + Send
            + Sync
            + 'static,
        ) -> Self {
            self.income = Some(Arc::new(move |(s, q)| f(s, q)));
            self
        }

        /// Answer balance sheet requests.
        #[must_use]
        pub fn balance_sheet(
            mut self,
            f: impl Fn(String, bool) -> Result<Vec<BalanceSheetRow>, DalalError>
            + Send
            + Sync
            + 'static,
        ) -> Self {
            self.balance = Some(Arc::new(move |(s, q)| f(s, q)));
            self
        }

        /// Answer cash flow requests.
        #[must_use]
        pub fn cashflow(
            mut self,
            f: impl Fn(String, bool) -> Result<Vec<CashflowRow>, DalalError> + Send + Sync + 'static,
        ) -> Self {
            self.cashflow = Some(Arc::new(move |(s, q)| f(s, q)));
            self
        }

        /// Answer earnings requests.
        #[must_use]
        pub fn earnings(
            mut self,
            f: impl Fn(String) -> Result<Earnings, DalalError> + Send + Sync + 'static,
        ) -> Self {
            self.earnings = Some(Arc::new(f));
            self
        }

        /// Answer recommendation requests.
        #[must_use]
        pub fn recommendations(
            mut self,
            f: impl Fn(String) -> Result<Vec<yf::analysis::RecommendationRow>, DalalError>
            + Send
            + Sync
            + 'static,
        ) -> Self {
            self.recommendations = Some(Arc::new(f));
            self
        }
    }

    #[async_trait]
    impl YahooApi for FakeApi {
        async fn quotes(&self, symbols: &[String]) -> Result<Vec<yf::core::Quote>, DalalError> {
            call(self.quotes.as_ref(), symbols.to_vec(), "quote")
        }

        async fn profile(&self, symbol: &str) -> Result<yf::profile::Profile, DalalError> {
            call(self.profile.as_ref(), symbol.to_string(), "profile")
        }

        async fn history(
            &self,
            symbol: &str,
            req: HistoryRequest,
        ) -> Result<yf::HistoryResponse, DalalError> {
            call(self.history.as_ref(), (symbol.to_string(), req), "history")
        }

        async fn news(
            &self,
            symbol: &str,
            count: u32,
        ) -> Result<Vec<yf::news::NewsArticle>, DalalError> {
            call(self.news.as_ref(), (symbol.to_string(), count), "news")
        }

        async fn income_statement(
            &self,
            symbol: &str,
            quarterly: bool,
        ) -> Result<Vec<IncomeStatementRow>, DalalError> {
            call(
                self.income.as_ref(),
                (symbol.to_string(), quarterly),
                "income-statement",
            )
        }

        async fn balance_sheet(
            &self,
            symbol: &str,
            quarterly: bool,
        ) -> Result<Vec<BalanceSheetRow>, DalalError> {
            call(
                self.balance.as_ref(),
                (symbol.to_string(), quarterly),
                "balance-sheet",
            )
        }

        async fn cashflow(
            &self,
            symbol: &str,
            quarterly: bool,
        ) -> Result<Vec<CashflowRow>, DalalError> {
            call(
                self.cashflow.as_ref(),
                (symbol.to_string(), quarterly),
                "cashflow",
            )
        }

        async fn earnings(&self, symbol: &str) -> Result<Earnings, DalalError> {
            call(self.earnings.as_ref(), symbol.to_string(), "earnings")
        }

        async fn recommendations(
            &self,
            symbol: &str,
        ) -> Result<Vec<yf::analysis::RecommendationRow>, DalalError> {
            call(
                self.recommendations.as_ref(),
                symbol.to_string(),
                "recommendations",
            )
        }
    }
}
