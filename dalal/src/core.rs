use std::sync::Arc;
use std::time::Duration;

use dalal_core::{Capability, DalalConfig, DalalConnector, DalalError, HistorySpan, Symbol};

/// Orchestrator that routes requests across registered providers.
pub struct Dalal {
    pub(crate) connectors: Vec<Arc<dyn DalalConnector>>,
    pub(crate) cfg: DalalConfig,
}

/// Builder for constructing a `Dalal` orchestrator with custom configuration.
pub struct DalalBuilder {
    connectors: Vec<Arc<dyn DalalConnector>>,
    cfg: DalalConfig,
}

impl Default for DalalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DalalBuilder {
    /// Create a new builder with default configuration and no connectors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: DalalConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Connectors are tried in registration order; later ones act as fallbacks.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn DalalConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration, e.g. one loaded from a file.
    #[must_use]
    pub fn config(mut self, cfg: DalalConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for batch summaries.
    ///
    /// Entries still outstanding at the deadline become unavailable rows with a
    /// `RequestTimeout` failure; completed rows are kept.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Maximum number of snapshot requests in flight during a batch.
    #[must_use]
    pub const fn max_concurrency(mut self, n: usize) -> Self {
        self.cfg.max_concurrency = n;
        self
    }

    /// Number of headlines requested for the detail view.
    #[must_use]
    pub const fn news_limit(mut self, n: usize) -> Self {
        self.cfg.news_limit = n;
        self
    }

    /// Number of most recent dividends, splits and recommendations kept in a detail report.
    #[must_use]
    pub const fn table_tail(mut self, n: usize) -> Self {
        self.cfg.table_tail = n;
        self
    }

    /// History span charted in the detail view.
    #[must_use]
    pub const fn history_span(mut self, span: HistorySpan) -> Self {
        self.cfg.history_span = span;
        self
    }

    /// Reuse the most recent batch within a session instead of refetching.
    #[must_use]
    pub const fn reuse_batch(mut self, yes: bool) -> Self {
        self.cfg.reuse_batch = yes;
        self
    }

    /// Build the `Dalal` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered, if
    /// `max_concurrency` is zero, or if the provider timeout is zero.
    pub fn build(self) -> Result<Dalal, DalalError> {
        if self.connectors.is_empty() {
            return Err(DalalError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if self.cfg.max_concurrency == 0 {
            return Err(DalalError::InvalidArg(
                "max_concurrency must be at least 1".to_string(),
            ));
        }
        if self.cfg.provider_timeout.is_zero() {
            return Err(DalalError::InvalidArg(
                "provider_timeout must be non-zero".to_string(),
            ));
        }
        Ok(Dalal {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

pub fn tag_err(connector: &str, e: DalalError) -> DalalError {
    match e {
        e @ (DalalError::NotFound { .. }
        | DalalError::ProviderTimeout { .. }
        | DalalError::Connector { .. }
        | DalalError::RequestTimeout { .. }
        | DalalError::AllProvidersFailed(_)) => e,
        other => DalalError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Dalal {
    /// Start building a new `Dalal` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use dalal::Dalal;
    /// use dalal_yfinance::YfConnector;
    ///
    /// let dalal = Dalal::builder()
    ///     .with_connector(Arc::new(YfConnector::try_new_default()?))
    ///     .provider_timeout(std::time::Duration::from_secs(5))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> DalalBuilder {
        DalalBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &DalalConfig {
        &self.cfg
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dalal::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = %capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, DalalError>
    where
        Fut: std::future::Future<Output = Result<T, DalalError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(DalalError::provider_timeout(
                connector_name,
                capability.as_str(),
            ))
        })
    }

    /// Single-item fetch across connectors in registration order.
    ///
    /// - The first success wins; each attempt is bounded by the provider timeout.
    /// - If every attempt was a `NotFound`, returns `NotFound("{label} for {SYMBOL}")`.
    /// - A single failure is returned as-is; several are wrapped in `AllProvidersFailed`.
    /// - If no connector advertises the capability, returns `Unsupported`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dalal::core::fetch_single",
            skip(self, call),
            fields(symbol = %symbol, capability = %capability, not_found = %not_found_label),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        symbol: &Symbol,
        capability: Capability,
        not_found_label: &'static str,
        call: F,
    ) -> Result<T, DalalError>
    where
        T: Send,
        F: Fn(Arc<dyn DalalConnector>, Symbol) -> Option<Fut> + Send,
        Fut: std::future::Future<Output = Result<T, DalalError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<DalalError> = Vec::new();

        for c in &self.connectors {
            let Some(fut) = call(Arc::clone(c), symbol.clone()) else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                capability,
                self.cfg.provider_timeout,
                fut,
            )
            .await
            {
                Ok(v) => return Ok(v),
                Err(e @ (DalalError::NotFound { .. } | DalalError::ProviderTimeout { .. })) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(connector = c.name(), error = %e, "provider attempt failed");
                    errors.push(e);
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(connector = c.name(), error = %e, "provider attempt failed");
                    errors.push(tag_err(c.name(), e));
                }
            }
        }

        Err(crate::router::util::collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(format!("{not_found_label} for {symbol}")),
        ))
    }
}
