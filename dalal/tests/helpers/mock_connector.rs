#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dalal_core::connector::{HistoryProvider, NewsProvider, SnapshotProvider};
use dalal_core::{
    DalalConnector, DalalError, Headline, HistorySpan, PricePoint, Symbol, TickerSnapshot,
};
use tokio::time::{Duration, sleep};

/// Simple in-memory connector used by integration tests.
/// Behavior is supplied per capability through the closure fields below.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,
    pub calls: Arc<AtomicUsize>,
    pub snapshot_fn: Option<Arc<dyn Fn(&Symbol) -> Result<TickerSnapshot, DalalError> + Send + Sync>>,
    pub history_fn: Option<
        Arc<dyn Fn(&Symbol, HistorySpan) -> Result<Vec<PricePoint>, DalalError> + Send + Sync>,
    >,
    pub news_fn:
        Option<Arc<dyn Fn(&Symbol, usize) -> Result<Vec<Headline>, DalalError> + Send + Sync>>,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self {
            name: "default_mock",
            delay_ms: 0,
            calls: Arc::new(AtomicUsize::new(0)),
            snapshot_fn: None,
            history_fn: None,
            news_fn: None,
        }
    }
}

impl MockConnector {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

impl DalalConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }
    fn vendor(&self) -> &'static str {
        "Test"
    }
    fn as_snapshot_provider(&self) -> Option<&dyn SnapshotProvider> {
        self.snapshot_fn
            .as_ref()
            .map(|_| self as &dyn SnapshotProvider)
    }
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        self.history_fn
            .as_ref()
            .map(|_| self as &dyn HistoryProvider)
    }
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        self.news_fn.as_ref().map(|_| self as &dyn NewsProvider)
    }
}

#[async_trait]
impl SnapshotProvider for MockConnector {
    async fn snapshot(&self, symbol: &Symbol) -> Result<TickerSnapshot, DalalError> {
        self.enter().await;
        match &self.snapshot_fn {
            Some(f) => f(symbol),
            None => Err(DalalError::unsupported("snapshot")),
        }
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        span: HistorySpan,
    ) -> Result<Vec<PricePoint>, DalalError> {
        self.enter().await;
        match &self.history_fn {
            Some(f) => f(symbol, span),
            None => Err(DalalError::unsupported("history")),
        }
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, symbol: &Symbol, limit: usize) -> Result<Vec<Headline>, DalalError> {
        self.enter().await;
        match &self.news_fn {
            Some(f) => f(symbol, limit),
            None => Err(DalalError::unsupported("news")),
        }
    }
}

/// Connector whose snapshot always yields `result`.
pub fn m_snap(
    name: &'static str,
    result: Result<TickerSnapshot, DalalError>,
) -> Arc<MockConnector> {
    Arc::new(MockConnector {
        name,
        snapshot_fn: Some(Arc::new(move |_| result.clone())),
        ..Default::default()
    })
}

/// Connector whose history always yields `result`.
pub fn m_hist(
    name: &'static str,
    result: Result<Vec<PricePoint>, DalalError>,
) -> Arc<MockConnector> {
    Arc::new(MockConnector {
        name,
        history_fn: Some(Arc::new(move |_, _| result.clone())),
        ..Default::default()
    })
}
