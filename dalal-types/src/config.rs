//! Configuration for the `Dalal` orchestrator.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::market::HistorySpan;

/// Global configuration for the `Dalal` orchestrator.
///
/// Missing fields take their defaults when deserialising, so a config file only
/// needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DalalConfig {
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Optional overall deadline for a batch summary.
    pub request_timeout: Option<Duration>,
    /// Maximum number of snapshot requests in flight during a batch.
    pub max_concurrency: usize,
    /// Number of headlines requested for the detail view.
    pub news_limit: usize,
    /// Number of most recent dividends, splits and recommendations kept.
    pub table_tail: usize,
    /// History span charted in the detail view.
    pub history_span: HistorySpan,
    /// Reuse the most recent batch within one session instead of refetching.
    pub reuse_batch: bool,
}

impl Default for DalalConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_concurrency: 8,
            news_limit: 5,
            table_tail: 10,
            history_span: HistorySpan::default(),
            reuse_batch: true,
        }
    }
}
