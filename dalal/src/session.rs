use std::sync::Arc;

use tokio::sync::Mutex;

use crate::Dalal;
use dalal_core::{SummaryReport, TickerRegistry};

/// Remembers the most recent batch so one request cycle fetches the registry once.
///
/// The cached report is keyed by the registry it was built from; asking for a
/// different registry always refetches.
#[derive(Default)]
pub struct BatchSession {
    latest: Mutex<Option<(TickerRegistry, Arc<SummaryReport>)>>,
}

impl BatchSession {
    /// An empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached report for `registry` when batch reuse is enabled, else a fresh one.
    ///
    /// Concurrent callers wait for an in-flight fetch and then share its result.
    pub async fn latest(&self, dalal: &Dalal, registry: &TickerRegistry) -> Arc<SummaryReport> {
        let mut guard = self.latest.lock().await;
        if dalal.cfg.reuse_batch {
            if let Some((_, report)) = guard.as_ref().filter(|(cached_for, _)| cached_for == registry) {
                #[cfg(feature = "tracing")]
                tracing::debug!(target: "dalal::session", "reusing cached batch");
                return Arc::clone(report);
            }
        }
        let report = Arc::new(dalal.build_summary(registry).await);
        *guard = Some((registry.clone(), Arc::clone(&report)));
        report
    }

    /// Always fetch a fresh batch and cache it.
    pub async fn refresh(&self, dalal: &Dalal, registry: &TickerRegistry) -> Arc<SummaryReport> {
        let mut guard = self.latest.lock().await;
        let report = Arc::new(dalal.build_summary(registry).await);
        *guard = Some((registry.clone(), Arc::clone(&report)));
        report
    }

    /// Drop any cached batch.
    pub async fn clear(&self) {
        *self.latest.lock().await = None;
    }
}
