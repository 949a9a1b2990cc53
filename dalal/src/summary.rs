use chrono::Utc;
use futures::stream::{self, StreamExt};

use crate::Dalal;
use dalal_core::{
    Capability, DalalError, RegistryEntry, SummaryReport, SummaryRow, SummaryTable, Symbol,
    TickerRegistry, TickerSnapshot,
};

/// Builder that fans snapshot requests out over registry entries and joins the
/// results into a [`SummaryTable`].
pub struct SummaryBuilder<'a> {
    pub(crate) dalal: &'a Dalal,
    pub(crate) entries: Vec<RegistryEntry>,
    pub(crate) max_concurrency: usize,
}

impl<'a> SummaryBuilder<'a> {
    /// Create a new builder bound to a `Dalal` instance.
    ///
    /// Starts with no entries and the orchestrator's configured concurrency.
    #[must_use]
    pub const fn new(dalal: &'a Dalal) -> Self {
        Self {
            dalal,
            entries: Vec::new(),
            max_concurrency: dalal.cfg.max_concurrency,
        }
    }

    /// Replace the entries with every entry of `registry`, in registry order.
    #[must_use]
    pub fn registry(mut self, registry: &TickerRegistry) -> Self {
        self.entries = registry.all_entries().to_vec();
        self
    }

    /// Append a single entry.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the symbol is already present.
    pub fn add_entry(mut self, entry: RegistryEntry) -> Result<Self, DalalError> {
        if self.entries.iter().any(|e| e.symbol == entry.symbol) {
            return Err(DalalError::InvalidArg(format!(
                "duplicate symbol '{}' already exists in summary entries",
                entry.symbol
            )));
        }
        self.entries.push(entry);
        Ok(self)
    }

    /// Override the number of snapshot requests in flight; clamped to at least one.
    #[must_use]
    pub fn max_concurrency(mut self, n: usize) -> Self {
        self.max_concurrency = n.max(1);
        self
    }

    /// Fetch every snapshot and assemble the report.
    ///
    /// Behavior:
    /// - Rows come back in entry order regardless of completion order.
    /// - A failed or timed-out snapshot yields a row with every snapshot field
    ///   absent; the error is listed in `failures` and the batch continues.
    /// - When the configured overall deadline elapses, snapshots already
    ///   fetched are kept and every entry still outstanding becomes an
    ///   unavailable row with a `RequestTimeout` failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "dalal::summary",
            skip(self),
            fields(entries = self.entries.len(), max_concurrency = self.max_concurrency),
        )
    )]
    pub async fn run(self) -> SummaryReport {
        let dalal = self.dalal;
        let mut results: Vec<Option<Result<TickerSnapshot, DalalError>>> =
            self.entries.iter().map(|_| None).collect();

        {
            let mut fetches = stream::iter(self.entries.iter().enumerate().map(
                |(i, entry)| async move { (i, dalal.snapshot(&entry.symbol).await) },
            ))
            .buffered(self.max_concurrency.max(1));
            let drain = async {
                while let Some((i, res)) = fetches.next().await {
                    results[i] = Some(res);
                }
            };
            match dalal.cfg.request_timeout {
                Some(deadline) => {
                    if tokio::time::timeout(deadline, drain).await.is_err() {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(
                            target: "dalal::summary",
                            "batch deadline elapsed; outstanding rows left unavailable"
                        );
                    }
                }
                None => drain.await,
            }
        }

        let mut rows: Vec<SummaryRow> = Vec::with_capacity(self.entries.len());
        let mut failures: Vec<(Symbol, DalalError)> = Vec::new();
        for (entry, res) in self.entries.into_iter().zip(results) {
            let res = res
                .unwrap_or_else(|| Err(DalalError::request_timeout(Capability::Summary.as_str())));
            match res {
                Ok(snap) => rows.push(SummaryRow::from_snapshot(
                    entry.display_name,
                    entry.symbol,
                    snap,
                )),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        target: "dalal::summary",
                        symbol = %entry.symbol,
                        error = %e,
                        "snapshot failed; row left unavailable"
                    );
                    rows.push(SummaryRow::unavailable(
                        entry.display_name,
                        entry.symbol.clone(),
                    ));
                    failures.push((entry.symbol, e));
                }
            }
        }

        SummaryReport {
            table: SummaryTable::new(rows),
            failures,
            fetched_at: Utc::now(),
        }
    }
}

impl Dalal {
    /// Begin building a batch summary.
    ///
    /// Typical usage: chain `registry` (or `add_entry`) then call `run()`.
    #[must_use]
    pub const fn summary(&'_ self) -> SummaryBuilder<'_> {
        SummaryBuilder::new(self)
    }

    /// Build the summary table for every entry of `registry`.
    ///
    /// Never aborts: per-symbol failures, including an elapsed batch deadline,
    /// are reported inside the returned report.
    pub async fn build_summary(&self, registry: &TickerRegistry) -> SummaryReport {
        self.summary().registry(registry).run().await
    }
}
