//! Presentation seam between the orchestrator and a user interface.

use std::path::{Path, PathBuf};

use crate::Dalal;
use crate::export;
use crate::session::BatchSession;
use dalal_core::{DalalError, DetailReport, SummaryTable, TickerRegistry};

/// Title shown with the unsorted table.
pub const ALL_TITLE: &str = "NIFTY 50 Stocks";
/// Title shown with the table sorted by sector.
pub const SORTED_TITLE: &str = "NIFTY 50 Table Sorted by Sector";

/// Outcome of one export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// The file was written.
    Written {
        /// Destination path.
        path: PathBuf,
        /// Number of data rows written.
        rows: usize,
    },
    /// The destination could not be written; the table is still available.
    Failed {
        /// Destination path.
        path: PathBuf,
        /// Why the write failed.
        error: DalalError,
    },
}

impl ExportStatus {
    /// Whether the file was written.
    #[must_use]
    pub const fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

/// Sink for everything the dashboard shows.
pub trait Presenter {
    /// Render a single-ticker report.
    fn show_detail(&mut self, report: &DetailReport);
    /// Render a summary table under `title`.
    fn show_table(&mut self, title: &str, table: &SummaryTable);
    /// Report the result of an export.
    fn export_status(&mut self, status: &ExportStatus);
    /// Called when a selection did not resolve to a ticker or has no data. Default shows nothing.
    fn unknown_ticker(&mut self, _input: &str) {}
}

/// Drives the dashboard actions against a [`Presenter`].
pub struct Dashboard<'a, P: Presenter> {
    dalal: &'a Dalal,
    registry: &'a TickerRegistry,
    session: BatchSession,
    presenter: P,
}

impl<'a, P: Presenter> Dashboard<'a, P> {
    /// Bind a dashboard to an orchestrator, a registry and a presenter.
    pub fn new(dalal: &'a Dalal, registry: &'a TickerRegistry, presenter: P) -> Self {
        Self {
            dalal,
            registry,
            session: BatchSession::new(),
            presenter,
        }
    }

    /// Borrow the presenter.
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Consume the dashboard, returning the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Resolve `input` and show its detail report.
    ///
    /// Returns `None` and calls [`Presenter::unknown_ticker`] when the selection
    /// is empty or unknown (nothing is fetched then) or when the provider has
    /// neither company info nor a snapshot for the symbol.
    pub async fn show_ticker(&mut self, input: &str) -> Option<DetailReport> {
        let Ok(symbol) = Dalal::resolve(input, self.registry) else {
            self.presenter.unknown_ticker(input);
            return None;
        };
        let report = self.dalal.ticker_detail(&symbol).await;
        if report.is_unavailable() {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "dalal::present", symbol = %symbol, "no data for selection");
            self.presenter.unknown_ticker(input);
            return None;
        }
        self.presenter.show_detail(&report);
        Some(report)
    }

    /// Build (or reuse) the batch, show it in registry order and export it to `dest`.
    ///
    /// Export failures are reported through the returned status.
    pub async fn export_all(&mut self, dest: &Path) -> ExportStatus {
        let report = self.session.latest(self.dalal, self.registry).await;
        self.publish(ALL_TITLE, &report.table, dest)
    }

    /// Build (or reuse) the batch, show it sorted by sector and export it to `dest`.
    ///
    /// Export failures are reported through the returned status.
    pub async fn export_sorted_by_sector(&mut self, dest: &Path) -> ExportStatus {
        let report = self.session.latest(self.dalal, self.registry).await;
        let sorted = report.table.sort_by_sector();
        self.publish(SORTED_TITLE, &sorted, dest)
    }

    fn publish(&mut self, title: &str, table: &SummaryTable, dest: &Path) -> ExportStatus {
        let status = match export::export(table, dest) {
            Ok(rows) => ExportStatus::Written {
                path: dest.to_path_buf(),
                rows,
            },
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(target: "dalal::present", path = %dest.display(), error = %error, "export failed");
                ExportStatus::Failed {
                    path: dest.to_path_buf(),
                    error,
                }
            }
        };
        self.presenter.export_status(&status);
        self.presenter.show_table(title, table);
        status
    }
}
