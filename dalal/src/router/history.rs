use crate::Dalal;
use crate::dalal_router_method;
use dalal_core::{Capability, HistorySpan, Interval, Lookback, PricePoint, Symbol};
use rust_decimal::Decimal;

/// Span used to find the most recent close; wide enough to cover weekends and holidays.
const LAST_CLOSE_SPAN: HistorySpan = HistorySpan::new(Lookback::D5, Interval::D1);

impl Dalal {
    dalal_router_method! {
        /// Fetch closing prices over `span`, oldest first.
        method: history(symbol: &Symbol, span: HistorySpan) -> Vec<PricePoint>,
        accessor: as_history_provider,
        capability: Capability::History,
        not_found: "history",
        call: history(symbol, span)
    }

    /// Most recent closing price.
    ///
    /// # Errors
    /// Returns the history error, or `Data` if the provider returned no bars.
    pub async fn current_price(&self, symbol: &Symbol) -> Result<Decimal, dalal_core::DalalError> {
        let bars = self.history(symbol, LAST_CLOSE_SPAN).await?;
        bars.last().map(|p| p.close).ok_or_else(|| {
            dalal_core::DalalError::Data(format!("no recent close for {symbol}"))
        })
    }
}
