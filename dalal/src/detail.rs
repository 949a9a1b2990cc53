use crate::Dalal;
use crate::router::util::{append_actionable, tail};
use dalal_core::metrics;
use dalal_core::{
    DalalError, DetailReport, FinancialStatements, StatementTable, Symbol, TickerRegistry,
};

fn section<T>(res: Result<T, DalalError>, warnings: &mut Vec<DalalError>) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(e) => {
            append_actionable(warnings, e);
            None
        }
    }
}

fn statement(
    res: Result<StatementTable, DalalError>,
    warnings: &mut Vec<DalalError>,
) -> Option<StatementTable> {
    section(res, warnings).filter(|t| !t.is_empty())
}

impl Dalal {
    /// Build everything shown for a single ticker.
    ///
    /// Behavior:
    /// - Every section is fetched concurrently; a section that fails is left
    ///   `None` or empty and never fails the whole report.
    /// - Actionable failures (timeouts, connector errors, bad data) are kept in
    ///   `warnings`; not-found and unsupported sections are dropped silently.
    /// - Dividends, splits and recommendations keep only the most recent
    ///   `table_tail` rows.
    /// - Derived metrics are present only when their inputs are present and the
    ///   base price is non-zero.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "dalal::detail", skip(self), fields(symbol = %symbol))
    )]
    pub async fn ticker_detail(&self, symbol: &Symbol) -> DetailReport {
        let cfg = &self.cfg;
        let (
            info_res,
            snap_res,
            price_res,
            history_res,
            news_res,
            income_res,
            balance_res,
            cashflow_res,
            dividends_res,
            splits_res,
            recs_res,
            earnings_res,
        ) = tokio::join!(
            self.company_info(symbol),
            self.snapshot(symbol),
            self.current_price(symbol),
            self.history(symbol, cfg.history_span),
            self.news(symbol, cfg.news_limit),
            self.income_statement(symbol, false),
            self.balance_sheet(symbol, false),
            self.cashflow(symbol, false),
            self.dividends(symbol),
            self.splits(symbol),
            self.recommendations(symbol),
            self.earnings(symbol),
        );

        let mut warnings: Vec<DalalError> = Vec::new();
        let w = &mut warnings;

        let info = section(info_res, w);
        let snapshot = section(snap_res, w);
        let current_price = section(price_res, w);
        let history = section(history_res, w).unwrap_or_default();
        let news = section(news_res, w).unwrap_or_default();
        let statements = FinancialStatements {
            income: statement(income_res, w),
            balance_sheet: statement(balance_res, w),
            cashflow: statement(cashflow_res, w),
        };
        let dividends = tail(section(dividends_res, w).unwrap_or_default(), cfg.table_tail);
        let splits = tail(section(splits_res, w).unwrap_or_default(), cfg.table_tail);
        let recommendations = tail(section(recs_res, w).unwrap_or_default(), cfg.table_tail);
        let earnings = section(earnings_res, w);

        let previous_close = snapshot.as_ref().and_then(|s| s.previous_close);
        let low_52w = snapshot.as_ref().and_then(|s| s.fifty_two_week_low);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "dalal::detail",
            symbol = %symbol,
            warnings = warnings.len(),
            "detail report assembled"
        );

        DetailReport {
            symbol: symbol.clone(),
            info,
            todays_change: metrics::todays_change(current_price, previous_close),
            fifty_two_week_performance: metrics::fifty_two_week_performance(
                current_price,
                low_52w,
            ),
            snapshot,
            current_price,
            history,
            news,
            statements,
            dividends,
            splits,
            recommendations,
            earnings,
            warnings,
        }
    }

    /// Resolve a user selection to a symbol.
    ///
    /// Tries an exact registry name, then a case-insensitive name, then treats the
    /// input as a free-text symbol.
    ///
    /// # Errors
    /// Returns `UnknownTicker` for an empty selection or text that is neither a
    /// registry name nor a valid symbol.
    pub fn resolve(input: &str, registry: &TickerRegistry) -> Result<Symbol, DalalError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DalalError::unknown_ticker(input));
        }
        if let Some(sym) = registry
            .lookup(trimmed)
            .or_else(|| registry.lookup_ignore_case(trimmed))
        {
            return Ok(sym.clone());
        }
        Symbol::new(trimmed).map_err(|_| DalalError::unknown_ticker(input))
    }
}
