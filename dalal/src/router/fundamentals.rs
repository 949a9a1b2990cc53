use crate::Dalal;
use crate::dalal_router_method;
use dalal_core::{Capability, EarningsReport, StatementTable, Symbol};

impl Dalal {
    dalal_router_method! {
        /// Fetch the income statement; `quarterly` selects quarterly periods.
        method: income_statement(symbol: &Symbol, quarterly: bool) -> StatementTable,
        accessor: as_income_statement_provider,
        capability: Capability::IncomeStatement,
        not_found: "fundamentals",
        call: income_statement(symbol, quarterly)
    }

    dalal_router_method! {
        /// Fetch the balance sheet; `quarterly` selects quarterly periods.
        method: balance_sheet(symbol: &Symbol, quarterly: bool) -> StatementTable,
        accessor: as_balance_sheet_provider,
        capability: Capability::BalanceSheet,
        not_found: "fundamentals",
        call: balance_sheet(symbol, quarterly)
    }

    dalal_router_method! {
        /// Fetch the cash flow statement; `quarterly` selects quarterly periods.
        method: cashflow(symbol: &Symbol, quarterly: bool) -> StatementTable,
        accessor: as_cashflow_provider,
        capability: Capability::Cashflow,
        not_found: "fundamentals",
        call: cashflow(symbol, quarterly)
    }

    dalal_router_method! {
        /// Fetch yearly and quarterly earnings.
        method: earnings(symbol: &Symbol) -> EarningsReport,
        accessor: as_earnings_provider,
        capability: Capability::Earnings,
        not_found: "earnings",
        call: earnings(symbol)
    }
}
