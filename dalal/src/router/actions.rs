use crate::Dalal;
use crate::dalal_router_method;
use dalal_core::{Capability, Dividend, Split, Symbol};

impl Dalal {
    dalal_router_method! {
        /// Fetch the dividend history, oldest first.
        method: dividends(symbol: &Symbol) -> Vec<Dividend>,
        accessor: as_dividends_provider,
        capability: Capability::Dividends,
        not_found: "dividends",
        call: dividends(symbol)
    }

    dalal_router_method! {
        /// Fetch the split history, oldest first.
        method: splits(symbol: &Symbol) -> Vec<Split>,
        accessor: as_splits_provider,
        capability: Capability::Splits,
        not_found: "splits",
        call: splits(symbol)
    }
}
