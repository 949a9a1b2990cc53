use crate::Dalal;
use crate::dalal_router_method;
use dalal_core::{Capability, Symbol, TickerSnapshot};

impl Dalal {
    dalal_router_method! {
        /// Fetch the summary snapshot (sector, industry, prices, ranges) for a symbol.
        ///
        /// Behavior: the first connector that answers wins; fields the provider omits
        /// stay `None`.
        method: snapshot(symbol: &Symbol) -> TickerSnapshot,
        accessor: as_snapshot_provider,
        capability: Capability::Snapshot,
        not_found: "snapshot",
        call: snapshot(symbol)
    }
}
