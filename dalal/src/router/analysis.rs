use crate::Dalal;
use crate::dalal_router_method;
use dalal_core::{Capability, Recommendation, Symbol};

impl Dalal {
    dalal_router_method! {
        /// Fetch analyst recommendation rows, oldest period first.
        ///
        /// Behavior: may return an empty vector when a provider is reachable but
        /// has no coverage.
        method: recommendations(symbol: &Symbol) -> Vec<Recommendation>,
        accessor: as_recommendations_provider,
        capability: Capability::Recommendations,
        not_found: "analysis",
        call: recommendations(symbol)
    }
}
