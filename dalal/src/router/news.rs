use crate::Dalal;
use crate::dalal_router_method;
use dalal_core::{Capability, Headline, Symbol};

impl Dalal {
    dalal_router_method! {
        /// Fetch up to `limit` recent headlines for a symbol.
        ///
        /// Behavior: headlines keep provider order; missing titles and publishers are
        /// left as `None` for the presenter to fill in.
        method: news(symbol: &Symbol, limit: usize) -> Vec<Headline>,
        accessor: as_news_provider,
        capability: Capability::News,
        not_found: "news",
        call: news(symbol, limit)
    }
}
