use crate::Dalal;
use crate::dalal_router_method;
use dalal_core::{Capability, CompanyInfo, Symbol};

impl Dalal {
    dalal_router_method! {
        /// Fetch company metadata for the detail panel.
        ///
        /// An info record without a short name means the provider did not
        /// recognise the ticker.
        method: company_info(symbol: &Symbol) -> CompanyInfo,
        accessor: as_company_info_provider,
        capability: Capability::CompanyInfo,
        not_found: "company info",
        call: company_info(symbol)
    }
}
