use dalal_core::{CompanyInfo, Symbol};

use super::d;

pub fn by_symbol(s: &str) -> Option<CompanyInfo> {
    let (name, sector, industry, cap, beta, pe, yld, web) = match s {
        "INFY.NS" => (
            "Infosys Limited",
            "Technology",
            "Information Technology Services",
            "6230000000000",
            "0.52",
            "23.4",
            "0.029",
            "https://www.infosys.com",
        ),
        "WIPRO.NS" => (
            "Wipro Limited",
            "Technology",
            "Information Technology Services",
            "2620000000000",
            "0.61",
            "20.1",
            "0.024",
            "https://www.wipro.com",
        ),
        "TCS.NS" => (
            "Tata Consultancy Services Limited",
            "Technology",
            "Information Technology Services",
            "12380000000000",
            "0.44",
            "25.7",
            "0.018",
            "https://www.tcs.com",
        ),
        "HDFCBANK.NS" => (
            "HDFC Bank Limited",
            "Financial Services",
            "Banks - Regional",
            "13020000000000",
            "0.71",
            "19.2",
            "0.011",
            "https://www.hdfcbank.com",
        ),
        "RELIANCE.NS" => (
            "Reliance Industries Limited",
            "Energy",
            "Oil & Gas Refining & Marketing",
            "18810000000000",
            "0.35",
            "27.9",
            "0.004",
            "https://www.ril.com",
        ),
        _ => return None,
    };
    let symbol = Symbol::new(s).ok()?;
    Some(CompanyInfo {
        short_name: Some(name.to_string()),
        sector: Some(sector.to_string()),
        industry: Some(industry.to_string()),
        exchange: Some("NSI".to_string()),
        market_cap: Some(d(cap)),
        beta: Some(d(beta)),
        trailing_pe: Some(d(pe)),
        dividend_yield: Some(d(yld)),
        website: Some(web.to_string()),
        ..CompanyInfo::empty(symbol)
    })
}
