use dalal_core::TickerSnapshot;

use super::d;

pub fn by_symbol(s: &str) -> Option<TickerSnapshot> {
    match s {
        "INFY.NS" => Some(snap(
            "Technology",
            "Information Technology Services",
            ["1500.0", "1505.0", "1521.5", "1498.2", "1307.0", "2006.45"],
        )),
        "WIPRO.NS" => Some(snap(
            "Technology",
            "Information Technology Services",
            ["250.0", "251.1", "254.0", "249.35", "208.5", "324.6"],
        )),
        "TCS.NS" => Some(snap(
            "Technology",
            "Information Technology Services",
            ["3420.5", "3431.0", "3455.0", "3401.1", "3056.05", "4592.25"],
        )),
        "HDFCBANK.NS" => Some(snap(
            "Financial Services",
            "Banks - Regional",
            ["1702.3", "1699.0", "1718.9", "1690.0", "1363.55", "1794.0"],
        )),
        "RELIANCE.NS" => Some(snap(
            "Energy",
            "Oil & Gas Refining & Marketing",
            ["1390.1", "1392.0", "1401.8", "1380.4", "1114.85", "1608.95"],
        )),
        "ITC.NS" => Some(snap(
            "Consumer Defensive",
            "Tobacco",
            ["415.25", "416.0", "419.9", "412.3", "390.15", "528.5"],
        )),
        // Listed but the provider returns no classification or prices.
        "ZOMATO.NS" => Some(TickerSnapshot::default()),
        _ => None,
    }
}

fn snap(sector: &str, industry: &str, px: [&str; 6]) -> TickerSnapshot {
    let [prev, open, high, low, low52, high52] = px;
    TickerSnapshot {
        sector: Some(sector.to_string()),
        industry: Some(industry.to_string()),
        previous_close: Some(d(prev)),
        open: Some(d(open)),
        day_high: Some(d(high)),
        day_low: Some(d(low)),
        fifty_two_week_low: Some(d(low52)),
        fifty_two_week_high: Some(d(high52)),
    }
}
