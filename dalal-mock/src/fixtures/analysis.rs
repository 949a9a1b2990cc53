use dalal_core::Recommendation;

pub fn recommendations_by_symbol(s: &str) -> Vec<Recommendation> {
    match s {
        "INFY.NS" => vec![
            row("2024-06", [8, 20, 9, 2, 1]),
            row("2024-07", [9, 21, 8, 2, 1]),
            row("2024-08", [10, 22, 7, 1, 1]),
        ],
        "WIPRO.NS" => vec![row("2024-08", [2, 8, 18, 9, 4])],
        _ => vec![],
    }
}

fn row(period: &str, counts: [u64; 5]) -> Recommendation {
    let [strong_buy, buy, hold, sell, strong_sell] = counts.map(Some);
    Recommendation {
        period: period.to_string(),
        strong_buy,
        buy,
        hold,
        sell,
        strong_sell,
    }
}
