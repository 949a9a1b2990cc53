use dalal_core::Headline;

pub fn by_symbol(s: &str) -> Vec<Headline> {
    match s {
        "INFY.NS" => vec![
            h(Some("Infosys wins multi-year deal with European bank"), Some("Mint")),
            h(Some("IT stocks rally as rupee weakens"), Some("Business Standard")),
            h(Some("Infosys raises revenue guidance"), None),
            h(None, Some("Reuters")),
            h(Some("Nifty IT index hits record high"), Some("Moneycontrol")),
            h(Some("Analysts upgrade Infosys on margin outlook"), Some("ET Markets")),
        ],
        "WIPRO.NS" => vec![h(
            Some("Wipro announces bonus issue"),
            Some("The Hindu BusinessLine"),
        )],
        _ => vec![],
    }
}

fn h(title: Option<&str>, publisher: Option<&str>) -> Headline {
    Headline {
        title: title.map(str::to_string),
        publisher: publisher.map(str::to_string),
    }
}
