#![cfg(feature = "test-adapters")]

use std::str::FromStr;
use std::sync::Arc;

use chrono::{Duration, Utc};

use dalal_core::{DalalError, Symbol, connector::CompanyInfoProvider};
use dalal_yfinance::{YfConnector, adapter::FakeApi};
use paft::domain::Symbol as PaftSymbol;
use paft::domain::Period;
use paft::fundamentals::profile::{CompanyProfile, Profile};
use paft::market::action::Action;
use paft::money::{Currency, IsoCurrency, Money};
use rust_decimal::Decimal;
use yfinance_rs as yf;

fn wipro_quote(shortname: Option<&str>) -> yf::core::Quote {
    yf::core::Quote {
        symbol: PaftSymbol::new("WIPRO.NS").unwrap(),
        shortname: shortname.map(str::to_string),
        price: None,
        previous_close: None,
        exchange: None,
        market_state: None,
        day_volume: None,
    }
}

fn wipro_profile() -> Profile {
    Profile::Company(CompanyProfile {
        name: "Wipro Limited".into(),
        sector: Some("Technology".into()),
        industry: Some("Information Technology Services".into()),
        website: Some("https://www.wipro.com".into()),
        summary: None,
        address: None,
        isin: None,
    })
}

fn connector(api: FakeApi) -> YfConnector {
    YfConnector::from_api(Arc::new(api))
}

#[tokio::test]
async fn company_info_merges_quote_and_profile() {
    let yf = connector(
        FakeApi::new()
            .quotes(|_| Ok(vec![wipro_quote(Some("WIPRO LTD"))]))
            .profile(|_| Ok(wipro_profile())),
    );
    let info = yf
        .company_info(&Symbol::new("WIPRO.NS").unwrap())
        .await
        .unwrap();

    assert_eq!(info.symbol.as_str(), "WIPRO.NS");
    assert_eq!(info.short_name.as_deref(), Some("WIPRO LTD"));
    assert_eq!(info.sector.as_deref(), Some("Technology"));
    assert_eq!(info.website.as_deref(), Some("https://www.wipro.com"));
    assert!(info.is_recognised());
}

#[tokio::test]
async fn profile_name_stands_in_for_missing_short_name() {
    let yf = connector(
        FakeApi::new()
            .quotes(|_| Ok(vec![wipro_quote(None)]))
            .profile(|_| Ok(wipro_profile())),
    );
    let info = yf
        .company_info(&Symbol::new("WIPRO.NS").unwrap())
        .await
        .unwrap();
    assert_eq!(info.short_name.as_deref(), Some("Wipro Limited"));
}

#[tokio::test]
async fn partial_info_when_profile_fails() {
    let yf = connector(
        FakeApi::new()
            .quotes(|_| Ok(vec![wipro_quote(Some("WIPRO LTD"))]))
            .profile(|_| Err(DalalError::connector("dalal-yfinance", "status 503: profile"))),
    );
    let info = yf
        .company_info(&Symbol::new("WIPRO.NS").unwrap())
        .await
        .unwrap();
    assert_eq!(info.short_name.as_deref(), Some("WIPRO LTD"));
    assert!(info.sector.is_none());
}

#[tokio::test]
async fn both_failing_surfaces_quote_error() {
    let yf = connector(
        FakeApi::new()
            .quotes(|_| Err(DalalError::connector("dalal-yfinance", "No data found")))
            .profile(|_| Err(DalalError::connector("dalal-yfinance", "No data found"))),
    );
    let err = yf
        .company_info(&Symbol::new("NOPE.NS").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, DalalError::NotFound { .. }));
}

fn usd(s: &str) -> Money {
    Money::from_canonical_str(s, Currency::Iso(IsoCurrency::USD)).unwrap()
}

fn eps(period: &str, actual: Option<&str>) -> yf::fundamentals::EarningsQuarterEps {
    yf::fundamentals::EarningsQuarterEps {
        period: period.parse::<Period>().unwrap(),
        actual: actual.map(usd),
        estimate: None,
    }
}

fn priced_quote(price: &str) -> yf::core::Quote {
    yf::core::Quote {
        price: Some(usd(price)),
        ..wipro_quote(Some("WIPRO LTD"))
    }
}

#[tokio::test]
async fn trailing_pe_and_dividend_yield_are_derived() {
    let api = FakeApi::new()
        .quotes(|_| Ok(vec![priced_quote("1530")]))
        .profile(|_| Ok(wipro_profile()))
        .earnings(|_| {
            Ok(yf::fundamentals::Earnings {
                yearly: vec![],
                quarterly: vec![],
                quarterly_eps: vec![
                    eps("2023Q4", Some("99")),
                    eps("2024Q1", Some("16")),
                    eps("2024Q2", Some("16")),
                    eps("2024Q3", Some("16")),
                    eps("2024Q4", Some("16")),
                ],
            })
        })
        .history(|_, req| {
            assert!(req.include_actions);
            let now = Utc::now();
            Ok(yf::HistoryResponse {
                candles: vec![],
                actions: vec![
                    Action::Dividend {
                        ts: now - Duration::days(700),
                        amount: usd("50"),
                    },
                    Action::Dividend {
                        ts: now - Duration::days(200),
                        amount: usd("18"),
                    },
                    Action::Dividend {
                        ts: now - Duration::days(30),
                        amount: usd("20.25"),
                    },
                ],
                adjusted: true,
                meta: None,
            })
        });
    let yf = connector(api);

    let info = yf
        .company_info(&Symbol::new("WIPRO.NS").unwrap())
        .await
        .unwrap();

    // 1530 / 64
    assert_eq!(info.trailing_pe, Some(Decimal::from_str("23.91").unwrap()));
    // (18 + 20.25) / 1530
    assert_eq!(info.dividend_yield, Some(Decimal::from_str("0.025").unwrap()));
    assert!(info.market_cap.is_none());
    assert!(info.beta.is_none());
}

#[tokio::test]
async fn ratios_stay_absent_without_enough_data() {
    let api = FakeApi::new()
        .quotes(|_| Ok(vec![priced_quote("1530")]))
        .earnings(|_| {
            Ok(yf::fundamentals::Earnings {
                yearly: vec![],
                quarterly: vec![],
                quarterly_eps: vec![
                    eps("2024Q2", Some("16")),
                    eps("2024Q3", None),
                    eps("2024Q4", Some("16")),
                ],
            })
        })
        .history(|_, _| Err(DalalError::connector("dalal-yfinance", "status 500: chart")));
    let yf = connector(api);

    let info = yf
        .company_info(&Symbol::new("WIPRO.NS").unwrap())
        .await
        .unwrap();

    assert_eq!(info.short_name.as_deref(), Some("WIPRO LTD"));
    assert!(info.trailing_pe.is_none());
    assert!(info.dividend_yield.is_none());
}
