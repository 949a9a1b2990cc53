//! Mapping from `yfinance-rs` payloads into dalal records.

use chrono::{DateTime, Duration, Utc};
use dalal_core::{
    CompanyInfo, Dividend, EarningsReport, Headline, Interval, PricePoint, QuarterlyEarnings,
    Recommendation, Split, StatementKind, StatementLine, StatementTable, Symbol, TickerSnapshot,
    YearlyEarnings,
};
use paft::market::requests::history::Interval as YfInterval;
use paft::money::Money;
use rust_decimal::Decimal;
use yfinance_rs as yf;

pub fn amount(m: Option<&Money>) -> Option<Decimal> {
    m.map(Money::amount)
}

pub const fn interval(i: Interval) -> YfInterval {
    match i {
        Interval::I1m => YfInterval::I1m,
        Interval::I5m => YfInterval::I5m,
        Interval::I15m => YfInterval::I15m,
        Interval::I1h => YfInterval::I1h,
        Interval::D1 => YfInterval::D1,
        Interval::W1 => YfInterval::W1,
        Interval::M1 => YfInterval::M1,
    }
}

pub fn history_request(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    interval: YfInterval,
    include_actions: bool,
) -> yf::core::services::HistoryRequest {
    yf::core::services::HistoryRequest {
        range: None,
        period: Some((start.timestamp(), end.timestamp())),
        interval,
        include_prepost: false,
        include_actions,
        auto_adjust: true,
        keepna: false,
    }
}

pub fn closes(candles: &[yf::Candle]) -> Vec<PricePoint> {
    candles
        .iter()
        .map(|c| PricePoint {
            ts: c.ts,
            close: c.close.amount(),
        })
        .collect()
}

/// Fill session and 52-week fields from a year of daily candles.
///
/// The last bar gives open, high and low; the whole series gives the range.
/// Previous close falls back to the second-to-last close when the quote lacks it.
pub fn apply_candles(snap: &mut TickerSnapshot, candles: &[yf::Candle]) {
    let Some(last) = candles.last() else {
        return;
    };
    snap.open = Some(last.open.amount());
    snap.day_high = Some(last.high.amount());
    snap.day_low = Some(last.low.amount());
    snap.fifty_two_week_low = candles.iter().map(|c| c.low.amount()).min();
    snap.fifty_two_week_high = candles.iter().map(|c| c.high.amount()).max();
    if snap.previous_close.is_none() && candles.len() >= 2 {
        snap.previous_close = Some(candles[candles.len() - 2].close.amount());
    }
}

pub fn apply_profile(
    sector: &mut Option<String>,
    industry: &mut Option<String>,
    profile: &yf::profile::Profile,
) {
    if let yf::profile::Profile::Company(c) = profile {
        sector.clone_from(&c.sector);
        industry.clone_from(&c.industry);
    }
}

pub fn company_info(
    symbol: &Symbol,
    quote: Option<&yf::core::Quote>,
    profile: Option<&yf::profile::Profile>,
) -> CompanyInfo {
    let mut info = CompanyInfo::empty(symbol.clone());
    if let Some(q) = quote {
        info.short_name.clone_from(&q.shortname);
        info.exchange = q.exchange.as_ref().map(ToString::to_string);
    }
    if let Some(p) = profile {
        apply_profile(&mut info.sector, &mut info.industry, p);
        if let yf::profile::Profile::Company(c) = p {
            info.website.clone_from(&c.website);
            if info.short_name.is_none() && !c.name.is_empty() {
                info.short_name = Some(c.name.clone());
            }
        }
    }
    info
}

/// Fill the ratios Yahoo does not hand over directly.
///
/// Trailing P/E needs all of the last four quarterly EPS figures and a positive
/// sum. Dividend yield is the last year of dividends over the quote price, as a
/// fraction; a ticker with no dividends in that year keeps it absent.
pub fn apply_ratios(
    info: &mut CompanyInfo,
    price: Option<Decimal>,
    earnings: Option<&yf::fundamentals::Earnings>,
    actions: &[paft::market::action::Action],
    now: DateTime<Utc>,
) {
    let Some(price) = price.filter(|p| p.is_sign_positive() && !p.is_zero()) else {
        return;
    };

    if let Some(e) = earnings {
        let last_four: Vec<Option<Decimal>> = e
            .quarterly_eps
            .iter()
            .rev()
            .take(4)
            .map(|q| amount(q.actual.as_ref()))
            .collect();
        if last_four.len() == 4 {
            let ttm: Option<Decimal> = last_four.into_iter().sum();
            if let Some(ttm) = ttm.filter(|t| t.is_sign_positive() && !t.is_zero()) {
                info.trailing_pe = Some((price / ttm).round_dp(2));
            }
        }
    }

    let cutoff = now - Duration::days(365);
    let paid: Vec<Decimal> = dividends(actions)
        .into_iter()
        .filter(|d| d.ts >= cutoff)
        .map(|d| d.amount)
        .collect();
    if !paid.is_empty() {
        let total: Decimal = paid.into_iter().sum();
        info.dividend_yield = Some((total / price).round_dp(4));
    }
}

pub fn headline(a: yf::news::NewsArticle) -> Headline {
    Headline {
        title: Some(a.title).filter(|t| !t.trim().is_empty()),
        publisher: a.publisher.filter(|p| !p.trim().is_empty()),
    }
}

pub fn dividends(actions: &[paft::market::action::Action]) -> Vec<Dividend> {
    use paft::market::action::Action;
    let mut out: Vec<Dividend> = actions
        .iter()
        .filter_map(|a| match a {
            Action::Dividend { ts, amount } => Some(Dividend {
                ts: *ts,
                amount: amount.amount(),
            }),
            _ => None,
        })
        .collect();
    out.sort_by_key(|d| d.ts);
    out
}

pub fn splits(actions: &[paft::market::action::Action]) -> Vec<Split> {
    use paft::market::action::Action;
    let mut out: Vec<Split> = actions
        .iter()
        .filter_map(|a| match a {
            Action::Split {
                ts,
                numerator,
                denominator,
            } => Some(Split {
                ts: *ts,
                numerator: u32::try_from(*numerator).ok()?,
                denominator: u32::try_from(*denominator).ok()?,
            }),
            _ => None,
        })
        .collect();
    out.sort_by_key(|s| s.ts);
    out
}

pub fn recommendations(rows: Vec<yf::analysis::RecommendationRow>) -> Vec<Recommendation> {
    fn count<T>(v: Option<T>) -> Option<u64>
    where
        u64: TryFrom<T>,
    {
        v.and_then(|n| u64::try_from(n).ok())
    }
    rows.into_iter()
        .map(|r| Recommendation {
            period: r.period.to_string(),
            strong_buy: count(r.strong_buy),
            buy: count(r.buy),
            hold: count(r.hold),
            sell: count(r.sell),
            strong_sell: count(r.strong_sell),
        })
        .collect()
}

pub fn earnings(e: yf::fundamentals::Earnings) -> EarningsReport {
    EarningsReport {
        yearly: e
            .yearly
            .into_iter()
            .map(|y| YearlyEarnings {
                year: i64::from(y.year),
                revenue: amount(y.revenue.as_ref()),
                earnings: amount(y.earnings.as_ref()),
            })
            .collect(),
        quarterly: e
            .quarterly
            .into_iter()
            .map(|q| QuarterlyEarnings {
                period: q.period.to_string(),
                revenue: amount(q.revenue.as_ref()),
                earnings: amount(q.earnings.as_ref()),
            })
            .collect(),
    }
}

fn line<R>(label: &str, rows: &[R], get: impl Fn(&R) -> Option<&Money>) -> StatementLine {
    StatementLine {
        label: label.to_string(),
        values: rows.iter().map(|r| amount(get(r))).collect(),
    }
}

pub fn income_statement(rows: &[yf::fundamentals::IncomeStatementRow]) -> StatementTable {
    StatementTable {
        kind: StatementKind::Income,
        periods: rows.iter().map(|r| r.period.to_string()).collect(),
        lines: vec![
            line("Total Revenue", rows, |r| r.total_revenue.as_ref()),
            line("Gross Profit", rows, |r| r.gross_profit.as_ref()),
            line("Operating Income", rows, |r| r.operating_income.as_ref()),
            line("Net Income", rows, |r| r.net_income.as_ref()),
        ],
    }
}

pub fn balance_sheet(rows: &[yf::fundamentals::BalanceSheetRow]) -> StatementTable {
    StatementTable {
        kind: StatementKind::BalanceSheet,
        periods: rows.iter().map(|r| r.period.to_string()).collect(),
        lines: vec![
            line("Total Assets", rows, |r| r.total_assets.as_ref()),
            line("Total Liabilities", rows, |r| r.total_liabilities.as_ref()),
            line("Total Equity", rows, |r| r.total_equity.as_ref()),
            line("Cash", rows, |r| r.cash.as_ref()),
            line("Long Term Debt", rows, |r| r.long_term_debt.as_ref()),
        ],
    }
}

pub fn cashflow(rows: &[yf::fundamentals::CashflowRow]) -> StatementTable {
    StatementTable {
        kind: StatementKind::Cashflow,
        periods: rows.iter().map(|r| r.period.to_string()).collect(),
        lines: vec![
            line("Operating Cash Flow", rows, |r| r.operating_cashflow.as_ref()),
            line("Capital Expenditures", rows, |r| r.capital_expenditures.as_ref()),
            line("Free Cash Flow", rows, |r| r.free_cash_flow.as_ref()),
            line("Net Income", rows, |r| r.net_income.as_ref()),
        ],
    }
}
