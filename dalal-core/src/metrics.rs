//! Price-performance arithmetic shown in the detail view.

use rust_decimal::Decimal;

use dalal_types::{ABSENT, PriceChange};

/// Absolute and percentage change of `current` relative to `base`.
///
/// Returns `None` when `base` is zero, so callers render the metric as absent.
#[must_use]
pub fn change_from(current: Decimal, base: Decimal) -> Option<PriceChange> {
    if base.is_zero() {
        return None;
    }
    let change = current - base;
    let percent = change.checked_div(base)?.checked_mul(Decimal::ONE_HUNDRED)?;
    Some(PriceChange { change, percent })
}

/// Today's change: current price against the previous close.
#[must_use]
pub fn todays_change(current: Option<Decimal>, previous_close: Option<Decimal>) -> Option<PriceChange> {
    change_from(current?, previous_close?)
}

/// 52-week performance: current price against the 52-week low.
#[must_use]
pub fn fifty_two_week_performance(
    current: Option<Decimal>,
    fifty_two_week_low: Option<Decimal>,
) -> Option<PriceChange> {
    change_from(current?, fifty_two_week_low?)
}

/// Render a `low – high` range, or the absent marker when either side is
/// missing or zero.
#[must_use]
pub fn format_range(low: Option<Decimal>, high: Option<Decimal>) -> String {
    match (low, high) {
        (Some(l), Some(h)) if !l.is_zero() && !h.is_zero() => format!("{l} – {h}"),
        _ => ABSENT.to_string(),
    }
}

/// Render a [`PriceChange`] as `change (percent%)` with two decimal places.
#[must_use]
pub fn format_change(change: &PriceChange) -> String {
    format!(
        "{:.2} ({:.2}%)",
        change.change.round_dp(2),
        change.percent.round_dp(2)
    )
}
