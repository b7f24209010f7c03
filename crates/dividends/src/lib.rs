//! # Dripline Dividend Accrual
//!
//! Stateless aggregation of dividend events into monthly cash amounts.
//! Takes the events the engine has already narrowed to the simulation
//! window, sums the per-share amounts that fall inside one calendar month,
//! and converts the sum to cash at the position's current share count.
//!
//! Dividends are valued at the share count current when the month is
//! processed; shares acquired later in the same month earn nothing
//! retroactively.

use calendar::MonthWindow;
use core_types::DividendEvent;
use rust_decimal::Decimal;

/// The per-share dividend sum for events with an ex-date inside `window`.
pub fn accrued_per_share(events: &[DividendEvent], window: &MonthWindow) -> Decimal {
    events
        .iter()
        .filter(|event| window.contains(event.ex_date))
        .map(|event| event.amount_per_share)
        .sum()
}

/// The gross dividend cash a holding of `current_shares` collects for the
/// month covered by `window`. Zero when no event falls in the window.
pub fn monthly_dividend(
    events: &[DividendEvent],
    window: &MonthWindow,
    current_shares: Decimal,
) -> Decimal {
    let per_share = accrued_per_share(events, window);
    if per_share.is_zero() {
        return Decimal::ZERO;
    }
    let cash = per_share * current_shares;
    tracing::debug!(
        month_start = %window.start,
        %per_share,
        %current_shares,
        %cash,
        "monthly dividend accrued"
    );
    cash
}
