//! # Dripline Trading Calendar
//!
//! Date normalization and trading-day arithmetic over a price series.
//! A "trading day" is simply a date present in the series: the calendar
//! derives everything from the data instead of hard-coding an exchange
//! holiday schedule.
//!
//! ## Architectural Principles
//!
//! - **One normalization entry point:** timestamps are collapsed to
//!   time-zone-free `NaiveDate` values here, once. Everything downstream
//!   works in plain calendar dates and never branches on time zones.
//! - **Explicit termination:** `next_month_first_trading_day` returns an
//!   `Option`, and `None` is the simulation loop's termination signal —
//!   not a sentinel date, not an exception.
//!
//! ## Public API
//!
//! - `TradingCalendar`: a borrow-view over a `PriceSeries`.
//! - `MonthWindow`: the inclusive first/last calendar days of one month.
//! - `CalendarError`: exhaustion of the underlying series.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveDateTime, Utc};
use core_types::PriceSeries;
use rust_decimal::Decimal;

pub mod error;

pub use error::CalendarError;

/// The inclusive calendar bounds of a single month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Trading-day arithmetic over one security's price history.
///
/// The calendar borrows the series for the duration of a simulation run;
/// it holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct TradingCalendar<'a> {
    series: &'a PriceSeries,
}

impl<'a> TradingCalendar<'a> {
    pub fn new(series: &'a PriceSeries) -> Self {
        Self { series }
    }

    /// Normalizes a UTC timestamp to the calendar-date reference of the
    /// price series.
    pub fn localize(&self, timestamp: DateTime<Utc>) -> NaiveDate {
        timestamp.date_naive()
    }

    /// Normalizes a time-zone-naive timestamp to a calendar date.
    pub fn localize_naive(&self, timestamp: NaiveDateTime) -> NaiveDate {
        timestamp.date()
    }

    /// The first trading day at or after `date`, with its close price.
    ///
    /// Fails when the series has no trading day on or after `date`, i.e.
    /// the history is exhausted.
    pub fn price_on_or_after(
        &self,
        date: NaiveDate,
    ) -> Result<(NaiveDate, Decimal), CalendarError> {
        let idx = self
            .series
            .index_on_or_after(date)
            .ok_or(CalendarError::NoTradingData { after: date })?;
        let point = &self.series.points()[idx];
        tracing::trace!(requested = %date, resolved = %point.date, close = %point.close, "price lookup");
        Ok((point.date, point.close))
    }

    /// The first trading day on or after the first calendar day of the
    /// month following `date`.
    ///
    /// `None` means the series ends before that day — the natural
    /// termination signal for the month-stepped simulation loop.
    pub fn next_month_first_trading_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        let next_month_first = Self::first_day_of_month(date).checked_add_months(Months::new(1))?;
        let idx = self.series.index_on_or_after(next_month_first)?;
        Some(self.series.points()[idx].date)
    }

    /// The inclusive calendar bounds of the month containing `date`.
    pub fn month_window(date: NaiveDate) -> MonthWindow {
        let start = Self::first_day_of_month(date);
        // Month arithmetic only overflows at the far end of chrono's date
        // range, which no market history reaches.
        let end = match start.checked_add_months(Months::new(1)) {
            Some(next_month_first) => next_month_first - Duration::days(1),
            None => NaiveDate::MAX,
        };
        MonthWindow { start, end }
    }

    fn first_day_of_month(date: NaiveDate) -> NaiveDate {
        date - Duration::days(i64::from(date.day0()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::PricePoint;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(dates: &[(i32, u32, u32)]) -> PriceSeries {
        let points = dates
            .iter()
            .map(|&(y, m, d)| PricePoint {
                date: date(y, m, d),
                open: dec!(100),
                high: dec!(100),
                low: dec!(100),
                close: dec!(100),
                volume: dec!(1_000_000),
            })
            .collect();
        PriceSeries::new(points).unwrap()
    }

    #[test]
    fn test_price_on_or_after_skips_closed_days() {
        let series = series(&[(2024, 1, 2), (2024, 1, 5), (2024, 1, 8)]);
        let calendar = TradingCalendar::new(&series);

        let (day, close) = calendar.price_on_or_after(date(2024, 1, 3)).unwrap();
        assert_eq!(day, date(2024, 1, 5));
        assert_eq!(close, dec!(100));
    }

    #[test]
    fn test_price_on_or_after_exhausted_series() {
        let series = series(&[(2024, 1, 2)]);
        let calendar = TradingCalendar::new(&series);

        assert_eq!(
            calendar.price_on_or_after(date(2024, 1, 3)),
            Err(CalendarError::NoTradingData {
                after: date(2024, 1, 3)
            })
        );
    }

    #[test]
    fn test_next_month_first_trading_day() {
        let series = series(&[(2024, 1, 2), (2024, 1, 31), (2024, 2, 5), (2024, 2, 6)]);
        let calendar = TradingCalendar::new(&series);

        // From anywhere in January, the next step lands on Feb 5 (the
        // first February trading day).
        assert_eq!(
            calendar.next_month_first_trading_day(date(2024, 1, 2)),
            Some(date(2024, 2, 5))
        );
        // From February the series is exhausted.
        assert_eq!(calendar.next_month_first_trading_day(date(2024, 2, 5)), None);
    }

    #[test]
    fn test_next_month_crosses_year_boundary() {
        let series = series(&[(2024, 12, 30), (2025, 1, 2)]);
        let calendar = TradingCalendar::new(&series);

        assert_eq!(
            calendar.next_month_first_trading_day(date(2024, 12, 30)),
            Some(date(2025, 1, 2))
        );
    }

    #[test]
    fn test_month_window_bounds() {
        let window = TradingCalendar::month_window(date(2024, 2, 14));
        assert_eq!(window.start, date(2024, 2, 1));
        assert_eq!(window.end, date(2024, 2, 29)); // leap year
        assert!(window.contains(date(2024, 2, 1)));
        assert!(window.contains(date(2024, 2, 29)));
        assert!(!window.contains(date(2024, 3, 1)));
    }

    #[test]
    fn test_localize_collapses_to_date() {
        let series = series(&[(2024, 1, 2)]);
        let calendar = TradingCalendar::new(&series);
        let ts = DateTime::parse_from_rfc3339("2024-01-02T21:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(calendar.localize(ts), date(2024, 1, 2));
    }
}
