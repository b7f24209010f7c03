use crate::enums::TransactionKind;
use crate::error::ValidationError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single trading day: the market was open and produced a daily bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

/// The ordered daily price history of one security.
///
/// Construction validates the invariants the rest of the system relies on:
/// the series is non-empty, trading dates are strictly increasing (and
/// therefore unique), closes are positive and volumes non-negative.
/// Read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Result<Self, ValidationError> {
        if points.is_empty() {
            return Err(ValidationError::EmptyPriceSeries);
        }
        for window in points.windows(2) {
            if window[1].date <= window[0].date {
                return Err(ValidationError::NonMonotonicPriceDates {
                    at: window[1].date,
                });
            }
        }
        for point in &points {
            if point.close <= Decimal::ZERO {
                return Err(ValidationError::NonPositivePrice {
                    date: point.date,
                    price: point.close,
                });
            }
            if point.volume < Decimal::ZERO {
                return Err(ValidationError::NegativeVolume {
                    date: point.date,
                    volume: point.volume,
                });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First trading date in the series.
    pub fn first_date(&self) -> NaiveDate {
        self.points[0].date
    }

    /// Last trading date in the series.
    pub fn last_date(&self) -> NaiveDate {
        self.points[self.points.len() - 1].date
    }

    /// Exact lookup of a trading day. `None` means the market was closed
    /// on `date` (or the date lies outside the series).
    pub fn get(&self, date: NaiveDate) -> Option<&PricePoint> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|idx| &self.points[idx])
    }

    /// Index of the first trading day at or after `date`, if any.
    pub fn index_on_or_after(&self, date: NaiveDate) -> Option<usize> {
        let idx = self.points.partition_point(|p| p.date < date);
        (idx < self.points.len()).then_some(idx)
    }
}

/// A single dividend entitlement: on `ex_date`, holders receive
/// `amount_per_share` in cash for every share held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendEvent {
    pub ex_date: NaiveDate,
    pub amount_per_share: Decimal,
}

/// The ordered dividend history of one security. May be empty — a security
/// that pays no dividends is perfectly valid input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DividendSeries {
    events: Vec<DividendEvent>,
}

impl DividendSeries {
    pub fn new(events: Vec<DividendEvent>) -> Result<Self, ValidationError> {
        for window in events.windows(2) {
            if window[1].ex_date < window[0].ex_date {
                return Err(ValidationError::NonMonotonicDividendDates {
                    at: window[1].ex_date,
                });
            }
        }
        for event in &events {
            if event.amount_per_share < Decimal::ZERO {
                return Err(ValidationError::NegativeDividend {
                    ex_date: event.ex_date,
                    amount: event.amount_per_share,
                });
            }
        }
        Ok(Self { events })
    }

    /// A series with no dividend events.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DividendEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The events with ex-dates inside the inclusive [start, end] window.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> &[DividendEvent] {
        let lo = self.events.partition_point(|e| e.ex_date < start);
        let hi = self.events.partition_point(|e| e.ex_date <= end);
        &self.events[lo..hi]
    }
}

/// One immutable entry in the simulation's transaction ledger.
///
/// `cash_amount` is the cash converted into shares (`shares * price`); the
/// fee charged on the order is carried separately in `fee`, so the total
/// outlay of the trade is `cash_amount + fee`. Ledger append order is
/// chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub shares: Decimal,
    pub price: Decimal,
    pub cash_amount: Decimal,
    pub fee: Decimal,
}

/// The aggregate share holding of a simulation run.
///
/// Shares only ever accumulate; no sells are modeled.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub shares: Decimal,
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds acquired shares to the position.
    pub fn add_shares(&mut self, shares: Decimal) {
        self.shares += shares;
    }

    pub fn is_flat(&self) -> bool {
        self.shares.is_zero()
    }
}

/// The caller-facing parameters of one simulation run.
///
/// `monthly_investment` is accepted for interface compatibility but is not
/// applied during stepping; only the initial lump sum and dividend
/// reinvestment change the share count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub initial_investment: Decimal,
    pub monthly_investment: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reinvest_dividends: bool,
}

impl SimulationRequest {
    /// Checks the request parameters before a run starts.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_date >= self.end_date {
            return Err(ValidationError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.initial_investment <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveInvestment {
                amount: self.initial_investment,
            });
        }
        if self.monthly_investment < Decimal::ZERO {
            return Err(ValidationError::NegativeMonthlyInvestment {
                amount: self.monthly_investment,
            });
        }
        Ok(())
    }
}
