use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Price series contains no trading days")]
    EmptyPriceSeries,

    #[error("Price series dates must be strictly increasing; violated at {at}")]
    NonMonotonicPriceDates { at: NaiveDate },

    #[error("Close price on {date} must be positive, got {price}")]
    NonPositivePrice { date: NaiveDate, price: Decimal },

    #[error("Traded volume on {date} must not be negative, got {volume}")]
    NegativeVolume { date: NaiveDate, volume: Decimal },

    #[error("Dividend ex-dates must be in chronological order; violated at {at}")]
    NonMonotonicDividendDates { at: NaiveDate },

    #[error("Dividend amount with ex-date {ex_date} must not be negative, got {amount}")]
    NegativeDividend { ex_date: NaiveDate, amount: Decimal },

    #[error("Start date {start} must be strictly before end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Initial investment must be positive, got {amount}")]
    NonPositiveInvestment { amount: Decimal },

    #[error("Monthly investment must not be negative, got {amount}")]
    NegativeMonthlyInvestment { amount: Decimal },
}
