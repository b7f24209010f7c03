use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("No trading data available on or after {after}")]
    NoTradingData { after: NaiveDate },
}
