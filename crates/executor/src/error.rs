use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutorError {
    #[error("No price row for trading day {date}; the calendar and the price series disagree")]
    MissingPrice { date: NaiveDate },
}
