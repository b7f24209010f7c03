use calendar::CalendarError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Terminal valuation failed: {0}")]
    Calendar(#[from] CalendarError),

    #[error("Calculation error: {0}")]
    Calculation(String),
}
