use analytics::AnalyticsError;
use calendar::CalendarError;
use core_types::ValidationError;
use executor::ExecutorError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Trading calendar error: {0}")]
    Calendar(#[from] CalendarError),

    #[error("Trade execution error: {0}")]
    Executor(#[from] ExecutorError),

    #[error("Result aggregation error: {0}")]
    Analytics(#[from] AnalyticsError),
}
