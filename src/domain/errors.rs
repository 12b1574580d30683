use thiserror::Error;

/// Errors raised while synthesizing a price series
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Day count must be positive, got {0}")]
    NonPositiveDayCount(i64),

    #[error("Day count {0} reaches outside the supported calendar range")]
    CalendarOutOfRange(i64),
}
