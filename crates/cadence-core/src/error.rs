use thiserror::Error;

/// Rule validation errors.
///
/// All of these are detected when a rule is built or converted from raw
/// provider data; a rule that exists is always expandable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Unknown frequency: {0:?}")]
    UnknownFrequency(String),

    #[error("Interval must be at least 1, got {0}")]
    NonPositiveInterval(i64),

    #[error("Day of month must be in 1..=31, got {0}")]
    MonthDayOutOfRange(i64),

    #[error("Count must be at least 1 when set")]
    ZeroCount,

    #[error("Until timestamp {0} is not a representable instant")]
    UntilOutOfRange(i64),
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
