use chrono::{DateTime, Utc};
use thiserror::Error;

/// Expansion errors.
///
/// Both kinds are raised before any occurrence is produced; iteration itself
/// never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    #[error("Invalid rule: {0}")]
    Rule(#[from] cadence_core::RuleError),

    #[error("Invalid window: start {start} is after end {end}")]
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

pub type ExpandResult<T> = std::result::Result<T, ExpandError>;
