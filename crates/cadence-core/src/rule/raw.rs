//! Raw provider-side rule record.
//!
//! Calendar-sync collaborators deliver recurrence data in the device
//! record's shape: a free-text frequency, a seven-flag weekday array with a
//! presence flag, an epoch-seconds `until` where 0 means unset, and a
//! `count` where 0 means uncapped. [`RawRule`] mirrors that shape verbatim;
//! conversion into [`RecurrenceRule`] is where validation happens.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RuleError, RuleResult};

use super::{Frequency, RecurrenceRule, WeekdaySet};

/// Unvalidated recurrence record as received from a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRule {
    /// Free-text frequency (`"DAILY"`, `"WEEKLY"`, `"MONTHLY"`, `"YEARLY"`).
    pub freq: String,

    /// Step multiplier; providers default this to 1.
    #[serde(default = "default_interval")]
    pub interval: i32,

    /// Whether the weekday flags are meaningful.
    #[serde(default)]
    pub has_by_day: bool,

    /// Weekday flags, Sunday=0 through Saturday=6.
    #[serde(default)]
    pub by_day: [bool; 7],

    /// Whether `by_month_day` is meaningful.
    #[serde(default)]
    pub has_by_month_day: bool,

    /// Day of month, only read when `has_by_month_day` is set.
    #[serde(default)]
    pub by_month_day: i32,

    /// Inclusive end as epoch seconds; 0 means no end bound.
    #[serde(default)]
    pub until: i64,

    /// Total occurrence cap; 0 means uncapped.
    #[serde(default)]
    pub count: u32,
}

const fn default_interval() -> i32 {
    1
}

impl TryFrom<RawRule> for RecurrenceRule {
    type Error = RuleError;

    fn try_from(raw: RawRule) -> RuleResult<Self> {
        let freq = Frequency::parse(&raw.freq)
            .ok_or_else(|| RuleError::UnknownFrequency(raw.freq.clone()))?;

        if raw.interval < 1 {
            return Err(RuleError::NonPositiveInterval(i64::from(raw.interval)));
        }

        let mut builder = Self::builder(freq).interval(raw.interval.unsigned_abs());

        if raw.has_by_day {
            builder = builder.by_day(WeekdaySet::from(raw.by_day).iter());
        }

        if raw.has_by_month_day {
            let day = u8::try_from(raw.by_month_day)
                .map_err(|_| RuleError::MonthDayOutOfRange(i64::from(raw.by_month_day)))?;
            builder = builder.by_month_day(day);
        }

        if raw.until != 0 {
            let until = DateTime::from_timestamp(raw.until, 0)
                .ok_or(RuleError::UntilOutOfRange(raw.until))?;
            builder = builder.until(until);
        }

        if raw.count != 0 {
            builder = builder.count(raw.count);
        }

        let rule = builder.build()?;
        debug!(freq = %rule.freq(), interval = rule.interval(), "accepted raw rule");
        Ok(rule)
    }
}
