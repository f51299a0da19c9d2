//! Recurrence rule data model.

use chrono::{DateTime, Utc};

use crate::error::{RuleError, RuleResult};

mod frequency;
mod raw;
mod weekday;

pub use frequency::Frequency;
pub use raw::RawRule;
pub use weekday::{Weekday, WeekdaySet};

/// A validated recurrence rule.
///
/// Immutable once built: construct one with [`RecurrenceRule::builder`] (or
/// the per-frequency shorthands) and hand it to the expander. A value of
/// this type always satisfies `interval >= 1`, `by_month_day` in `1..=31`,
/// and `count >= 1` when set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    freq: Frequency,
    interval: u32,
    by_day: WeekdaySet,
    by_month_day: Option<u8>,
    until: Option<DateTime<Utc>>,
    count: Option<u32>,
}

impl RecurrenceRule {
    /// Starts building a rule with the given frequency.
    ///
    /// The builder defaults are explicit: `interval` 1, no weekday mask, no
    /// day-of-month, no `until`, no `count`.
    #[must_use]
    pub fn builder(freq: Frequency) -> RuleBuilder {
        RuleBuilder {
            freq,
            interval: 1,
            by_day: WeekdaySet::empty(),
            by_month_day: None,
            until: None,
            count: None,
        }
    }

    /// Starts building a daily rule.
    #[must_use]
    pub fn daily() -> RuleBuilder {
        Self::builder(Frequency::Daily)
    }

    /// Starts building a weekly rule.
    #[must_use]
    pub fn weekly() -> RuleBuilder {
        Self::builder(Frequency::Weekly)
    }

    /// Starts building a monthly rule.
    #[must_use]
    pub fn monthly() -> RuleBuilder {
        Self::builder(Frequency::Monthly)
    }

    /// Starts building a yearly rule.
    #[must_use]
    pub fn yearly() -> RuleBuilder {
        Self::builder(Frequency::Yearly)
    }

    /// The recurrence frequency.
    #[must_use]
    pub const fn freq(&self) -> Frequency {
        self.freq
    }

    /// Step multiplier between frequency units. Always at least 1.
    #[must_use]
    pub const fn interval(&self) -> u32 {
        self.interval
    }

    /// Weekday constraint for weekly and monthly rules. Empty when unset.
    #[must_use]
    pub const fn by_day(&self) -> WeekdaySet {
        self.by_day
    }

    /// Day-of-month constraint for monthly and yearly rules.
    #[must_use]
    pub const fn by_month_day(&self) -> Option<u8> {
        self.by_month_day
    }

    /// Inclusive upper bound: no occurrence falls strictly after this
    /// instant.
    #[must_use]
    pub const fn until(&self) -> Option<DateTime<Utc>> {
        self.until
    }

    /// Cap on the total number of occurrences the rule ever produces.
    #[must_use]
    pub const fn count(&self) -> Option<u32> {
        self.count
    }

    /// Whether the rule is bounded by `until` or `count`.
    ///
    /// An unbounded rule over an unbounded window is an infinite sequence;
    /// the expander streams it lazily either way.
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.until.is_some() || self.count.is_some()
    }
}

/// Builder for [`RecurrenceRule`].
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    freq: Frequency,
    interval: u32,
    by_day: WeekdaySet,
    by_month_day: Option<u8>,
    until: Option<DateTime<Utc>>,
    count: Option<u32>,
}

impl RuleBuilder {
    /// Sets the step multiplier between frequency units.
    #[must_use]
    pub const fn interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Constrains weekly and monthly expansion to the given weekdays.
    #[must_use]
    pub fn by_day<I: IntoIterator<Item = Weekday>>(mut self, days: I) -> Self {
        self.by_day = days.into_iter().collect();
        self
    }

    /// Constrains monthly and yearly expansion to the given day of month.
    #[must_use]
    pub const fn by_month_day(mut self, day: u8) -> Self {
        self.by_month_day = Some(day);
        self
    }

    /// Sets the inclusive end instant.
    ///
    /// When both `until` and `count` are set, whichever bound is reached
    /// first terminates expansion.
    #[must_use]
    pub const fn until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    /// Caps the total number of occurrences.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Validates and builds the rule.
    ///
    /// ## Errors
    ///
    /// Returns [`RuleError::NonPositiveInterval`] when `interval` is 0,
    /// [`RuleError::MonthDayOutOfRange`] when `by_month_day` is outside
    /// `1..=31`, and [`RuleError::ZeroCount`] when `count` is set to 0.
    pub fn build(self) -> RuleResult<RecurrenceRule> {
        if self.interval == 0 {
            return Err(RuleError::NonPositiveInterval(0));
        }
        if let Some(day) = self.by_month_day
            && !(1..=31).contains(&day)
        {
            return Err(RuleError::MonthDayOutOfRange(i64::from(day)));
        }
        if self.count == Some(0) {
            return Err(RuleError::ZeroCount);
        }

        Ok(RecurrenceRule {
            freq: self.freq,
            interval: self.interval,
            by_day: self.by_day,
            by_month_day: self.by_month_day,
            until: self.until,
            count: self.count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn builder_defaults() {
        let rule = RecurrenceRule::daily().build().expect("valid rule");
        assert_eq!(rule.freq(), Frequency::Daily);
        assert_eq!(rule.interval(), 1);
        assert!(rule.by_day().is_empty());
        assert_eq!(rule.by_month_day(), None);
        assert_eq!(rule.until(), None);
        assert_eq!(rule.count(), None);
        assert!(!rule.is_bounded());
    }

    #[test]
    fn rejects_zero_interval() {
        let err = RecurrenceRule::weekly().interval(0).build().unwrap_err();
        assert_eq!(err, RuleError::NonPositiveInterval(0));
    }

    #[test]
    fn rejects_out_of_range_month_day() {
        let err = RecurrenceRule::monthly().by_month_day(32).build().unwrap_err();
        assert_eq!(err, RuleError::MonthDayOutOfRange(32));

        let err = RecurrenceRule::monthly().by_month_day(0).build().unwrap_err();
        assert_eq!(err, RuleError::MonthDayOutOfRange(0));
    }

    #[test]
    fn rejects_zero_count() {
        let err = RecurrenceRule::daily().count(0).build().unwrap_err();
        assert_eq!(err, RuleError::ZeroCount);
    }

    #[test]
    fn accepts_both_until_and_count() {
        let until = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        let rule = RecurrenceRule::daily()
            .count(10)
            .until(until)
            .build()
            .expect("both bounds may be set");
        assert_eq!(rule.count(), Some(10));
        assert_eq!(rule.until(), Some(until));
        assert!(rule.is_bounded());
    }
}
