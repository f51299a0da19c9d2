//! Expansion entry point.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use tracing::debug;

use cadence_core::{RawRule, RecurrenceRule};

use crate::error::{ExpandError, ExpandResult};

use super::occurrences::Occurrences;

/// Expands a recurrence rule into concrete occurrence instants.
///
/// Carries the rule together with its anchor (the first occurrence, given
/// as wall-clock time in the caller's timezone) and hands out lazy
/// [`Occurrences`] sequences for query windows. The expander never mutates
/// the rule and holds no shared state, so expansions over the same or
/// different rules may run concurrently.
#[derive(Debug, Clone)]
pub struct Expander {
    rule: RecurrenceRule,
    anchor: NaiveDateTime,
    tz: Tz,
}

impl Expander {
    /// Creates an expander for a validated rule.
    #[must_use]
    pub const fn new(rule: RecurrenceRule, anchor: NaiveDateTime, tz: Tz) -> Self {
        Self { rule, anchor, tz }
    }

    /// Creates an expander straight from provider data, validating it.
    ///
    /// ## Errors
    ///
    /// Returns [`ExpandError::Rule`] when the raw record has an unrecognized
    /// frequency, a non-positive interval, or an out-of-range day of month.
    pub fn from_raw(raw: RawRule, anchor: NaiveDateTime, tz: Tz) -> ExpandResult<Self> {
        let rule = RecurrenceRule::try_from(raw)?;
        Ok(Self::new(rule, anchor, tz))
    }

    /// The rule being expanded.
    #[must_use]
    pub const fn rule(&self) -> &RecurrenceRule {
        &self.rule
    }

    /// Occurrences within `[start, end]`, both bounds inclusive.
    ///
    /// `end: None` leaves the window open-ended; together with a rule that
    /// has neither `until` nor `count`, the sequence is infinite and must be
    /// consumed lazily. Occurrences before `start` still consume `count`
    /// ordinals, so windows that begin mid-sequence agree with full
    /// expansions on global position.
    ///
    /// ## Errors
    ///
    /// Returns [`ExpandError::InvalidWindow`] when `start` is after `end`.
    pub fn between(
        &self,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> ExpandResult<Occurrences> {
        if let Some(end) = end
            && start > end
        {
            return Err(ExpandError::InvalidWindow { start, end });
        }

        debug!(
            freq = %self.rule.freq(),
            interval = self.rule.interval(),
            %start,
            ?end,
            "expanding recurrence"
        );

        Ok(Occurrences::new(
            self.rule.clone(),
            self.tz,
            self.anchor.date(),
            self.anchor.time(),
            start,
            end,
        ))
    }
}
