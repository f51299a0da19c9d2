//! Lazy occurrence sequence.

use std::iter::FusedIterator;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use tracing::trace;

use cadence_core::{Frequency, RecurrenceRule, Weekday};

use super::calendar::{days_in_month, resolve_local, shift_month, week_start};

/// Consecutive empty frequency periods tolerated before the sequence ends.
///
/// Covers a full Gregorian leap cycle, so any target day that can ever recur
/// is found within the bound; a day that cannot (a yearly rule pinned to
/// April 31) terminates instead of spinning.
const MAX_BARREN_PERIODS: u32 = 400;

/// Per-frequency stepping state.
#[derive(Debug, Clone)]
enum Cursor {
    /// Next candidate date, advanced by a fixed day stride.
    Days { next: NaiveDate, stride: i64 },
    /// Sunday-start week scan for masked weekly rules.
    Week { start: NaiveDate, offset: u32 },
    /// Month ordinal from the anchor month.
    Months { period: i64 },
    /// Year ordinal from the anchor year.
    Years { period: i64 },
}

enum Step {
    Candidate(NaiveDate),
    Barren,
    Exhausted,
}

/// A lazy, strictly ascending sequence of occurrence instants.
///
/// Produced by [`Expander::between`](super::Expander::between). The iterator
/// is fused and `Clone`; a clone snapshots the cursor, so keeping an
/// unconsumed clone around lets a window be re-run from the top.
#[derive(Debug, Clone)]
pub struct Occurrences {
    rule: RecurrenceRule,
    tz: Tz,
    anchor_date: NaiveDate,
    time_of_day: NaiveTime,
    window_start: DateTime<Utc>,
    window_end: Option<DateTime<Utc>>,
    remaining: Option<u32>,
    cursor: Cursor,
    done: bool,
}

impl Occurrences {
    pub(super) fn new(
        rule: RecurrenceRule,
        tz: Tz,
        anchor_date: NaiveDate,
        time_of_day: NaiveTime,
        window_start: DateTime<Utc>,
        window_end: Option<DateTime<Utc>>,
    ) -> Self {
        let interval = i64::from(rule.interval());
        let cursor = match rule.freq() {
            Frequency::Daily => Cursor::Days {
                next: anchor_date,
                stride: interval,
            },
            Frequency::Weekly if rule.by_day().is_empty() => Cursor::Days {
                next: anchor_date,
                stride: interval * 7,
            },
            Frequency::Weekly => Cursor::Week {
                start: week_start(anchor_date),
                offset: 0,
            },
            Frequency::Monthly => Cursor::Months { period: 0 },
            Frequency::Yearly => Cursor::Years { period: 0 },
        };

        let remaining = rule.count();
        Self {
            rule,
            tz,
            anchor_date,
            time_of_day,
            window_start,
            window_end,
            remaining,
            cursor,
            done: false,
        }
    }

    /// Advances the cursor one step and returns what the period produced.
    fn step(&mut self) -> Step {
        match &mut self.cursor {
            Cursor::Days { next, stride } => {
                let Some(date) = next.checked_add_signed(Duration::days(*stride)) else {
                    return Step::Exhausted;
                };
                let candidate = *next;
                *next = date;
                Step::Candidate(candidate)
            }
            Cursor::Week { start, offset } => {
                let stride = i64::from(self.rule.interval()) * 7;
                loop {
                    while *offset < 7 {
                        let date = *start + Duration::days(i64::from(*offset));
                        *offset += 1;
                        if self.rule.by_day().contains(Weekday::from(date.weekday())) {
                            return Step::Candidate(date);
                        }
                    }
                    let Some(next_week) = start.checked_add_signed(Duration::days(stride)) else {
                        return Step::Exhausted;
                    };
                    *start = next_week;
                    *offset = 0;
                }
            }
            Cursor::Months { period } => {
                let delta = *period * i64::from(self.rule.interval());
                *period += 1;
                let Some((year, month)) =
                    shift_month(self.anchor_date.year(), self.anchor_date.month(), delta)
                else {
                    return Step::Exhausted;
                };
                let day = self
                    .rule
                    .by_month_day()
                    .map_or(self.anchor_date.day(), u32::from);
                // Months without the target day are skipped, never rolled
                // over into the next month.
                if day > days_in_month(year, month) {
                    return Step::Barren;
                }
                match NaiveDate::from_ymd_opt(year, month, day) {
                    Some(date) if weekday_allowed(&self.rule, date) => Step::Candidate(date),
                    _ => Step::Barren,
                }
            }
            Cursor::Years { period } => {
                let delta = *period * i64::from(self.rule.interval());
                *period += 1;
                let Ok(year) = i32::try_from(i64::from(self.anchor_date.year()) + delta) else {
                    return Step::Exhausted;
                };
                let month = self.anchor_date.month();
                let day = self
                    .rule
                    .by_month_day()
                    .map_or(self.anchor_date.day(), u32::from);
                // Same skip policy as monthly: a Feb 29 anchor recurs only
                // in leap years.
                if day > days_in_month(year, month) {
                    return Step::Barren;
                }
                NaiveDate::from_ymd_opt(year, month, day).map_or(Step::Barren, Step::Candidate)
            }
        }
    }
}

/// Monthly weekday mask acts as a predicate on the generated date.
fn weekday_allowed(rule: &RecurrenceRule, date: NaiveDate) -> bool {
    rule.by_day().is_empty() || rule.by_day().contains(Weekday::from(date.weekday()))
}

impl Iterator for Occurrences {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut barren = 0u32;
        loop {
            if self.remaining == Some(0) {
                self.done = true;
                return None;
            }

            let date = match self.step() {
                Step::Candidate(date) => {
                    barren = 0;
                    date
                }
                Step::Barren => {
                    barren += 1;
                    if barren > MAX_BARREN_PERIODS {
                        trace!(periods = barren, "target day no longer recurs, ending sequence");
                        self.done = true;
                        return None;
                    }
                    continue;
                }
                Step::Exhausted => {
                    self.done = true;
                    return None;
                }
            };

            // Candidates before the anchor (a masked week's leading days, or
            // a month-day override earlier in the anchor month) are not part
            // of the sequence and consume no count ordinal.
            if date < self.anchor_date {
                continue;
            }

            let Some(instant) = resolve_local(date.and_time(self.time_of_day), self.tz) else {
                continue;
            };
            let utc = instant.with_timezone(&Utc);

            if let Some(until) = self.rule.until()
                && utc > until
            {
                self.done = true;
                return None;
            }
            if let Some(end) = self.window_end
                && utc > end
            {
                self.done = true;
                return None;
            }

            // Count ordinals are global to the rule: occurrences before the
            // window still consume them, so windowed queries agree on
            // position.
            if let Some(remaining) = &mut self.remaining {
                *remaining -= 1;
            }

            if utc < self.window_start {
                continue;
            }

            return Some(instant);
        }
    }
}

impl FusedIterator for Occurrences {}
