//! Expansion behavior tests.
//!
//! Fixtures shared by the scenario modules, which cover the frequency
//! stepping semantics, the global bounds (`count`, `until`, windows), and
//! the eager error surface.


use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use cadence_core::RecurrenceRule;

use super::Expander;

fn local(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid time")
}

fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid instant")
}

/// Expands in UTC and collects the instants as `DateTime<Utc>`.
fn collect(
    rule: RecurrenceRule,
    anchor: NaiveDateTime,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
) -> Vec<DateTime<Utc>> {
    Expander::new(rule, anchor, chrono_tz::UTC)
        .between(start, end)
        .expect("valid window")
        .map(|dt| dt.with_timezone(&Utc))
        .collect()
}

fn new_york() -> Tz {
    "America/New_York".parse().expect("known zone")
}
