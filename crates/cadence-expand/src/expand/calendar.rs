//! Calendar arithmetic and local-time resolution.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

/// Returns whether `year` is a Gregorian leap year.
#[must_use]
pub(crate) const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month (1..=12).
#[must_use]
pub(crate) const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Shifts a (year, month) pair by a whole number of months.
///
/// Returns `None` when the resulting year falls outside chrono's
/// representable range.
#[must_use]
pub(crate) fn shift_month(year: i32, month: u32, delta: i64) -> Option<(i32, u32)> {
    let total = i64::from(year) * 12 + i64::from(month) - 1 + delta;
    let shifted_year = i32::try_from(total.div_euclid(12)).ok()?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let shifted_month = (total.rem_euclid(12) + 1) as u32;
    Some((shifted_year, shifted_month))
}

/// The Sunday on or before `date`.
///
/// Weekday masks index Sunday=0, so weeks are counted Sunday-start.
#[must_use]
pub(crate) fn week_start(date: NaiveDate) -> NaiveDate {
    let back = i64::from(date.weekday().num_days_from_sunday());
    date - Duration::days(back)
}

/// Resolves a local wall-clock time to an instant in `tz`.
///
/// Ambiguous wall times (a daylight-saving fold) take the earlier instant.
/// Nonexistent wall times (a daylight-saving gap) shift forward to the
/// first valid instant after the gap, probed in 15-minute steps.
#[must_use]
pub(crate) fn resolve_local(local: NaiveDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earlier, _) => Some(earlier),
        LocalResult::None => {
            // No real-world gap exceeds a few hours.
            for quarter in 1..=12 {
                let probe = local + Duration::minutes(15 * quarter);
                match tz.from_local_datetime(&probe) {
                    LocalResult::Single(dt) => return Some(dt),
                    LocalResult::Ambiguous(earlier, _) => return Some(earlier),
                    LocalResult::None => {}
                }
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn leap_years_follow_gregorian_rules() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2026));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
    }

    #[test]
    fn month_shift_wraps_years() {
        assert_eq!(shift_month(2026, 11, 3), Some((2027, 2)));
        assert_eq!(shift_month(2026, 1, -1), Some((2025, 12)));
        assert_eq!(shift_month(2026, 12, 1), Some((2027, 1)));
        assert_eq!(shift_month(2026, 6, 0), Some((2026, 6)));
    }

    #[test]
    fn week_start_is_sunday() {
        // 2026-01-07 is a Wednesday; the preceding Sunday is the 4th.
        let wed = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        assert_eq!(week_start(wed), NaiveDate::from_ymd_opt(2026, 1, 4).unwrap());

        let sun = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();
        assert_eq!(week_start(sun), sun);
    }

    #[test]
    fn gap_times_shift_forward() {
        // US spring-forward 2026-03-08: 02:30 local does not exist.
        let tz: Tz = "America/New_York".parse().unwrap();
        let local = NaiveDate::from_ymd_opt(2026, 3, 8)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let resolved = resolve_local(local, tz).expect("resolvable");
        assert_eq!(resolved.hour(), 3);
    }

    #[test]
    fn ambiguous_times_take_earlier_instant() {
        // US fall-back 2026-11-01: 01:30 local occurs twice.
        let tz: Tz = "America/New_York".parse().unwrap();
        let local = NaiveDate::from_ymd_opt(2026, 11, 1)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();
        let resolved = resolve_local(local, tz).expect("resolvable");
        // The earlier instant is still on EDT (UTC-4).
        assert_eq!(resolved.offset().to_string(), "EDT");
    }
}
