//! Weekdays and weekday sets.
//!
//! The device record selects weekdays with a fixed `[bool; 7]` indexed
//! Sunday=0 through Saturday=6. [`WeekdaySet`] keeps those semantics as a
//! bitmask, so no out-of-range index is representable.

use std::fmt;

/// Day of the week, indexed Sunday=0 through Saturday=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns the two-letter abbreviation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "SU",
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
        }
    }

    /// Parses a weekday from a two-letter abbreviation (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "SU" => Self::Sunday,
            "MO" => Self::Monday,
            "TU" => Self::Tuesday,
            "WE" => Self::Wednesday,
            "TH" => Self::Thursday,
            "FR" => Self::Friday,
            "SA" => Self::Saturday,
            _ => return None,
        })
    }

    /// Returns the Sunday=0 index.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Returns all weekdays in order (Sunday through Saturday).
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Sunday,
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
        ]
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of weekdays, stored as a 7-bit mask (Sunday = bit 0).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet {
    bits: u8,
}

impl WeekdaySet {
    /// Creates an empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Adds a weekday to the set.
    pub const fn insert(&mut self, day: Weekday) {
        self.bits |= 1 << day.index();
    }

    /// Returns whether the set contains the given weekday.
    #[must_use]
    pub const fn contains(self, day: Weekday) -> bool {
        self.bits & (1 << day.index()) != 0
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the number of weekdays in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.bits.count_ones()
    }

    /// Iterates the contained weekdays in Sunday-first order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::all().into_iter().filter(move |day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl From<[bool; 7]> for WeekdaySet {
    fn from(flags: [bool; 7]) -> Self {
        Weekday::all()
            .into_iter()
            .zip(flags)
            .filter_map(|(day, on)| on.then_some(day))
            .collect()
    }
}

impl fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for day in self.iter() {
            if !first {
                f.write_str(",")?;
            } else {
                first = false;
            }
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = WeekdaySet::empty();
        assert!(set.is_empty());

        set.insert(Weekday::Monday);
        set.insert(Weekday::Friday);

        assert!(set.contains(Weekday::Monday));
        assert!(set.contains(Weekday::Friday));
        assert!(!set.contains(Weekday::Sunday));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn iterates_in_sunday_first_order() {
        let set: WeekdaySet = [Weekday::Friday, Weekday::Sunday, Weekday::Wednesday]
            .into_iter()
            .collect();
        let days: Vec<_> = set.iter().collect();
        assert_eq!(days, vec![Weekday::Sunday, Weekday::Wednesday, Weekday::Friday]);
    }

    #[test]
    fn from_boolean_flags() {
        // Sunday=0 .. Saturday=6, matching the device record.
        let set = WeekdaySet::from([false, true, false, true, false, true, false]);
        let days: Vec<_> = set.iter().collect();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday]);
    }

    #[test]
    fn converts_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(Weekday::from(chrono::Weekday::Sat), Weekday::Saturday);
        assert_eq!(Weekday::from(chrono::Weekday::Wed).index(), 3);
    }
}
