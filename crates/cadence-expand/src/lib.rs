//! Recurrence expansion engine.
//!
//! Takes a validated [`cadence_core::RecurrenceRule`] plus an anchor
//! date-time and a query window, and produces the ordered sequence of
//! concrete occurrence instants as a lazy iterator. Pure computation: no
//! I/O, no shared mutable state, total once the inputs validate.
//!
//! ```
//! use cadence_core::RecurrenceRule;
//! use cadence_expand::Expander;
//! use chrono::{NaiveDate, TimeZone, Utc};
//!
//! let rule = RecurrenceRule::daily().count(3).build()?;
//! let anchor = NaiveDate::from_ymd_opt(2026, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let expander = Expander::new(rule, anchor, chrono_tz::UTC);
//!
//! let window_start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
//! let instants: Vec<_> = expander.between(window_start, None)?.collect();
//! assert_eq!(instants.len(), 3);
//! # Ok::<(), cadence_expand::ExpandError>(())
//! ```

pub mod error;
pub mod expand;

pub use error::{ExpandError, ExpandResult};
pub use expand::{Expander, Occurrences};
