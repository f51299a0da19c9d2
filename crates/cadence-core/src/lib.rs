//! Core data model for recurrence rules.
//!
//! This crate defines the validated [`rule::RecurrenceRule`] type together
//! with its building blocks ([`rule::Frequency`], [`rule::WeekdaySet`]) and
//! the raw ingestion shape ([`rule::RawRule`]) that calendar-sync
//! collaborators deserialize provider data into. Expansion lives in the
//! `cadence-expand` crate.

pub mod error;
pub mod rule;

pub use error::{RuleError, RuleResult};
pub use rule::{Frequency, RawRule, RecurrenceRule, RuleBuilder, Weekday, WeekdaySet};
