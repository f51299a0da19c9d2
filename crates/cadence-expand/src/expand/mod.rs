//! Recurrence expansion: calendar arithmetic plus the lazy occurrence
//! iterator.

mod calendar;
mod expander;
mod occurrences;

pub use expander::Expander;
pub use occurrences::Occurrences;

#[cfg(test)]
mod tests;
