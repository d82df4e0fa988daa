//! Repetition rules and occurrence calculation.
//!
//! A [`RepetitionRule`] is the stored form of a recurrence pattern: a type
//! tag, a type-dependent `moment` string, and a skip interval. Decoding it
//! yields a [`Repetition`], the closed sum type the calculators consume.
//!
//! Two query modes share one candidate-generation core:
//! - [`occurrences_in_range`]: all occurrences within a date range
//! - [`occurrences_from_count`]: the next N occurrences after an anchor

mod calc;
mod candidates;
mod moment;
mod rule;

pub use calc::{YEARLY_RANGE_CAP, occurrences_from_count, occurrences_in_range};
pub use rule::{Nth, Repetition, RepetitionRule, RepetitionType};
