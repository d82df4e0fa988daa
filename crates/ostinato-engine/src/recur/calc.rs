//! Occurrence calculation: the range-bounded and count-bounded query modes.
//!
//! Both modes decode the rule once, seed a [`Candidates`] stream for its
//! repetition kind, and then differ only in seeding and termination.
//! Stride admission keeps the first of every `skip + 1` candidates
//! (`Iterator::step_by`). Range mode applies no stride to `ndom` and
//! `yearly` rules; stored rules depend on that asymmetry, so it is pinned
//! here and by the tests.

use chrono::{Datelike, Months, NaiveDate};

use super::candidates::{Candidates, first_weekday_after, month_start, project_year};
use super::rule::{Repetition, RepetitionRule};
use crate::error::EngineResult;

/// Hard cap on matches returned by a range-bounded yearly rule.
pub const YEARLY_RANGE_CAP: usize = 10;

/// ## Summary
/// Computes all occurrences of `rule` within `[start, end]`, ascending.
///
/// The monthly upper bound is strict (`date < end`); all other kinds
/// include `end`. A `start` after `end` yields an empty sequence.
///
/// ## Errors
/// Returns `InvalidMoment` when the rule's `moment` does not decode
/// against its repetition type. No occurrences are produced on error.
pub fn occurrences_in_range(
    rule: &RepetitionRule,
    start: NaiveDate,
    end: NaiveDate,
) -> EngineResult<Vec<NaiveDate>> {
    let repetition = rule.decode()?;
    let skip_mod = rule.skip_mod();
    tracing::trace!(
        repetition_type = %rule.repetition_type,
        %start,
        %end,
        skip = rule.skip,
        "calculating occurrences in range"
    );

    let dates = match repetition {
        Repetition::Daily => Candidates::days(start)
            .step_by(skip_mod)
            .take_while(|date| *date <= end)
            .collect(),
        Repetition::Weekly { weekday } => match first_weekday_after(start, weekday) {
            Some(first) => Candidates::weeks(first)
                .step_by(skip_mod)
                .take_while(|date| *date <= end)
                .collect(),
            None => Vec::new(),
        },
        Repetition::Monthly { day_of_month } => match monthly_seed(start, day_of_month) {
            Some(month) => Candidates::month_days(month, day_of_month)
                .step_by(skip_mod)
                .take_while(|date| *date < end)
                .collect(),
            None => Vec::new(),
        },
        // No stride admission for ndom and yearly rules in range mode.
        Repetition::NthWeekday { nth, weekday } => {
            Candidates::nth_weekdays(month_start(start), nth, weekday)
                .take_while(|date| month_start(*date) <= end)
                .filter(|date| *date >= start && *date <= end)
                .collect()
        }
        Repetition::Yearly { anchor } => {
            let year = yearly_seed_year(start, anchor);
            Candidates::years(year, anchor)
                .take_while(|date| *date <= end)
                .take(YEARLY_RANGE_CAP)
                .collect()
        }
    };
    Ok(dates)
}

/// ## Summary
/// Computes the next `count` occurrences of `rule` after `anchor`,
/// ascending. A count of 0 yields an empty sequence.
///
/// Every kind treats the anchor itself as already elapsed, except a
/// yearly rule whose date falls exactly on the anchor: that date is the
/// first occurrence, matching range-mode seeding.
///
/// There is no internal ceiling on `count`; callers wanting one impose it
/// at the call site.
///
/// ## Errors
/// Returns `InvalidMoment` when the rule's `moment` does not decode
/// against its repetition type. No occurrences are produced on error.
pub fn occurrences_from_count(
    rule: &RepetitionRule,
    anchor: NaiveDate,
    count: usize,
) -> EngineResult<Vec<NaiveDate>> {
    let repetition = rule.decode()?;
    let skip_mod = rule.skip_mod();
    tracing::trace!(
        repetition_type = %rule.repetition_type,
        %anchor,
        count,
        skip = rule.skip,
        "calculating occurrences from count"
    );

    let dates = match repetition {
        Repetition::Daily => match anchor.succ_opt() {
            Some(first) => Candidates::days(first)
                .step_by(skip_mod)
                .take(count)
                .collect(),
            None => Vec::new(),
        },
        Repetition::Weekly { weekday } => match first_weekday_after(anchor, weekday) {
            Some(first) => Candidates::weeks(first)
                .step_by(skip_mod)
                .take(count)
                .collect(),
            None => Vec::new(),
        },
        Repetition::Monthly { day_of_month } => {
            let seed = anchor
                .succ_opt()
                .and_then(|next| monthly_seed(next, day_of_month));
            match seed {
                Some(month) => Candidates::month_days(month, day_of_month)
                    .step_by(skip_mod)
                    .take(count)
                    .collect(),
                None => Vec::new(),
            }
        }
        Repetition::NthWeekday { nth, weekday } => match anchor.succ_opt() {
            // Months resolving at or before the anchor are dropped before
            // stride admission.
            Some(next) => Candidates::nth_weekdays(month_start(next), nth, weekday)
                .filter(|date| *date > anchor)
                .step_by(skip_mod)
                .take(count)
                .collect(),
            None => Vec::new(),
        },
        Repetition::Yearly { anchor: template } => {
            let year = yearly_seed_year(anchor, template);
            Candidates::years(year, template)
                .step_by(skip_mod)
                .take(count)
                .collect()
        }
    };
    Ok(dates)
}

/// Month holding the first monthly candidate on or after `from`.
fn monthly_seed(from: NaiveDate, day_of_month: u8) -> Option<NaiveDate> {
    let month = month_start(from);
    if from.day() > u32::from(day_of_month) {
        month.checked_add_months(Months::new(1))
    } else {
        Some(month)
    }
}

/// Year of the first yearly candidate on or after `from`.
fn yearly_seed_year(from: NaiveDate, anchor: NaiveDate) -> i32 {
    match project_year(from.year(), anchor.month(), anchor.day()) {
        Some(projected) if from > projected => from.year() + 1,
        _ => from.year(),
    }
}
