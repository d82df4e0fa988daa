//! Lazy candidate-date generation shared by both calculation modes.
//!
//! [`Candidates`] is a restartable iterator per repetition kind. It yields
//! every candidate in ascending order and never terminates on its own
//! (short of calendar overflow); the calculators layer stride admission
//! and termination on top.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use super::rule::Nth;

/// Infinite ascending stream of candidate occurrence dates.
#[derive(Debug, Clone)]
pub(super) enum Candidates {
    /// Consecutive days from the cursor.
    Days { cursor: NaiveDate },
    /// The same weekday every seven days.
    Weeks { cursor: NaiveDate },
    /// A fixed day each month, clamped to the month's length.
    MonthDays { month: NaiveDate, day_of_month: u8 },
    /// The N-th weekday of each month; months lacking one yield nothing.
    NthWeekdays {
        month: NaiveDate,
        nth: Nth,
        weekday: Weekday,
    },
    /// The anchor's month and day projected into each year.
    Years { year: i32, month: u32, day: u32 },
}

impl Candidates {
    pub(super) fn days(from: NaiveDate) -> Self {
        Self::Days { cursor: from }
    }

    /// `first` must already carry the target weekday; stepping preserves it.
    pub(super) fn weeks(first: NaiveDate) -> Self {
        Self::Weeks { cursor: first }
    }

    pub(super) fn month_days(month: NaiveDate, day_of_month: u8) -> Self {
        Self::MonthDays {
            month: month_start(month),
            day_of_month,
        }
    }

    pub(super) fn nth_weekdays(month: NaiveDate, nth: Nth, weekday: Weekday) -> Self {
        Self::NthWeekdays {
            month: month_start(month),
            nth,
            weekday,
        }
    }

    pub(super) fn years(year: i32, anchor: NaiveDate) -> Self {
        Self::Years {
            year,
            month: anchor.month(),
            day: anchor.day(),
        }
    }
}

impl Iterator for Candidates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        match self {
            Self::Days { cursor } => {
                let date = *cursor;
                *cursor = date.succ_opt()?;
                Some(date)
            }
            Self::Weeks { cursor } => {
                let date = *cursor;
                *cursor = date.checked_add_days(Days::new(7))?;
                Some(date)
            }
            Self::MonthDays {
                month,
                day_of_month,
            } => {
                let day = u32::from(*day_of_month).min(month_length(*month)?);
                let date = month.with_day(day)?;
                *month = month.checked_add_months(Months::new(1))?;
                Some(date)
            }
            Self::NthWeekdays {
                month,
                nth,
                weekday,
            } => loop {
                let first = *month;
                *month = first.checked_add_months(Months::new(1))?;
                if let Some(date) = nth_weekday_in_month(first, *nth, *weekday) {
                    return Some(date);
                }
            },
            Self::Years { year, month, day } => {
                let date = project_year(*year, *month, *day)?;
                *year = year.checked_add(1)?;
                Some(date)
            }
        }
    }
}

/// First day of the month containing `date`.
pub(super) fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date) // day 1 exists in every month
}

/// Number of days in the month whose first day is `first`.
fn month_length(first: NaiveDate) -> Option<u32> {
    let next = first.checked_add_months(Months::new(1))?;
    next.pred_opt().map(|d| d.day())
}

/// Date of the `nth` occurrence of `weekday` within the month beginning at
/// `first`, when the month has that many.
fn nth_weekday_in_month(first: NaiveDate, nth: Nth, weekday: Weekday) -> Option<NaiveDate> {
    let offset =
        (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    let day = 1 + offset + 7 * (u32::from(nth.as_number()) - 1);
    first.with_day(day)
}

/// The anchor month/day projected into `year`, with the day clamped to the
/// month's length: a Feb 29 anchor lands on Feb 28 in non-leap years.
pub(super) fn project_year(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        first.with_day(month_length(first)?)
    })
}

/// First date carrying `weekday` strictly after `date`.
pub(super) fn first_weekday_after(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let next = date.succ_opt()?;
    let offset =
        (7 + weekday.num_days_from_monday() - next.weekday().num_days_from_monday()) % 7;
    next.checked_add_days(Days::new(u64::from(offset)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn month_days_clamp_to_short_months() {
        let dates: Vec<NaiveDate> = Candidates::month_days(date(2024, 1, 1), 31).take(4).collect();
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 31),
                date(2024, 2, 29),
                date(2024, 3, 31),
                date(2024, 4, 30),
            ]
        );
    }

    #[test]
    fn nth_weekdays_skip_exhausted_months() {
        // Of early 2024, only March and May have five Fridays.
        let dates: Vec<NaiveDate> =
            Candidates::nth_weekdays(date(2024, 1, 1), Nth::Fifth, Weekday::Fri)
                .take(2)
                .collect();
        assert_eq!(dates, vec![date(2024, 3, 29), date(2024, 5, 31)]);
    }

    #[test]
    fn years_clamp_leap_day() {
        let dates: Vec<NaiveDate> = Candidates::years(2023, date(2020, 2, 29)).take(3).collect();
        assert_eq!(
            dates,
            vec![date(2023, 2, 28), date(2024, 2, 29), date(2025, 2, 28)]
        );
    }

    #[test]
    fn first_weekday_after_is_strict() {
        // 2024-01-01 is a Monday; the next Monday is a week out.
        assert_eq!(
            first_weekday_after(date(2024, 1, 1), Weekday::Mon),
            Some(date(2024, 1, 8))
        );
        assert_eq!(
            first_weekday_after(date(2024, 1, 1), Weekday::Fri),
            Some(date(2024, 1, 5))
        );
    }

    #[test]
    fn candidates_are_restartable() {
        let candidates = Candidates::days(date(2024, 1, 1));
        let first: Vec<NaiveDate> = candidates.clone().take(3).collect();
        let second: Vec<NaiveDate> = candidates.take(3).collect();
        assert_eq!(first, second);
    }
}
