//! Parsers for the stored `moment` grammar.
//!
//! Each parser validates one type's grammar and produces a defined
//! [`EngineError::InvalidMoment`] on mismatch. A malformed moment is a
//! caller contract violation; it never yields silently wrong output.

use chrono::{NaiveDate, Weekday};

use super::rule::{Nth, RepetitionType};
use crate::error::{EngineError, EngineResult};

fn invalid(repetition_type: RepetitionType, moment: &str, reason: &'static str) -> EngineError {
    EngineError::InvalidMoment {
        repetition_type,
        moment: moment.to_string(),
        reason,
    }
}

/// Parses an ISO weekday number, 1 (Monday) through 7 (Sunday).
pub(super) fn parse_weekday(
    repetition_type: RepetitionType,
    moment: &str,
) -> EngineResult<Weekday> {
    let number = moment
        .trim()
        .parse::<u8>()
        .map_err(|_| invalid(repetition_type, moment, "expected a weekday number"))?;
    weekday_from_iso(number).ok_or_else(|| {
        invalid(
            repetition_type,
            moment,
            "weekday number must be 1 (Monday) through 7 (Sunday)",
        )
    })
}

/// Parses a day-of-month number, 1 through 31.
pub(super) fn parse_day_of_month(
    repetition_type: RepetitionType,
    moment: &str,
) -> EngineResult<u8> {
    let day = moment
        .trim()
        .parse::<u8>()
        .map_err(|_| invalid(repetition_type, moment, "expected a day-of-month number"))?;
    if (1..=31).contains(&day) {
        Ok(day)
    } else {
        Err(invalid(
            repetition_type,
            moment,
            "day of month must be 1 through 31",
        ))
    }
}

/// Parses an `"N,W"` pair: ordinal 1..=5 and ISO weekday 1..=7.
pub(super) fn parse_nth_weekday(
    repetition_type: RepetitionType,
    moment: &str,
) -> EngineResult<(Nth, Weekday)> {
    let (nth_part, weekday_part) = moment
        .split_once(',')
        .ok_or_else(|| invalid(repetition_type, moment, "expected an \"N,W\" pair"))?;

    let nth_number = nth_part
        .trim()
        .parse::<u8>()
        .map_err(|_| invalid(repetition_type, moment, "expected an ordinal number"))?;
    let nth = Nth::from_number(nth_number).ok_or_else(|| {
        invalid(
            repetition_type,
            moment,
            "ordinal must be 1 (first) through 5 (fifth)",
        )
    })?;

    let weekday = parse_weekday(repetition_type, weekday_part)?;
    Ok((nth, weekday))
}

/// Parses a `YYYY-MM-DD` anchor date.
pub(super) fn parse_anchor_date(
    repetition_type: RepetitionType,
    moment: &str,
) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(moment.trim(), "%Y-%m-%d")
        .map_err(|_| invalid(repetition_type, moment, "expected a YYYY-MM-DD date"))
}

fn weekday_from_iso(number: u8) -> Option<Weekday> {
    match number {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_bounds() {
        assert_eq!(
            parse_weekday(RepetitionType::Weekly, "1").expect("valid"),
            Weekday::Mon
        );
        assert_eq!(
            parse_weekday(RepetitionType::Weekly, "7").expect("valid"),
            Weekday::Sun
        );
        assert!(parse_weekday(RepetitionType::Weekly, "0").is_err());
        assert!(parse_weekday(RepetitionType::Weekly, "8").is_err());
    }

    #[test]
    fn day_of_month_bounds() {
        assert_eq!(
            parse_day_of_month(RepetitionType::Monthly, "31").expect("valid"),
            31
        );
        assert!(parse_day_of_month(RepetitionType::Monthly, "0").is_err());
        assert!(parse_day_of_month(RepetitionType::Monthly, "32").is_err());
    }

    #[test]
    fn nth_weekday_pair() {
        let (nth, weekday) =
            parse_nth_weekday(RepetitionType::NthWeekdayOfMonth, "5,6").expect("valid");
        assert_eq!(nth, Nth::Fifth);
        assert_eq!(weekday, Weekday::Sat);

        assert!(parse_nth_weekday(RepetitionType::NthWeekdayOfMonth, "6,1").is_err());
        assert!(parse_nth_weekday(RepetitionType::NthWeekdayOfMonth, "11").is_err());
    }

    #[test]
    fn anchor_date() {
        let date = parse_anchor_date(RepetitionType::Yearly, "2024-02-29").expect("valid");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date"));
        assert!(parse_anchor_date(RepetitionType::Yearly, "2023-02-29").is_err());
        assert!(parse_anchor_date(RepetitionType::Yearly, "March 5").is_err());
    }
}
