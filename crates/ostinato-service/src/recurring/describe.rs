//! Localized, human-readable rule descriptions.
//!
//! Rendering consumes a decoded [`Repetition`]; the stored `moment` string
//! is never re-parsed here. The locale is an explicit argument.

use chrono::{Datelike, Weekday};
use ostinato_core::types::Locale;
use ostinato_engine::recur::{Nth, Repetition};

const WEEKDAYS_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
const WEEKDAYS_ES: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];
const WEEKDAYS_NL: [&str; 7] = [
    "maandag",
    "dinsdag",
    "woensdag",
    "donderdag",
    "vrijdag",
    "zaterdag",
    "zondag",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];
const MONTHS_NL: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

const ORDINALS_ES: [&str; 5] = ["primer", "segundo", "tercer", "cuarto", "quinto"];
const ORDINALS_NL: [&str; 5] = ["eerste", "tweede", "derde", "vierde", "vijfde"];

/// Renders `repetition` as a sentence in `locale`.
#[must_use]
pub fn describe(repetition: Repetition, locale: Locale) -> String {
    match repetition {
        Repetition::Daily => match locale {
            Locale::English => "every day".to_string(),
            Locale::Spanish => "cada día".to_string(),
            Locale::Dutch => "elke dag".to_string(),
        },
        Repetition::Weekly { weekday } => {
            let name = weekday_name(weekday, locale);
            match locale {
                Locale::English => format!("every {name}"),
                Locale::Spanish => format!("cada {name}"),
                Locale::Dutch => format!("elke {name}"),
            }
        }
        Repetition::Monthly { day_of_month } => match locale {
            Locale::English => format!(
                "on the {day_of_month}{} day of the month",
                english_ordinal_suffix(day_of_month)
            ),
            Locale::Spanish => format!("el día {day_of_month} de cada mes"),
            Locale::Dutch => format!("op dag {day_of_month} van de maand"),
        },
        Repetition::NthWeekday { nth, weekday } => {
            let name = weekday_name(weekday, locale);
            match locale {
                Locale::English => {
                    format!("on the {} {name} of the month", nth.as_english())
                }
                Locale::Spanish => {
                    format!("el {} {name} de cada mes", ORDINALS_ES[nth_index(nth)])
                }
                Locale::Dutch => {
                    format!("op de {} {name} van de maand", ORDINALS_NL[nth_index(nth)])
                }
            }
        }
        Repetition::Yearly { anchor } => {
            let day = anchor.day();
            match locale {
                Locale::English => format!(
                    "each year on {} {day}{}",
                    MONTHS_EN[month_index(anchor)],
                    english_ordinal_suffix_u32(day)
                ),
                Locale::Spanish => {
                    format!("cada año el {day} de {}", MONTHS_ES[month_index(anchor)])
                }
                Locale::Dutch => {
                    format!("elk jaar op {day} {}", MONTHS_NL[month_index(anchor)])
                }
            }
        }
    }
}

fn weekday_name(weekday: Weekday, locale: Locale) -> &'static str {
    let index = weekday_index(weekday);
    match locale {
        Locale::English => WEEKDAYS_EN[index],
        Locale::Spanish => WEEKDAYS_ES[index],
        Locale::Dutch => WEEKDAYS_NL[index],
    }
}

const fn weekday_index(weekday: Weekday) -> usize {
    match weekday {
        Weekday::Mon => 0,
        Weekday::Tue => 1,
        Weekday::Wed => 2,
        Weekday::Thu => 3,
        Weekday::Fri => 4,
        Weekday::Sat => 5,
        Weekday::Sun => 6,
    }
}

const fn nth_index(nth: Nth) -> usize {
    match nth {
        Nth::First => 0,
        Nth::Second => 1,
        Nth::Third => 2,
        Nth::Fourth => 3,
        Nth::Fifth => 4,
    }
}

fn month_index(anchor: chrono::NaiveDate) -> usize {
    usize::try_from(anchor.month0()).unwrap_or(0)
}

fn english_ordinal_suffix(day: u8) -> &'static str {
    english_ordinal_suffix_u32(u32::from(day))
}

fn english_ordinal_suffix_u32(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
