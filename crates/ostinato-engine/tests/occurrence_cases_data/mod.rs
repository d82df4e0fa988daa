use chrono::NaiveDate;

use crate::recur::{RepetitionRule, RepetitionType, occurrences_from_count, occurrences_in_range};

pub enum CaseMode {
    Range {
        start: &'static str,
        end: &'static str,
    },
    Count {
        anchor: &'static str,
        count: usize,
    },
}

pub struct OccurrenceCase {
    pub name: &'static str,
    pub repetition_type: &'static str,
    pub moment: &'static str,
    pub skip: u32,
    pub mode: CaseMode,
    pub expected: &'static [&'static str],
}

#[expect(clippy::too_many_lines, reason = "flat scenario table")]
pub fn occurrence_cases() -> Vec<OccurrenceCase> {
    vec![
        OccurrenceCase {
            name: "daily_basic_range",
            repetition_type: "daily",
            moment: "",
            skip: 0,
            mode: CaseMode::Range {
                start: "2024-01-01",
                end: "2024-01-05",
            },
            expected: &[
                "2024-01-01",
                "2024-01-02",
                "2024-01-03",
                "2024-01-04",
                "2024-01-05",
            ],
        },
        OccurrenceCase {
            name: "daily_skip_range",
            repetition_type: "daily",
            moment: "",
            skip: 1,
            mode: CaseMode::Range {
                start: "2024-01-01",
                end: "2024-01-07",
            },
            expected: &["2024-01-01", "2024-01-03", "2024-01-05", "2024-01-07"],
        },
        OccurrenceCase {
            name: "daily_count_starts_after_anchor",
            repetition_type: "daily",
            moment: "",
            skip: 0,
            mode: CaseMode::Count {
                anchor: "2024-01-01",
                count: 3,
            },
            expected: &["2024-01-02", "2024-01-03", "2024-01-04"],
        },
        OccurrenceCase {
            name: "weekly_fridays_range",
            repetition_type: "weekly",
            moment: "5",
            skip: 0,
            mode: CaseMode::Range {
                start: "2024-01-01",
                end: "2024-01-31",
            },
            expected: &["2024-01-05", "2024-01-12", "2024-01-19", "2024-01-26"],
        },
        OccurrenceCase {
            name: "weekly_on_its_own_weekday_rolls_a_week",
            repetition_type: "weekly",
            moment: "5",
            skip: 0,
            mode: CaseMode::Count {
                anchor: "2024-01-05",
                count: 2,
            },
            expected: &["2024-01-12", "2024-01-19"],
        },
        OccurrenceCase {
            name: "weekly_skip_count",
            repetition_type: "weekly",
            moment: "1",
            skip: 1,
            mode: CaseMode::Count {
                anchor: "2024-01-01",
                count: 3,
            },
            expected: &["2024-01-08", "2024-01-22", "2024-02-05"],
        },
        OccurrenceCase {
            name: "monthly_end_of_month_count_clamps_february",
            repetition_type: "monthly",
            moment: "31",
            skip: 0,
            mode: CaseMode::Count {
                anchor: "2024-01-15",
                count: 3,
            },
            expected: &["2024-01-31", "2024-02-29", "2024-03-31"],
        },
        OccurrenceCase {
            name: "monthly_common_year_february",
            repetition_type: "monthly",
            moment: "30",
            skip: 0,
            mode: CaseMode::Count {
                anchor: "2023-01-31",
                count: 2,
            },
            expected: &["2023-02-28", "2023-03-30"],
        },
        OccurrenceCase {
            name: "monthly_skip_range",
            repetition_type: "monthly",
            moment: "10",
            skip: 1,
            mode: CaseMode::Range {
                start: "2024-01-01",
                end: "2024-07-01",
            },
            expected: &["2024-01-10", "2024-03-10", "2024-05-10"],
        },
        OccurrenceCase {
            name: "ndom_first_monday_range",
            repetition_type: "ndom",
            moment: "1,1",
            skip: 0,
            mode: CaseMode::Range {
                start: "2024-03-01",
                end: "2024-05-31",
            },
            expected: &["2024-03-04", "2024-04-01", "2024-05-06"],
        },
        OccurrenceCase {
            name: "ndom_third_wednesday_count",
            repetition_type: "ndom",
            moment: "3,3",
            skip: 0,
            mode: CaseMode::Count {
                anchor: "2024-01-17",
                count: 3,
            },
            expected: &["2024-02-21", "2024-03-20", "2024-04-17"],
        },
        OccurrenceCase {
            name: "yearly_range_rolls_an_elapsed_date",
            repetition_type: "yearly",
            moment: "2018-03-05",
            skip: 0,
            mode: CaseMode::Range {
                start: "2020-06-01",
                end: "2023-12-31",
            },
            expected: &["2021-03-05", "2022-03-05", "2023-03-05"],
        },
        OccurrenceCase {
            name: "yearly_leap_day_count",
            repetition_type: "yearly",
            moment: "2020-02-29",
            skip: 0,
            mode: CaseMode::Count {
                anchor: "2022-06-01",
                count: 3,
            },
            expected: &["2023-02-28", "2024-02-29", "2025-02-28"],
        },
    ]
}

pub fn assert_case(case: &OccurrenceCase) {
    let repetition_type = RepetitionType::parse(case.repetition_type)
        .unwrap_or_else(|err| panic!("case {}: {err}", case.name));
    let rule = RepetitionRule::new(repetition_type, case.moment, case.skip);

    let actual = match case.mode {
        CaseMode::Range { start, end } => {
            occurrences_in_range(&rule, parse_date(case.name, start), parse_date(case.name, end))
        }
        CaseMode::Count { anchor, count } => {
            occurrences_from_count(&rule, parse_date(case.name, anchor), count)
        }
    }
    .unwrap_or_else(|err| panic!("case {}: {err}", case.name));

    let expected: Vec<NaiveDate> = case
        .expected
        .iter()
        .map(|raw| parse_date(case.name, raw))
        .collect();
    assert_eq!(actual, expected, "case {}", case.name);
}

fn parse_date(case: &str, raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .unwrap_or_else(|err| panic!("case {case}: bad date {raw}: {err}"))
}
