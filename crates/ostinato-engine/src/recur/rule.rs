//! Repetition rule model and the stored `moment` grammar.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::moment;
use crate::error::{EngineError, EngineResult};

/// Repetition kind, tagged the way rule records store it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepetitionType {
    /// Every day.
    Daily,
    /// Every week on a fixed weekday.
    Weekly,
    /// Every month on a fixed day number.
    Monthly,
    /// Every month on the N-th occurrence of a weekday ("ndom" in storage).
    #[serde(rename = "ndom")]
    NthWeekdayOfMonth,
    /// Every year on a fixed month and day.
    Yearly,
}

impl RepetitionType {
    /// Returns the stored tag for this repetition type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::NthWeekdayOfMonth => "ndom",
            Self::Yearly => "yearly",
        }
    }

    /// Parses a stored type tag.
    ///
    /// ## Errors
    /// Returns `UnsupportedRepetitionType` for any tag outside the five
    /// supported kinds.
    pub fn parse(s: &str) -> EngineResult<Self> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "ndom" => Ok(Self::NthWeekdayOfMonth),
            "yearly" => Ok(Self::Yearly),
            other => Err(EngineError::UnsupportedRepetitionType(other.to_string())),
        }
    }
}

impl std::fmt::Display for RepetitionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RepetitionType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Ordinal position of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nth {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Nth {
    /// Returns the 1-based ordinal number.
    #[must_use]
    pub const fn as_number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
        }
    }

    /// Parses a 1-based ordinal number.
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4 => Some(Self::Fourth),
            5 => Some(Self::Fifth),
            _ => None,
        }
    }

    /// Returns the English ordinal word.
    #[must_use]
    pub const fn as_english(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Fifth => "fifth",
        }
    }
}

/// A stored repetition rule.
///
/// `moment` is an opaque string whose grammar depends on the repetition
/// type:
/// - `daily`: unused
/// - `weekly`: ISO weekday number, `"1"` (Monday) through `"7"` (Sunday)
/// - `monthly`: day of month, `"1"` through `"31"`
/// - `ndom`: pair `"N,W"` with N in 1..=5 (first..fifth) and W in 1..=7
/// - `yearly`: anchor date `"YYYY-MM-DD"`; only month and day are
///   meaningful, the year is a template overwritten per evaluation
///
/// The grammar is shared with existing stored rules and must be preserved
/// exactly; [`Repetition::encode_moment`] is the inverse of [`decode`].
///
/// [`decode`]: RepetitionRule::decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepetitionRule {
    #[serde(rename = "type")]
    pub repetition_type: RepetitionType,
    #[serde(default)]
    pub moment: String,
    /// Skip interval: 0 keeps every candidate occurrence, 1 every other
    /// one, and so on.
    #[serde(default)]
    pub skip: u32,
}

impl RepetitionRule {
    /// Creates a rule from its stored parts.
    #[must_use]
    pub fn new(repetition_type: RepetitionType, moment: impl Into<String>, skip: u32) -> Self {
        Self {
            repetition_type,
            moment: moment.into(),
            skip,
        }
    }

    /// Stride modulus applied during candidate admission.
    #[must_use]
    pub fn skip_mod(&self) -> usize {
        usize::try_from(self.skip).unwrap_or(usize::MAX).saturating_add(1)
    }

    /// Decodes `moment` against the rule's repetition type.
    ///
    /// ## Errors
    /// Returns `InvalidMoment` when the grammar does not match what the
    /// type requires. Calculation never proceeds on a malformed moment.
    pub fn decode(&self) -> EngineResult<Repetition> {
        match self.repetition_type {
            RepetitionType::Daily => Ok(Repetition::Daily),
            RepetitionType::Weekly => {
                let weekday = moment::parse_weekday(self.repetition_type, &self.moment)?;
                Ok(Repetition::Weekly { weekday })
            }
            RepetitionType::Monthly => {
                let day_of_month = moment::parse_day_of_month(self.repetition_type, &self.moment)?;
                Ok(Repetition::Monthly { day_of_month })
            }
            RepetitionType::NthWeekdayOfMonth => {
                let (nth, weekday) = moment::parse_nth_weekday(self.repetition_type, &self.moment)?;
                Ok(Repetition::NthWeekday { nth, weekday })
            }
            RepetitionType::Yearly => {
                let anchor = moment::parse_anchor_date(self.repetition_type, &self.moment)?;
                Ok(Repetition::Yearly { anchor })
            }
        }
    }
}

/// A repetition rule with its `moment` decoded into typed fields.
///
/// Closed over the five supported kinds, so per-kind handling is checked
/// for exhaustiveness at compile time instead of failing on a runtime
/// default case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    /// Every day.
    Daily,
    /// Every week on `weekday`.
    Weekly { weekday: Weekday },
    /// Every month on `day_of_month`, clamped to the month's length.
    Monthly { day_of_month: u8 },
    /// Every month on the `nth` occurrence of `weekday`.
    NthWeekday { nth: Nth, weekday: Weekday },
    /// Every year on the anchor's month and day.
    Yearly { anchor: NaiveDate },
}

impl Repetition {
    /// Returns the stored type tag for this repetition.
    #[must_use]
    pub const fn repetition_type(self) -> RepetitionType {
        match self {
            Self::Daily => RepetitionType::Daily,
            Self::Weekly { .. } => RepetitionType::Weekly,
            Self::Monthly { .. } => RepetitionType::Monthly,
            Self::NthWeekday { .. } => RepetitionType::NthWeekdayOfMonth,
            Self::Yearly { .. } => RepetitionType::Yearly,
        }
    }

    /// Renders the decoded fields back into the stored `moment` grammar.
    ///
    /// Dates always encode zero-padded (`2024-03-05`), the canonical form
    /// of the stored grammar.
    #[must_use]
    pub fn encode_moment(self) -> String {
        match self {
            Self::Daily => String::new(),
            Self::Weekly { weekday } => weekday.number_from_monday().to_string(),
            Self::Monthly { day_of_month } => day_of_month.to_string(),
            Self::NthWeekday { nth, weekday } => {
                format!("{},{}", nth.as_number(), weekday.number_from_monday())
            }
            Self::Yearly { anchor } => {
                format!("{:04}-{:02}-{:02}", anchor.year(), anchor.month(), anchor.day())
            }
        }
    }
}
