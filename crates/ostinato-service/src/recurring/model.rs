use chrono::{DateTime, NaiveDate, Utc};
use ostinato_engine::recur::RepetitionRule;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recurring event owned by a user.
///
/// The repetition rules describe *when* the event recurs; what happens on
/// an occurrence is the embedding application's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub active: bool,
    /// First date the rules apply from.
    pub first_date: NaiveDate,
    pub repetitions: Vec<RepetitionRule>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a new recurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecurrence {
    pub user_id: Uuid,
    pub title: String,
    pub active: bool,
    pub first_date: NaiveDate,
    pub repetitions: Vec<RepetitionRule>,
    pub note: Option<String>,
}

/// Partial update for an existing recurrence; `None` fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceUpdate {
    pub title: Option<String>,
    pub active: Option<bool>,
    pub first_date: Option<NaiveDate>,
    pub repetitions: Option<Vec<RepetitionRule>>,
    pub note: Option<String>,
}

/// Free-form note attached to a recurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub recurrence_id: Uuid,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ostinato_engine::recur::RepetitionType;

    #[test]
    fn recurrence_serde_round_trip() {
        let now = Utc::now();
        let recurrence = Recurrence {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "water plants".to_string(),
            active: true,
            first_date: NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"),
            repetitions: vec![RepetitionRule::new(RepetitionType::Weekly, "6", 1)],
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_string(&recurrence).expect("serializes");
        // The rule keeps its stored tag and moment grammar on the wire.
        assert!(json.contains("\"type\":\"weekly\""));
        assert!(json.contains("\"moment\":\"6\""));
        let back: Recurrence = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, recurrence);
    }
}
