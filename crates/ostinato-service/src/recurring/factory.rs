//! Creation of recurrence records.

use chrono::Utc;
use uuid::Uuid;

use super::model::{NewRecurrence, Note, Recurrence};
use super::store::RecurrenceStore;
use crate::error::{ServiceError, ServiceResult};

/// Builds and stores new recurrence records.
///
/// Every repetition rule is decoded before anything is written, so a
/// stored record never carries a type/moment mismatch.
#[derive(Debug)]
pub struct RecurrenceFactory<S> {
    store: S,
}

impl<S: RecurrenceStore> RecurrenceFactory<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates and stores a new recurrence.
    ///
    /// ## Errors
    /// `ValidationError` when no repetition is given; engine errors when a
    /// rule's moment does not decode against its type.
    pub fn create(&self, data: NewRecurrence) -> ServiceResult<Recurrence> {
        if data.repetitions.is_empty() {
            return Err(ServiceError::ValidationError(
                "a recurrence needs at least one repetition".to_string(),
            ));
        }
        for rule in &data.repetitions {
            rule.decode()?;
        }

        let now = Utc::now();
        let recurrence = Recurrence {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            title: data.title,
            active: data.active,
            first_date: data.first_date,
            repetitions: data.repetitions,
            created_at: now,
            updated_at: now,
        };
        self.store.put(recurrence.clone())?;

        if let Some(text) = data.note {
            self.store.put_note(Note {
                id: Uuid::new_v4(),
                recurrence_id: recurrence.id,
                text,
            })?;
        }

        tracing::debug!(id = %recurrence.id, user_id = %recurrence.user_id, "created recurrence");
        Ok(recurrence)
    }
}
