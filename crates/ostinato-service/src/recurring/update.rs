//! Updates to existing recurrence records.

use chrono::Utc;
use uuid::Uuid;

use super::model::{Note, Recurrence, RecurrenceUpdate};
use super::store::RecurrenceStore;
use crate::error::{ServiceError, ServiceResult};

/// Applies partial updates to stored recurrences.
#[derive(Debug)]
pub struct RecurrenceUpdateService<S> {
    store: S,
}

impl<S: RecurrenceStore> RecurrenceUpdateService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Applies `update` to the record carrying `id` and stores the result.
    ///
    /// ## Errors
    /// `NotFound` when the record does not exist; `ValidationError` when the
    /// update would leave no repetitions; engine errors when a new rule's
    /// moment does not decode against its type.
    pub fn apply(&self, id: Uuid, update: RecurrenceUpdate) -> ServiceResult<Recurrence> {
        let mut recurrence = self.store.get(id)?;

        if let Some(repetitions) = update.repetitions {
            if repetitions.is_empty() {
                return Err(ServiceError::ValidationError(
                    "a recurrence needs at least one repetition".to_string(),
                ));
            }
            for rule in &repetitions {
                rule.decode()?;
            }
            recurrence.repetitions = repetitions;
        }
        if let Some(title) = update.title {
            recurrence.title = title;
        }
        if let Some(active) = update.active {
            recurrence.active = active;
        }
        if let Some(first_date) = update.first_date {
            recurrence.first_date = first_date;
        }
        recurrence.updated_at = Utc::now();
        self.store.put(recurrence.clone())?;

        if let Some(text) = update.note {
            self.store.put_note(Note {
                id: Uuid::new_v4(),
                recurrence_id: recurrence.id,
                text,
            })?;
        }

        tracing::debug!(id = %recurrence.id, "updated recurrence");
        Ok(recurrence)
    }
}
