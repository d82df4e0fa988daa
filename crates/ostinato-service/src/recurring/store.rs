//! Storage boundary for recurrence records.
//!
//! Services consume [`RecurrenceStore`] and never reach past it;
//! implementations return fully-populated records. [`MemoryStore`] backs
//! tests and embedders that keep records in process.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

use super::model::{Note, Recurrence};
use crate::error::{ServiceError, ServiceResult};

/// Data-access interface the recurring services consume.
pub trait RecurrenceStore {
    /// All active recurrences owned by `user_id`, oldest first.
    ///
    /// ## Errors
    /// Implementation-defined retrieval failures.
    fn active_for_user(&self, user_id: Uuid) -> ServiceResult<Vec<Recurrence>>;

    /// A single record by id.
    ///
    /// ## Errors
    /// `NotFound` when no record carries `id`.
    fn get(&self, id: Uuid) -> ServiceResult<Recurrence>;

    /// Inserts or replaces a record.
    ///
    /// ## Errors
    /// Implementation-defined write failures.
    fn put(&self, recurrence: Recurrence) -> ServiceResult<()>;

    /// The note attached to a recurrence, if any.
    ///
    /// ## Errors
    /// Implementation-defined retrieval failures.
    fn note(&self, recurrence_id: Uuid) -> ServiceResult<Option<Note>>;

    /// Inserts or replaces the note attached to a recurrence.
    ///
    /// ## Errors
    /// Implementation-defined write failures.
    fn put_note(&self, note: Note) -> ServiceResult<()>;
}

impl<T: RecurrenceStore + ?Sized> RecurrenceStore for &T {
    fn active_for_user(&self, user_id: Uuid) -> ServiceResult<Vec<Recurrence>> {
        (**self).active_for_user(user_id)
    }

    fn get(&self, id: Uuid) -> ServiceResult<Recurrence> {
        (**self).get(id)
    }

    fn put(&self, recurrence: Recurrence) -> ServiceResult<()> {
        (**self).put(recurrence)
    }

    fn note(&self, recurrence_id: Uuid) -> ServiceResult<Option<Note>> {
        (**self).note(recurrence_id)
    }

    fn put_note(&self, note: Note) -> ServiceResult<()> {
        (**self).put_note(note)
    }
}

/// In-memory store, keyed by record id. Notes are keyed by the recurrence
/// they attach to (one note per recurrence).
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Uuid, Recurrence>>,
    notes: RwLock<HashMap<Uuid, Note>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecurrenceStore for MemoryStore {
    fn active_for_user(&self, user_id: Uuid) -> ServiceResult<Vec<Recurrence>> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        let mut active: Vec<Recurrence> = records
            .values()
            .filter(|r| r.active && r.user_id == user_id)
            .cloned()
            .collect();
        active.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(active)
    }

    fn get(&self, id: Uuid) -> ServiceResult<Recurrence> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        records
            .get(&id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("recurrence {id}")))
    }

    fn put(&self, recurrence: Recurrence) -> ServiceResult<()> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.insert(recurrence.id, recurrence);
        Ok(())
    }

    fn note(&self, recurrence_id: Uuid) -> ServiceResult<Option<Note>> {
        let notes = self.notes.read().unwrap_or_else(PoisonError::into_inner);
        Ok(notes.get(&recurrence_id).cloned())
    }

    fn put_note(&self, note: Note) -> ServiceResult<()> {
        let mut notes = self.notes.write().unwrap_or_else(PoisonError::into_inner);
        notes.insert(note.recurrence_id, note);
        Ok(())
    }
}
