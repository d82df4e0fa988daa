//! Repository facade over a recurrence store.

use chrono::NaiveDate;
use ostinato_core::config::Settings;
use ostinato_core::types::Locale;
use ostinato_engine::recur::{RepetitionRule, occurrences_from_count, occurrences_in_range};
use uuid::Uuid;

use super::describe;
use super::model::Recurrence;
use super::store::RecurrenceStore;
use crate::error::{ServiceError, ServiceResult};

/// Facade combining the store, the occurrence engine, and description
/// rendering.
///
/// Callers name the user and locale on every call; the repository holds no
/// per-user state. Occurrence queries are bounded by the configured limits
/// before they reach the engine, which itself imposes no ceilings.
#[derive(Debug)]
pub struct RecurringRepository<S> {
    store: S,
    settings: Settings,
}

impl<S: RecurrenceStore> RecurringRepository<S> {
    #[must_use]
    pub fn new(store: S, settings: Settings) -> Self {
        Self { store, settings }
    }

    /// All active recurrences owned by `user_id`.
    ///
    /// ## Errors
    /// Store retrieval failures pass through.
    pub fn active_for_user(&self, user_id: Uuid) -> ServiceResult<Vec<Recurrence>> {
        tracing::debug!(%user_id, "loading active recurrences");
        self.store.active_for_user(user_id)
    }

    /// Note text for a recurrence, or an empty string when none is attached.
    ///
    /// ## Errors
    /// Store retrieval failures pass through.
    pub fn note_text(&self, recurrence_id: Uuid) -> ServiceResult<String> {
        Ok(self
            .store
            .note(recurrence_id)?
            .map(|note| note.text)
            .unwrap_or_default())
    }

    /// Occurrences of `rule` within `[start, end]`.
    ///
    /// ## Errors
    /// `ValidationError` when the span exceeds the configured
    /// `limits.max_range_days`; engine errors pass through.
    pub fn occurrences_in_range(
        &self,
        rule: &RepetitionRule,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ServiceResult<Vec<NaiveDate>> {
        let span_days = end.signed_duration_since(start).num_days();
        if span_days > self.settings.limits.max_range_days {
            return Err(ServiceError::ValidationError(format!(
                "range of {span_days} days exceeds the {} day horizon",
                self.settings.limits.max_range_days
            )));
        }
        tracing::debug!(repetition_type = %rule.repetition_type, %start, %end, "expanding range");
        Ok(occurrences_in_range(rule, start, end)?)
    }

    /// The next `count` occurrences of `rule` after `anchor`.
    ///
    /// ## Errors
    /// `ValidationError` when `count` exceeds the configured
    /// `limits.max_count`; engine errors pass through.
    pub fn occurrences_from_count(
        &self,
        rule: &RepetitionRule,
        anchor: NaiveDate,
        count: usize,
    ) -> ServiceResult<Vec<NaiveDate>> {
        if count > self.settings.limits.max_count {
            return Err(ServiceError::ValidationError(format!(
                "count {count} exceeds the configured ceiling of {}",
                self.settings.limits.max_count
            )));
        }
        tracing::debug!(repetition_type = %rule.repetition_type, %anchor, count, "expanding count");
        Ok(occurrences_from_count(rule, anchor, count)?)
    }

    /// Localized sentence describing `rule`; `None` falls back to the
    /// configured default locale.
    ///
    /// ## Errors
    /// Engine decoding errors pass through.
    pub fn describe(&self, rule: &RepetitionRule, locale: Option<Locale>) -> ServiceResult<String> {
        let repetition = rule.decode()?;
        let locale = locale.unwrap_or(self.settings.language.default_locale);
        Ok(describe::describe(repetition, locale))
    }
}
