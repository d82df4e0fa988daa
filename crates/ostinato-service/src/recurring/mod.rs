//! Recurring-event records and the services that own them.

pub mod describe;
pub mod factory;
pub mod model;
pub mod repository;
pub mod store;
pub mod update;

pub use factory::RecurrenceFactory;
pub use model::{NewRecurrence, Note, Recurrence, RecurrenceUpdate};
pub use repository::RecurringRepository;
pub use store::{MemoryStore, RecurrenceStore};
pub use update::RecurrenceUpdateService;
