//! Persistence layer: SQLite storage of lists and choices.
//!
//! Two tables, `lists` and `choices`, with a unique constraint on
//! `lists.name` and `ON DELETE CASCADE` from `choices.list_id`. The
//! concrete store uses `sqlx::SqlitePool` for async access; the schema is
//! embedded from `migrations/`.

pub mod models;
pub mod sqlite;

pub use models::{ChoiceRecord, ListRecord, ListWithChoices};
pub use sqlite::SqliteStore;
