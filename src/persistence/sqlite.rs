//! SQLite implementation of the persistence layer.

use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::models::{ChoiceRecord, ListRecord, ListWithChoices};
use crate::domain::{ChoiceId, ChoiceText, ListId, ListName};
use crate::error::PickerError;

const LIST_COLUMNS: &str = "id, name, created_at";
const CHOICE_COLUMNS: &str = "id, list_id, text, created_at";

/// SQLite-backed store using `sqlx::SqlitePool`.
///
/// Name uniqueness and cascade deletion are enforced by the schema; the
/// store translates the resulting constraint violations into
/// [`PickerError`] variants.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens a pool for `database_url`, creating the file if missing.
    ///
    /// # Errors
    ///
    /// Returns a [`PickerError::Persistence`] if the URL is invalid or the
    /// database cannot be opened.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, PickerError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(persistence)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await
            .map_err(persistence)?;

        Ok(Self { pool })
    }

    /// Opens a migrated in-memory database.
    ///
    /// The pool holds exactly one connection that is never recycled, since
    /// each SQLite in-memory connection is its own database.
    ///
    /// # Errors
    ///
    /// Returns a [`PickerError::Persistence`] if the database cannot be
    /// opened or migrated.
    pub async fn in_memory() -> Result<Self, PickerError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(persistence)?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .map_err(persistence)?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Applies the embedded schema migrations.
    ///
    /// # Errors
    ///
    /// Returns a [`PickerError::Persistence`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), PickerError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| PickerError::Persistence(e.to_string()))
    }

    /// Closes every pooled connection; later calls fail with a
    /// [`PickerError::Persistence`].
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Round-trips a trivial query.
    ///
    /// # Errors
    ///
    /// Returns a [`PickerError::Persistence`] if the database is unreachable.
    pub async fn ping(&self) -> Result<(), PickerError> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(persistence)?;
        Ok(())
    }

    /// Inserts a list stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::DuplicateListName`] if the unique constraint on
    /// `name` rejects the row, or [`PickerError::Persistence`] otherwise.
    pub async fn insert_list(&self, name: &ListName) -> Result<ListRecord, PickerError> {
        let result = sqlx::query_as::<_, ListRecord>(&format!(
            "INSERT INTO lists (name, created_at) VALUES (?, ?) RETURNING {LIST_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(record) => Ok(record),
            Err(e) if is_unique_violation(&e) => {
                Err(PickerError::DuplicateListName(name.to_string()))
            }
            Err(e) => Err(persistence(e)),
        }
    }

    /// Loads a list by ID.
    ///
    /// # Errors
    ///
    /// Returns a [`PickerError::Persistence`] on database failure.
    pub async fn find_list(&self, id: ListId) -> Result<Option<ListRecord>, PickerError> {
        sqlx::query_as::<_, ListRecord>(&format!(
            "SELECT {LIST_COLUMNS} FROM lists WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(persistence)
    }

    /// Loads a list by exact name.
    ///
    /// # Errors
    ///
    /// Returns a [`PickerError::Persistence`] on database failure.
    pub async fn find_list_by_name(
        &self,
        name: &ListName,
    ) -> Result<Option<ListRecord>, PickerError> {
        sqlx::query_as::<_, ListRecord>(&format!(
            "SELECT {LIST_COLUMNS} FROM lists WHERE name = ?"
        ))
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(persistence)
    }

    /// Loads every list, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`PickerError::Persistence`] on database failure.
    pub async fn all_lists(&self) -> Result<Vec<ListRecord>, PickerError> {
        sqlx::query_as::<_, ListRecord>(&format!(
            "SELECT {LIST_COLUMNS} FROM lists ORDER BY id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(persistence)
    }

    /// Loads a list and its choices inside one read transaction.
    ///
    /// # Errors
    ///
    /// Returns a [`PickerError::Persistence`] on database failure.
    pub async fn find_list_with_choices(
        &self,
        id: ListId,
    ) -> Result<Option<ListWithChoices>, PickerError> {
        let mut tx = self.pool.begin().await.map_err(persistence)?;

        let Some(list) = sqlx::query_as::<_, ListRecord>(&format!(
            "SELECT {LIST_COLUMNS} FROM lists WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(persistence)?
        else {
            return Ok(None);
        };

        let choices = sqlx::query_as::<_, ChoiceRecord>(&format!(
            "SELECT {CHOICE_COLUMNS} FROM choices WHERE list_id = ? ORDER BY id ASC"
        ))
        .bind(id)
        .fetch_all(&mut *tx)
        .await
        .map_err(persistence)?;

        tx.commit().await.map_err(persistence)?;
        Ok(Some(ListWithChoices { list, choices }))
    }

    /// Deletes a list; its choices go with it via `ON DELETE CASCADE`.
    ///
    /// Returns `false` if no list had this ID.
    ///
    /// # Errors
    ///
    /// Returns a [`PickerError::Persistence`] on database failure.
    pub async fn delete_list(&self, id: ListId) -> Result<bool, PickerError> {
        let result = sqlx::query("DELETE FROM lists WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(persistence)?;

        Ok(result.rows_affected() > 0)
    }

    /// Inserts a choice under `list_id` stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::ListNotFound`] if the foreign key rejects the
    /// row, or [`PickerError::Persistence`] otherwise.
    pub async fn insert_choice(
        &self,
        list_id: ListId,
        text: &ChoiceText,
    ) -> Result<ChoiceRecord, PickerError> {
        let result = sqlx::query_as::<_, ChoiceRecord>(&format!(
            "INSERT INTO choices (list_id, text, created_at) VALUES (?, ?, ?) \
             RETURNING {CHOICE_COLUMNS}"
        ))
        .bind(list_id)
        .bind(text.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(record) => Ok(record),
            Err(e) if is_foreign_key_violation(&e) => Err(PickerError::ListNotFound(list_id)),
            Err(e) => Err(persistence(e)),
        }
    }

    /// Loads a choice by ID.
    ///
    /// # Errors
    ///
    /// Returns a [`PickerError::Persistence`] on database failure.
    pub async fn find_choice(&self, id: ChoiceId) -> Result<Option<ChoiceRecord>, PickerError> {
        sqlx::query_as::<_, ChoiceRecord>(&format!(
            "SELECT {CHOICE_COLUMNS} FROM choices WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(persistence)
    }

    /// Loads the choices of a list in insertion order.
    ///
    /// An unknown list yields an empty vector; callers check existence.
    ///
    /// # Errors
    ///
    /// Returns a [`PickerError::Persistence`] on database failure.
    pub async fn choices_for_list(&self, list_id: ListId) -> Result<Vec<ChoiceRecord>, PickerError> {
        sqlx::query_as::<_, ChoiceRecord>(&format!(
            "SELECT {CHOICE_COLUMNS} FROM choices WHERE list_id = ? ORDER BY id ASC"
        ))
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(persistence)
    }

    /// Deletes a single choice. Returns `false` if no choice had this ID.
    ///
    /// # Errors
    ///
    /// Returns a [`PickerError::Persistence`] on database failure.
    pub async fn delete_choice(&self, id: ChoiceId) -> Result<bool, PickerError> {
        let result = sqlx::query("DELETE FROM choices WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(persistence)?;

        Ok(result.rows_affected() > 0)
    }
}

fn persistence(e: sqlx::Error) -> PickerError {
    PickerError::Persistence(e.to_string())
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    async fn store() -> SqliteStore {
        let Ok(store) = SqliteStore::in_memory().await else {
            panic!("in-memory store failed to open");
        };
        store
    }

    fn name(raw: &str) -> ListName {
        let Ok(name) = ListName::parse(raw) else {
            panic!("invalid test name {raw:?}");
        };
        name
    }

    fn text(raw: &str) -> ChoiceText {
        let Ok(text) = ChoiceText::parse(raw) else {
            panic!("invalid test text {raw:?}");
        };
        text
    }

    #[tokio::test]
    async fn insert_and_find_list() {
        let store = store().await;
        let Ok(created) = store.insert_list(&name("Dinner")).await else {
            panic!("insert failed");
        };

        let Ok(Some(found)) = store.find_list(created.id).await else {
            panic!("list not found");
        };
        assert_eq!(found, created);

        let Ok(Some(by_name)) = store.find_list_by_name(&name("Dinner")).await else {
            panic!("list not found by name");
        };
        assert_eq!(by_name.id, created.id);
    }

    #[tokio::test]
    async fn duplicate_name_hits_unique_constraint() {
        let store = store().await;
        assert!(store.insert_list(&name("Dinner")).await.is_ok());

        let result = store.insert_list(&name("Dinner")).await;
        assert!(matches!(result, Err(PickerError::DuplicateListName(_))));

        let Ok(all) = store.all_lists().await else {
            panic!("listing failed");
        };
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn all_lists_newest_first() {
        let store = store().await;
        for n in ["a", "b", "c"] {
            assert!(store.insert_list(&name(n)).await.is_ok());
        }

        let Ok(all) = store.all_lists().await else {
            panic!("listing failed");
        };
        let names: Vec<&str> = all.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["c", "b", "a"]);
    }

    #[tokio::test]
    async fn choices_kept_in_insertion_order() {
        let store = store().await;
        let Ok(list) = store.insert_list(&name("Dinner")).await else {
            panic!("insert failed");
        };
        for t in ["Pizza", "Sushi", "Tacos"] {
            assert!(store.insert_choice(list.id, &text(t)).await.is_ok());
        }

        let Ok(Some(full)) = store.find_list_with_choices(list.id).await else {
            panic!("list not found");
        };
        let texts: Vec<&str> = full.choices.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["Pizza", "Sushi", "Tacos"]);
        assert!(full.choices.iter().all(|c| c.list_id == list.id));
    }

    #[tokio::test]
    async fn choice_for_missing_list_hits_foreign_key() {
        let store = store().await;
        let result = store.insert_choice(ListId::new(999), &text("Pizza")).await;
        assert!(matches!(result, Err(PickerError::ListNotFound(_))));
    }

    #[tokio::test]
    async fn delete_list_cascades_to_choices() {
        let store = store().await;
        let Ok(list) = store.insert_list(&name("Dinner")).await else {
            panic!("insert failed");
        };
        let Ok(choice) = store.insert_choice(list.id, &text("Pizza")).await else {
            panic!("choice insert failed");
        };

        assert!(matches!(store.delete_list(list.id).await, Ok(true)));
        assert!(matches!(store.find_choice(choice.id).await, Ok(None)));
        assert!(matches!(store.choices_for_list(list.id).await, Ok(v) if v.is_empty()));
        assert!(matches!(store.delete_list(list.id).await, Ok(false)));
    }

    #[tokio::test]
    async fn delete_choice_leaves_list() {
        let store = store().await;
        let Ok(list) = store.insert_list(&name("Dinner")).await else {
            panic!("insert failed");
        };
        let Ok(choice) = store.insert_choice(list.id, &text("Pizza")).await else {
            panic!("choice insert failed");
        };

        assert!(matches!(store.delete_choice(choice.id).await, Ok(true)));
        assert!(matches!(store.delete_choice(choice.id).await, Ok(false)));
        assert!(matches!(store.find_list(list.id).await, Ok(Some(_))));
    }

    #[tokio::test]
    async fn ping_succeeds() {
        assert!(store().await.ping().await.is_ok());
    }

    #[tokio::test]
    async fn closed_store_fails_ping() {
        let store = store().await;
        store.close().await;
        assert!(matches!(store.ping().await, Err(PickerError::Persistence(_))));
    }
}
