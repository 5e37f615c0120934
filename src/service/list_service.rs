//! List service: validates input, checks existence, and drives the store.

use crate::domain::{ChoiceId, ChoiceText, ListId, ListName, pick_uniform};
use crate::error::PickerError;
use crate::persistence::{ChoiceRecord, ListRecord, ListWithChoices, SqliteStore};

/// Orchestration layer for all list and choice operations.
///
/// Stateless apart from the store handle. Every method follows the
/// pattern: validate raw input → check existence → call the store →
/// return the record. Raw strings are validated before the store is
/// touched.
#[derive(Debug, Clone)]
pub struct ListService {
    store: SqliteStore,
}

impl ListService {
    /// Creates a new `ListService` over `store`.
    #[must_use]
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Reports whether the database answers a ping.
    pub async fn database_available(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "database ping failed");
                false
            }
        }
    }

    /// Returns every list, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`PickerError::Persistence`] on storage failure.
    pub async fn list_lists(&self) -> Result<Vec<ListRecord>, PickerError> {
        self.store.all_lists().await
    }

    /// Creates a list named `raw_name` after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Validation`] for a blank or overlong name and
    /// [`PickerError::DuplicateListName`] if the trimmed name is taken,
    /// including when a concurrent writer wins the race.
    pub async fn create_list(&self, raw_name: &str) -> Result<ListRecord, PickerError> {
        let name = ListName::parse(raw_name)?;

        if self.store.find_list_by_name(&name).await?.is_some() {
            return Err(PickerError::DuplicateListName(name.to_string()));
        }

        let list = self.store.insert_list(&name).await?;
        tracing::info!(list_id = %list.id, name = %list.name, "list created");
        Ok(list)
    }

    /// Returns a list with its choices in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::ListNotFound`] if no list has this ID.
    pub async fn get_list(&self, list_id: ListId) -> Result<ListWithChoices, PickerError> {
        self.store
            .find_list_with_choices(list_id)
            .await?
            .ok_or(PickerError::ListNotFound(list_id))
    }

    /// Deletes a list and, by cascade, all of its choices.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::ListNotFound`] if no list has this ID.
    pub async fn delete_list(&self, list_id: ListId) -> Result<(), PickerError> {
        if !self.store.delete_list(list_id).await? {
            return Err(PickerError::ListNotFound(list_id));
        }
        tracing::info!(%list_id, "list deleted");
        Ok(())
    }

    /// Returns the choices of a list in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::ListNotFound`] if no list has this ID.
    pub async fn list_choices(&self, list_id: ListId) -> Result<Vec<ChoiceRecord>, PickerError> {
        if self.store.find_list(list_id).await?.is_none() {
            return Err(PickerError::ListNotFound(list_id));
        }
        self.store.choices_for_list(list_id).await
    }

    /// Adds a choice with text `raw_text` (trimmed) to a list.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Validation`] for blank text and
    /// [`PickerError::ListNotFound`] if no list has this ID.
    pub async fn add_choice(
        &self,
        list_id: ListId,
        raw_text: &str,
    ) -> Result<ChoiceRecord, PickerError> {
        let text = ChoiceText::parse(raw_text)?;

        if self.store.find_list(list_id).await?.is_none() {
            return Err(PickerError::ListNotFound(list_id));
        }

        let choice = self.store.insert_choice(list_id, &text).await?;
        tracing::info!(%list_id, choice_id = %choice.id, "choice added");
        Ok(choice)
    }

    /// Returns a single choice.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::ChoiceNotFound`] if no choice has this ID.
    pub async fn get_choice(&self, choice_id: ChoiceId) -> Result<ChoiceRecord, PickerError> {
        self.store
            .find_choice(choice_id)
            .await?
            .ok_or(PickerError::ChoiceNotFound(choice_id))
    }

    /// Deletes a single choice; the parent list is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::ChoiceNotFound`] if no choice has this ID.
    pub async fn delete_choice(&self, choice_id: ChoiceId) -> Result<(), PickerError> {
        if !self.store.delete_choice(choice_id).await? {
            return Err(PickerError::ChoiceNotFound(choice_id));
        }
        tracing::info!(%choice_id, "choice deleted");
        Ok(())
    }

    /// Picks one choice of a list uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::ListNotFound`] if no list has this ID and
    /// [`PickerError::EmptyList`] if the list has no choices.
    pub async fn pick(&self, list_id: ListId) -> Result<ChoiceRecord, PickerError> {
        let ListWithChoices { choices, .. } = self.get_list(list_id).await?;

        let picked = pick_uniform(&choices, &mut rand::thread_rng())
            .cloned()
            .ok_or(PickerError::EmptyList(list_id))?;

        tracing::debug!(%list_id, choice_id = %picked.id, candidates = choices.len(), "choice picked");
        Ok(picked)
    }
}
