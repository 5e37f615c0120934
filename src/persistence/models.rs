//! Database models for lists and choices.

use chrono::{DateTime, Utc};

use crate::domain::{ChoiceId, ListId};

/// A stored row from the `lists` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ListRecord {
    /// Auto-increment row ID.
    pub id: ListId,
    /// Trimmed, unique list name.
    pub name: String,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
}

/// A stored row from the `choices` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ChoiceRecord {
    /// Auto-increment row ID.
    pub id: ChoiceId,
    /// Owning list.
    pub list_id: ListId,
    /// Trimmed choice text.
    pub text: String,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
}

/// A list together with its choices in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListWithChoices {
    /// The list row.
    pub list: ListRecord,
    /// Child rows ordered by ID ascending.
    pub choices: Vec<ChoiceRecord>,
}
