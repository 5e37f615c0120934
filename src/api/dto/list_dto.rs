//! List DTOs for create, get, and list operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::choice_dto::ChoiceDto;
use crate::domain::ListId;
use crate::persistence::{ListRecord, ListWithChoices};

/// Request body for `POST /lists`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateListRequest {
    /// List name; trimmed, must not be blank, unique across lists.
    pub name: String,
}

/// List summary for `GET /lists` and `POST /lists`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListDto {
    /// List identifier.
    pub id: ListId,
    /// Trimmed list name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<ListRecord> for ListDto {
    fn from(record: ListRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            created_at: record.created_at,
        }
    }
}

/// Single list detail for `GET /lists/{list_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListDetailDto {
    /// List identifier.
    pub id: ListId,
    /// Trimmed list name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Choices in creation order.
    pub choices: Vec<ChoiceDto>,
}

impl From<ListWithChoices> for ListDetailDto {
    fn from(full: ListWithChoices) -> Self {
        Self {
            id: full.list.id,
            name: full.list.name,
            created_at: full.list.created_at,
            choices: full.choices.into_iter().map(ChoiceDto::from).collect(),
        }
    }
}
