//! Choice DTOs for create, get, and list operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ChoiceId, ListId};
use crate::persistence::ChoiceRecord;

/// Request body for `POST /lists/{list_id}/choices`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateChoiceRequest {
    /// Choice text; trimmed, must not be blank.
    pub text: String,
}

/// A single choice as returned by every choice endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChoiceDto {
    /// Choice identifier.
    pub id: ChoiceId,
    /// Owning list.
    pub list_id: ListId,
    /// Trimmed choice text.
    pub text: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<ChoiceRecord> for ChoiceDto {
    fn from(record: ChoiceRecord) -> Self {
        Self {
            id: record.id,
            list_id: record.list_id,
            text: record.text,
            created_at: record.created_at,
        }
    }
}
