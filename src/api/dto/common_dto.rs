//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation body returned by delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    /// Always `true`.
    pub ok: bool,
}

impl DeletedResponse {
    /// The single confirmation value.
    #[must_use]
    pub const fn confirmed() -> Self {
        Self { ok: true }
    }
}
