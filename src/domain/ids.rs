//! Type-safe record identifiers.
//!
//! [`ListId`] and [`ChoiceId`] wrap the integer keys assigned by storage so
//! that a list identifier cannot be passed where a choice identifier is
//! expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a list.
///
/// Assigned by storage on insert and immutable thereafter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
    sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ListId(i64);

impl ListId {
    /// Wraps a raw storage key.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw storage key.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ListId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// Unique identifier for a choice.
///
/// Assigned by storage on insert and immutable thereafter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
    sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ChoiceId(i64);

impl ChoiceId {
    /// Wraps a raw storage key.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw storage key.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChoiceId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_integer() {
        let Ok(json) = serde_json::to_string(&ListId::new(42)) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "42");

        let Ok(id) = serde_json::from_str::<ChoiceId>("7") else {
            panic!("deserialization failed");
        };
        assert_eq!(id, ChoiceId::new(7));
    }

    #[test]
    fn display_is_raw_key() {
        assert_eq!(ListId::new(12).to_string(), "12");
        assert_eq!(ChoiceId::from(9).to_string(), "9");
    }
}
