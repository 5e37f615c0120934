//! Service layer: business logic orchestration.
//!
//! [`ListService`] validates raw input, performs existence checks, and
//! delegates storage to [`crate::persistence::SqliteStore`].

pub mod list_service;

pub use list_service::ListService;
