//! Data Transfer Objects for REST request/response serialization.

pub mod choice_dto;
pub mod common_dto;
pub mod list_dto;

pub use choice_dto::*;
pub use common_dto::*;
pub use list_dto::*;
