//! Domain layer: identifiers, validated input, and random selection.
//!
//! Nothing in here touches storage or HTTP. The service layer combines
//! these pieces with the persistence layer.

pub mod ids;
pub mod input;
pub mod picker;

pub use ids::{ChoiceId, ListId};
pub use input::{ChoiceText, ListName};
pub use picker::pick_uniform;
