//! # choice-picker
//!
//! REST service for named lists of free-text choices, with an endpoint
//! that picks one choice of a list uniformly at random.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ListService (service/)
//!     ├── Validated input, picker (domain/)
//!     │
//!     └── SQLite Persistence (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
