//! Request extractors whose failures render as [`PickerError`] bodies.
//!
//! Axum's own `Json` and `Path` reject with plain text; these wrappers
//! route the rejection through [`PickerError::MalformedRequest`] so every
//! error response has the same JSON shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::PickerError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(PickerError))]
pub struct ApiJson<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(PickerError))]
pub struct ApiPath<T>(pub T);
