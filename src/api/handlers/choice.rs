//! Choice handlers: list and add under a list, get and delete by ID.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{ChoiceDto, CreateChoiceRequest, DeletedResponse};
use crate::api::extract::{ApiJson, ApiPath};
use crate::app_state::AppState;
use crate::domain::{ChoiceId, ListId};
use crate::error::{ErrorResponse, PickerError};

/// `GET /lists/{list_id}/choices` — Choices of a list.
///
/// # Errors
///
/// Returns [`PickerError::ListNotFound`] if the list does not exist.
#[utoipa::path(
    get,
    path = "/lists/{list_id}/choices",
    tag = "Choices",
    summary = "List choices",
    description = "Returns the list's choices in creation order.",
    params(
        ("list_id" = i64, Path, description = "List ID"),
    ),
    responses(
        (status = 200, description = "Choices of the list", body = Vec<ChoiceDto>),
        (status = 404, description = "List not found", body = ErrorResponse),
    )
)]
pub async fn list_choices(
    State(state): State<AppState>,
    ApiPath(list_id): ApiPath<ListId>,
) -> Result<impl IntoResponse, PickerError> {
    let choices = state.list_service.list_choices(list_id).await?;
    let data: Vec<ChoiceDto> = choices.into_iter().map(ChoiceDto::from).collect();
    Ok(Json(data))
}

/// `POST /lists/{list_id}/choices` — Add a choice.
///
/// # Errors
///
/// Returns [`PickerError::Validation`] for blank text and
/// [`PickerError::ListNotFound`] if the list does not exist.
#[utoipa::path(
    post,
    path = "/lists/{list_id}/choices",
    tag = "Choices",
    summary = "Add a choice",
    description = "Adds a choice to the list. The text is trimmed and must not be blank.",
    params(
        ("list_id" = i64, Path, description = "List ID"),
    ),
    request_body = CreateChoiceRequest,
    responses(
        (status = 201, description = "Choice created", body = ChoiceDto),
        (status = 404, description = "List not found", body = ErrorResponse),
        (status = 422, description = "Blank text", body = ErrorResponse),
    )
)]
pub async fn add_choice(
    State(state): State<AppState>,
    ApiPath(list_id): ApiPath<ListId>,
    ApiJson(req): ApiJson<CreateChoiceRequest>,
) -> Result<impl IntoResponse, PickerError> {
    let choice = state.list_service.add_choice(list_id, &req.text).await?;
    Ok((StatusCode::CREATED, Json(ChoiceDto::from(choice))))
}

/// `GET /choices/{choice_id}` — A single choice.
///
/// # Errors
///
/// Returns [`PickerError::ChoiceNotFound`] if the choice does not exist.
#[utoipa::path(
    get,
    path = "/choices/{choice_id}",
    tag = "Choices",
    summary = "Get a choice",
    params(
        ("choice_id" = i64, Path, description = "Choice ID"),
    ),
    responses(
        (status = 200, description = "Choice", body = ChoiceDto),
        (status = 404, description = "Choice not found", body = ErrorResponse),
    )
)]
pub async fn get_choice(
    State(state): State<AppState>,
    ApiPath(choice_id): ApiPath<ChoiceId>,
) -> Result<impl IntoResponse, PickerError> {
    let choice = state.list_service.get_choice(choice_id).await?;
    Ok(Json(ChoiceDto::from(choice)))
}

/// `DELETE /choices/{choice_id}` — Remove a single choice.
///
/// # Errors
///
/// Returns [`PickerError::ChoiceNotFound`] if the choice does not exist.
#[utoipa::path(
    delete,
    path = "/choices/{choice_id}",
    tag = "Choices",
    summary = "Delete a choice",
    description = "Deletes one choice; the parent list is unaffected.",
    params(
        ("choice_id" = i64, Path, description = "Choice ID"),
    ),
    responses(
        (status = 200, description = "Choice deleted", body = DeletedResponse),
        (status = 404, description = "Choice not found", body = ErrorResponse),
    )
)]
pub async fn delete_choice(
    State(state): State<AppState>,
    ApiPath(choice_id): ApiPath<ChoiceId>,
) -> Result<impl IntoResponse, PickerError> {
    state.list_service.delete_choice(choice_id).await?;
    Ok(Json(DeletedResponse::confirmed()))
}

/// Choice routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/lists/{list_id}/choices", get(list_choices).post(add_choice))
        .route("/choices/{choice_id}", get(get_choice).delete(delete_choice))
}
