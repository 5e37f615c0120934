//! List handlers: create, list, get, delete, and random pick.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{ChoiceDto, CreateListRequest, DeletedResponse, ListDetailDto, ListDto};
use crate::api::extract::{ApiJson, ApiPath};
use crate::app_state::AppState;
use crate::domain::ListId;
use crate::error::{ErrorResponse, PickerError};

/// `GET /lists` — All lists, newest first.
///
/// # Errors
///
/// Returns [`PickerError::Persistence`] on storage failure.
#[utoipa::path(
    get,
    path = "/lists",
    tag = "Lists",
    summary = "List all lists",
    description = "Returns every list ordered by ID descending (most recently created first).",
    responses(
        (status = 200, description = "All lists", body = Vec<ListDto>),
    )
)]
pub async fn list_lists(State(state): State<AppState>) -> Result<impl IntoResponse, PickerError> {
    let lists = state.list_service.list_lists().await?;
    let data: Vec<ListDto> = lists.into_iter().map(ListDto::from).collect();
    Ok(Json(data))
}

/// `POST /lists` — Create a list.
///
/// # Errors
///
/// Returns [`PickerError::Validation`] for a blank name and
/// [`PickerError::DuplicateListName`] if the name is taken.
#[utoipa::path(
    post,
    path = "/lists",
    tag = "Lists",
    summary = "Create a list",
    description = "Creates a list with the given name. The name is trimmed and must be unique.",
    request_body = CreateListRequest,
    responses(
        (status = 201, description = "List created", body = ListDto),
        (status = 409, description = "Name already in use", body = ErrorResponse),
        (status = 422, description = "Blank or overlong name", body = ErrorResponse),
    )
)]
pub async fn create_list(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateListRequest>,
) -> Result<impl IntoResponse, PickerError> {
    let list = state.list_service.create_list(&req.name).await?;
    Ok((StatusCode::CREATED, Json(ListDto::from(list))))
}

/// `GET /lists/{list_id}` — A list with its choices.
///
/// # Errors
///
/// Returns [`PickerError::ListNotFound`] if the list does not exist.
#[utoipa::path(
    get,
    path = "/lists/{list_id}",
    tag = "Lists",
    summary = "Get a list",
    description = "Returns the list and all of its choices in creation order.",
    params(
        ("list_id" = i64, Path, description = "List ID"),
    ),
    responses(
        (status = 200, description = "List details", body = ListDetailDto),
        (status = 404, description = "List not found", body = ErrorResponse),
    )
)]
pub async fn get_list(
    State(state): State<AppState>,
    ApiPath(list_id): ApiPath<ListId>,
) -> Result<impl IntoResponse, PickerError> {
    let full = state.list_service.get_list(list_id).await?;
    Ok(Json(ListDetailDto::from(full)))
}

/// `DELETE /lists/{list_id}` — Remove a list and its choices.
///
/// # Errors
///
/// Returns [`PickerError::ListNotFound`] if the list does not exist.
#[utoipa::path(
    delete,
    path = "/lists/{list_id}",
    tag = "Lists",
    summary = "Delete a list",
    description = "Deletes the list; all of its choices are deleted in the same operation.",
    params(
        ("list_id" = i64, Path, description = "List ID"),
    ),
    responses(
        (status = 200, description = "List deleted", body = DeletedResponse),
        (status = 404, description = "List not found", body = ErrorResponse),
    )
)]
pub async fn delete_list(
    State(state): State<AppState>,
    ApiPath(list_id): ApiPath<ListId>,
) -> Result<impl IntoResponse, PickerError> {
    state.list_service.delete_list(list_id).await?;
    Ok(Json(DeletedResponse::confirmed()))
}

/// `POST /lists/{list_id}/pick` — One choice, uniformly at random.
///
/// # Errors
///
/// Returns [`PickerError::ListNotFound`] if the list does not exist and
/// [`PickerError::EmptyList`] if it has no choices.
#[utoipa::path(
    post,
    path = "/lists/{list_id}/pick",
    tag = "Lists",
    summary = "Pick a random choice",
    description = "Selects one of the list's choices with equal probability.",
    params(
        ("list_id" = i64, Path, description = "List ID"),
    ),
    responses(
        (status = 200, description = "Picked choice", body = ChoiceDto),
        (status = 400, description = "List has no choices", body = ErrorResponse),
        (status = 404, description = "List not found", body = ErrorResponse),
    )
)]
pub async fn pick_choice(
    State(state): State<AppState>,
    ApiPath(list_id): ApiPath<ListId>,
) -> Result<impl IntoResponse, PickerError> {
    let picked = state.list_service.pick(list_id).await?;
    Ok(Json(ChoiceDto::from(picked)))
}

/// List routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/lists", get(list_lists).post(create_list))
        .route("/lists/{list_id}", get(get_list).delete(delete_list))
        .route("/lists/{list_id}/pick", post(pick_choice))
}
