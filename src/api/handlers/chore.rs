//! Chore handlers: list, get, create, update, complete, delete.
//!
//! Every handler makes exactly one storage call.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extract::{ApiJson, ApiPath};
use crate::app_state::AppState;
use crate::domain::{Chore, ChoreDraft, ChoreId, ExecutionDraft};
use crate::error::{ApiError, ErrorResponse};
use crate::persistence::CompletionOutcome;

/// `GET /api/chore` — List every chore.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] if the store cannot be queried.
#[utoipa::path(
    get,
    path = "/api/chore",
    tag = "Chores",
    summary = "List all chores",
    description = "Returns every chore, done or pending, ordered by id.",
    responses(
        (status = 200, description = "All chores", body = Vec<Chore>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_chores(State(state): State<AppState>) -> Result<Json<Vec<Chore>>, ApiError> {
    Ok(Json(state.storage.list().await?))
}

/// `GET /api/chores` — List chores that are not done yet.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] if the store cannot be queried.
#[utoipa::path(
    get,
    path = "/api/chores",
    tag = "Chores",
    summary = "List pending chores",
    description = "Returns the chores whose `done` flag is false, ordered by id.",
    responses(
        (status = 200, description = "Pending chores", body = Vec<Chore>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_todo_chores(
    State(state): State<AppState>,
) -> Result<Json<Vec<Chore>>, ApiError> {
    Ok(Json(state.storage.list_todo().await?))
}

/// `GET /api/chore/{id}` — Get a single chore.
///
/// # Errors
///
/// Returns [`ApiError::ChoreNotFound`] if the chore does not exist.
#[utoipa::path(
    get,
    path = "/api/chore/{id}",
    tag = "Chores",
    summary = "Get a chore",
    params(
        ("id" = i64, Path, description = "Chore id"),
    ),
    responses(
        (status = 200, description = "Chore details", body = Chore),
        (status = 404, description = "Chore not found", body = ErrorResponse),
    )
)]
pub async fn get_chore(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Chore>, ApiError> {
    Ok(Json(state.storage.get(ChoreId::new(id)).await?))
}

/// `POST /api/chore` — Create a chore.
///
/// Responds with the new id as a bare JSON number.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] if the write fails.
#[utoipa::path(
    post,
    path = "/api/chore",
    tag = "Chores",
    summary = "Create a chore",
    description = "Creates a pending chore. `points` defaults to 1 when omitted; `id`, `created`, `done` and `execution` are ignored if sent.",
    request_body = ChoreDraft,
    responses(
        (status = 201, description = "Chore created", body = i64),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_chore(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<ChoreDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let id = state.storage.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

/// `PUT /api/chore/{id}` — Replace name, description and points.
///
/// # Errors
///
/// Returns [`ApiError::ChoreNotFound`] if the chore does not exist.
#[utoipa::path(
    put,
    path = "/api/chore/{id}",
    tag = "Chores",
    summary = "Edit a chore",
    description = "Overwrites name, description and points. Completion state is left untouched.",
    params(
        ("id" = i64, Path, description = "Chore id"),
    ),
    request_body = ChoreDraft,
    responses(
        (status = 202, description = "Chore updated"),
        (status = 404, description = "Chore not found", body = ErrorResponse),
    )
)]
pub async fn update_chore(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(draft): ApiJson<ChoreDraft>,
) -> Result<impl IntoResponse, ApiError> {
    state.storage.update(ChoreId::new(id), &draft).await?;
    Ok(StatusCode::ACCEPTED)
}

/// `PATCH /api/chore/{id}` — Mark a chore done.
///
/// Completing a chore that is already done succeeds without recording a
/// second execution.
///
/// # Errors
///
/// Returns [`ApiError::ChoreNotFound`] if the chore does not exist.
#[utoipa::path(
    patch,
    path = "/api/chore/{id}",
    tag = "Chores",
    summary = "Complete a chore",
    description = "Records an execution for the chore and marks it done. Idempotent.",
    params(
        ("id" = i64, Path, description = "Chore id"),
    ),
    request_body = ExecutionDraft,
    responses(
        (status = 202, description = "Chore completed (or already done)"),
        (status = 404, description = "Chore not found", body = ErrorResponse),
    )
)]
pub async fn complete_chore(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(draft): ApiJson<ExecutionDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = state.storage.complete(ChoreId::new(id), &draft).await?;
    if let CompletionOutcome::Recorded(execution_id) = outcome {
        tracing::debug!(chore_id = id, %execution_id, "completion recorded");
    }
    Ok(StatusCode::ACCEPTED)
}

/// `DELETE /api/chore/{id}` — Remove a chore.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] if the write fails. Unknown ids succeed.
#[utoipa::path(
    delete,
    path = "/api/chore/{id}",
    tag = "Chores",
    summary = "Delete a chore",
    description = "Removes the chore. Its execution records are kept.",
    params(
        ("id" = i64, Path, description = "Chore id"),
    ),
    responses(
        (status = 202, description = "Chore deleted"),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn delete_chore(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.storage.delete(ChoreId::new(id)).await?;
    Ok(StatusCode::ACCEPTED)
}

/// Chore routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/chore", get(list_chores).post(create_chore))
        .route("/chores", get(list_todo_chores))
        .route(
            "/chore/{id}",
            get(get_chore)
                .put(update_chore)
                .patch(complete_chore)
                .delete(delete_chore),
        )
}
