//! Execution ledger handlers (read-only).

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extract::ApiPath;
use crate::app_state::AppState;
use crate::domain::{Execution, ExecutionId};
use crate::error::{ApiError, ErrorResponse};

/// `GET /api/execution` — List every recorded execution.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] if the store cannot be queried.
#[utoipa::path(
    get,
    path = "/api/execution",
    tag = "Executions",
    summary = "List executions",
    description = "Returns the completion ledger ordered by id, including executions of deleted chores.",
    responses(
        (status = 200, description = "All executions", body = Vec<Execution>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_executions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Execution>>, ApiError> {
    Ok(Json(state.storage.list_executions().await?))
}

/// `GET /api/execution/{id}` — Get a single execution.
///
/// # Errors
///
/// Returns [`ApiError::ExecutionNotFound`] if the execution does not exist.
#[utoipa::path(
    get,
    path = "/api/execution/{id}",
    tag = "Executions",
    summary = "Get an execution",
    params(
        ("id" = i64, Path, description = "Execution id"),
    ),
    responses(
        (status = 200, description = "Execution record", body = Execution),
        (status = 404, description = "Execution not found", body = ErrorResponse),
    )
)]
pub async fn get_execution(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Execution>, ApiError> {
    Ok(Json(
        state.storage.get_execution(ExecutionId::new(id)).await?,
    ))
}

/// Execution routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/execution", get(list_executions))
        .route("/execution/{id}", get(get_execution))
}
