//! REST API layer: route handlers, OpenAPI document, and router composition.
//!
//! Resource endpoints are mounted under `/api`.

pub mod extract;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;
use crate::domain::{Chore, ChoreDraft, ChoreId, Execution, ExecutionDraft, ExecutionId};
use crate::error::{ErrorBody, ErrorResponse};

/// OpenAPI document for every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "chore-tracker",
        description = "Household chores and their completion ledger."
    ),
    paths(
        handlers::chore::list_chores,
        handlers::chore::list_todo_chores,
        handlers::chore::get_chore,
        handlers::chore::create_chore,
        handlers::chore::update_chore,
        handlers::chore::complete_chore,
        handlers::chore::delete_chore,
        handlers::execution::list_executions,
        handlers::execution::get_execution,
        handlers::system::health_handler,
    ),
    components(schemas(
        Chore,
        ChoreDraft,
        ChoreId,
        Execution,
        ExecutionDraft,
        ExecutionId,
        ErrorResponse,
        ErrorBody,
        handlers::system::HealthResponse,
    )),
    tags(
        (name = "Chores", description = "Chore definitions and completion"),
        (name = "Executions", description = "Completion ledger"),
        (name = "System", description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
///
/// With the `swagger-ui` feature the UI is served at `/swagger-ui` and the
/// document at `/api-docs/openapi.json`.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}
