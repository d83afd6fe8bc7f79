//! REST endpoint handlers organized by resource.

pub mod chore;
pub mod execution;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(chore::routes())
        .merge(execution::routes())
}
