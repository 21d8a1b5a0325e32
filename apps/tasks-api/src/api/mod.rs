//! API routes module
//!
//! This module defines all HTTP API routes for the Task Management API.

pub mod dashboard;
pub mod health;
pub mod root;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/tasks", tasks::router(state))
        .nest("/dashboard", dashboard::router(state))
}
