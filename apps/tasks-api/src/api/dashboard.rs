//! Dashboard API routes
//!
//! Read-only statistics over the tasks collection.

use axum::Router;
use domain_tasks::{MongoTaskRepository, TaskService, handlers};

use crate::state::AppState;

/// Create dashboard router
pub fn router(state: &AppState) -> Router {
    let repository = MongoTaskRepository::new(state.db.clone());
    let service = TaskService::new(repository);

    handlers::dashboard_router(service)
}
