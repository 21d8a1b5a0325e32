//! Tasks API routes
//!
//! This module wires up the tasks domain to HTTP routes.

use axum::Router;
use domain_tasks::{MongoTaskRepository, TaskService, handlers};

use crate::state::AppState;

/// Create tasks router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repository
    let repository = MongoTaskRepository::new(state.db.clone());

    // Create the service
    let service = TaskService::new(repository);

    // Return the domain's router
    handlers::router(service)
}
