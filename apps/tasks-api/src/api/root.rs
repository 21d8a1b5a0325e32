//! Root liveness endpoint.

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Create the root router with the `/` liveness endpoint
pub fn router() -> Router {
    Router::new().route("/", get(root_handler))
}

/// Liveness payload served at the application root
async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Welcome to the Task Management API!"
    }))
}
