//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task Management API",
        version = "0.1.0",
        description = "REST API for managing tasks and viewing dashboard stats, backed by MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/tasks", api = domain_tasks::ApiDoc),
        (path = "/api/dashboard", api = domain_tasks::DashboardApiDoc)
    ),
    tags(
        (name = "Tasks", description = "Task management endpoints (MongoDB)"),
        (name = "Dashboard", description = "Read-only task statistics")
    )
)]
pub struct ApiDoc;
