use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TaskResult;
use crate::models::{
    CreateTask, DashboardStats, TaskFilter, TaskOverview, TaskPriority, TaskResponse, TaskStatus,
    UpdateTask,
};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// OpenAPI documentation for the Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, create_task, get_task, update_task, delete_task),
    components(
        schemas(TaskResponse, CreateTask, UpdateTask, TaskFilter, TaskStatus, TaskPriority),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Tasks", description = "Task management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for the Dashboard API
#[derive(OpenApi)]
#[openapi(
    paths(dashboard_stats, task_overview),
    components(schemas(DashboardStats, TaskOverview)),
    tags(
        (name = "Dashboard", description = "Read-only task statistics")
    )
)]
pub struct DashboardApiDoc;

/// Create the tasks router with all HTTP endpoints
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/{id}", get(get_task).put(update_task).delete(delete_task))
        .with_state(shared_service)
}

/// Create the dashboard router with the statistics endpoints
pub fn dashboard_router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/stats", get(dashboard_stats))
        .route("/overview", get(task_overview))
        .with_state(shared_service)
}

/// List tasks with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = "Tasks",
    params(TaskFilter),
    responses(
        (status = 200, description = "List of matching tasks", body = Vec<TaskResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    ValidatedQuery(filter): ValidatedQuery<TaskFilter>,
) -> TaskResult<Json<Vec<TaskResponse>>> {
    let tasks = service.list_tasks(filter).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = "Tasks",
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created successfully", body = TaskResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Tasks",
    params(
        ("id" = String, Path, description = "Task ID (24-character hex string)")
    ),
    responses(
        (status = 200, description = "Task found", body = TaskResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
) -> TaskResult<Json<TaskResponse>> {
    let task = service.get_task(&id).await?;
    Ok(Json(TaskResponse::from(task)))
}

/// Partially update a task
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Tasks",
    params(
        ("id" = String, Path, description = "Task ID (24-character hex string)")
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated successfully", body = TaskResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> TaskResult<Json<TaskResponse>> {
    let task = service.update_task(&id, input).await?;
    Ok(Json(TaskResponse::from(task)))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Tasks",
    params(
        ("id" = String, Path, description = "Task ID (24-character hex string)")
    ),
    responses(
        (status = 204, description = "Task deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
) -> TaskResult<impl IntoResponse> {
    service.delete_task(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Dashboard statistics: total and per-status task counts
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Task counts by status", body = DashboardStats),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn dashboard_stats<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
) -> TaskResult<Json<DashboardStats>> {
    let stats = service.dashboard_stats().await?;
    Ok(Json(stats))
}

/// Task overview: per-status counts, high-priority count, and recent tasks
#[utoipa::path(
    get,
    path = "/overview",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Aggregated task overview", body = TaskOverview),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn task_overview<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
) -> TaskResult<Json<TaskOverview>> {
    let overview = service.task_overview().await?;
    Ok(Json(overview))
}
