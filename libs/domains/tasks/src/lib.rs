//! Tasks Domain
//!
//! This module provides a complete domain implementation for managing tasks using MongoDB,
//! plus read-only aggregations backing the dashboard statistics endpoints.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, id decoding
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, identifiers
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{
//!     handlers,
//!     mongodb::MongoTaskRepository,
//!     service::TaskService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a MongoDB client
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("task_manager");
//!
//! // Create a repository and service
//! let repository = MongoTaskRepository::new(db);
//! let service = TaskService::new(repository);
//!
//! // Create Axum routers
//! let tasks = handlers::router(service.clone());
//! let dashboard = handlers::dashboard_router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod id;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use handlers::{ApiDoc, DashboardApiDoc};
pub use id::TaskId;
pub use models::{
    CreateTask, DashboardStats, Task, TaskFilter, TaskOverview, TaskPriority, TaskResponse,
    TaskStatus, UpdateTask,
};
pub use mongodb::MongoTaskRepository;
pub use repository::TaskRepository;
pub use service::TaskService;
