use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::error::TaskResult;
use crate::id::TaskId;
use crate::models::{Task, TaskFilter, UpdateTask};

/// Repository trait for Task persistence.
///
/// Each operation maps 1:1 to a database call with no business logic on top.
/// Connectivity failures surface as `TaskError::Database`; the repository
/// never retries or reinterprets them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a new task document and return the persisted identifier
    async fn insert(&self, task: Task) -> TaskResult<TaskId>;

    /// Fetch a task by its identifier
    async fn find_by_id(&self, id: TaskId) -> TaskResult<Option<Task>>;

    /// List tasks matching the filter, with the filter's skip/limit applied
    async fn find(&self, filter: TaskFilter) -> TaskResult<Vec<Task>>;

    /// Count all tasks matching the filter (skip/limit are ignored)
    async fn count(&self, filter: TaskFilter) -> TaskResult<u64>;

    /// Set the supplied fields plus `updated_at` on a task document.
    ///
    /// Returns the matched count (0 or 1).
    async fn update_fields(
        &self,
        id: TaskId,
        update: UpdateTask,
        updated_at: DateTime<Utc>,
    ) -> TaskResult<u64>;

    /// Delete a task by its identifier; returns the deleted count (0 or 1)
    async fn delete_by_id(&self, id: TaskId) -> TaskResult<u64>;

    /// Number of tasks per status label
    async fn status_counts(&self) -> TaskResult<HashMap<String, u64>>;

    /// Number of high-priority tasks
    async fn high_priority_count(&self) -> TaskResult<u64>;

    /// The `limit` most recently created tasks, newest first
    async fn find_recent(&self, limit: i64) -> TaskResult<Vec<Task>>;
}
