use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::id::TaskId;

/// Task status
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskStatus {
    /// Task has not been started yet
    #[default]
    Pending,
    /// Task is actively being worked on
    InProgress,
    /// Task is done
    Completed,
}

/// Task priority
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// Task entity - represents a task stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id")]
    pub id: TaskId,
    /// Task title
    pub title: String,
    /// Detailed description
    pub description: String,
    /// Current status
    pub status: TaskStatus,
    /// Priority level
    pub priority: TaskPriority,
    /// Optional completion deadline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task from a CreateTask DTO.
    ///
    /// Assigns a fresh identifier and sets both timestamps to the same instant.
    pub fn new(input: CreateTask) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            title: input.title,
            description: input.description,
            status: input.status,
            priority: input.priority,
            due_date: input.due_date,
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 3, max = 100))]
    pub title: String,
    #[validate(length(min = 3, max = 500))]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
}

/// DTO for partially updating an existing task.
///
/// Fields left out of the payload are not touched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTask {
    #[validate(length(min = 3, max = 100))]
    pub title: Option<String>,
    #[validate(length(min = 3, max = 500))]
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<DateTime<Utc>>,
}

impl UpdateTask {
    /// True when the payload carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }
}

/// Query filters for listing tasks
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, IntoParams)]
pub struct TaskFilter {
    /// Filter by status
    pub status: Option<TaskStatus>,
    /// Filter by priority
    pub priority: Option<TaskPriority>,
    /// Case-insensitive substring match against title and description
    pub search: Option<String>,
    /// Number of results to skip
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of results
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            status: None,
            priority: None,
            search: None,
            skip: 0,
            limit: default_limit(),
        }
    }
}

/// Task representation on the wire: identifier as a hex string, timestamps
/// as RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskResponse {
    /// Unique identifier as a 24-character hex string
    #[schema(example = "68b1f0a2c3d4e5f6a7b8c9d0")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.to_hex(),
            title: task.title,
            description: task.description,
            status: task.status,
            priority: task.priority,
            due_date: task.due_date,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// Dashboard statistics: total and per-status task counts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_tasks: u64,
    pub pending_tasks: u64,
    pub in_progress_tasks: u64,
    pub completed_tasks: u64,
}

/// Richer dashboard shape: per-status counts plus high-priority count and
/// the most recently created tasks
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskOverview {
    pub total_tasks: u64,
    /// Count per status label; statuses with no tasks may be absent
    pub status_counts: HashMap<String, u64>,
    pub high_priority_count: u64,
    /// The five most recently created tasks, newest first
    pub recent_tasks: Vec<TaskResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_defaults() {
        let input: CreateTask = serde_json::from_value(serde_json::json!({
            "title": "Fix bug",
            "description": "Crash on empty payload"
        }))
        .unwrap();

        assert_eq!(input.status, TaskStatus::Pending);
        assert_eq!(input.priority, TaskPriority::Medium);
        assert!(input.due_date.is_none());
    }

    #[test]
    fn test_create_task_rejects_unknown_enum_label() {
        let result: Result<CreateTask, _> = serde_json::from_value(serde_json::json!({
            "title": "Fix bug",
            "description": "Crash on empty payload",
            "status": "done"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_task_length_bounds() {
        let too_short = CreateTask {
            title: "ab".to_string(),
            description: "A valid description".to_string(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
        };
        assert!(too_short.validate().is_err());

        let too_long = CreateTask {
            title: "x".repeat(101),
            description: "A valid description".to_string(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
        };
        assert!(too_long.validate().is_err());

        let ok = CreateTask {
            title: "Fix bug".to_string(),
            description: "x".repeat(500),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_task_new_sets_equal_timestamps() {
        let task = Task::new(CreateTask {
            title: "Fix bug".to_string(),
            description: "Crash on empty payload".to_string(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
        });
        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, TaskPriority::Medium);
    }

    #[test]
    fn test_update_task_is_empty() {
        assert!(UpdateTask::default().is_empty());

        let update = UpdateTask {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_status_labels_are_snake_case() {
        assert_eq!(TaskStatus::InProgress.to_string(), "in_progress");
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).unwrap(),
            serde_json::json!("in_progress")
        );
        assert_eq!(TaskPriority::High.to_string(), "high");
    }

    #[test]
    fn test_task_response_carries_hex_id() {
        let task = Task::new(CreateTask {
            title: "Fix bug".to_string(),
            description: "Crash on empty payload".to_string(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
        });
        let id = task.id;

        let response = TaskResponse::from(task);
        assert_eq!(response.id, id.to_hex());
    }

    #[test]
    fn test_task_filter_default_paging() {
        let filter: TaskFilter = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(filter.skip, 0);
        assert_eq!(filter.limit, 10);
    }
}
