//! Task Service - Business logic layer

use chrono::Utc;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::id::TaskId;
use crate::models::{
    CreateTask, DashboardStats, Task, TaskFilter, TaskOverview, TaskResponse, TaskStatus,
    UpdateTask,
};
use crate::repository::TaskRepository;

/// How many tasks the overview endpoint reports as "recent"
const RECENT_TASKS_LIMIT: i64 = 5;

/// Task service providing business logic operations.
///
/// The service layer handles validation, timestamping, identifier decoding,
/// and orchestrates repository operations. Store outcomes are translated into
/// the [`TaskError`] taxonomy here; driver errors never cross this boundary.
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    /// Create a new TaskService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new task
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let mut task = Task::new(input);
        let id = self.repository.insert(task.clone()).await?;

        // Reflect the identifier the store actually persisted
        task.id = id;
        Ok(task)
    }

    /// Get a task by its wire-string identifier
    #[instrument(skip(self))]
    pub async fn get_task(&self, id: &str) -> TaskResult<Task> {
        let task_id = TaskId::parse(id)?;

        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    /// List tasks matching the filter
    #[instrument(skip(self))]
    pub async fn list_tasks(&self, filter: TaskFilter) -> TaskResult<Vec<Task>> {
        self.repository.find(filter).await
    }

    /// Count tasks matching the filter (paging ignored)
    #[instrument(skip(self))]
    pub async fn count_tasks(&self, filter: TaskFilter) -> TaskResult<u64> {
        self.repository.count(filter).await
    }

    /// Partially update a task.
    ///
    /// Rejects empty payloads, refreshes `updated_at`, and returns the
    /// refreshed record.
    #[instrument(skip(self, input))]
    pub async fn update_task(&self, id: &str, input: UpdateTask) -> TaskResult<Task> {
        if input.is_empty() {
            return Err(TaskError::Validation("No update data provided".to_string()));
        }

        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let task_id = TaskId::parse(id)?;
        let updated_at = Utc::now();

        let matched = self
            .repository
            .update_fields(task_id, input, updated_at)
            .await?;
        if matched == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }

        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    /// Delete a task
    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: &str) -> TaskResult<()> {
        let task_id = TaskId::parse(id)?;

        let deleted = self.repository.delete_by_id(task_id).await?;
        if deleted == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }

        Ok(())
    }

    /// Total and per-status counts for the dashboard
    #[instrument(skip(self))]
    pub async fn dashboard_stats(&self) -> TaskResult<DashboardStats> {
        let total_tasks = self.repository.count(TaskFilter::default()).await?;
        let counts = self.repository.status_counts().await?;

        let count_for = |status: TaskStatus| counts.get(&status.to_string()).copied().unwrap_or(0);

        Ok(DashboardStats {
            total_tasks,
            pending_tasks: count_for(TaskStatus::Pending),
            in_progress_tasks: count_for(TaskStatus::InProgress),
            completed_tasks: count_for(TaskStatus::Completed),
        })
    }

    /// Richer dashboard shape: per-status counts, high-priority count, and
    /// the most recently created tasks
    #[instrument(skip(self))]
    pub async fn task_overview(&self) -> TaskResult<TaskOverview> {
        let total_tasks = self.repository.count(TaskFilter::default()).await?;
        let status_counts = self.repository.status_counts().await?;
        let high_priority_count = self.repository.high_priority_count().await?;
        let recent = self.repository.find_recent(RECENT_TASKS_LIMIT).await?;

        Ok(TaskOverview {
            total_tasks,
            status_counts,
            high_priority_count,
            recent_tasks: recent.into_iter().map(TaskResponse::from).collect(),
        })
    }
}

impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskPriority;
    use crate::repository::MockTaskRepository;
    use std::collections::HashMap;

    fn valid_input() -> CreateTask {
        CreateTask {
            title: "Fix bug".to_string(),
            description: "Crash on empty payload".to_string(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
        }
    }

    #[tokio::test]
    async fn test_create_task_returns_persisted_id_and_equal_timestamps() {
        let persisted = TaskId::new();
        let mut repo = MockTaskRepository::new();
        repo.expect_insert().returning(move |_| Ok(persisted));

        let service = TaskService::new(repo);
        let task = service.create_task(valid_input()).await.unwrap();

        assert_eq!(task.id, persisted);
        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, TaskPriority::Medium);
    }

    #[tokio::test]
    async fn test_create_task_rejects_short_title_before_store() {
        // No insert expectation set: reaching the repository would panic
        let repo = MockTaskRepository::new();
        let service = TaskService::new(repo);

        let input = CreateTask {
            title: "ab".to_string(),
            ..valid_input()
        };

        let err = service.create_task(input).await.unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_task_rejects_malformed_id_before_store() {
        let repo = MockTaskRepository::new();
        let service = TaskService::new(repo);

        let err = service.get_task("not-a-valid-id").await.unwrap_err();
        assert!(matches!(err, TaskError::InvalidId(_)));
    }

    #[tokio::test]
    async fn test_get_task_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = TaskService::new(repo);
        let id = TaskId::new().to_hex();

        let err = service.get_task(&id).await.unwrap_err();
        assert!(matches!(err, TaskError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_tasks_forwards_filter() {
        let mut repo = MockTaskRepository::new();
        repo.expect_find()
            .withf(|filter| filter.status == Some(TaskStatus::Pending) && filter.limit == 10)
            .returning(|_| Ok(vec![]));

        let service = TaskService::new(repo);
        let filter = TaskFilter {
            status: Some(TaskStatus::Pending),
            ..Default::default()
        };

        assert!(service.list_tasks(filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_count_tasks_uses_same_filter_shape() {
        let mut repo = MockTaskRepository::new();
        repo.expect_count()
            .withf(|filter| filter.search.as_deref() == Some("auth"))
            .returning(|_| Ok(7));

        let service = TaskService::new(repo);
        let filter = TaskFilter {
            search: Some("auth".to_string()),
            ..Default::default()
        };

        assert_eq!(service.count_tasks(filter).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_update_task_rejects_empty_payload() {
        let repo = MockTaskRepository::new();
        let service = TaskService::new(repo);
        let id = TaskId::new().to_hex();

        let err = service
            .update_task(&id, UpdateTask::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_task_not_found_when_nothing_matched() {
        let mut repo = MockTaskRepository::new();
        repo.expect_update_fields().returning(|_, _, _| Ok(0));

        let service = TaskService::new(repo);
        let id = TaskId::new().to_hex();

        let update = UpdateTask {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        };

        let err = service.update_task(&id, update).await.unwrap_err();
        assert!(matches!(err, TaskError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_task_returns_refreshed_record() {
        let task = Task::new(valid_input());
        let id = task.id;

        let mut refreshed = task.clone();
        refreshed.status = TaskStatus::Completed;
        refreshed.updated_at = Utc::now();

        let mut repo = MockTaskRepository::new();
        repo.expect_update_fields()
            .withf(move |got_id, update, _| *got_id == id && !update.is_empty())
            .returning(|_, _, _| Ok(1));
        let returned = refreshed.clone();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(returned.clone())));

        let service = TaskService::new(repo);
        let result = service
            .update_task(
                &id.to_hex(),
                UpdateTask {
                    status: Some(TaskStatus::Completed),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(result.status, TaskStatus::Completed);
        assert!(result.updated_at > result.created_at);
    }

    #[tokio::test]
    async fn test_delete_task_not_found_when_nothing_deleted() {
        let mut repo = MockTaskRepository::new();
        repo.expect_delete_by_id().returning(|_| Ok(0));

        let service = TaskService::new(repo);
        let id = TaskId::new().to_hex();

        let err = service.delete_task(&id).await.unwrap_err();
        assert!(matches!(err, TaskError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_task_success() {
        let mut repo = MockTaskRepository::new();
        repo.expect_delete_by_id().returning(|_| Ok(1));

        let service = TaskService::new(repo);
        let id = TaskId::new().to_hex();

        assert!(service.delete_task(&id).await.is_ok());
    }

    #[tokio::test]
    async fn test_dashboard_stats_per_status_counts_sum_to_total() {
        let mut repo = MockTaskRepository::new();
        repo.expect_count().returning(|_| Ok(6));
        repo.expect_status_counts().returning(|| {
            Ok(HashMap::from([
                ("pending".to_string(), 3),
                ("in_progress".to_string(), 1),
                ("completed".to_string(), 2),
            ]))
        });

        let service = TaskService::new(repo);
        let stats = service.dashboard_stats().await.unwrap();

        assert_eq!(stats.total_tasks, 6);
        assert_eq!(stats.pending_tasks, 3);
        assert_eq!(stats.in_progress_tasks, 1);
        assert_eq!(stats.completed_tasks, 2);
        assert_eq!(
            stats.total_tasks,
            stats.pending_tasks + stats.in_progress_tasks + stats.completed_tasks
        );
    }

    #[tokio::test]
    async fn test_dashboard_stats_missing_statuses_count_zero() {
        let mut repo = MockTaskRepository::new();
        repo.expect_count().returning(|_| Ok(0));
        repo.expect_status_counts().returning(|| Ok(HashMap::new()));

        let service = TaskService::new(repo);
        let stats = service.dashboard_stats().await.unwrap();

        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.pending_tasks, 0);
        assert_eq!(stats.in_progress_tasks, 0);
        assert_eq!(stats.completed_tasks, 0);
    }

    #[tokio::test]
    async fn test_task_overview_fetches_five_recent_tasks() {
        let mut repo = MockTaskRepository::new();
        repo.expect_count().returning(|_| Ok(1));
        repo.expect_status_counts()
            .returning(|| Ok(HashMap::from([("pending".to_string(), 1)])));
        repo.expect_high_priority_count().returning(|| Ok(0));
        repo.expect_find_recent()
            .withf(|limit| *limit == 5)
            .returning(|_| Ok(vec![Task::new(valid_input())]));

        let service = TaskService::new(repo);
        let overview = service.task_overview().await.unwrap();

        assert_eq!(overview.total_tasks, 1);
        assert_eq!(overview.recent_tasks.len(), 1);
        assert_eq!(overview.recent_tasks[0].id.len(), 24);
    }
}
