//! MongoDB implementation of TaskRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document, doc, to_bson},
};
use std::collections::HashMap;
use tracing::instrument;

use crate::error::{TaskError, TaskResult};
use crate::id::TaskId;
use crate::models::{Task, TaskFilter, TaskPriority, UpdateTask};
use crate::repository::TaskRepository;

/// MongoDB implementation of the TaskRepository
pub struct MongoTaskRepository {
    collection: Collection<Task>,
}

impl MongoTaskRepository {
    /// Create a new MongoTaskRepository
    ///
    /// # Arguments
    /// * `db` - MongoDB database instance
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("task_manager");
    /// let repo = MongoTaskRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Task>("tasks");
        Self { collection }
    }

    /// Build a MongoDB filter document from TaskFilter
    fn build_filter(filter: &TaskFilter) -> Document {
        let mut doc = doc! {};

        if let Some(status) = filter.status {
            doc.insert("status", status.to_string());
        }

        if let Some(priority) = filter.priority {
            doc.insert("priority", priority.to_string());
        }

        if let Some(ref search) = filter.search {
            // Escape so user input matches literally, never as a pattern
            let pattern = regex::escape(search);
            doc.insert(
                "$or",
                vec![
                    doc! { "title": { "$regex": &pattern, "$options": "i" } },
                    doc! { "description": { "$regex": &pattern, "$options": "i" } },
                ],
            );
        }

        doc
    }

    /// Build a `$set` document carrying the supplied fields plus `updated_at`
    fn build_update(update: &UpdateTask, updated_at: DateTime<Utc>) -> TaskResult<Document> {
        let mut set = doc! { "updated_at": to_bson(&updated_at)? };

        if let Some(ref title) = update.title {
            set.insert("title", title);
        }
        if let Some(ref description) = update.description {
            set.insert("description", description);
        }
        if let Some(status) = update.status {
            set.insert("status", to_bson(&status)?);
        }
        if let Some(priority) = update.priority {
            set.insert("priority", to_bson(&priority)?);
        }
        if let Some(due_date) = update.due_date {
            set.insert("due_date", to_bson(&due_date)?);
        }

        Ok(doc! { "$set": set })
    }
}

#[async_trait]
impl TaskRepository for MongoTaskRepository {
    #[instrument(skip(self, task), fields(task_title = %task.title))]
    async fn insert(&self, task: Task) -> TaskResult<TaskId> {
        let result = self.collection.insert_one(&task).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(TaskId::from)
            .ok_or_else(|| TaskError::Database("insert did not return an ObjectId".to_string()))?;

        tracing::info!(task_id = %id, "Task created successfully");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: TaskId) -> TaskResult<Option<Task>> {
        let task = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(task)
    }

    #[instrument(skip(self))]
    async fn find(&self, filter: TaskFilter) -> TaskResult<Vec<Task>> {
        let mongo_filter = Self::build_filter(&filter);

        let options = mongodb::options::FindOptions::builder()
            .skip(filter.skip)
            .limit(filter.limit)
            .build();

        let cursor = self
            .collection
            .find(mongo_filter)
            .with_options(options)
            .await?;
        let tasks: Vec<Task> = cursor.try_collect().await?;

        Ok(tasks)
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: TaskFilter) -> TaskResult<u64> {
        let mongo_filter = Self::build_filter(&filter);
        let count = self.collection.count_documents(mongo_filter).await?;
        Ok(count)
    }

    #[instrument(skip(self, update))]
    async fn update_fields(
        &self,
        id: TaskId,
        update: UpdateTask,
        updated_at: DateTime<Utc>,
    ) -> TaskResult<u64> {
        let update_doc = Self::build_update(&update, updated_at)?;
        let result = self
            .collection
            .update_one(doc! { "_id": id }, update_doc)
            .await?;

        if result.matched_count > 0 {
            tracing::info!(task_id = %id, "Task updated successfully");
        }
        Ok(result.matched_count)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: TaskId) -> TaskResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count > 0 {
            tracing::info!(task_id = %id, "Task deleted successfully");
        }
        Ok(result.deleted_count)
    }

    #[instrument(skip(self))]
    async fn status_counts(&self) -> TaskResult<HashMap<String, u64>> {
        let pipeline = vec![doc! { "$group": { "_id": "$status", "count": { "$sum": 1 } } }];
        let mut cursor = self.collection.aggregate(pipeline).await?;

        let mut counts = HashMap::new();
        while let Some(group) = cursor.try_next().await? {
            let Ok(label) = group.get_str("_id") else {
                continue;
            };
            let count = match group.get("count") {
                Some(Bson::Int32(n)) => *n as u64,
                Some(Bson::Int64(n)) => *n as u64,
                _ => 0,
            };
            counts.insert(label.to_string(), count);
        }

        Ok(counts)
    }

    #[instrument(skip(self))]
    async fn high_priority_count(&self) -> TaskResult<u64> {
        let filter = doc! { "priority": TaskPriority::High.to_string() };
        let count = self.collection.count_documents(filter).await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find_recent(&self, limit: i64) -> TaskResult<Vec<Task>> {
        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let tasks: Vec<Task> = cursor.try_collect().await?;

        Ok(tasks)
    }
}
