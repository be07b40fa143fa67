use super::{ApiClient, item_path};
use crate::errors::{AppError, AppResult};
use crate::models::task::{Task, TaskPayload};
use crate::session::Session;
use reqwest::Method;

impl ApiClient {
    pub async fn list_tasks(&self, session: &Session) -> AppResult<Vec<Task>> {
        self.get_data(session, "tasks", &self.page_query(), "Get tasks failed")
            .await
    }

    /// A task needs at least a title.
    pub async fn create_task(&self, session: &Session, task: &TaskPayload) -> AppResult<()> {
        if task.title.as_deref().is_none_or(|t| t.trim().is_empty()) {
            return Err(AppError::EmptyValue("task title"));
        }
        self.send_body(session, Method::POST, "tasks/", task, "Create task failed")
            .await
    }

    pub async fn update_task(&self, session: &Session, id: &str, task: &TaskPayload) -> AppResult<()> {
        let path = item_path("tasks", id, "task id")?;
        self.send_body(session, Method::PUT, &path, task, "Update task failed")
            .await
    }

    pub async fn delete_task(&self, session: &Session, id: &str) -> AppResult<()> {
        let path = item_path("tasks", id, "task id")?;
        self.delete(session, &path, "Delete task failed").await
    }
}
