use super::{ApiClient, item_path};
use crate::errors::{AppError, AppResult};
use crate::models::project::{Project, ProjectPayload};
use crate::session::Session;
use reqwest::Method;

impl ApiClient {
    pub async fn list_projects(&self, session: &Session) -> AppResult<Vec<Project>> {
        self.get_data(session, "projects", &self.page_query(), "Get projects failed")
            .await
    }

    pub async fn get_project(&self, session: &Session, id: &str) -> AppResult<Project> {
        let path = item_path("projects", id, "project id")?;
        self.get_data(session, &path, &[], "Get project failed").await
    }

    pub async fn create_project(&self, session: &Session, project: &ProjectPayload) -> AppResult<()> {
        if project.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
            return Err(AppError::EmptyValue("project name"));
        }
        self.send_body(session, Method::POST, "projects/", project, "Create project failed")
            .await
    }

    pub async fn update_project(
        &self,
        session: &Session,
        id: &str,
        project: &ProjectPayload,
    ) -> AppResult<()> {
        let path = item_path("projects", id, "project id")?;
        self.send_body(session, Method::PUT, &path, project, "Update project failed")
            .await
    }

    pub async fn delete_project(&self, session: &Session, id: &str) -> AppResult<()> {
        let path = item_path("projects", id, "project id")?;
        self.delete(session, &path, "Delete project failed").await
    }
}
