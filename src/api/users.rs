use super::{ApiClient, item_path};
use crate::errors::{AppError, AppResult};
use crate::models::user::{User, UserPayload};
use crate::session::Session;
use reqwest::Method;

impl ApiClient {
    pub async fn list_users(&self, session: &Session) -> AppResult<Vec<User>> {
        self.get_data(session, "users", &self.page_query(), "Get users failed")
            .await
    }

    pub async fn create_user(&self, session: &Session, user: &UserPayload) -> AppResult<()> {
        if user.email.as_deref().is_none_or(|e| e.trim().is_empty()) {
            return Err(AppError::EmptyValue("user email"));
        }
        self.send_body(session, Method::POST, "users/", user, "Create user failed")
            .await
    }

    pub async fn update_user(&self, session: &Session, id: &str, user: &UserPayload) -> AppResult<()> {
        let path = item_path("users", id, "user id")?;
        self.send_body(session, Method::PUT, &path, user, "Update user failed")
            .await
    }

    pub async fn delete_user(&self, session: &Session, id: &str) -> AppResult<()> {
        let path = item_path("users", id, "user id")?;
        self.delete(session, &path, "Delete user failed").await
    }
}
