use super::ApiClient;
use crate::errors::AppResult;
use crate::models::user::User;
use crate::session::Session;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Answer of both auth endpoints.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    tokens: String,
    data: User,
}

impl ApiClient {
    /// `POST /auth/login`; the returned session is ready to be stored.
    pub async fn login(&self, credentials: &Credentials) -> AppResult<Session> {
        let req = self.request(Method::POST, "auth/login").json(credentials);
        let res: AuthResponse = self.fetch_json(req, "Login failed").await?;
        tracing::info!(email = %res.data.email, "logged in");
        Ok(Session::authenticated(res.tokens, res.data))
    }

    /// `POST /auth/register`; signs the new user in right away.
    pub async fn register(&self, registration: &Registration) -> AppResult<Session> {
        let req = self.request(Method::POST, "auth/register").json(registration);
        let res: AuthResponse = self.fetch_json(req, "Register failed").await?;
        tracing::info!(email = %res.data.email, "registered");
        Ok(Session::authenticated(res.tokens, res.data))
    }
}
