//! Typed HTTP client for the tracking API.
//!
//! Every call takes the caller's [`Session`] explicitly and attaches its
//! bearer token. Success bodies look like `{"data": ...}`; failures carry
//! `{"message": "..."}`, and the message is surfaced as [`AppError::Api`],
//! falling back to a fixed per-action text when the body has none.

pub mod auth;
pub mod events;
pub mod habits;
pub mod projects;
pub mod tasks;
pub mod users;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::session::Session;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Standard success envelope.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Standard failure body.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

pub struct ApiClient {
    http: Client,
    base: String,
    page_size: u32,
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs.max(1)))
            .build()?;

        Ok(Self {
            http,
            base: cfg.api_root().to_string(),
            page_size: cfg.page_size.max(1),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// `pageNumber`/`pageSize` pair used by every list endpoint.
    fn page_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("pageNumber", "1".to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
    }

    /// Authorized request; fails with `Unauthorized` before touching the network.
    fn authed(&self, session: &Session, method: Method, path: &str) -> AppResult<RequestBuilder> {
        let token = session.token()?;
        Ok(self.request(method, path).bearer_auth(token))
    }

    /// Send and decode the `data` field of the answer.
    async fn fetch_data<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        fallback: &str,
    ) -> AppResult<T> {
        let envelope: DataEnvelope<T> = self.fetch_json(req, fallback).await?;
        Ok(envelope.data)
    }

    /// Send and decode the whole body.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        fallback: &str,
    ) -> AppResult<T> {
        let response = self.dispatch(req, fallback).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send a mutation; the acknowledgement body is not needed.
    async fn execute(&self, req: RequestBuilder, fallback: &str) -> AppResult<()> {
        let response = self.dispatch(req, fallback).await?;
        // drain so the connection can be reused
        let _ = response.bytes().await?;
        Ok(())
    }

    async fn dispatch(&self, req: RequestBuilder, fallback: &str) -> AppResult<Response> {
        let req = req.build()?;
        tracing::debug!(method = %req.method(), url = %req.url(), "api request");

        let response = self.http.execute(req).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body, fallback);
        tracing::warn!(status = status.as_u16(), %message, "api request failed");
        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> AppResult<T> {
        let req = self.authed(session, Method::GET, path)?.query(query);
        self.fetch_data(req, fallback).await
    }

    async fn send_body<B: Serialize + ?Sized>(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> AppResult<()> {
        let req = self.authed(session, method, path)?.json(body);
        self.execute(req, fallback).await
    }

    async fn delete(&self, session: &Session, path: &str, fallback: &str) -> AppResult<()> {
        let req = self.authed(session, Method::DELETE, path)?;
        self.execute(req, fallback).await
    }
}

/// Message of a failed response: the body's `message`, else `fallback`.
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// `collection/{id}` with the id percent-encoded. A blank id would address
/// the collection itself, so it is refused before any request is built.
fn item_path(collection: &str, id: &str, what: &'static str) -> AppResult<String> {
    if id.trim().is_empty() {
        return Err(AppError::EmptyValue(what));
    }
    Ok(format!("{collection}/{}", urlencoding::encode(id)))
}
