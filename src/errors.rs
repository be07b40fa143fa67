//! Unified application error type.
//! All modules (api, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Remote API
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No bearer token in the session: the user has to log in first.
    #[error("Unauthorized: please run `rtracker login` first")]
    Unauthorized,

    /// Non-2xx answer; `message` comes from the body or the per-action default.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid repetition: {0}")]
    InvalidRepetition(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("The placeholder habit row cannot be sent to the server")]
    SentinelHabit,

    #[error("Unknown habit: {0}")]
    UnknownHabit(String),

    #[error("Empty value for {0}")]
    EmptyValue(&'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
