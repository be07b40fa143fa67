use super::api_date;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }

    /// Accepts the display value or a short code (`todo`, `doing`, `done`).
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "not started" | "todo" | "n" => Ok(Status::NotStarted),
            "in progress" | "doing" | "p" => Ok(Status::InProgress),
            "done" | "d" => Ok(Status::Done),
            _ => Err(AppError::InvalidStatus(code.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "high" | "h" => Ok(Priority::High),
            "medium" | "m" => Ok(Priority::Medium),
            "low" | "l" => Ok(Priority::Low),
            _ => Err(AppError::InvalidPriority(code.to_string())),
        }
    }
}

/// User embedded in a task by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Project embedded in a task; older payloads call the name `title`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskProject {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(
        default,
        deserialize_with = "api_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_assigned: Option<TaskUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<TaskProject>,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == Some(Status::Done)
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project.as_ref().map(|p| p.name.as_str())
    }

    pub fn assignee_name(&self) -> Option<&str> {
        self.user_assigned.as_ref().map(|u| u.name.as_str())
    }
}

/// Body of `POST /tasks/` and `PUT /tasks/{id}`. Unset fields are left out
/// of the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl TaskPayload {
    /// Empty strings count as "not provided", like blank form fields.
    pub fn normalized(mut self) -> Self {
        fn blank_to_none(v: &mut Option<String>) {
            if v.as_deref().is_some_and(|s| s.trim().is_empty()) {
                *v = None;
            }
        }
        blank_to_none(&mut self.title);
        blank_to_none(&mut self.description);
        blank_to_none(&mut self.project_id);
        blank_to_none(&mut self.assigned_to);
        self
    }
}
