use super::api_date;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pastel colors offered when authoring an event, in display order.
pub const PALETTE: [&str; 10] = [
    "#b3d9ff", "#ffb3d9", "#b3ffb3", "#d9b3ff", "#ffcc99", "#ffff99", "#99e6e6", "#ccb3ff",
    "#ffb399", "#99ffcc",
];

/// Resolve a user supplied color: a 1-based palette index or one of the
/// palette hex values (case-insensitive).
pub fn resolve_color(input: &str) -> AppResult<String> {
    let input = input.trim();
    if let Ok(idx) = input.parse::<usize>() {
        return PALETTE
            .get(idx.wrapping_sub(1))
            .map(|c| c.to_string())
            .ok_or_else(|| AppError::InvalidColor(format!("palette index {idx} (1-10)")));
    }
    let lower = input.to_lowercase();
    PALETTE
        .iter()
        .find(|c| **c == lower)
        .map(|c| c.to_string())
        .ok_or_else(|| AppError::InvalidColor(input.to_string()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Covered calendar days, in order.
    #[serde(deserialize_with = "api_date::list")]
    pub dates: Vec<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub disabled_habit_ids: Vec<String>,
}

impl Event {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn disables(&self, habit_id: &str) -> bool {
        self.disabled_habit_ids.iter().any(|id| id == habit_id)
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }
}

/// Body of `POST /events` and `PUT /events/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_habit_ids: Option<Vec<String>>,
}
