use super::api_date;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved identity of the placeholder row used to type a new habit name.
pub const SENTINEL_HABIT_ID: &str = "new";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repetition {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Custom,
}

impl Repetition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Repetition::Daily => "daily",
            Repetition::Weekly => "weekly",
            Repetition::Monthly => "monthly",
            Repetition::Custom => "custom",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase, full or initial)
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "daily" | "d" => Ok(Repetition::Daily),
            "weekly" | "w" => Ok(Repetition::Weekly),
            "monthly" | "m" => Ok(Repetition::Monthly),
            "custom" | "c" => Ok(Repetition::Custom),
            _ => Err(AppError::InvalidRepetition(code.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub repeat: Repetition,
    #[serde(
        default,
        deserialize_with = "api_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "api_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    /// Day-of-month → completion flag for the month being viewed.
    #[serde(default)]
    pub habit_logs: BTreeMap<u32, bool>,
}

impl Habit {
    /// The unsaved placeholder row appended to every grid.
    pub fn sentinel() -> Self {
        Self {
            id: SENTINEL_HABIT_ID.to_string(),
            user_id: String::new(),
            name: String::new(),
            description: None,
            repeat: Repetition::Daily,
            start_date: None,
            end_date: None,
            habit_logs: BTreeMap::new(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        is_sentinel_id(&self.id)
    }

    pub fn is_checked(&self, day: u32) -> bool {
        self.habit_logs.get(&day).copied().unwrap_or(false)
    }
}

pub fn is_sentinel_id(id: &str) -> bool {
    id == SENTINEL_HABIT_ID
}

/// Refuse the placeholder identity before it reaches the API.
pub fn ensure_real_id(id: &str) -> AppResult<&str> {
    if is_sentinel_id(id) {
        return Err(AppError::SentinelHabit);
    }
    if id.trim().is_empty() {
        return Err(AppError::EmptyValue("habit id"));
    }
    Ok(id)
}

/// Body of `POST /habits`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHabit {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<Repetition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl NewHabit {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// Body of `PUT /habits/{id}`: only the fields being changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<Repetition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl HabitPatch {
    pub fn is_empty(&self) -> bool {
        *self == HabitPatch::default()
    }
}
