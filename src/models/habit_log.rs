use chrono::NaiveDate;
use serde::Serialize;

/// Body of `POST /habit-log/`: one toggled cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitLog {
    pub habit_id: String,
    pub date: NaiveDate,
    pub is_checked: bool,
}
