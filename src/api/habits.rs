use super::{ApiClient, item_path};
use crate::errors::AppResult;
use crate::models::habit::{Habit, HabitPatch, NewHabit, ensure_real_id};
use crate::models::habit_log::HabitLog;
use crate::session::Session;
use crate::utils::date::api_query_date;
use chrono::NaiveDate;
use reqwest::Method;

impl ApiClient {
    /// Habits with their `habitLogs` for the month containing `date`.
    pub async fn list_habits(&self, session: &Session, date: NaiveDate) -> AppResult<Vec<Habit>> {
        let mut query = self.page_query();
        query.push(("date", api_query_date(date)));
        self.get_data(session, "habits", &query, "Get log failed")
            .await
    }

    pub async fn create_habit(&self, session: &Session, habit: &NewHabit) -> AppResult<()> {
        self.send_body(session, Method::POST, "habits", habit, "Create habit failed")
            .await
    }

    pub async fn update_habit(
        &self,
        session: &Session,
        id: &str,
        patch: &HabitPatch,
    ) -> AppResult<()> {
        let path = item_path("habits", ensure_real_id(id)?, "habit id")?;
        self.send_body(session, Method::PUT, &path, patch, "Update habit failed")
            .await
    }

    pub async fn delete_habit(&self, session: &Session, id: &str) -> AppResult<()> {
        let path = item_path("habits", ensure_real_id(id)?, "habit id")?;
        self.delete(session, &path, "Delete habit failed").await
    }

    /// `POST /habit-log/` for one toggled day.
    pub async fn update_log(&self, session: &Session, log: &HabitLog) -> AppResult<()> {
        ensure_real_id(&log.habit_id)?;
        self.send_body(session, Method::POST, "habit-log/", log, "Update log failed")
            .await
    }
}
