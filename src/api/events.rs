use super::{ApiClient, item_path};
use crate::errors::AppResult;
use crate::models::event::{Event, NewEvent};
use crate::session::Session;
use crate::utils::date::api_query_date;
use chrono::NaiveDate;
use reqwest::Method;

impl ApiClient {
    /// Events touching the month containing `date`.
    pub async fn list_events(&self, session: &Session, date: NaiveDate) -> AppResult<Vec<Event>> {
        let mut query = self.page_query();
        query.push(("date", api_query_date(date)));
        self.get_data(session, "events", &query, "Get events failed")
            .await
    }

    pub async fn create_event(&self, session: &Session, event: &NewEvent) -> AppResult<()> {
        self.send_body(session, Method::POST, "events", event, "Create event failed")
            .await
    }

    pub async fn update_event(&self, session: &Session, id: &str, event: &NewEvent) -> AppResult<()> {
        let path = item_path("events", id, "event id")?;
        self.send_body(session, Method::PUT, &path, event, "Update event failed")
            .await
    }

    pub async fn delete_event(&self, session: &Session, id: &str) -> AppResult<()> {
        let path = item_path("events", id, "event id")?;
        self.delete(session, &path, "Delete event failed").await
    }
}
