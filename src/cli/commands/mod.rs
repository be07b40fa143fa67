pub mod auth;
pub mod config;
pub mod events;
pub mod habits;
pub mod projects;
pub mod tasks;
pub mod users;

use crate::api::ApiClient;
use crate::config::Config;
use crate::core::lookup::overlapping_days;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::session::{Session, SessionStore};
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::io::{self, Write};

pub(crate) fn session_store(cfg: &Config) -> SessionStore {
    SessionStore::new(expand_tilde(&cfg.session_file))
}

/// HTTP client plus the stored session, loaded once per command.
pub(crate) fn connect(cfg: &Config) -> AppResult<(ApiClient, Session)> {
    let client = ApiClient::new(cfg)?;
    let session = session_store(cfg).load()?;
    Ok((client, session))
}

pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub(crate) fn parse_day(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub(crate) fn parse_optional_day(s: Option<&str>) -> AppResult<Option<NaiveDate>> {
    s.map(parse_day).transpose()
}

/// `--month YYYY-MM` or the current month.
pub(crate) fn selected_month(month: Option<&str>) -> AppResult<NaiveDate> {
    match month {
        Some(m) => date::parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.to_string())),
        None => Ok(date::first_of_month(date::today())),
    }
}

/// Overlaps are not expected; when present only the first event is shown.
pub(crate) fn warn_overlaps(events: &[Event]) {
    let days = overlapping_days(events);
    if !days.is_empty() {
        let list: Vec<String> = days.into_iter().map(date::format_ymd).collect();
        tracing::warn!(days = ?list, "overlapping events");
        warning(format!(
            "Overlapping events on {}; the first listed event is shown.",
            list.join(", ")
        ));
    }
}
