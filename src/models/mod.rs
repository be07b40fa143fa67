pub mod event;
pub mod habit;
pub mod habit_log;
pub mod project;
pub mod task;
pub mod user;

/// Serde helpers for calendar days coming from the API, which sends either
/// `YYYY-MM-DD` or a full timestamp.
pub(crate) mod api_date {
    use crate::utils::date::parse_api_date;
    use chrono::NaiveDate;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn option<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse_api_date(&s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date: {s}"))),
        }
    }

    pub fn list<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Vec<String> = Vec::deserialize(deserializer)?;
        raw.iter()
            .map(|s| {
                parse_api_date(s).ok_or_else(|| D::Error::custom(format!("invalid date: {s}")))
            })
            .collect()
    }
}
