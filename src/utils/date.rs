use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a `YYYY-MM` string into the first day of that month.
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()
}

/// Parse a date as delivered by the API: either `YYYY-MM-DD` or a full
/// RFC 3339 timestamp. Timestamps are reduced to their UTC calendar day.
pub fn parse_api_date(s: &str) -> Option<NaiveDate> {
    if let Some(d) = parse_date(s) {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s.trim()) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    // "2024-01-05T00:00:00" without offset
    chrono::NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return 0,
    };
    let next = first + Months::new(1);
    next.signed_duration_since(first).num_days() as u32
}

pub fn days_in_month_of(date: NaiveDate) -> u32 {
    days_in_month(date.year(), date.month())
}

/// Same date with another day-of-month, `None` if the day does not exist.
pub fn with_day(date: NaiveDate, day: u32) -> Option<NaiveDate> {
    date.with_day(day)
}

/// Move `date` by `delta` calendar months. The day-of-month is kept when it
/// exists in the target month and clamped to its last day otherwise.
pub fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let shifted = if delta >= 0 {
        date.checked_add_months(Months::new(delta as u32))
    } else {
        date.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

pub fn format_ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Lowercase weekday abbreviation, e.g. `mon`.
pub fn weekday_abbrev(date: NaiveDate) -> String {
    date.format("%a").to_string().to_lowercase()
}

/// Title of a month view, e.g. `January 2024`.
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Query value sent to the list endpoints: midnight UTC of the given day.
pub fn api_query_date(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", format_ymd(date))
}
