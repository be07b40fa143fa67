//! Selected month and the data loaded for it.
//!
//! Each fetch is tagged with a generation number. A result is committed only
//! when its generation is still the latest one handed out, so a slow answer
//! for a month the user already navigated away from cannot overwrite the
//! current view.

use crate::api::ApiClient;
use crate::core::grid::MonthGrid;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::habit::Habit;
use crate::session::Session;
use crate::utils::date::{first_of_month, month_title, shift_months};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    fn delta(self) -> i32 {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// Identifies one fetch for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub month: NaiveDate,
}

/// Habits and events of one month, as returned by the API.
#[derive(Debug, Clone, Default)]
pub struct MonthData {
    pub habits: Vec<Habit>,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone)]
pub struct MonthView {
    selected: NaiveDate,
    generation: u64,
    data: MonthData,
    loaded: Option<NaiveDate>,
}

impl MonthView {
    pub fn new(selected: NaiveDate) -> Self {
        Self {
            selected,
            generation: 0,
            data: MonthData::default(),
            loaded: None,
        }
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn title(&self) -> String {
        month_title(self.selected)
    }

    /// Move one calendar month and start a fetch for it.
    pub fn shift(&mut self, direction: Direction) -> FetchTicket {
        self.selected = shift_months(self.selected, direction.delta());
        self.begin_fetch()
    }

    /// Hand out a ticket for (re)loading the selected month; any earlier
    /// ticket becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket {
            generation: self.generation,
            month: first_of_month(self.selected),
        }
    }

    /// Replace the month data wholesale. Returns false (and keeps the current
    /// data) when the ticket has been superseded.
    pub fn commit(&mut self, ticket: FetchTicket, data: MonthData) -> bool {
        if ticket.generation != self.generation {
            tracing::warn!(
                stale = ticket.generation,
                latest = self.generation,
                month = %ticket.month,
                "discarding stale month data"
            );
            return false;
        }
        self.data = data;
        self.loaded = Some(ticket.month);
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded == Some(first_of_month(self.selected))
    }

    pub fn habits(&self) -> &[Habit] {
        &self.data.habits
    }

    pub fn events(&self) -> &[Event] {
        &self.data.events
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.selected, &self.data.habits, &self.data.events)
    }

    /// Fetch and commit the selected month. Returns whether the result was
    /// committed.
    pub async fn refresh(&mut self, client: &ApiClient, session: &Session) -> AppResult<bool> {
        let ticket = self.begin_fetch();
        let data = load_month(client, session, ticket.month).await?;
        Ok(self.commit(ticket, data))
    }
}

/// Habits and events of a month, fetched concurrently.
pub async fn load_month(
    client: &ApiClient,
    session: &Session,
    month: NaiveDate,
) -> AppResult<MonthData> {
    let (habits, events) = tokio::try_join!(
        client.list_habits(session, month),
        client.list_events(session, month)
    )?;
    tracing::debug!(
        month = %month,
        habits = habits.len(),
        events = events.len(),
        "month loaded"
    );
    Ok(MonthData { habits, events })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::habit::Habit;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn data_with(name: &str) -> MonthData {
        let mut h = Habit::sentinel();
        h.id = name.into();
        h.name = name.into();
        MonthData {
            habits: vec![h],
            events: vec![],
        }
    }

    #[test]
    fn shift_moves_one_month_and_keeps_day() {
        let mut view = MonthView::new(date(2024, 1, 31));
        let t = view.shift(Direction::Next);
        assert_eq!(view.selected(), date(2024, 2, 29));
        assert_eq!(t.month, date(2024, 2, 1));

        view.shift(Direction::Prev);
        assert_eq!(view.selected(), date(2024, 1, 29));

        let mut dec = MonthView::new(date(2024, 12, 10));
        dec.shift(Direction::Next);
        assert_eq!(dec.selected(), date(2025, 1, 10));
        assert_eq!(dec.title(), "January 2025");
    }

    #[test]
    fn only_latest_fetch_commits() {
        let mut view = MonthView::new(date(2024, 1, 15));
        let january = view.begin_fetch();
        let february = view.shift(Direction::Next);

        assert!(view.commit(february, data_with("feb")));
        assert!(!view.commit(january, data_with("jan")));
        assert_eq!(view.habits()[0].name, "feb");
        assert!(view.is_loaded());
    }

    #[test]
    fn stale_result_does_not_mark_loaded() {
        let mut view = MonthView::new(date(2024, 1, 15));
        let first = view.begin_fetch();
        let _second = view.begin_fetch();
        assert!(!view.commit(first, data_with("old")));
        assert!(!view.is_loaded());
        assert!(view.habits().is_empty());
    }

    #[test]
    fn grid_follows_selected_month() {
        let mut view = MonthView::new(date(2024, 1, 15));
        let t = view.begin_fetch();
        view.commit(t, MonthData::default());
        assert_eq!(view.grid().columns.len(), 31);
        view.shift(Direction::Next);
        assert_eq!(view.grid().columns.len(), 29);
        assert!(!view.is_loaded());
    }
}
