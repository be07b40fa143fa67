//! Month grid: one row per habit (plus the placeholder row for typing a new
//! habit) and one column per day of the selected month.

use crate::core::lookup::find_event_for_date;
use crate::core::relay::Intent;
use crate::models::event::Event;
use crate::models::habit::{Habit, NewHabit};
use crate::models::habit_log::HabitLog;
use crate::utils::date::{days_in_month_of, first_of_month, weekday_abbrev, with_day};
use chrono::NaiveDate;

pub const NAME_HEADER: &str = "Activity";

/// Header of one day column. `date` seeds the event form for that day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayColumn {
    pub day: u32,
    pub date: NaiveDate,
    pub weekday: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub day: u32,
    pub checked: bool,
    pub disabled: bool,
    /// Color of the covering event, if any.
    pub color: Option<String>,
    pub event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub habit_id: String,
    pub name: String,
    pub is_sentinel: bool,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// First day of the displayed month.
    pub month: NaiveDate,
    pub columns: Vec<DayColumn>,
    pub rows: Vec<GridRow>,
}

impl MonthGrid {
    /// Build the grid for the month containing `selected`.
    pub fn build(selected: NaiveDate, habits: &[Habit], events: &[Event]) -> Self {
        let month = first_of_month(selected);
        let columns: Vec<DayColumn> = (1..=days_in_month_of(month))
            .filter_map(|day| {
                with_day(month, day).map(|date| DayColumn {
                    day,
                    date,
                    weekday: weekday_abbrev(date),
                })
            })
            .collect();

        let sentinel = Habit::sentinel();
        let rows = habits
            .iter()
            .filter(|h| !h.is_sentinel())
            .chain(std::iter::once(&sentinel))
            .map(|habit| build_row(habit, &columns, events))
            .collect();

        Self {
            month,
            columns,
            rows,
        }
    }

    /// Name column plus one column per day.
    pub fn column_count(&self) -> usize {
        1 + self.columns.len()
    }

    pub fn row(&self, habit_id: &str) -> Option<&GridRow> {
        self.rows.iter().find(|r| r.habit_id == habit_id)
    }

    pub fn cell(&self, habit_id: &str, day: u32) -> Option<&Cell> {
        self.row(habit_id)?.cells.iter().find(|c| c.day == day)
    }

    /// Date carried by a day header, used to open the event form.
    pub fn header_date(&self, day: u32) -> Option<NaiveDate> {
        self.columns.iter().find(|c| c.day == day).map(|c| c.date)
    }

    /// Rows backed by a saved habit.
    pub fn habit_rows(&self) -> impl Iterator<Item = &GridRow> {
        self.rows.iter().filter(|r| !r.is_sentinel)
    }

    /// Clicking a cell: a log update flipping its state, or nothing when
    /// the cell is disabled or does not exist. Local state is left as is;
    /// the caller refetches once the mutation is acknowledged.
    pub fn toggle(&self, habit_id: &str, day: u32) -> Option<Intent> {
        let cell = self.cell(habit_id, day)?;
        if cell.disabled {
            return None;
        }
        let date = with_day(self.month, day)?;
        Some(Intent::UpdateLog(HabitLog {
            habit_id: habit_id.to_string(),
            date,
            is_checked: !cell.checked,
        }))
    }
}

fn build_row(habit: &Habit, columns: &[DayColumn], events: &[Event]) -> GridRow {
    let cells = columns
        .iter()
        .map(|col| {
            let event = find_event_for_date(col.date, events);
            let disabled_by_event = event.is_some_and(|e| e.disables(&habit.id));
            Cell {
                day: col.day,
                checked: habit.is_checked(col.day),
                disabled: habit.is_sentinel() || disabled_by_event,
                color: event.and_then(|e| e.color.clone()),
                event_id: event.map(|e| e.id.clone()),
            }
        })
        .collect();

    GridRow {
        habit_id: habit.id.clone(),
        name: habit.name.clone(),
        is_sentinel: habit.is_sentinel(),
        cells,
    }
}

/// Text input of the placeholder row.
#[derive(Debug, Default, Clone)]
pub struct NameInput {
    buffer: String,
}

impl NameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, text: &str) {
        self.buffer = text.to_string();
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Enter pressed: a create-habit intent carrying only the name, and the
    /// input is cleared. Blank input produces nothing.
    pub fn submit(&mut self) -> Option<Intent> {
        let name = self.buffer.trim().to_string();
        self.buffer.clear();
        if name.is_empty() {
            return None;
        }
        Some(Intent::CreateHabit(NewHabit::named(&name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::habit::{Repetition, SENTINEL_HABIT_ID};
    use std::collections::BTreeMap;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn habit(id: &str, checked_days: &[u32]) -> Habit {
        Habit {
            id: id.into(),
            user_id: "u1".into(),
            name: format!("habit {id}"),
            description: None,
            repeat: Repetition::Daily,
            start_date: None,
            end_date: None,
            habit_logs: checked_days.iter().map(|d| (*d, true)).collect::<BTreeMap<_, _>>(),
        }
    }

    fn trip() -> Event {
        Event {
            id: "e1".into(),
            name: "Trip".into(),
            dates: vec![jan(5), jan(6), jan(7)],
            color: Some("#b3d9ff".into()),
            note: None,
            disabled_habit_ids: vec!["h1".into()],
        }
    }

    #[test]
    fn empty_january_has_name_plus_31_days_and_only_sentinel() {
        let grid = MonthGrid::build(jan(17), &[], &[]);
        assert_eq!(grid.column_count(), 32);
        assert_eq!(grid.columns.len(), 31);
        assert_eq!(grid.rows.len(), 1);
        assert!(grid.rows[0].is_sentinel);
        assert_eq!(grid.habit_rows().count(), 0);
        assert_eq!(grid.month, jan(1));
    }

    #[test]
    fn day_columns_match_month_length_regardless_of_habits() {
        let habits: Vec<Habit> = (0..5).map(|i| habit(&format!("h{i}"), &[1])).collect();
        for (date, days) in [
            (NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(), 29),
            (NaiveDate::from_ymd_opt(2023, 2, 10).unwrap(), 28),
            (NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(), 30),
        ] {
            let grid = MonthGrid::build(date, &habits, &[]);
            assert_eq!(grid.columns.len(), days);
            assert!(grid.rows.iter().all(|r| r.cells.len() == days));
        }
    }

    #[test]
    fn headers_carry_weekday_and_date() {
        let grid = MonthGrid::build(jan(1), &[], &[]);
        assert_eq!(grid.columns[0].weekday, "mon");
        assert_eq!(grid.columns[0].day, 1);
        assert_eq!(grid.header_date(31), Some(jan(31)));
        assert_eq!(grid.header_date(32), None);
    }

    #[test]
    fn sentinel_row_is_disabled_every_day() {
        let grid = MonthGrid::build(jan(1), &[habit("h1", &[])], &[trip()]);
        let sentinel = grid.row(SENTINEL_HABIT_ID).unwrap();
        assert!(sentinel.cells.iter().all(|c| c.disabled));
        assert!(grid.toggle(SENTINEL_HABIT_ID, 3).is_none());
        // sentinel is always last
        assert!(grid.rows.last().unwrap().is_sentinel);
    }

    #[test]
    fn event_disables_listed_habit_even_when_checked() {
        let habits = vec![habit("h1", &[6]), habit("h2", &[6])];
        let grid = MonthGrid::build(jan(1), &habits, &[trip()]);

        let c = grid.cell("h1", 6).unwrap();
        assert!(c.checked);
        assert!(c.disabled);
        assert_eq!(c.color.as_deref(), Some("#b3d9ff"));

        let other = grid.cell("h2", 6).unwrap();
        assert!(other.checked);
        assert!(!other.disabled);
        assert_eq!(other.event_id.as_deref(), Some("e1"));

        let outside = grid.cell("h1", 8).unwrap();
        assert!(!outside.disabled);
        assert_eq!(outside.color, None);
    }

    #[test]
    fn toggle_flips_checked_state() {
        let grid = MonthGrid::build(jan(1), &[habit("h2", &[6])], &[trip()]);
        match grid.toggle("h2", 6) {
            Some(Intent::UpdateLog(log)) => {
                assert_eq!(log.habit_id, "h2");
                assert_eq!(log.date, jan(6));
                assert!(!log.is_checked);
            }
            other => panic!("unexpected intent: {other:?}"),
        }
        match grid.toggle("h2", 9) {
            Some(Intent::UpdateLog(log)) => assert!(log.is_checked),
            other => panic!("unexpected intent: {other:?}"),
        }
        assert!(grid.toggle("missing", 1).is_none());
    }

    #[test]
    fn disabled_cell_does_not_toggle() {
        let grid = MonthGrid::build(jan(1), &[habit("h1", &[])], &[trip()]);
        assert!(grid.toggle("h1", 5).is_none());
        assert!(grid.toggle("h1", 4).is_some());
    }

    #[test]
    fn log_keys_outside_month_are_ignored() {
        let grid = MonthGrid::build(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            &[habit("h1", &[30, 31])],
            &[],
        );
        let row = grid.row("h1").unwrap();
        assert_eq!(row.cells.len(), 29);
        assert!(row.cells.iter().all(|c| !c.checked));
    }

    #[test]
    fn name_input_submits_and_clears() {
        let mut input = NameInput::new();
        input.set("  Drink water ");
        match input.submit() {
            Some(Intent::CreateHabit(h)) => assert_eq!(h, NewHabit::named("Drink water")),
            other => panic!("unexpected intent: {other:?}"),
        }
        assert_eq!(input.value(), "");

        input.set("   ");
        assert!(input.submit().is_none());
    }
}
