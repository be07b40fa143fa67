//! Terminal rendering of the month grid.

use crate::core::grid::{Cell, MonthGrid, NAME_HEADER};
use crate::models::event::Event;
use crate::utils::colors::{GREY, RESET, paint_bg};
use crate::utils::date::format_ymd;
use crate::utils::formatting::{pad_left, pad_right, truncate, visible_width};

const MAX_NAME_WIDTH: usize = 24;
const SENTINEL_LABEL: &str = "+ new";

#[derive(Debug, Clone, Copy)]
pub struct GridStyle {
    pub show_weekday: bool,
    pub color_cells: bool,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            show_weekday: true,
            color_cells: true,
        }
    }
}

fn cell_symbol(cell: &Cell) -> String {
    match (cell.checked, cell.disabled) {
        (true, false) => "✔".to_string(),
        (false, false) => "·".to_string(),
        (true, true) => format!("{GREY}✔{RESET}"),
        (false, true) => " ".to_string(),
    }
}

fn render_cell(cell: &Cell, style: GridStyle) -> String {
    let text = pad_left(&cell_symbol(cell), 2);
    if style.color_cells {
        paint_bg(&text, cell.color.as_deref())
    } else {
        text
    }
}

/// Grid followed by a legend of the month's events.
pub fn render_grid(grid: &MonthGrid, events: &[Event], style: GridStyle) -> String {
    let name_w = grid
        .rows
        .iter()
        .map(|r| visible_width(&r.name))
        .chain([visible_width(NAME_HEADER), visible_width(SENTINEL_LABEL)])
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH);

    let mut out = String::new();

    if style.show_weekday {
        out.push_str(&pad_right("", name_w));
        for col in &grid.columns {
            out.push(' ');
            out.push_str(&pad_left(&col.weekday[..2.min(col.weekday.len())], 2));
        }
        out.push('\n');
    }

    out.push_str(&pad_right(NAME_HEADER, name_w));
    for col in &grid.columns {
        out.push(' ');
        out.push_str(&pad_left(&col.day.to_string(), 2));
    }
    out.push('\n');

    for row in &grid.rows {
        let name = if row.is_sentinel {
            format!("{GREY}{}{RESET}", pad_right(SENTINEL_LABEL, name_w))
        } else {
            pad_right(&truncate(&row.name, name_w), name_w)
        };
        out.push_str(&name);
        for cell in &row.cells {
            out.push(' ');
            out.push_str(&render_cell(cell, style));
        }
        out.push('\n');
    }

    let month_events: Vec<&Event> = events
        .iter()
        .filter(|e| {
            e.dates
                .iter()
                .any(|d| grid.columns.iter().any(|c| c.date == *d))
        })
        .collect();

    if !month_events.is_empty() {
        out.push('\n');
        for e in month_events {
            let swatch = if style.color_cells {
                paint_bg("  ", e.color.as_deref())
            } else {
                "-".to_string()
            };
            let span = match (e.start(), e.end()) {
                (Some(s), Some(end)) if s != end => format!("{} → {}", format_ymd(s), format_ymd(end)),
                (Some(s), _) => format_ymd(s),
                _ => String::new(),
            };
            out.push_str(&format!("{swatch} {} ({span})", e.name));
            if !e.disabled_habit_ids.is_empty() {
                let names: Vec<&str> = e
                    .disabled_habit_ids
                    .iter()
                    .map(|id| {
                        grid.row(id)
                            .map(|r| r.name.as_str())
                            .unwrap_or(id.as_str())
                    })
                    .collect();
                out.push_str(&format!(" disables: {}", names.join(", ")));
            }
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::habit::Habit;
    use crate::utils::colors::strip_ansi;
    use chrono::NaiveDate;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn renders_header_rows_and_legend() {
        let mut read = Habit::sentinel();
        read.id = "h1".into();
        read.name = "Read".into();
        read.habit_logs.insert(6, true);

        let trip = Event {
            id: "e1".into(),
            name: "Trip".into(),
            dates: vec![jan(5), jan(6), jan(7)],
            color: Some("#b3d9ff".into()),
            note: None,
            disabled_habit_ids: vec!["h1".into()],
        };

        let grid = MonthGrid::build(jan(1), &[read], std::slice::from_ref(&trip));
        let out = strip_ansi(&render_grid(&grid, &[trip], GridStyle::default()));
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].trim_start().starts_with("mo tu we"));
        assert!(lines[1].starts_with("Activity"));
        assert!(lines[1].trim_end().ends_with("31"));
        assert!(lines[2].starts_with("Read"));
        assert!(lines[2].contains('✔'));
        assert!(lines[3].starts_with("+ new"));
        assert!(out.contains("Trip (2024-01-05 → 2024-01-07) disables: Read"));
    }

    #[test]
    fn weekday_row_is_optional() {
        let grid = MonthGrid::build(jan(1), &[], &[]);
        let style = GridStyle {
            show_weekday: false,
            color_cells: false,
        };
        let out = render_grid(&grid, &[], style);
        assert!(out.starts_with("Activity"));
        assert_eq!(out.lines().count(), 2);
    }
}
