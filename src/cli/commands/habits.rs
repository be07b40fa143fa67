use crate::api::ApiClient;
use crate::cli::commands::{ask_confirmation, connect, parse_day, selected_month, warn_overlaps};
use crate::cli::parser::{Commands, HabitAction};
use crate::config::Config;
use crate::core::event_form::habit_picker;
use crate::core::grid::NameInput;
use crate::core::month::{Direction, MonthView};
use crate::core::relay::{Intent, MutationRelay};
use crate::errors::{AppError, AppResult};
use crate::models::habit::{Habit, HabitPatch, Repetition, ensure_real_id};
use crate::session::Session;
use crate::ui::grid_view::{GridStyle, render_grid};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date::{format_ymd, today};
use chrono::Datelike;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Habits { action } = cmd else {
        return Ok(());
    };
    let (client, session) = connect(cfg)?;
    let relay = MutationRelay::new(&client, &session);

    match action {
        HabitAction::Grid { month, prev, next } => {
            let mut view = MonthView::new(selected_month(month.as_deref())?);
            if *prev {
                view.shift(Direction::Prev);
            } else if *next {
                view.shift(Direction::Next);
            }
            view.refresh(&client, &session).await?;

            header(view.title());
            let style = GridStyle {
                show_weekday: cfg.show_weekday,
                color_cells: cfg.color_cells,
            };
            print!("{}", render_grid(&view.grid(), view.events(), style));
            warn_overlaps(view.events());
        }

        HabitAction::Add {
            name,
            description,
            repeat,
        } => {
            let mut input = NameInput::new();
            input.set(name);
            let Some(Intent::CreateHabit(mut habit)) = input.submit() else {
                return Err(AppError::EmptyValue("habit name"));
            };
            habit.description = description.clone();
            habit.repeat = repeat.as_deref().map(Repetition::from_code).transpose()?;

            let intent = Intent::CreateHabit(habit);
            relay.submit(&intent).await?;
            success(intent.describe());
        }

        HabitAction::Edit {
            habit,
            name,
            description,
            repeat,
        } => {
            let patch = HabitPatch {
                name: name.as_ref().map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
                description: description.clone(),
                repeat: repeat.as_deref().map(Repetition::from_code).transpose()?,
                ..Default::default()
            };
            if patch.is_empty() {
                info("Nothing to update.");
                return Ok(());
            }
            let habits = current_habits(&client, &session).await?;
            let id = resolve_habit(&habits, habit)?;
            let intent = Intent::UpdateHabit { id, patch };
            relay.submit(&intent).await?;
            success(intent.describe());
        }

        HabitAction::Delete { habit, yes } => {
            let habits = current_habits(&client, &session).await?;
            let id = resolve_habit(&habits, habit)?;
            if !*yes
                && !ask_confirmation(&format!(
                    "Delete habit '{}' and all its check marks? This action is irreversible.",
                    habit
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }
            let intent = Intent::DeleteHabit(id);
            relay.submit(&intent).await?;
            success(intent.describe());
        }

        HabitAction::Toggle { habit, date } => {
            let day = parse_day(date)?;
            let mut view = MonthView::new(day);
            view.refresh(&client, &session).await?;

            let id = resolve_habit(view.habits(), habit)?;
            let grid = view.grid();
            if grid.row(&id).is_none() {
                return Err(AppError::UnknownHabit(habit.clone()));
            }
            match grid.toggle(&id, day.day()) {
                Some(intent) => {
                    relay.submit_and_reload(&intent, &mut view).await?;
                    success(intent.describe());
                }
                None => warning(format!(
                    "'{}' is disabled on {} by an event; nothing changed.",
                    habit,
                    format_ymd(day)
                )),
            }
        }
    }

    Ok(())
}

/// Habits of the current month, used to resolve names typed on the command line.
async fn current_habits(client: &ApiClient, session: &Session) -> AppResult<Vec<Habit>> {
    client.list_habits(session, today()).await
}

/// A habit name (case-insensitive) or id. Unknown input is taken as an id.
fn resolve_habit(habits: &[Habit], input: &str) -> AppResult<String> {
    let picker = habit_picker(habits);
    if let Some(option) = picker.find_match(input.trim()) {
        return Ok(option.value.clone());
    }
    Ok(ensure_real_id(input.trim())?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(id: &str, name: &str) -> Habit {
        let mut h = Habit::sentinel();
        h.id = id.into();
        h.name = name.into();
        h
    }

    #[test]
    fn habits_resolve_by_name_or_id() {
        let habits = vec![habit("h1", "Read"), habit("h2", "Run")];
        assert_eq!(resolve_habit(&habits, "read").unwrap(), "h1");
        assert_eq!(resolve_habit(&habits, "h2").unwrap(), "h2");
        assert_eq!(resolve_habit(&habits, "abc123").unwrap(), "abc123");
        assert!(matches!(
            resolve_habit(&habits, "new"),
            Err(AppError::SentinelHabit)
        ));
    }
}
