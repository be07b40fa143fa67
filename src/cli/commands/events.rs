use crate::cli::commands::{
    connect, parse_day, parse_optional_day, selected_month, warn_overlaps,
};
use crate::cli::parser::{Commands, EventAction, EventArgs};
use crate::config::Config;
use crate::core::event_form::{EventDraft, resolve_disabled_habits, resolve_event_name};
use crate::core::month::{MonthView, load_month};
use crate::core::relay::{Intent, MutationRelay};
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::habit::Habit;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::paint_bg;
use crate::utils::date::{format_ymd, month_title};
use crate::utils::formatting::or_dash;
use crate::utils::table::Table;
use chrono::NaiveDate;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Events { action } = cmd else {
        return Ok(());
    };
    let (client, session) = connect(cfg)?;
    let relay = MutationRelay::new(&client, &session);

    match action {
        EventAction::List { month } => {
            let month = selected_month(month.as_deref())?;
            let data = load_month(&client, &session, month).await?;

            header(format!("Events {}", month_title(month)));
            if data.events.is_empty() {
                info("No events.");
                return Ok(());
            }
            print!("{}", events_table(&data.events, &data.habits, cfg.color_cells).render());
            warn_overlaps(&data.events);
        }

        EventAction::Add(form) => {
            let day = parse_day(&form.day)?;
            let mut view = MonthView::new(day);
            view.refresh(&client, &session).await?;

            let mut draft = EventDraft::seeded(day, view.events());
            if let Some(id) = &draft.prefilled_from {
                info(format!("Form prefilled from event {id} ({})", draft.name));
            }
            apply_form(&mut draft, form, day, view.events(), view.habits())?;

            let intent = draft.into_intent()?;
            relay.submit_and_reload(&intent, &mut view).await?;
            success(intent.describe());
            warn_overlaps(view.events());
        }

        EventAction::Update { id, form } => {
            let day = parse_day(&form.day)?;
            let mut view = MonthView::new(day);
            view.refresh(&client, &session).await?;

            let existing: Vec<Event> = view
                .events()
                .iter()
                .filter(|e| e.id == *id)
                .cloned()
                .collect();
            let anchor = existing.first().and_then(Event::start).unwrap_or(day);
            let mut draft = EventDraft::seeded(anchor, &existing);
            apply_form(&mut draft, form, day, view.events(), view.habits())?;

            let intent = Intent::UpdateEvent {
                id: id.clone(),
                event: draft.validate()?,
            };
            relay.submit_and_reload(&intent, &mut view).await?;
            success(intent.describe());
            warn_overlaps(view.events());
        }

        EventAction::Delete { id } => {
            let intent = Intent::DeleteEvent(id.clone());
            relay.submit(&intent).await?;
            success(intent.describe());
        }
    }

    Ok(())
}

/// Copy the command-line fields over the (possibly prefilled) draft.
fn apply_form(
    draft: &mut EventDraft,
    form: &EventArgs,
    day: NaiveDate,
    events: &[Event],
    habits: &[Habit],
) -> AppResult<()> {
    if let Some(to) = parse_optional_day(form.to.as_deref())? {
        draft.start = day;
        draft.end = to;
    }
    if let Some(name) = &form.name {
        draft.name = resolve_event_name(events, name)?;
    }
    if let Some(color) = &form.color {
        draft.set_color(color)?;
    }
    if let Some(note) = &form.note {
        draft.note = Some(note.clone());
    }
    if !form.disable.is_empty() {
        draft.disabled_habit_ids = resolve_disabled_habits(habits, &form.disable)?;
    }
    if draft.name.trim().is_empty() {
        return Err(AppError::EmptyValue("event name (use --name)"));
    }
    Ok(())
}

fn events_table(events: &[Event], habits: &[Habit], color: bool) -> Table {
    let mut table = Table::with_headers(&["ID", "Name", "From", "To", "Color", "Disables", "Note"]);
    for e in events {
        let swatch = match (&e.color, color) {
            (Some(c), true) => paint_bg(c, Some(c)),
            (Some(c), false) => c.clone(),
            (None, _) => "-".to_string(),
        };
        let disabled: Vec<&str> = e
            .disabled_habit_ids
            .iter()
            .map(|id| {
                habits
                    .iter()
                    .find(|h| h.id == *id)
                    .map(|h| h.name.as_str())
                    .unwrap_or(id.as_str())
            })
            .collect();
        table.add_row(vec![
            e.id.clone(),
            e.name.clone(),
            e.start().map(format_ymd).unwrap_or_default(),
            e.end().map(format_ymd).unwrap_or_default(),
            swatch,
            or_dash(Some(&disabled.join(", "))),
            or_dash(e.note.as_deref()),
        ]);
    }
    table
}
