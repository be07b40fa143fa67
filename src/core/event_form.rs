//! Authoring an event from a day header.

use crate::core::combobox::{ComboOption, Combobox};
use crate::core::lookup::find_event_for_date;
use crate::core::relay::Intent;
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, NewEvent, resolve_color};
use crate::models::habit::Habit;
use crate::utils::date::format_ymd;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub color: Option<String>,
    pub note: Option<String>,
    pub disabled_habit_ids: Vec<String>,
    /// Id of the event the draft was prefilled from, if any.
    pub prefilled_from: Option<String>,
}

impl EventDraft {
    /// Form opened on `day`: prefilled from the event covering it, otherwise
    /// an empty one-day event.
    pub fn seeded(day: NaiveDate, events: &[Event]) -> Self {
        match find_event_for_date(day, events) {
            Some(e) => Self {
                name: e.name.clone(),
                start: e.start().unwrap_or(day),
                end: e.end().unwrap_or(day),
                color: e.color.clone(),
                note: e.note.clone(),
                disabled_habit_ids: e.disabled_habit_ids.clone(),
                prefilled_from: Some(e.id.clone()),
            },
            None => Self {
                name: String::new(),
                start: day,
                end: day,
                color: None,
                note: None,
                disabled_habit_ids: Vec::new(),
                prefilled_from: None,
            },
        }
    }

    pub fn set_color(&mut self, input: &str) -> AppResult<()> {
        self.color = Some(resolve_color(input)?);
        Ok(())
    }

    /// Check the draft and build the request body.
    pub fn validate(&self) -> AppResult<NewEvent> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyValue("event name"));
        }
        if self.end < self.start {
            return Err(AppError::InvalidRange(format!(
                "end {} is before start {}",
                format_ymd(self.end),
                format_ymd(self.start)
            )));
        }
        if let Some(color) = &self.color {
            resolve_color(color)?;
        }
        Ok(NewEvent {
            name: name.to_string(),
            start_date: self.start,
            end_date: self.end,
            color: self.color.clone(),
            note: self
                .note
                .as_ref()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            disabled_habit_ids: if self.disabled_habit_ids.is_empty() {
                None
            } else {
                Some(self.disabled_habit_ids.clone())
            },
        })
    }

    /// Submitting the form always creates an event, also when prefilled.
    pub fn into_intent(self) -> AppResult<Intent> {
        Ok(Intent::CreateEvent(self.validate()?))
    }
}

/// Name picker: existing event names, with creation of a new one.
pub fn event_name_picker(events: &[Event]) -> Combobox {
    let mut options: Vec<ComboOption> = Vec::new();
    for e in events {
        if !options.iter().any(|o| o.label == e.name) {
            options.push(ComboOption::new(e.name.clone(), e.id.clone()));
        }
    }
    Combobox::single(options, true).with_placeholder("Search or create new")
}

/// Habit picker for "disable during the event"; the placeholder row is not offered.
pub fn habit_picker(habits: &[Habit]) -> Combobox {
    let options = habits
        .iter()
        .filter(|h| !h.is_sentinel())
        .map(|h| ComboOption::new(h.name.clone(), h.id.clone()))
        .collect();
    Combobox::multi(options, false)
}

/// Resolve typed habit names (or ids) to ids through the habit picker.
pub fn resolve_disabled_habits(habits: &[Habit], inputs: &[String]) -> AppResult<Vec<String>> {
    let mut picker = habit_picker(habits);
    for input in inputs {
        let value = picker
            .find_match(input.trim())
            .map(|o| o.value.clone())
            .ok_or_else(|| AppError::UnknownHabit(input.clone()))?;
        if !picker.is_selected(&value) {
            picker.select(&value);
        }
    }
    Ok(picker.selected_values().into_iter().map(String::from).collect())
}

/// Resolve the typed event name: an existing event keeps its stored name,
/// anything else becomes a new option.
pub fn resolve_event_name(events: &[Event], input: &str) -> AppResult<String> {
    let mut picker = event_name_picker(events);
    let input = input.trim();
    if input.is_empty() {
        return Err(AppError::EmptyValue("event name"));
    }
    if let Some(existing) = picker.options().iter().find(|o| o.label == input) {
        return Ok(existing.label.clone());
    }
    picker.set_query(input);
    match picker.create() {
        Some(created) => Ok(created.label),
        None => Ok(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::PALETTE;
    use pretty_assertions::assert_eq;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn trip() -> Event {
        Event {
            id: "e1".into(),
            name: "Trip".into(),
            dates: vec![jan(5), jan(6), jan(7)],
            color: Some(PALETTE[2].into()),
            note: Some("Lisbon".into()),
            disabled_habit_ids: vec!["h1".into()],
        }
    }

    fn habit(id: &str, name: &str) -> Habit {
        let mut h = Habit::sentinel();
        h.id = id.into();
        h.name = name.into();
        h
    }

    #[test]
    fn seeded_from_covering_event() {
        let draft = EventDraft::seeded(jan(6), &[trip()]);
        assert_eq!(draft.name, "Trip");
        assert_eq!(draft.start, jan(5));
        assert_eq!(draft.end, jan(7));
        assert_eq!(draft.disabled_habit_ids, vec!["h1".to_string()]);
        assert_eq!(draft.prefilled_from.as_deref(), Some("e1"));
    }

    #[test]
    fn seeded_empty_on_free_day() {
        let draft = EventDraft::seeded(jan(20), &[trip()]);
        assert_eq!(draft.start, jan(20));
        assert_eq!(draft.end, jan(20));
        assert!(draft.name.is_empty());
        assert!(matches!(draft.validate(), Err(AppError::EmptyValue(_))));
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut draft = EventDraft::seeded(jan(20), &[]);
        draft.name = "Flu".into();
        draft.end = jan(19);
        assert!(matches!(draft.validate(), Err(AppError::InvalidRange(_))));
    }

    #[test]
    fn validated_payload_omits_empty_parts() {
        let mut draft = EventDraft::seeded(jan(20), &[]);
        draft.name = " Flu ".into();
        draft.note = Some("  ".into());
        draft.set_color("2").unwrap();
        let body = draft.validate().unwrap();
        assert_eq!(body.name, "Flu");
        assert_eq!(body.color.as_deref(), Some("#ffb3d9"));
        assert_eq!(body.note, None);
        assert_eq!(body.disabled_habit_ids, None);
        assert!(matches!(
            draft.clone().into_intent().unwrap(),
            Intent::CreateEvent(_)
        ));
        assert!(draft.set_color("#123456").is_err());
    }

    #[test]
    fn disabled_habits_resolve_by_name() {
        let habits = vec![habit("h1", "Read"), habit("h2", "Run"), Habit::sentinel()];
        let ids =
            resolve_disabled_habits(&habits, &["run".to_string(), "h1".to_string()]).unwrap();
        assert_eq!(ids, vec!["h2".to_string(), "h1".to_string()]);

        let dup = resolve_disabled_habits(&habits, &["Run".into(), "run".into()]).unwrap();
        assert_eq!(dup, vec!["h2".to_string()]);

        assert!(matches!(
            resolve_disabled_habits(&habits, &["new".to_string()]),
            Err(AppError::UnknownHabit(_))
        ));
        assert_eq!(habit_picker(&habits).options().len(), 2);
    }

    #[test]
    fn event_names_reuse_existing() {
        let events = vec![trip()];
        assert_eq!(resolve_event_name(&events, "Trip").unwrap(), "Trip");
        assert_eq!(resolve_event_name(&events, "Conference").unwrap(), "Conference");
        assert!(resolve_event_name(&events, " ").is_err());
    }
}
