//! Forwards grid and form actions to the API and tells the caller which
//! data has to be reloaded afterwards. Nothing is applied optimistically.

use crate::api::ApiClient;
use crate::core::month::MonthView;
use crate::errors::AppResult;
use crate::models::event::NewEvent;
use crate::models::habit::{HabitPatch, NewHabit};
use crate::models::habit_log::HabitLog;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    CreateHabit(NewHabit),
    UpdateHabit { id: String, patch: HabitPatch },
    DeleteHabit(String),
    UpdateLog(HabitLog),
    CreateEvent(NewEvent),
    UpdateEvent { id: String, event: NewEvent },
    DeleteEvent(String),
}

/// Data set invalidated by an acknowledged mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Habits,
    Events,
}

impl Intent {
    pub fn refresh(&self) -> Refresh {
        match self {
            Intent::CreateHabit(_)
            | Intent::UpdateHabit { .. }
            | Intent::DeleteHabit(_)
            | Intent::UpdateLog(_) => Refresh::Habits,
            Intent::CreateEvent(_) | Intent::UpdateEvent { .. } | Intent::DeleteEvent(_) => {
                Refresh::Events
            }
        }
    }

    /// Short confirmation text shown once the server accepted the change.
    pub fn describe(&self) -> String {
        match self {
            Intent::CreateHabit(h) => format!("Habit '{}' created", h.name),
            Intent::UpdateHabit { id, .. } => format!("Habit {id} updated"),
            Intent::DeleteHabit(id) => format!("Habit {id} deleted"),
            Intent::UpdateLog(log) => format!(
                "Habit {} {} on {}",
                log.habit_id,
                if log.is_checked { "checked" } else { "unchecked" },
                log.date.format("%Y-%m-%d")
            ),
            Intent::CreateEvent(e) => format!("Event '{}' created", e.name),
            Intent::UpdateEvent { id, .. } => format!("Event {id} updated"),
            Intent::DeleteEvent(id) => format!("Event {id} deleted"),
        }
    }
}

pub struct MutationRelay<'a> {
    client: &'a ApiClient,
    session: &'a Session,
}

impl<'a> MutationRelay<'a> {
    pub fn new(client: &'a ApiClient, session: &'a Session) -> Self {
        Self { client, session }
    }

    /// Send one intent. Errors are terminal for this action; no retry.
    pub async fn submit(&self, intent: &Intent) -> AppResult<Refresh> {
        let (client, session) = (self.client, self.session);
        match intent {
            Intent::CreateHabit(habit) => client.create_habit(session, habit).await?,
            Intent::UpdateHabit { id, patch } => client.update_habit(session, id, patch).await?,
            Intent::DeleteHabit(id) => client.delete_habit(session, id).await?,
            Intent::UpdateLog(log) => client.update_log(session, log).await?,
            Intent::CreateEvent(event) => client.create_event(session, event).await?,
            Intent::UpdateEvent { id, event } => client.update_event(session, id, event).await?,
            Intent::DeleteEvent(id) => client.delete_event(session, id).await?,
        }
        tracing::info!(action = %intent.describe(), "mutation acknowledged");
        Ok(intent.refresh())
    }

    /// Send the intent, then reload the month shown in `view`.
    pub async fn submit_and_reload(&self, intent: &Intent, view: &mut MonthView) -> AppResult<bool> {
        self.submit(intent).await?;
        view.refresh(self.client, self.session).await
    }
}
