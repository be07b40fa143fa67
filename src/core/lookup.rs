//! Which event, if any, covers a given calendar day.

use crate::models::event::Event;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// First event in list order whose covered dates include `date`.
/// Overlapping events are not expected; when they happen the earlier one wins.
pub fn find_event_for_date(date: NaiveDate, events: &[Event]) -> Option<&Event> {
    events.iter().find(|e| e.covers(date))
}

/// Days covered by more than one event, ascending.
pub fn overlapping_days(events: &[Event]) -> Vec<NaiveDate> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for event in events {
        let unique: BTreeSet<NaiveDate> = event.dates.iter().copied().collect();
        for day in unique {
            *counts.entry(day).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(d, _)| d)
        .collect()
}
