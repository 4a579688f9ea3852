use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rf_core::domain::{Event, EventType};

/// Number of events per type. Every type is present, absent ones with zero.
pub fn event_type_counts(events: &[Event]) -> BTreeMap<EventType, usize> {
    let mut counts: BTreeMap<EventType, usize> =
        EventType::ALL.iter().map(|&event_type| (event_type, 0)).collect();
    for event in events {
        *counts.entry(event.event_type).or_insert(0) += 1;
    }
    counts
}

/// Keep events dated on or after `since`.
pub fn filter_events_since(events: &[Event], since: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.timestamp.date() >= since)
        .cloned()
        .collect()
}

pub fn unique_assignment_groups(events: &[Event]) -> BTreeSet<&str> {
    events
        .iter()
        .map(|event| event.assignment_group.as_str())
        .collect()
}
