//! Removal of like/dislike "undo" sequences.
//!
//! A client that clicks like and then unlike on the same result leaves two
//! like events in the log and no net feedback. Toggles are detected by
//! parity: an even, non-zero number of same-type events per
//! `(client, result)` bucket is dropped entirely, an odd number is kept as is.
//! `client_id` already bounds a session to about an hour, so no time window
//! is applied.

use std::collections::BTreeMap;

use rf_core::domain::{Event, EventType, TicketId};
use uuid::Uuid;

/// Positions of a client's likes and dislikes, bucketed per result.
#[derive(Default)]
struct ClientSignals<'a> {
    liked: BTreeMap<&'a TicketId, Vec<usize>>,
    disliked: BTreeMap<&'a TicketId, Vec<usize>>,
}

/// Drop every event belonging to a toggled like or dislike bucket.
///
/// Only likes and dislikes are ever removed; the relative order of the
/// remaining events is preserved.
pub fn untoggle_events(events: &[Event]) -> Vec<Event> {
    let mut clients: BTreeMap<Option<Uuid>, ClientSignals<'_>> = BTreeMap::new();

    for (index, event) in events.iter().enumerate() {
        let signals = match event.event_type {
            EventType::Like => &mut clients.entry(event.client_id).or_default().liked,
            EventType::Dislike => &mut clients.entry(event.client_id).or_default().disliked,
            EventType::ViewIncidentResults
            | EventType::ViewIncidentResultsNa
            | EventType::ViewSimilarIncident
            | EventType::ViewSourceIncident => continue,
        };
        signals
            .entry(&event.similar_ticket_id)
            .or_default()
            .push(index);
    }

    let mut toggled = vec![false; events.len()];
    for (client_id, signals) in &clients {
        let buckets = [
            (EventType::Like, &signals.liked),
            (EventType::Dislike, &signals.disliked),
        ];
        for (signal, results) in buckets {
            for (result_id, indices) in results {
                if !did_toggle(indices.len()) {
                    continue;
                }
                tracing::debug!(
                    client_id = ?client_id,
                    result_id = %result_id,
                    signal = signal.as_str(),
                    count = indices.len(),
                    "dropping toggled events"
                );
                for &index in indices {
                    toggled[index] = true;
                }
            }
        }
    }

    let untoggled: Vec<Event> = events
        .iter()
        .enumerate()
        .filter(|(index, _)| !toggled[*index])
        .map(|(_, event)| event.clone())
        .collect();

    tracing::debug!(
        input = events.len(),
        retained = untoggled.len(),
        "untoggled event stream"
    );
    untoggled
}

fn did_toggle(count: usize) -> bool {
    count != 0 && count % 2 == 0
}
