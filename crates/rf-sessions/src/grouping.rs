use std::collections::BTreeMap;

use rf_core::domain::{Event, EventType, SessionKey};

use crate::models::{Session, SessionMap};

/// Why a group of events is kept as a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relevance {
    /// At least one like or dislike.
    Sentiment,
    /// No like or dislike, but at least one suggested incident was opened.
    OnlyView,
}

/// Classify one `(source ticket, client)` group. `None` means the group
/// carries no usable feedback and is dropped.
pub fn classify_group<'a>(events: impl IntoIterator<Item = &'a Event>) -> Option<Relevance> {
    let mut viewed_similar = false;
    for event in events {
        match event.event_type {
            EventType::Like | EventType::Dislike => return Some(Relevance::Sentiment),
            EventType::ViewSimilarIncident => viewed_similar = true,
            EventType::ViewIncidentResults
            | EventType::ViewIncidentResultsNa
            | EventType::ViewSourceIncident => {}
        }
    }
    viewed_similar.then_some(Relevance::OnlyView)
}

/// Partition events into sessions keyed by `(source ticket, client)`.
///
/// Each session keeps its events in input order and starts at the timestamp
/// of its first event. Groups without feedback are dropped. Sentiment is
/// left at zero; see [`crate::scoring::score_sessions`].
pub fn group_sessions(events: &[Event]) -> SessionMap {
    let mut groups: BTreeMap<SessionKey, Vec<&Event>> = BTreeMap::new();
    for event in events {
        groups.entry(event.session_key()).or_default().push(event);
    }

    let group_count = groups.len();
    let sessions: SessionMap = groups
        .into_iter()
        .filter_map(|(key, group)| {
            let relevance = classify_group(group.iter().copied())?;
            let timestamp_start = group.first()?.timestamp;
            let session = Session {
                timestamp_start,
                sentiment: 0.0,
                events: group.into_iter().cloned().collect(),
                only_view: relevance == Relevance::OnlyView,
            };
            Some((key, session))
        })
        .collect();

    tracing::debug!(
        groups = group_count,
        sessions = sessions.len(),
        "grouped events into sessions"
    );
    sessions
}
