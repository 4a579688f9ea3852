use chrono::NaiveDateTime;
use rf_core::domain::{FeedbackError, SessionKey};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Session;

#[derive(Serialize)]
struct ExportJsonSession<'a> {
    source_ticket_id: &'a str,
    client_id: Option<Uuid>,
    timestamp_start: NaiveDateTime,
    sentiment: f64,
    only_view: bool,
    event_count: usize,
}

/// Render scored sessions as a JSON array for reporting. Event lists are
/// summarised by their length.
pub fn export_sessions_to_json(sessions: &[(SessionKey, Session)]) -> Result<String, FeedbackError> {
    let export_sessions: Vec<ExportJsonSession<'_>> = sessions
        .iter()
        .map(|(key, session)| ExportJsonSession {
            source_ticket_id: key.source_ticket_id.as_str(),
            client_id: key.client_id,
            timestamp_start: session.timestamp_start,
            sentiment: session.sentiment,
            only_view: session.only_view,
            event_count: session.events.len(),
        })
        .collect();

    let json = serde_json::to_string(&export_sessions)?;
    Ok(json)
}
