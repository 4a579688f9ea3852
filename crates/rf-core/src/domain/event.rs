use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::RecordError;
use super::types::{SessionKey, TicketId};

/// Kind of interaction recorded in the UI log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    /// User marked a suggested incident as relevant.
    Like,
    /// User marked a suggested incident as irrelevant.
    Dislike,
    /// Result list was shown.
    ViewIncidentResults,
    /// Result list was requested but nothing was available.
    ViewIncidentResultsNa,
    /// User opened one of the suggested incidents.
    ViewSimilarIncident,
    /// User opened the incident they were searching from.
    ViewSourceIncident,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Like,
        EventType::Dislike,
        EventType::ViewIncidentResults,
        EventType::ViewIncidentResultsNa,
        EventType::ViewSimilarIncident,
        EventType::ViewSourceIncident,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Like => "like",
            EventType::Dislike => "dislike",
            EventType::ViewIncidentResults => "view-incident-results",
            EventType::ViewIncidentResultsNa => "view-incident-results-na",
            EventType::ViewSimilarIncident => "view-similar-incident",
            EventType::ViewSourceIncident => "view-source-incident",
        }
    }

    /// Explicit feedback, as opposed to passive viewing.
    pub fn is_sentiment(self) -> bool {
        matches!(self, EventType::Like | EventType::Dislike)
    }
}

impl FromStr for EventType {
    type Err = RecordError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "like" => Ok(EventType::Like),
            "dislike" => Ok(EventType::Dislike),
            "view-incident-results" => Ok(EventType::ViewIncidentResults),
            "view-incident-results-na" => Ok(EventType::ViewIncidentResultsNa),
            "view-similar-incident" => Ok(EventType::ViewSimilarIncident),
            "view-source-incident" => Ok(EventType::ViewSourceIncident),
            other => Err(RecordError::UnknownEventType(other.to_owned())),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized row of the UI interaction log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Ticket the user was searching from.
    pub source_ticket_id: TicketId,
    /// Suggested result the event refers to. Empty for event types that
    /// do not target a single result.
    pub similar_ticket_id: TicketId,
    /// Full result set shown at that moment.
    pub similar_tickets_ids: Vec<TicketId>,
    /// Zero-based position of `similar_ticket_id`, `-1` when unranked.
    pub rank: i64,
    /// Pseudo-session identifier, valid for about an hour. `None` means
    /// the client is unknown.
    pub client_id: Option<Uuid>,
    pub timestamp: NaiveDateTime,
    pub event_type: EventType,
    pub assignment_group: String,
}

impl Event {
    pub fn session_key(&self) -> SessionKey {
        SessionKey::new(self.source_ticket_id.clone(), self.client_id)
    }

    pub fn is_sentiment(&self) -> bool {
        self.event_type.is_sentiment()
    }
}
