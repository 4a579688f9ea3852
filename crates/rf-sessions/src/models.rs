use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rf_core::domain::{Event, SessionKey};
use serde::{Deserialize, Serialize};

/// Events of one `(source ticket, client)` pair that carry feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Timestamp of the first event in log order (not the earliest one).
    pub timestamp_start: NaiveDateTime,
    /// Relevance feedback in `[-1, 1]`. Zero until the session is scored.
    pub sentiment: f64,
    /// Every event of the group, duplicates included.
    pub events: Vec<Event>,
    /// No like or dislike was recorded, only views of suggested incidents.
    pub only_view: bool,
}

/// Sessions keyed by `(source ticket, client)`, iterated in key order.
pub type SessionMap = BTreeMap<SessionKey, Session>;
