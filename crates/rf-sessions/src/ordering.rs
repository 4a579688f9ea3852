use rf_core::domain::SessionKey;

use crate::models::{Session, SessionMap};

/// Sessions ordered by `timestamp_start`.
///
/// Sessions starting at the same moment list sentiment-bearing sessions
/// before view-only ones, each in the map's key order.
pub fn sort_sessions_by_time(sessions: SessionMap) -> Vec<(SessionKey, Session)> {
    let mut ordered: Vec<(SessionKey, Session)> = sessions.into_iter().collect();
    ordered.sort_by_key(|(_, session)| (session.timestamp_start, session.only_view));
    ordered
}
