//! Manual relabelling of dislikes.
//!
//! Two reviewers grade disliked results on a 1–5 scale, where high grades
//! mean the dislike was not about result quality. Clients whose dislikes
//! are judged irrelevant are excluded from the session map.

use std::collections::BTreeSet;

use rf_core::domain::record::field;
use rf_core::domain::{EventType, FeedbackError, RecordError};
use uuid::Uuid;

use crate::models::SessionMap;

/// First column value of header rows in the review export.
const HEADER_MARKER: &str = "Column1";

mod column {
    pub const EVENT_TYPE: usize = 2;
    pub const FIRST_REVIEWER: usize = 5;
    pub const SECOND_REVIEWER: usize = 6;
    pub const CLIENT_ID: usize = 13;
}

/// Reviewer grades for one disliked result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewVerdict {
    pub client_id: Uuid,
    pub first_grade: Option<u8>,
    pub second_grade: Option<u8>,
}

impl ReviewVerdict {
    pub fn is_irrelevant(&self) -> bool {
        dislike_is_irrelevant(self.first_grade, self.second_grade)
    }
}

/// A single grade of 4 or 5 is decisive; otherwise both reviewers must
/// grade at least 3.
pub fn dislike_is_irrelevant(first: Option<u8>, second: Option<u8>) -> bool {
    let decisive = |grade: Option<u8>| matches!(grade, Some(4 | 5));
    if decisive(first) || decisive(second) {
        return true;
    }
    matches!((first, second), (Some(a), Some(b)) if a >= 3 && b >= 3)
}

/// Decode one review row. Header rows and rows for other event types yield
/// `Ok(None)`.
pub fn parse_review_row<S: AsRef<str>>(
    fields: &[S],
) -> Result<Option<ReviewVerdict>, RecordError> {
    if field(fields, 0)? == HEADER_MARKER {
        return Ok(None);
    }

    let event_type: EventType = field(fields, column::EVENT_TYPE)?.parse()?;
    if event_type != EventType::Dislike {
        return Ok(None);
    }

    let client_id = field(fields, column::CLIENT_ID)?;
    Ok(Some(ReviewVerdict {
        client_id: Uuid::parse_str(client_id)
            .map_err(|_| RecordError::InvalidClientId(client_id.to_owned()))?,
        first_grade: parse_grade(field(fields, column::FIRST_REVIEWER)?)?,
        second_grade: parse_grade(field(fields, column::SECOND_REVIEWER)?)?,
    }))
}

fn parse_grade(value: &str) -> Result<Option<u8>, RecordError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| RecordError::InvalidScore(value.to_owned()))
}

/// Clients with at least one dislike judged irrelevant.
pub fn clients_to_exclude<R, S>(rows: &[R]) -> Result<BTreeSet<Uuid>, FeedbackError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut clients = BTreeSet::new();
    for (row, fields) in rows.iter().enumerate() {
        let verdict = parse_review_row(fields.as_ref())
            .map_err(|source| FeedbackError::MalformedRecord { row, source })?;
        if let Some(verdict) = verdict.filter(ReviewVerdict::is_irrelevant) {
            clients.insert(verdict.client_id);
        }
    }
    Ok(clients)
}

/// Drop every session of an excluded client. Unknown-client sessions are kept.
pub fn exclude_clients(sessions: SessionMap, clients: &BTreeSet<Uuid>) -> SessionMap {
    let before = sessions.len();
    let kept: SessionMap = sessions
        .into_iter()
        .filter(|(key, _)| key.client_id.is_none_or(|id| !clients.contains(&id)))
        .collect();

    let removed = before - kept.len();
    if removed > 0 {
        tracing::info!(
            removed,
            remaining = kept.len(),
            "excluded sessions flagged by dislike review"
        );
    }
    kept
}
