//! Decoding of UI-log rows into [`Event`] values.
//!
//! Rows arrive as already-split CSV fields; reading the file is left to the
//! caller.

use chrono::NaiveDateTime;
use uuid::Uuid;

use super::error::{FeedbackError, RecordError};
use super::event::Event;
use super::types::TicketId;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Client id value written by the UI when no client is known.
pub const UNKNOWN_CLIENT: &str = "n/a";

/// Zero-based column indices of the UI-log export.
pub mod column {
    pub const TIMESTAMP: usize = 1;
    pub const EVENT_TYPE: usize = 2;
    pub const EVENT_ID: usize = 3;
    pub const SOURCE_TICKET_ID: usize = 4;
    pub const ASSIGNMENT_GROUP: usize = 5;
    pub const SIMILAR_TICKET_ID: usize = 6;
    pub const SIMILAR_TICKET_IDS: usize = 7;
    pub const RANK: usize = 8;
    pub const CLIENT_ID: usize = 10;
}

/// Decode one row. Returns `Ok(None)` for header and blank rows, which have
/// an empty first column.
pub fn parse_event_row<S: AsRef<str>>(fields: &[S]) -> Result<Option<Event>, RecordError> {
    let leading: &str = fields.first().map(|value| value.as_ref()).unwrap_or_default();
    if leading.is_empty() {
        return Ok(None);
    }

    let event = Event {
        source_ticket_id: TicketId::new(field(fields, column::SOURCE_TICKET_ID)?),
        similar_ticket_id: TicketId::new(field(fields, column::SIMILAR_TICKET_ID)?),
        similar_tickets_ids: parse_ticket_list(field(fields, column::SIMILAR_TICKET_IDS)?),
        rank: parse_rank(field(fields, column::RANK)?)?,
        client_id: parse_client_id(field(fields, column::CLIENT_ID)?)?,
        timestamp: parse_timestamp(field(fields, column::TIMESTAMP)?)?,
        event_type: field(fields, column::EVENT_TYPE)?.parse()?,
        assignment_group: field(fields, column::ASSIGNMENT_GROUP)?.to_owned(),
    };
    Ok(Some(event))
}

/// Decode a whole table, failing on the first malformed row.
pub fn parse_event_rows<R, S>(rows: &[R]) -> Result<Vec<Event>, FeedbackError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut events = Vec::with_capacity(rows.len());
    for (row, fields) in rows.iter().enumerate() {
        match parse_event_row(fields.as_ref()) {
            Ok(Some(event)) => events.push(event),
            Ok(None) => {}
            Err(source) => return Err(FeedbackError::MalformedRecord { row, source }),
        }
    }
    Ok(events)
}

/// Borrow column `index`, or fail with [`RecordError::MissingColumn`].
pub fn field<S: AsRef<str>>(fields: &[S], index: usize) -> Result<&str, RecordError> {
    fields
        .get(index)
        .map(|value| value.as_ref())
        .ok_or(RecordError::MissingColumn { index })
}

pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, RecordError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|_| RecordError::InvalidTimestamp(value.to_owned()))
}

pub fn parse_client_id(value: &str) -> Result<Option<Uuid>, RecordError> {
    if value == UNKNOWN_CLIENT {
        return Ok(None);
    }
    Uuid::parse_str(value)
        .map(Some)
        .map_err(|_| RecordError::InvalidClientId(value.to_owned()))
}

/// The export is one-based and may carry the rank as a float (`"3.0"`).
/// Blank ranks count as zero, so they end up as `-1`.
pub fn parse_rank(value: &str) -> Result<i64, RecordError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(-1);
    }

    let parsed: f64 = trimmed
        .parse()
        .map_err(|_| RecordError::InvalidRank(value.to_owned()))?;
    let whole = parsed.trunc();
    if !whole.is_finite() || whole <= i64::MIN as f64 || whole >= i64::MAX as f64 {
        return Err(RecordError::InvalidRank(value.to_owned()));
    }
    Ok(whole as i64 - 1)
}

/// Parse a list literal such as `['INC1', 'INC2']`.
///
/// Splits on runs of whitespace, so `"[]"` and doubled spaces yield no
/// empty-string entries.
pub fn parse_ticket_list(value: &str) -> Vec<TicketId> {
    value
        .chars()
        .filter(|c| !matches!(c, ',' | '[' | ']' | '\''))
        .collect::<String>()
        .split_whitespace()
        .map(TicketId::new)
        .collect()
}
