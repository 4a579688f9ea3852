use crate::domain::SessionKey;

// ---------------------------------------------------------------------------
// Sub-error types
// ---------------------------------------------------------------------------

/// A single field of a log row could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("missing column {index}")]
    MissingColumn { index: usize },
    #[error("unknown event type: {0}")]
    UnknownEventType(String),
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("invalid client id: {0}")]
    InvalidClientId(String),
    #[error("invalid rank: {0}")]
    InvalidRank(String),
    #[error("invalid review score: {0}")]
    InvalidScore(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("session {key} has a zero scoring denominator")]
    DegenerateSession { key: SessionKey },
}

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("malformed record at row {row}: {source}")]
    MalformedRecord {
        row: usize,
        #[source]
        source: RecordError,
    },
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
