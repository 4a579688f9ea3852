use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// String-based identity newtypes
// ---------------------------------------------------------------------------

macro_rules! string_newtype {
    ($name:ident) => {
        #[derive(
            Clone,
            Debug,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_newtype!(TicketId);

// ---------------------------------------------------------------------------
// SessionKey — (source ticket, client) pair a session is reconstructed for
// ---------------------------------------------------------------------------

/// Composite key of a session.
///
/// Ordering is lexicographic on the source ticket and then the client id,
/// with the unknown client (`None`) sorting before every known one.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionKey {
    pub source_ticket_id: TicketId,
    pub client_id: Option<Uuid>,
}

impl SessionKey {
    pub fn new(source_ticket_id: TicketId, client_id: Option<Uuid>) -> Self {
        Self {
            source_ticket_id,
            client_id,
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.client_id {
            Some(client_id) => write!(f, "{}/{client_id}", self.source_ticket_id),
            None => write!(f, "{}/unknown", self.source_ticket_id),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
