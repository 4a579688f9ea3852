use chrono::NaiveDateTime;
use rf_core::domain::{Event, EventType, TicketId};
use uuid::Uuid;

pub(crate) fn ts(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").expect("valid timestamp")
}

pub(crate) fn client(id: u128) -> Option<Uuid> {
    Some(Uuid::from_u128(id))
}

pub(crate) fn event(
    event_type: EventType,
    source: &str,
    similar: &str,
    client_id: Option<Uuid>,
    at: &str,
) -> Event {
    Event {
        source_ticket_id: TicketId::new(source),
        similar_ticket_id: TicketId::new(similar),
        similar_tickets_ids: vec![TicketId::new(similar)],
        rank: 0,
        client_id,
        timestamp: ts(at),
        event_type,
        assignment_group: "SERVICE-DESK".to_owned(),
    }
}
