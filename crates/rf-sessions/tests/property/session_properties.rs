use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use proptest::sample::select;
use rf_core::domain::{Event, EventType, TicketId};
use rf_sessions::{
    group_sessions, process_sessions, sort_sessions_by_time, tally_signals, untoggle_events,
    ScoringWeights,
};
use uuid::Uuid;

fn at_minute(minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 3, 6)
        .and_then(|day| day.and_hms_opt(10, minute, 0))
        .expect("valid timestamp")
}

fn build_event(event_type: EventType, source: u8, similar: u8, client: u8, minute: u32) -> Event {
    Event {
        source_ticket_id: TicketId::new(format!("INC{source}")),
        similar_ticket_id: TicketId::new(format!("INC10{similar}")),
        similar_tickets_ids: Vec::new(),
        rank: i64::from(similar),
        // Client 0 stands for the unknown client.
        client_id: (client > 0).then(|| Uuid::from_u128(u128::from(client))),
        timestamp: at_minute(minute),
        event_type,
        assignment_group: "SERVICE-DESK".to_owned(),
    }
}

fn arb_event() -> impl Strategy<Value = Event> {
    (
        select(EventType::ALL.to_vec()),
        0u8..3,
        0u8..4,
        0u8..3,
        0u32..60,
    )
        .prop_map(|(event_type, source, similar, client, minute)| {
            build_event(event_type, source, similar, client, minute)
        })
}

fn arb_log() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(arb_event(), 0..40)
}

fn is_subsequence(needle: &[Event], haystack: &[Event]) -> bool {
    let mut remaining = haystack.iter();
    needle
        .iter()
        .all(|wanted| remaining.any(|candidate| candidate == wanted))
}

proptest! {
    #[test]
    fn untoggle_is_idempotent(events in arb_log()) {
        let once = untoggle_events(&events);
        let twice = untoggle_events(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn untoggle_preserves_order(events in arb_log()) {
        let untoggled = untoggle_events(&events);
        prop_assert!(is_subsequence(&untoggled, &events));
    }

    #[test]
    fn untoggle_only_removes_likes_and_dislikes(events in arb_log()) {
        let untoggled = untoggle_events(&events);
        let views_before = events.iter().filter(|event| !event.is_sentiment()).count();
        let views_after = untoggled.iter().filter(|event| !event.is_sentiment()).count();
        prop_assert_eq!(views_before, views_after);
    }

    #[test]
    fn repeated_likes_score_like_one(repeats in 1usize..6, similar in 0u8..4) {
        let weights = ScoringWeights::default();
        let single = vec![build_event(EventType::Like, 1, similar, 1, 0)];
        let repeated: Vec<Event> = (0..repeats)
            .map(|minute| build_event(EventType::Like, 1, similar, 1, minute as u32))
            .collect();

        prop_assert_eq!(
            tally_signals(&single, &weights).sentiment(),
            tally_signals(&repeated, &weights).sentiment()
        );
    }

    #[test]
    fn sentiment_stays_within_bounds(events in arb_log()) {
        let sessions = process_sessions(&untoggle_events(&events), &ScoringWeights::default())
            .expect("default weights never produce degenerate sessions");
        for session in sessions.values() {
            prop_assert!(session.sentiment >= -1.0 - 1e-9);
            prop_assert!(session.sentiment <= 1.0 + 1e-9);
            prop_assert_eq!(
                session.only_view,
                !session.events.iter().any(Event::is_sentiment)
            );
        }
    }

    #[test]
    fn ordering_is_sorted_and_stable(events in arb_log()) {
        let ordered = sort_sessions_by_time(group_sessions(&events));
        for pair in ordered.windows(2) {
            let (first_key, first) = &pair[0];
            let (second_key, second) = &pair[1];
            prop_assert!(first.timestamp_start <= second.timestamp_start);
            if first.timestamp_start == second.timestamp_start {
                prop_assert!(first.only_view <= second.only_view);
                if first.only_view == second.only_view {
                    prop_assert!(first_key < second_key);
                }
            }
        }
    }
}
