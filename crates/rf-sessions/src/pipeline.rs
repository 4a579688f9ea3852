use std::borrow::Cow;

use rf_core::domain::{Event, FeedbackError, ScoringError};

use crate::config::AnalysisConfig;
use crate::grouping::group_sessions;
use crate::models::SessionMap;
use crate::scoring::{score_sessions, ScoringWeights};
use crate::stats::filter_events_since;
use crate::untoggle::untoggle_events;

/// Group already-untoggled events into sessions and score them.
pub fn process_sessions(
    events: &[Event],
    weights: &ScoringWeights,
) -> Result<SessionMap, ScoringError> {
    let mut sessions = group_sessions(events);
    score_sessions(&mut sessions, weights)?;
    Ok(sessions)
}

/// Run the full analysis over one log: date filter, toggle removal,
/// grouping and scoring.
pub fn analyze(events: &[Event], config: &AnalysisConfig) -> Result<SessionMap, FeedbackError> {
    let events: Cow<'_, [Event]> = match config.filter.since {
        Some(since) => Cow::Owned(filter_events_since(events, since)),
        None => Cow::Borrowed(events),
    };

    let untoggled = untoggle_events(&events);
    let sessions = process_sessions(&untoggled, &config.scoring)?;

    tracing::info!(
        input_events = events.len(),
        retained_events = untoggled.len(),
        sessions = sessions.len(),
        only_view_sessions = sessions.values().filter(|session| session.only_view).count(),
        "session analysis complete"
    );
    Ok(sessions)
}
