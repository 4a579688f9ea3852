use std::collections::HashSet;

use rf_core::domain::{Event, EventType, ScoringError, SessionKey, TicketId};
use serde::{Deserialize, Serialize};

use crate::models::{Session, SessionMap};

pub const LIKE_WEIGHT: f64 = 1.0;
pub const DISLIKE_WEIGHT: f64 = 0.67;
pub const VIEW_WEIGHT: f64 = 0.001;

/// Contribution of each distinct signal to a session's sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub like_weight: f64,
    pub dislike_weight: f64,
    pub view_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            like_weight: LIKE_WEIGHT,
            dislike_weight: DISLIKE_WEIGHT,
            view_weight: VIEW_WEIGHT,
        }
    }
}

/// Weighted signal sums of one session. Each result counts at most once per
/// signal type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalTotals {
    pub likes: f64,
    pub dislikes: f64,
    pub views: f64,
    pub only_view: bool,
}

impl SignalTotals {
    /// `(likes + views - dislikes) / (likes + views + dislikes)`, where a like
    /// anywhere in the session cancels the dislike penalty in the numerator
    /// only. `None` when the denominator is zero.
    pub fn sentiment(&self) -> Option<f64> {
        let dislike_sum = self.dislikes;
        let dislike_penalty = if self.likes > 0.0 && self.dislikes > 0.0 {
            0.0
        } else {
            self.dislikes
        };

        let denominator = self.likes + self.views + dislike_sum;
        if denominator == 0.0 {
            return None;
        }
        Some((self.likes + self.views - dislike_penalty) / denominator)
    }
}

pub fn tally_signals(events: &[Event], weights: &ScoringWeights) -> SignalTotals {
    let mut liked: HashSet<&TicketId> = HashSet::new();
    let mut disliked: HashSet<&TicketId> = HashSet::new();
    let mut viewed: HashSet<&TicketId> = HashSet::new();
    let mut totals = SignalTotals {
        likes: 0.0,
        dislikes: 0.0,
        views: 0.0,
        only_view: true,
    };

    for event in events {
        match event.event_type {
            EventType::Like => {
                totals.only_view = false;
                if liked.insert(&event.similar_ticket_id) {
                    totals.likes += weights.like_weight;
                }
            }
            EventType::Dislike => {
                totals.only_view = false;
                if disliked.insert(&event.similar_ticket_id) {
                    totals.dislikes += weights.dislike_weight;
                }
            }
            EventType::ViewSimilarIncident => {
                if viewed.insert(&event.similar_ticket_id) {
                    totals.views += weights.view_weight;
                }
            }
            EventType::ViewIncidentResults
            | EventType::ViewIncidentResultsNa
            | EventType::ViewSourceIncident => {}
        }
    }

    totals
}

pub fn score_session(
    key: &SessionKey,
    session: &Session,
    weights: &ScoringWeights,
) -> Result<f64, ScoringError> {
    tally_signals(&session.events, weights)
        .sentiment()
        .ok_or_else(|| ScoringError::DegenerateSession { key: key.clone() })
}

/// Fill in `sentiment` for every session, failing on the first degenerate one.
pub fn score_sessions(
    sessions: &mut SessionMap,
    weights: &ScoringWeights,
) -> Result<(), ScoringError> {
    for (key, session) in sessions.iter_mut() {
        let totals = tally_signals(&session.events, weights);
        session.sentiment = totals
            .sentiment()
            .ok_or_else(|| ScoringError::DegenerateSession { key: key.clone() })?;
        session.only_view = totals.only_view;
    }
    Ok(())
}
