//! Decides what a single cell of the standings table is worth.
//!
//! Resolved events use the provider's classification and points as-is.
//! Unresolved events are projected from, in order: the user's prediction,
//! the published qualifying order, then the current championship position.

use serde::Serialize;

use crate::model::{
    EventKind, Finish, ParticipantId, Prediction, PredictionSource, Round, SeasonSnapshot,
    MAX_PREDICTED_POSITION,
};
use crate::predictions::PredictionStore;
use crate::scoring::points_for_position;

/// The value of one participant in one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The event has been run and the participant is classified in it.
    Actual { finish: Finish, points: u32 },
    /// The event has not been run yet.
    Projected {
        prediction: Prediction,
        source: PredictionSource,
        points: u32,
    },
    /// The event has been run without this participant, or does not exist.
    NoEntry,
}

impl Outcome {
    pub fn is_actual(&self) -> bool {
        matches!(self, Outcome::Actual { .. })
    }

    /// Numeric position, 0 for a non-finish, a missing prediction or no entry.
    pub fn position(&self) -> u32 {
        match self {
            Outcome::Actual { finish, .. } => finish.position(),
            Outcome::Projected { prediction, .. } => prediction.position().map_or(0, u32::from),
            Outcome::NoEntry => 0,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            Outcome::Actual { points, .. } | Outcome::Projected { points, .. } => *points,
            Outcome::NoEntry => 0,
        }
    }
}

pub fn resolve(
    snapshot: &SeasonSnapshot,
    predictions: &PredictionStore,
    participant: &ParticipantId,
    round: &Round,
    kind: EventKind,
) -> Outcome {
    if !round.has_event(kind) {
        return Outcome::NoEntry;
    }

    if let Some(results) = snapshot.results.get(round.number, kind) {
        return match results.get(participant) {
            Some(entry) => Outcome::Actual {
                finish: entry.finish,
                points: entry.points,
            },
            None => Outcome::NoEntry,
        };
    }

    let (prediction, source) =
        projected_position(snapshot, predictions, participant, round.number, kind);
    let points = prediction
        .position()
        .map_or(0, |position| points_for_position(kind, u32::from(position)));

    Outcome::Projected {
        prediction,
        source,
        points,
    }
}

/// The position used for an unresolved event, with the rule that chose it.
pub fn projected_position(
    snapshot: &SeasonSnapshot,
    predictions: &PredictionStore,
    participant: &ParticipantId,
    round: u32,
    kind: EventKind,
) -> (Prediction, PredictionSource) {
    if let Some(prediction) = predictions.get(round, kind, participant) {
        return (prediction, PredictionSource::User);
    }

    // Not being in a published order means not qualified, not "use a default".
    if let Some(order) = snapshot.qualifying.get(round, kind) {
        return (
            Prediction::from(order.position_of(participant)),
            PredictionSource::Qualifying,
        );
    }

    match snapshot
        .participant(participant)
        .and_then(|p| p.position)
        .and_then(|position| u8::try_from(position).ok())
    {
        Some(position) if (1..=MAX_PREDICTED_POSITION).contains(&position) => {
            (Prediction::Position(position), PredictionSource::Championship)
        }
        _ => (Prediction::NoPrediction, PredictionSource::Unranked),
    }
}
