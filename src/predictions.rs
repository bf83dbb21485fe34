use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::error::{ForecastError, Result};
use crate::model::{
    ByEvent, EventKind, ParticipantId, Prediction, PredictionChange, MAX_PREDICTED_POSITION,
};

/// Serialized form of every user prediction, per event kind and round.
pub type PredictionState = ByEvent<BTreeMap<ParticipantId, Prediction>>;

/// User-entered speculative positions.
///
/// Within one round and event kind no two participants hold the same
/// position; a write that collides swaps the previous holder into the
/// writer's old slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionStore {
    entries: PredictionState,
}

impl PredictionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The explicit entry for a participant, if the user wrote one.
    pub fn get(
        &self,
        round: u32,
        kind: EventKind,
        participant: &ParticipantId,
    ) -> Option<Prediction> {
        self.entries
            .get(round, kind)
            .and_then(|slot| slot.get(participant))
            .copied()
    }

    /// Write a prediction. `None` and `Some(0)` store an explicit "no
    /// prediction" and never swap.
    pub fn set_prediction(
        &mut self,
        round: u32,
        kind: EventKind,
        participant: &ParticipantId,
        position: Option<u8>,
    ) -> Result<PredictionChange> {
        let requested = Prediction::from(position);
        if let Prediction::Position(position) = requested {
            if position > MAX_PREDICTED_POSITION {
                return Err(ForecastError::InvalidPosition { position });
            }
        }

        let slot = self.entries.kind_mut(kind).entry(round).or_default();
        let previous = slot.get(participant).copied().unwrap_or_default();

        let holder = match requested {
            Prediction::Position(_) => slot
                .iter()
                .find(|(id, held)| *id != participant && **held == requested)
                .map(|(id, _)| id.clone()),
            Prediction::NoPrediction => None,
        };

        let displaced = holder.map(|holder| {
            debug!(
                round,
                %kind,
                writer = %participant,
                displaced = %holder,
                position = u8::from(requested),
                "swapping predicted positions"
            );
            slot.insert(holder.clone(), previous);
            (holder, previous)
        });
        slot.insert(participant.clone(), requested);

        Ok(PredictionChange {
            written: (participant.clone(), requested),
            displaced,
        })
    }

    /// Drop the explicit entry so the defaults apply again.
    pub fn clear_prediction(
        &mut self,
        round: u32,
        kind: EventKind,
        participant: &ParticipantId,
    ) -> Option<Prediction> {
        let rounds = self.entries.kind_mut(kind);
        let slot = rounds.get_mut(&round)?;
        let removed = slot.remove(participant);
        if slot.is_empty() {
            rounds.remove(&round);
        }
        removed
    }

    /// Positions held by participants other than `participant`.
    pub fn disallowed_positions(
        &self,
        round: u32,
        kind: EventKind,
        participant: &ParticipantId,
    ) -> BTreeSet<u8> {
        self.entries
            .get(round, kind)
            .into_iter()
            .flatten()
            .filter(|(id, _)| *id != participant)
            .filter_map(|(_, prediction)| prediction.position())
            .collect()
    }

    pub fn reset_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        EventKind::iter().all(|kind| self.entries.kind(kind).values().all(BTreeMap::is_empty))
    }

    pub fn export_state(&self) -> PredictionState {
        self.entries.clone()
    }

    /// Replace everything with `state`. Nothing is validated.
    pub fn import_state(&mut self, state: PredictionState) {
        self.entries = state;
    }

    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string(&self.entries).map_err(ForecastError::StateFormat)
    }

    /// Replace everything with the decoded state. Malformed input leaves the store untouched.
    pub fn import_json(&mut self, json: &str) -> Result<()> {
        let state = serde_json::from_str(json).map_err(ForecastError::StateFormat)?;
        self.import_state(state);
        Ok(())
    }
}
