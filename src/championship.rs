use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::columns::ColumnVisibility;
use crate::error::Result;
use crate::model::{
    ColumnKey, EventKind, Finish, ParticipantId, Prediction, PredictionChange, PredictionSource,
    SeasonSnapshot,
};
use crate::predictions::PredictionStore;
use crate::resolver::{resolve, Outcome};
use crate::totals::{self, Standing};

/// What the presentation layer shows in one round cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CellState {
    Actual {
        finish: Finish,
        points: u32,
    },
    /// The event was run without this participant, or is not held at this round.
    NotParticipated,
    /// An editable projection. `disallowed` lists positions other
    /// participants already hold for this event.
    Prediction {
        prediction: Prediction,
        source: PredictionSource,
        points: u32,
        disallowed: BTreeSet<u8>,
    },
}

/// A loaded season together with the user's predictions and column state.
///
/// Refreshing swaps the snapshot only; predictions and collapsed columns survive.
///
/// # Examples
///
/// ```
/// use standings_forecast::{Championship, EventKind, ParticipantId, SeasonSnapshot};
///
/// let mut championship = Championship::new(SeasonSnapshot::default());
/// let change = championship
///     .set_prediction(1, EventKind::Race, &ParticipantId::from("albon"), Some(1))
///     .unwrap();
/// assert!(change.displaced.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Championship {
    snapshot: SeasonSnapshot,
    predictions: PredictionStore,
    columns: ColumnVisibility,
}

impl Championship {
    pub fn new(snapshot: SeasonSnapshot) -> Self {
        Self {
            snapshot,
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> &SeasonSnapshot {
        &self.snapshot
    }

    pub fn predictions(&self) -> &PredictionStore {
        &self.predictions
    }

    pub fn columns(&self) -> &ColumnVisibility {
        &self.columns
    }

    /// Replace the season data wholesale.
    pub fn refresh(&mut self, snapshot: SeasonSnapshot) {
        debug!(
            season = snapshot.season,
            rounds = snapshot.rounds.len(),
            participants = snapshot.participants.len(),
            "refreshing season snapshot"
        );
        self.snapshot = snapshot;
    }

    /// Apply the outcome of a fetch. On error the previous snapshot stays
    /// in place and the error is handed back.
    pub fn apply_refresh(&mut self, fetched: Result<SeasonSnapshot>) -> Result<()> {
        match fetched {
            Ok(snapshot) => {
                self.refresh(snapshot);
                Ok(())
            }
            Err(err) => {
                warn!(
                    error = %err,
                    season = self.snapshot.season,
                    "refresh failed, keeping previous snapshot"
                );
                Err(err)
            }
        }
    }

    pub fn compute_standings(&self) -> Vec<Standing<'_>> {
        totals::standings(&self.snapshot, &self.predictions, &self.columns)
    }

    pub fn cell_state(
        &self,
        participant: &ParticipantId,
        round: u32,
        kind: EventKind,
    ) -> CellState {
        let Some(round) = self.snapshot.round(round) else {
            return CellState::NotParticipated;
        };
        match resolve(&self.snapshot, &self.predictions, participant, round, kind) {
            Outcome::Actual { finish, points } => CellState::Actual { finish, points },
            Outcome::NoEntry => CellState::NotParticipated,
            Outcome::Projected {
                prediction,
                source,
                points,
            } => CellState::Prediction {
                prediction,
                source,
                points,
                disallowed: self
                    .predictions
                    .disallowed_positions(round.number, kind, participant),
            },
        }
    }

    /// Round columns in render order.
    pub fn ordered_columns(&self) -> Vec<ColumnKey> {
        self.columns.ordered_columns(&self.snapshot.rounds)
    }

    #[instrument(skip(self), fields(participant = %participant))]
    pub fn set_prediction(
        &mut self,
        round: u32,
        kind: EventKind,
        participant: &ParticipantId,
        position: Option<u8>,
    ) -> Result<PredictionChange> {
        self.predictions
            .set_prediction(round, kind, participant, position)
    }

    #[instrument(skip(self), fields(participant = %participant))]
    pub fn clear_prediction(
        &mut self,
        round: u32,
        kind: EventKind,
        participant: &ParticipantId,
    ) -> Option<Prediction> {
        self.predictions.clear_prediction(round, kind, participant)
    }

    #[instrument(skip(self))]
    pub fn reset_predictions(&mut self) {
        self.predictions.reset_all();
    }

    #[instrument(skip(self))]
    pub fn toggle_column(&mut self, key: ColumnKey) -> bool {
        self.columns.toggle(key)
    }

    #[instrument(skip(self))]
    pub fn collapse_all_past(&mut self) -> bool {
        self.columns
            .collapse_all_past(&self.snapshot.rounds, &self.snapshot.results)
    }

    #[instrument(skip(self))]
    pub fn collapse_all_future(&mut self) -> bool {
        self.columns
            .collapse_all_future(&self.snapshot.rounds, &self.snapshot.results)
    }

    #[instrument(skip(self))]
    pub fn expand_all(&mut self) {
        self.columns.expand_all();
    }

    pub fn export_predictions(&self) -> Result<String> {
        self.predictions.export_json()
    }

    #[instrument(skip_all)]
    pub fn import_predictions(&mut self, json: &str) -> Result<()> {
        self.predictions.import_json(json)
    }
}
