use serde::{Deserialize, Serialize};

use super::participant::ParticipantId;

/// Highest position a user can predict, and the cut-off for the
/// championship-position default.
pub const MAX_PREDICTED_POSITION: u8 = 20;

/// A speculative finishing position for an event that has not been run.
///
/// On the wire this is a bare integer where `0` means no prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Prediction {
    Position(u8),
    #[default]
    NoPrediction,
}

impl Prediction {
    pub fn position(self) -> Option<u8> {
        match self {
            Prediction::Position(position) => Some(position),
            Prediction::NoPrediction => None,
        }
    }
}

impl From<u8> for Prediction {
    fn from(position: u8) -> Self {
        match position {
            0 => Prediction::NoPrediction,
            position => Prediction::Position(position),
        }
    }
}

impl From<Option<u8>> for Prediction {
    fn from(position: Option<u8>) -> Self {
        position.map(Prediction::from).unwrap_or_default()
    }
}

impl From<Prediction> for u8 {
    fn from(prediction: Prediction) -> Self {
        prediction.position().unwrap_or(0)
    }
}

/// Which rule produced a projected position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PredictionSource {
    /// Entered by the user.
    User,
    /// Taken from the published qualifying order (or absence from it).
    Qualifying,
    /// Defaulted to the current championship position.
    Championship,
    /// Outside the defaultable range or unknown to the standings.
    Unranked,
}

/// Every participant whose stored prediction changed in one write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionChange {
    pub written: (ParticipantId, Prediction),
    /// The previous holder of the written position, moved to the writer's old slot.
    pub displaced: Option<(ParticipantId, Prediction)>,
}
