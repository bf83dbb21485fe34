use serde::{Deserialize, Serialize};

use super::participant::ParticipantId;

/// Qualifying classification of one event, best first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifyingOrder(pub Vec<ParticipantId>);

impl QualifyingOrder {
    /// 1-based qualifying position, if the participant set a time.
    pub fn position_of(&self, id: &ParticipantId) -> Option<u8> {
        self.0
            .iter()
            .position(|qualified| qualified == id)
            .and_then(|index| u8::try_from(index + 1).ok())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ParticipantId> for QualifyingOrder {
    fn from_iter<I: IntoIterator<Item = ParticipantId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
