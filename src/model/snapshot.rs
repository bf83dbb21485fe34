use serde::{Deserialize, Serialize};

use super::common::ByEvent;
use super::participant::{Participant, ParticipantId};
use super::qualifying::QualifyingOrder;
use super::result::EventResults;
use super::round::{EventKind, Round};

/// Everything loaded from the provider in one refresh. Replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSnapshot {
    pub season: u16,
    /// Chronological.
    pub rounds: Vec<Round>,
    /// Current championship order.
    pub participants: Vec<Participant>,
    /// A key is present only for events that have been run.
    pub results: ByEvent<EventResults>,
    pub qualifying: ByEvent<QualifyingOrder>,
}

impl SeasonSnapshot {
    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    pub fn round(&self, number: u32) -> Option<&Round> {
        self.rounds.iter().find(|r| r.number == number)
    }

    pub fn is_resolved(&self, round: u32, kind: EventKind) -> bool {
        self.results.contains(round, kind)
    }
}
