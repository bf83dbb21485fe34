use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::participant::ParticipantId;

/// Where a participant finished in an event that has been run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Finish {
    Classified(u32),
    /// Retired, disqualified, excluded, withdrawn, failed to qualify or not classified.
    DidNotFinish,
}

impl Finish {
    /// Interpret a provider `positionText` value. Anything that is not a
    /// positive integer (`R`, `D`, `E`, `W`, `F`, `N`, ...) is a non-finish.
    pub fn from_position_text(text: &str) -> Self {
        match text.trim().parse::<u32>() {
            Ok(position) if position > 0 => Finish::Classified(position),
            _ => Finish::DidNotFinish,
        }
    }

    /// Numeric position, with 0 standing for a non-finish.
    pub fn position(self) -> u32 {
        match self {
            Finish::Classified(position) => position,
            Finish::DidNotFinish => 0,
        }
    }
}

/// One participant's line in an actual result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub finish: Finish,
    /// Points as awarded by the provider, bonuses included.
    pub points: u32,
}

/// The classification of one event. Participants missing from the map did not take part.
pub type EventResults = BTreeMap<ParticipantId, ResultEntry>;
