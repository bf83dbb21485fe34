use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// The two scored sessions of a round weekend.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// The main event.
    Race,
    /// The short-form event, only held on some rounds.
    Sprint,
}

/// A scheduled round of the season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based, chronological.
    pub number: u32,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub has_sprint: bool,
}

impl Round {
    pub fn has_event(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Race => true,
            EventKind::Sprint => self.has_sprint,
        }
    }

    /// Event kinds held at this round, in running order (sprint first).
    pub fn event_kinds(&self) -> impl Iterator<Item = EventKind> {
        let sprint = self.has_sprint.then_some(EventKind::Sprint);
        sprint.into_iter().chain(std::iter::once(EventKind::Race))
    }
}
