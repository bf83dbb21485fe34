use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::round::EventKind;

/// Per-round values for both event kinds, keyed by round number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByEvent<T> {
    pub race: BTreeMap<u32, T>,
    pub sprint: BTreeMap<u32, T>,
}

impl<T> ByEvent<T> {
    pub fn new() -> Self {
        Self {
            race: BTreeMap::new(),
            sprint: BTreeMap::new(),
        }
    }

    /// All rounds recorded for one event kind.
    pub fn kind(&self, kind: EventKind) -> &BTreeMap<u32, T> {
        match kind {
            EventKind::Race => &self.race,
            EventKind::Sprint => &self.sprint,
        }
    }

    pub fn kind_mut(&mut self, kind: EventKind) -> &mut BTreeMap<u32, T> {
        match kind {
            EventKind::Race => &mut self.race,
            EventKind::Sprint => &mut self.sprint,
        }
    }

    pub fn get(&self, round: u32, kind: EventKind) -> Option<&T> {
        self.kind(kind).get(&round)
    }

    pub fn get_mut(&mut self, round: u32, kind: EventKind) -> Option<&mut T> {
        self.kind_mut(kind).get_mut(&round)
    }

    pub fn insert(&mut self, round: u32, kind: EventKind, value: T) -> Option<T> {
        self.kind_mut(kind).insert(round, value)
    }

    pub fn contains(&self, round: u32, kind: EventKind) -> bool {
        self.kind(kind).contains_key(&round)
    }

    pub fn clear(&mut self) {
        self.race.clear();
        self.sprint.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.race.is_empty() && self.sprint.is_empty()
    }
}

impl<T> Default for ByEvent<T> {
    fn default() -> Self {
        Self::new()
    }
}
