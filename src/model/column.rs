use serde::{Deserialize, Serialize};

use super::round::EventKind;

/// Derived standings columns that are not tied to a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AggregateColumn {
    ProjectedPoints,
    ProjectedPosition,
    GapToLeader,
    GapToNext,
}

impl AggregateColumn {
    /// Columns that only carry meaning while future events are shown.
    pub const PROJECTED: [AggregateColumn; 2] = [
        AggregateColumn::ProjectedPoints,
        AggregateColumn::ProjectedPosition,
    ];
}

/// A collapsible unit of the standings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColumnKey {
    Event { round: u32, kind: EventKind },
    Aggregate(AggregateColumn),
}

impl ColumnKey {
    pub fn event(round: u32, kind: EventKind) -> Self {
        ColumnKey::Event { round, kind }
    }
}
