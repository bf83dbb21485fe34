use std::collections::BTreeSet;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{AggregateColumn, ByEvent, ColumnKey, EventResults, Round};

/// Which standings columns the user has collapsed. Everything is visible by default.
///
/// Collapsed round columns are also left out of the totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnVisibility {
    collapsed: BTreeSet<ColumnKey>,
}

impl ColumnVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collapsed(&self, key: &ColumnKey) -> bool {
        self.collapsed.contains(key)
    }

    pub fn collapsed(&self) -> impl Iterator<Item = &ColumnKey> {
        self.collapsed.iter()
    }

    /// Flip one column. Returns whether it is now collapsed.
    pub fn toggle(&mut self, key: ColumnKey) -> bool {
        if self.collapsed.remove(&key) {
            false
        } else {
            self.collapsed.insert(key);
            true
        }
    }

    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    /// Collapse every unresolved round column and the projected aggregates
    /// if any unresolved column is visible, otherwise expand them all.
    /// Returns `true` when it collapsed.
    pub fn collapse_all_future(
        &mut self,
        rounds: &[Round],
        results: &ByEvent<EventResults>,
    ) -> bool {
        let future = event_columns(rounds)
            .filter(|key| !is_resolved(key, results))
            .collect_vec();
        let collapse = future.iter().any(|key| !self.is_collapsed(key));
        debug!(columns = future.len(), collapse, "toggling future columns");

        let projected = AggregateColumn::PROJECTED.map(ColumnKey::Aggregate);
        self.set_all(future.into_iter().chain(projected), collapse);
        collapse
    }

    /// Collapse every resolved round column if any is visible, otherwise
    /// expand them all. Aggregate columns are left alone.
    pub fn collapse_all_past(&mut self, rounds: &[Round], results: &ByEvent<EventResults>) -> bool {
        let past = event_columns(rounds)
            .filter(|key| is_resolved(key, results))
            .collect_vec();
        let collapse = past.iter().any(|key| !self.is_collapsed(key));
        debug!(columns = past.len(), collapse, "toggling past columns");

        self.set_all(past, collapse);
        collapse
    }

    /// Round columns in render order: visible ones chronologically, then
    /// collapsed ones in their original relative order.
    pub fn ordered_columns(&self, rounds: &[Round]) -> Vec<ColumnKey> {
        event_columns(rounds)
            .sorted_by_key(|key| self.is_collapsed(key))
            .collect()
    }

    fn set_all(&mut self, keys: impl IntoIterator<Item = ColumnKey>, collapsed: bool) {
        for key in keys {
            if collapsed {
                self.collapsed.insert(key);
            } else {
                self.collapsed.remove(&key);
            }
        }
    }
}

/// Every round column in chronological order, sprint before race within a round.
pub fn event_columns(rounds: &[Round]) -> impl Iterator<Item = ColumnKey> + '_ {
    rounds.iter().flat_map(|round| {
        round
            .event_kinds()
            .map(move |kind| ColumnKey::event(round.number, kind))
    })
}

fn is_resolved(key: &ColumnKey, results: &ByEvent<EventResults>) -> bool {
    match key {
        ColumnKey::Event { round, kind } => results.contains(*round, *kind),
        ColumnKey::Aggregate(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventKind;
    use crate::test_fixtures::sample_snapshot;

    fn races(numbers: &[u32]) -> Vec<Round> {
        numbers
            .iter()
            .map(|&number| Round {
                number,
                name: format!("Round {number}"),
                date: None,
                has_sprint: false,
            })
            .collect()
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut columns = ColumnVisibility::new();
        let key = ColumnKey::event(2, EventKind::Race);

        assert!(columns.toggle(key));
        assert!(columns.is_collapsed(&key));
        assert!(!columns.toggle(key));
        assert!(!columns.is_collapsed(&key));
    }

    #[test]
    fn test_collapsed_columns_move_to_end() {
        let rounds = races(&[1, 2, 3]);
        let mut columns = ColumnVisibility::new();
        columns.toggle(ColumnKey::event(2, EventKind::Race));

        let ordered = columns.ordered_columns(&rounds);

        assert_eq!(
            ordered,
            vec![
                ColumnKey::event(1, EventKind::Race),
                ColumnKey::event(3, EventKind::Race),
                ColumnKey::event(2, EventKind::Race),
            ]
        );
    }

    #[test]
    fn test_sprint_precedes_race_and_order_is_stable() {
        let snapshot = sample_snapshot();
        let mut columns = ColumnVisibility::new();
        columns.toggle(ColumnKey::event(4, EventKind::Race));
        columns.toggle(ColumnKey::event(1, EventKind::Race));

        let ordered = columns.ordered_columns(&snapshot.rounds);

        assert_eq!(
            ordered,
            vec![
                ColumnKey::event(2, EventKind::Sprint),
                ColumnKey::event(2, EventKind::Race),
                ColumnKey::event(3, EventKind::Race),
                ColumnKey::event(4, EventKind::Sprint),
                ColumnKey::event(1, EventKind::Race),
                ColumnKey::event(4, EventKind::Race),
            ]
        );
    }

    #[test]
    fn test_collapse_all_future_round_trip() {
        let snapshot = sample_snapshot();
        let mut columns = ColumnVisibility::new();
        let original = columns.clone();

        assert!(columns.collapse_all_future(&snapshot.rounds, &snapshot.results));
        assert!(columns.is_collapsed(&ColumnKey::event(3, EventKind::Race)));
        assert!(columns.is_collapsed(&ColumnKey::event(4, EventKind::Sprint)));
        assert!(columns.is_collapsed(&ColumnKey::Aggregate(AggregateColumn::ProjectedPoints)));
        assert!(columns.is_collapsed(&ColumnKey::Aggregate(AggregateColumn::ProjectedPosition)));
        assert!(!columns.is_collapsed(&ColumnKey::event(1, EventKind::Race)));
        assert!(!columns.is_collapsed(&ColumnKey::Aggregate(AggregateColumn::GapToLeader)));

        assert!(!columns.collapse_all_future(&snapshot.rounds, &snapshot.results));
        assert_eq!(columns, original);
    }

    #[test]
    fn test_collapse_all_future_collapses_when_any_visible() {
        let snapshot = sample_snapshot();
        let mut columns = ColumnVisibility::new();
        columns.toggle(ColumnKey::event(3, EventKind::Race));
        columns.toggle(ColumnKey::event(4, EventKind::Sprint));

        assert!(columns.collapse_all_future(&snapshot.rounds, &snapshot.results));
        assert!(columns.is_collapsed(&ColumnKey::event(4, EventKind::Race)));
        assert!(columns.is_collapsed(&ColumnKey::event(3, EventKind::Race)));
    }

    #[test]
    fn test_collapse_all_past_leaves_aggregates() {
        let snapshot = sample_snapshot();
        let mut columns = ColumnVisibility::new();
        columns.toggle(ColumnKey::Aggregate(AggregateColumn::GapToNext));

        assert!(columns.collapse_all_past(&snapshot.rounds, &snapshot.results));
        assert!(columns.is_collapsed(&ColumnKey::event(1, EventKind::Race)));
        assert!(columns.is_collapsed(&ColumnKey::event(2, EventKind::Sprint)));
        assert!(columns.is_collapsed(&ColumnKey::event(2, EventKind::Race)));
        assert!(!columns.is_collapsed(&ColumnKey::event(3, EventKind::Race)));
        assert!(!columns.is_collapsed(&ColumnKey::Aggregate(AggregateColumn::ProjectedPoints)));

        assert!(!columns.collapse_all_past(&snapshot.rounds, &snapshot.results));
        assert!(!columns.is_collapsed(&ColumnKey::event(1, EventKind::Race)));
        assert!(columns.is_collapsed(&ColumnKey::Aggregate(AggregateColumn::GapToNext)));
    }

    #[test]
    fn test_collapse_all_future_on_finished_season_expands_aggregates() {
        let snapshot = sample_snapshot();
        let rounds = &snapshot.rounds[..2];
        let mut columns = ColumnVisibility::new();
        columns.toggle(ColumnKey::Aggregate(AggregateColumn::ProjectedPoints));
        columns.toggle(ColumnKey::Aggregate(AggregateColumn::ProjectedPosition));

        assert!(!columns.collapse_all_future(rounds, &snapshot.results));
        assert_eq!(columns.collapsed().count(), 0);

        assert!(!columns.collapse_all_future(rounds, &snapshot.results));
        assert_eq!(columns, ColumnVisibility::new());
    }

    #[test]
    fn test_expand_all_clears_everything() {
        let snapshot = sample_snapshot();
        let mut columns = ColumnVisibility::new();
        columns.collapse_all_future(&snapshot.rounds, &snapshot.results);
        columns.toggle(ColumnKey::Aggregate(AggregateColumn::GapToLeader));

        columns.expand_all();

        assert_eq!(columns.collapsed().count(), 0);
    }
}
