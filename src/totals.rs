use std::cmp::Reverse;

use itertools::Itertools;
use serde::Serialize;

use crate::columns::ColumnVisibility;
use crate::model::{ColumnKey, Participant, ParticipantId, SeasonSnapshot};
use crate::predictions::PredictionStore;
use crate::resolver::{resolve, Outcome};

/// Points split by whether the event has been run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub actual: u32,
    pub projected: u32,
}

impl PointsBreakdown {
    pub fn total(&self) -> u32 {
        self.actual + self.projected
    }
}

/// One row of the projected standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing<'a> {
    pub participant: &'a Participant,
    pub points: PointsBreakdown,
    /// 1-based projected position.
    pub position: u32,
    /// Places gained (positive) or lost against the current championship
    /// position. `None` for a participant without one.
    pub position_change: Option<i64>,
    pub gap_to_leader: u32,
    /// Gap to the row directly ahead, 0 for the leader.
    pub gap_to_next: u32,
}

/// Sum a participant's points over every round column that is not collapsed.
pub fn points_breakdown(
    snapshot: &SeasonSnapshot,
    predictions: &PredictionStore,
    excluded: &ColumnVisibility,
    participant: &ParticipantId,
) -> PointsBreakdown {
    snapshot
        .rounds
        .iter()
        .flat_map(|round| round.event_kinds().map(move |kind| (round, kind)))
        .filter(|(round, kind)| !excluded.is_collapsed(&ColumnKey::event(round.number, *kind)))
        .fold(PointsBreakdown::default(), |mut sum, (round, kind)| {
            match resolve(snapshot, predictions, participant, round, kind) {
                Outcome::Actual { points, .. } => sum.actual += points,
                Outcome::Projected { points, .. } => sum.projected += points,
                Outcome::NoEntry => {}
            }
            sum
        })
}

pub fn total_points(
    snapshot: &SeasonSnapshot,
    predictions: &PredictionStore,
    excluded: &ColumnVisibility,
    participant: &ParticipantId,
) -> u32 {
    points_breakdown(snapshot, predictions, excluded, participant).total()
}

/// Every participant ranked by descending projected total. Equal totals
/// keep snapshot order, i.e. the current championship order.
pub fn standings<'a>(
    snapshot: &'a SeasonSnapshot,
    predictions: &PredictionStore,
    excluded: &ColumnVisibility,
) -> Vec<Standing<'a>> {
    let ranked = snapshot
        .participants
        .iter()
        .map(|participant| {
            let points = points_breakdown(snapshot, predictions, excluded, &participant.id);
            (participant, points)
        })
        .sorted_by_key(|(_, points)| Reverse(points.total()))
        .collect_vec();

    let leader = ranked.first().map_or(0, |(_, points)| points.total());
    let mut ahead = leader;
    ranked
        .into_iter()
        .enumerate()
        .map(|(index, (participant, points))| {
            let position = index as u32 + 1;
            let total = points.total();
            let standing = Standing {
                participant,
                points,
                position,
                position_change: participant
                    .position
                    .map(|current| i64::from(current) - i64::from(position)),
                gap_to_leader: leader - total,
                gap_to_next: ahead - total,
            };
            ahead = total;
            standing
        })
        .collect()
}
