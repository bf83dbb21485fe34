//! Points awarded per finishing position, used only for projections.
//!
//! Actual results carry their own points from the provider (fastest lap and
//! other bonuses included), so nothing here is applied to a resolved event.

use crate::model::EventKind;

const RACE_POINTS: [u32; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];
const SPRINT_POINTS: [u32; 8] = [8, 7, 6, 5, 4, 3, 2, 1];

/// Points for finishing `position` in an event of `kind`. Position 0
/// and anything outside the scoring places yield 0.
pub fn points_for_position(kind: EventKind, position: u32) -> u32 {
    let table: &[u32] = match kind {
        EventKind::Race => &RACE_POINTS,
        EventKind::Sprint => &SPRINT_POINTS,
    };
    position
        .checked_sub(1)
        .and_then(|index| table.get(index as usize))
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_points_table() {
        let expected = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];
        for (index, points) in expected.into_iter().enumerate() {
            assert_eq!(points_for_position(EventKind::Race, index as u32 + 1), points);
        }
    }

    #[test]
    fn test_sprint_points_table() {
        let expected = [8, 7, 6, 5, 4, 3, 2, 1];
        for (index, points) in expected.into_iter().enumerate() {
            assert_eq!(
                points_for_position(EventKind::Sprint, index as u32 + 1),
                points
            );
        }
    }

    #[test]
    fn test_non_scoring_positions() {
        assert_eq!(points_for_position(EventKind::Race, 0), 0);
        assert_eq!(points_for_position(EventKind::Race, 11), 0);
        assert_eq!(points_for_position(EventKind::Race, 20), 0);
        assert_eq!(points_for_position(EventKind::Sprint, 0), 0);
        assert_eq!(points_for_position(EventKind::Sprint, 9), 0);
        assert_eq!(points_for_position(EventKind::Sprint, u32::MAX), 0);
    }
}
