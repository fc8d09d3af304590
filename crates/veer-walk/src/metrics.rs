//! Metrics extracted from finished paths.
//!
//! Extractors consume a path exactly once and return plain counter
//! structs; they never fail. A path of length 1 (only the origin) yields
//! all-zero metrics.

use crate::path::TriPath;
use veer_core::GridPoint;
use veer_lattice::TriDirection;

/// Per-plane total displacement of a cubic path.
///
/// For each coordinate pair the sum of `|Δ|` of both coordinates across
/// consecutive path points. With unit axis moves, each step contributes
/// exactly 1 to the two classes its axis belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaneAreas {
    /// Summed |Δx| + |Δy|.
    pub xy: u32,
    /// Summed |Δy| + |Δz|.
    pub yz: u32,
    /// Summed |Δx| + |Δz|.
    pub xz: u32,
}

impl PlaneAreas {
    /// Compute the per-plane displacement totals of a path.
    pub fn of(points: &[GridPoint]) -> PlaneAreas {
        let mut areas = PlaneAreas::default();
        for w in points.windows(2) {
            let dx = (w[1].x - w[0].x).unsigned_abs();
            let dy = (w[1].y - w[0].y).unsigned_abs();
            let dz = (w[1].z - w[0].z).unsigned_abs();
            areas.xy += dx + dy;
            areas.yz += dy + dz;
            areas.xz += dx + dz;
        }
        areas
    }

    /// Sum of the three plane totals, the denominator when reporting
    /// per-plane shares.
    pub fn total(self) -> u32 {
        self.xy + self.yz + self.xz
    }
}

/// Move-distribution summary of a triangular path.
///
/// Failed (no-op) moves are excluded everywhere: they count toward
/// neither distance total, and a direction change is only registered
/// between two consecutive *accepted* moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriMetrics {
    /// Accepted East moves.
    pub horizontal: u32,
    /// Accepted NorthEast or SouthWest moves.
    pub diagonal: u32,
    /// Label changes between consecutive accepted moves.
    pub direction_changes: u32,
}

impl TriMetrics {
    /// Compute the move-distribution summary of a triangular path.
    pub fn of(path: &TriPath) -> TriMetrics {
        let mut metrics = TriMetrics::default();
        let mut previous: Option<TriDirection> = None;

        for direction in path.accepted() {
            match direction {
                TriDirection::East => metrics.horizontal += 1,
                TriDirection::NorthEast | TriDirection::SouthWest => metrics.diagonal += 1,
            }
            if let Some(prev) = previous {
                if prev != direction {
                    metrics.direction_changes += 1;
                }
            }
            previous = Some(direction);
        }

        metrics
    }

    /// Total accepted moves (`horizontal + diagonal`).
    pub fn total_distance(self) -> u32 {
        self.horizontal + self.diagonal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veer_core::TriPoint;

    fn p(x: i32, y: i32, z: i32) -> GridPoint {
        GridPoint::new(x, y, z)
    }

    fn tri_path(directions: Vec<Option<TriDirection>>) -> TriPath {
        // Metrics only read the direction log; the points are filler.
        let points = vec![TriPoint::ORIGIN; directions.len() + 1];
        TriPath { points, directions }
    }

    // ── PlaneAreas ──────────────────────────────────────────────

    #[test]
    fn origin_only_path_is_all_zero() {
        assert_eq!(PlaneAreas::of(&[GridPoint::ORIGIN]), PlaneAreas::default());
        assert_eq!(PlaneAreas::of(&[]), PlaneAreas::default());
    }

    #[test]
    fn single_axis_step_feeds_two_planes() {
        let areas = PlaneAreas::of(&[p(0, 0, 0), p(1, 0, 0)]);
        assert_eq!(areas, PlaneAreas { xy: 1, yz: 0, xz: 1 });
    }

    #[test]
    fn mixed_path_accumulates_per_plane() {
        // x, y, z: one unit step each.
        let points = [p(0, 0, 0), p(1, 0, 0), p(1, 1, 0), p(1, 1, 1)];
        let areas = PlaneAreas::of(&points);
        assert_eq!(areas, PlaneAreas { xy: 2, yz: 2, xz: 2 });
        assert_eq!(areas.total(), 6);
    }

    // ── TriMetrics ──────────────────────────────────────────────

    #[test]
    fn empty_log_is_all_zero() {
        let metrics = TriMetrics::of(&tri_path(vec![]));
        assert_eq!(metrics, TriMetrics::default());
        assert_eq!(metrics.total_distance(), 0);
    }

    #[test]
    fn totals_count_only_accepted_moves() {
        let metrics = TriMetrics::of(&tri_path(vec![
            Some(TriDirection::East),
            None,
            Some(TriDirection::NorthEast),
            Some(TriDirection::East),
            None,
        ]));
        assert_eq!(metrics.horizontal, 2);
        assert_eq!(metrics.diagonal, 1);
        assert_eq!(metrics.total_distance(), 3);
    }

    #[test]
    fn no_changes_when_all_accepted_moves_share_a_label() {
        let metrics = TriMetrics::of(&tri_path(vec![
            Some(TriDirection::East),
            None,
            Some(TriDirection::East),
            Some(TriDirection::East),
        ]));
        assert_eq!(metrics.direction_changes, 0);
    }

    #[test]
    fn failed_moves_do_not_bridge_direction_changes() {
        // E, fail, NE, fail, NE: one change (E -> NE); the failures are
        // invisible to the previous-direction state.
        let metrics = TriMetrics::of(&tri_path(vec![
            Some(TriDirection::East),
            None,
            Some(TriDirection::NorthEast),
            None,
            Some(TriDirection::NorthEast),
        ]));
        assert_eq!(metrics.direction_changes, 1);
    }

    #[test]
    fn alternating_labels_count_every_change() {
        let metrics = TriMetrics::of(&tri_path(vec![
            Some(TriDirection::East),
            Some(TriDirection::NorthEast),
            Some(TriDirection::East),
            Some(TriDirection::NorthEast),
        ]));
        assert_eq!(metrics.direction_changes, 3);
    }
}
