//! Walk result types.
//!
//! Generators return these plain data carriers; nothing here is consumed
//! back by the generators themselves. The presentation layer and the
//! [`metrics`](crate::metrics) extractors read them as-is.

use veer_core::{GridPoint, TriPoint};
use veer_lattice::TriDirection;

/// Why a generation loop stopped.
///
/// Dead-ending and stalling are normal, inspectable outcomes carried
/// alongside the partial path rather than raised as errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// All requested steps were taken.
    Completed,
    /// No legal move existed at `step`; the shorter path is a valid result.
    DeadEnd {
        /// Zero-based index of the step that could not be taken.
        step: u32,
    },
    /// The balanced generator exhausted its consecutive-retry budget with
    /// every eligible class blocked.
    Stalled {
        /// Zero-based index of the step that could not be taken.
        step: u32,
        /// Consecutive failed class draws before giving up.
        retries: u32,
    },
}

impl Termination {
    /// True iff the walk took every requested step.
    pub fn is_complete(self) -> bool {
        matches!(self, Termination::Completed)
    }
}

/// A finished walk on the cubic lattice.
///
/// `points` always starts at the origin, is strictly self-avoiding, and
/// lies entirely within the generator's lattice bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridWalk {
    /// The ordered path, origin first.
    pub points: Vec<GridPoint>,
    /// Why generation stopped.
    pub termination: Termination,
}

impl GridWalk {
    /// Number of steps actually taken (`points.len() - 1`).
    pub fn steps_taken(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// A finished walk on the triangular half-plane lattice.
///
/// Unlike the cubic walks, the triangular walk records exactly one path
/// entry and one direction-log entry per requested step: a rejected
/// SouthWest move appends a duplicate consecutive point and logs `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct TriPath {
    /// The ordered path, origin first; `len() == steps + 1`.
    pub points: Vec<TriPoint>,
    /// Per-step direction labels; `None` marks a rejected SouthWest.
    pub directions: Vec<Option<TriDirection>>,
}

impl TriPath {
    /// Number of requested steps (`directions.len()`).
    pub fn steps(&self) -> usize {
        self.directions.len()
    }

    /// The accepted direction labels in order, skipping failed moves.
    pub fn accepted(&self) -> impl Iterator<Item = TriDirection> + '_ {
        self.directions.iter().copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn termination_is_complete() {
        assert!(Termination::Completed.is_complete());
        assert!(!Termination::DeadEnd { step: 0 }.is_complete());
        assert!(!Termination::Stalled { step: 3, retries: 64 }.is_complete());
    }

    #[test]
    fn steps_taken_counts_edges_not_points() {
        let walk = GridWalk {
            points: vec![GridPoint::ORIGIN, GridPoint::new(1, 0, 0)],
            termination: Termination::Completed,
        };
        assert_eq!(walk.steps_taken(), 1);
    }

    #[test]
    fn accepted_skips_failed_moves() {
        let path = TriPath {
            points: vec![TriPoint::ORIGIN; 4],
            directions: vec![
                Some(TriDirection::East),
                None,
                Some(TriDirection::NorthEast),
            ],
        };
        let accepted: Vec<_> = path.accepted().collect();
        assert_eq!(accepted, [TriDirection::East, TriDirection::NorthEast]);
        assert_eq!(path.steps(), 3);
    }
}
