//! Backtrack-avoiding walk on the triangular half-plane lattice.
//!
//! Direction availability is constrained by the previous accepted move
//! (the NorthEast/SouthWest reversal pair), while SouthWest is further
//! legalized at the moment it is applied: it may not drop below the
//! lower boundary and may not land on the point visited two entries
//! back. A rejected SouthWest is a no-op: the position is re-appended
//! and the direction history is cleared, not recorded as SouthWest.

use crate::path::TriPath;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use veer_core::TriPoint;
use veer_lattice::{TriDirection, TriLattice};

/// Triangular-lattice walk generator.
///
/// Constructed via [`TriWalk::builder`]. Unlike the cubic generators the
/// triangular walk never terminates early: every step appends exactly
/// one path entry (possibly a duplicate) and one direction-log entry.
#[derive(Debug, Clone)]
pub struct TriWalk {
    lattice: TriLattice,
    steps: u32,
    seed: u64,
}

/// Builder for [`TriWalk`].
///
/// Defaults: `steps` 15, `seed` 0.
#[derive(Debug, Clone)]
pub struct TriWalkBuilder {
    steps: u32,
    seed: u64,
}

impl TriWalk {
    /// Create a new builder for configuring a `TriWalk`.
    pub fn builder() -> TriWalkBuilder {
        TriWalkBuilder { steps: 15, seed: 0 }
    }

    /// Requested step count.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Generate one walk.
    ///
    /// The result always satisfies `points.len() == steps + 1` and
    /// `directions.len() == steps`; `directions[i]` is `None` where step
    /// `i` was a rejected SouthWest.
    pub fn generate(&self) -> TriPath {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut points = vec![TriPoint::ORIGIN];
        let mut directions: Vec<Option<TriDirection>> = Vec::with_capacity(self.steps as usize);
        let mut last: Option<TriDirection> = None;
        let mut current = TriPoint::ORIGIN;

        for _ in 0..self.steps {
            // East is always a candidate, so the set is never empty.
            let blocked = last.and_then(TriDirection::blocks);
            let candidates: SmallVec<[TriDirection; 3]> = TriDirection::ALL
                .into_iter()
                .filter(|&d| Some(d) != blocked)
                .collect();
            let direction = candidates[rng.random_range(0..candidates.len())];

            match direction {
                TriDirection::East | TriDirection::NorthEast => {
                    current = direction.apply(current);
                    last = Some(direction);
                    directions.push(Some(direction));
                }
                TriDirection::SouthWest => {
                    let next = direction.apply(current);
                    if self.accepts_south_west(&points, next) {
                        current = next;
                        last = Some(direction);
                        directions.push(Some(direction));
                    } else {
                        // No-op: position unchanged, history cleared.
                        last = None;
                        directions.push(None);
                    }
                }
            }
            points.push(current);
        }

        TriPath { points, directions }
    }

    /// SouthWest legality at application time: stay on the half-plane
    /// and do not land on the point visited two entries back.
    fn accepts_south_west(&self, points: &[TriPoint], next: TriPoint) -> bool {
        if !self.lattice.contains(&next) {
            return false;
        }
        match points.len().checked_sub(2) {
            Some(i) => points[i] != next,
            None => true,
        }
    }
}

impl TriWalkBuilder {
    /// Set the requested step count (default: 15).
    pub fn steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Set the RNG seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the generator. There is nothing to validate: every `u32`
    /// step count and seed is admissible.
    pub fn build(self) -> TriWalk {
        TriWalk {
            lattice: TriLattice::new(),
            steps: self.steps,
            seed: self.seed,
        }
    }
}
