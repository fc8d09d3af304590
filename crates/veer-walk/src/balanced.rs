//! Plane-balanced self-avoiding walk on the cubic lattice.
//!
//! Move selection is two-phase: first a coordinate-plane class is drawn
//! uniformly from the classes currently tied for the minimum usage count,
//! then a legal move is drawn from that class. A class whose two moves
//! are both illegal costs a retry and sends selection back to phase one;
//! the consecutive-retry budget turns the "every class blocked" case into
//! an explicit [`Termination::Stalled`] instead of an unbounded loop.

use crate::error::WalkError;
use crate::path::Termination;
use indexmap::IndexSet;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use veer_core::GridPoint;
use veer_lattice::{CubicLattice, PlaneClass};

/// Per-plane-class accepted-move counters.
///
/// Incremented once per accepted step; drives the next step's
/// minimum-count class selection. Exact final balance is a best-effort
/// property: blocked classes are skipped, not waited for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaneCounts {
    /// Accepted moves along X or Y.
    pub xy: u32,
    /// Accepted moves along Y or Z.
    pub yz: u32,
    /// Accepted moves along X or Z.
    pub xz: u32,
}

impl PlaneCounts {
    /// Count for one class.
    pub fn get(self, class: PlaneClass) -> u32 {
        match class {
            PlaneClass::Xy => self.xy,
            PlaneClass::Yz => self.yz,
            PlaneClass::Xz => self.xz,
        }
    }

    /// The smallest per-class count.
    pub fn min(self) -> u32 {
        self.xy.min(self.yz).min(self.xz)
    }

    /// The largest per-class count.
    pub fn max(self) -> u32 {
        self.xy.max(self.yz).max(self.xz)
    }

    /// Total accepted moves across all classes.
    pub fn total(self) -> u32 {
        self.xy + self.yz + self.xz
    }

    fn bump(&mut self, class: PlaneClass) {
        match class {
            PlaneClass::Xy => self.xy += 1,
            PlaneClass::Yz => self.yz += 1,
            PlaneClass::Xz => self.xz += 1,
        }
    }
}

/// A finished plane-balanced walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalancedGridWalk {
    /// The ordered path, origin first.
    pub points: Vec<GridPoint>,
    /// Final per-class usage counters.
    pub class_counts: PlaneCounts,
    /// Why generation stopped.
    pub termination: Termination,
}

/// Plane-balanced self-avoiding walk generator.
///
/// Same bounds and self-avoidance guarantees as
/// [`UniformWalk`](crate::UniformWalk), plus best-effort equalization of
/// usage across the three plane classes.
///
/// Constructed via [`BalancedWalk::builder`].
#[derive(Debug, Clone)]
pub struct BalancedWalk {
    lattice: CubicLattice,
    steps: u32,
    seed: u64,
    max_retries: u32,
}

/// Builder for [`BalancedWalk`].
///
/// Defaults: `size` 10, `steps` 30, `seed` 0, `max_retries` 64.
#[derive(Debug, Clone)]
pub struct BalancedWalkBuilder {
    size: u32,
    steps: u32,
    seed: u64,
    max_retries: u32,
}

impl BalancedWalk {
    /// Default consecutive-retry budget.
    pub const DEFAULT_MAX_RETRIES: u32 = 64;

    /// Create a new builder for configuring a `BalancedWalk`.
    pub fn builder() -> BalancedWalkBuilder {
        BalancedWalkBuilder {
            size: 10,
            steps: 30,
            seed: 0,
            max_retries: Self::DEFAULT_MAX_RETRIES,
        }
    }

    /// The lattice this generator walks on.
    pub fn lattice(&self) -> &CubicLattice {
        &self.lattice
    }

    /// Requested step count.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Consecutive-retry budget per step.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Generate one walk.
    ///
    /// The requested step count is a target: the walk stops early with
    /// [`Termination::Stalled`] when `max_retries` consecutive class
    /// draws fail to produce a legal move. The partial path and counters
    /// are returned either way.
    pub fn generate(&self) -> BalancedGridWalk {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut points = vec![GridPoint::ORIGIN];
        let mut visited: IndexSet<GridPoint> = IndexSet::new();
        visited.insert(GridPoint::ORIGIN);
        let mut current = GridPoint::ORIGIN;
        let mut counts = PlaneCounts::default();

        let mut step = 0u32;
        let mut retries = 0u32;
        while step < self.steps {
            // Phase 1: uniform draw among the classes tied for the
            // minimum count. The tied set is never empty.
            let min = counts.min();
            let tied: SmallVec<[PlaneClass; 3]> = PlaneClass::ALL
                .into_iter()
                .filter(|&c| counts.get(c) == min)
                .collect();
            let class = tied[rng.random_range(0..tied.len())];

            // Phase 2: legal moves within the chosen class.
            let candidates: SmallVec<[GridPoint; 2]> = class
                .moves()
                .into_iter()
                .map(|m| m.apply(current))
                .filter(|p| self.lattice.contains(p) && !visited.contains(p))
                .collect();

            match candidates.choose(&mut rng) {
                Some(&next) => {
                    points.push(next);
                    visited.insert(next);
                    current = next;
                    counts.bump(class);
                    step += 1;
                    retries = 0;
                }
                None => {
                    retries += 1;
                    if retries >= self.max_retries {
                        return BalancedGridWalk {
                            points,
                            class_counts: counts,
                            termination: Termination::Stalled { step, retries },
                        };
                    }
                }
            }
        }

        BalancedGridWalk {
            points,
            class_counts: counts,
            termination: Termination::Completed,
        }
    }
}

impl BalancedWalkBuilder {
    /// Set the lattice extent (default: 10).
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the requested step count (default: 30).
    pub fn steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Set the RNG seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the consecutive-retry budget (default: 64). Must be >= 1.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Build the generator, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `max_retries` is 0 or the lattice extent exceeds
    /// the coordinate space.
    pub fn build(self) -> Result<BalancedWalk, WalkError> {
        if self.max_retries == 0 {
            return Err(WalkError::InvalidConfig {
                reason: "max_retries must be >= 1".into(),
            });
        }
        let lattice = CubicLattice::new(self.size)?;
        Ok(BalancedWalk {
            lattice,
            steps: self.steps,
            seed: self.seed,
            max_retries: self.max_retries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn builder_defaults() {
        let walk = BalancedWalk::builder().build().unwrap();
        assert_eq!(walk.lattice().size(), 10);
        assert_eq!(walk.steps(), 30);
        assert_eq!(walk.max_retries(), BalancedWalk::DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn builder_rejects_zero_retry_budget() {
        let result = BalancedWalk::builder().max_retries(0).build();
        assert!(matches!(result, Err(WalkError::InvalidConfig { .. })));
    }

    #[test]
    fn single_point_lattice_stalls() {
        // Every class is blocked from the start; the retry budget must
        // convert that into an explicit stall, not a hang.
        let out = BalancedWalk::builder()
            .size(0)
            .steps(5)
            .max_retries(8)
            .build()
            .unwrap()
            .generate();
        assert_eq!(out.points, [GridPoint::ORIGIN]);
        assert_eq!(
            out.termination,
            Termination::Stalled { step: 0, retries: 8 }
        );
        assert_eq!(out.class_counts.total(), 0);
    }

    #[test]
    fn unblockable_run_balances_counters_exactly() {
        // With size >= steps no coordinate can reach the boundary and the
        // positive-only moves can never revisit a point, so no class ever
        // blocks and 30 steps split exactly 10/10/10.
        for seed in [0u64, 1, 7, 42, 1234] {
            let out = BalancedWalk::builder()
                .size(30)
                .steps(30)
                .seed(seed)
                .build()
                .unwrap()
                .generate();
            assert_eq!(out.termination, Termination::Completed);
            assert_eq!(out.class_counts, PlaneCounts { xy: 10, yz: 10, xz: 10 });
        }
    }

    #[test]
    fn counters_sum_to_steps_taken() {
        let out = BalancedWalk::builder().seed(3).build().unwrap().generate();
        assert_eq!(
            out.class_counts.total() as usize,
            out.points.len() - 1
        );
    }

    #[test]
    fn same_seed_same_path_and_counters() {
        let walk = BalancedWalk::builder().seed(99).build().unwrap();
        let a = walk.generate();
        let b = walk.generate();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn path_is_self_avoiding_and_in_bounds(
            seed in 0u64..300,
            size in 0u32..12,
            steps in 0u32..40,
        ) {
            let walk = BalancedWalk::builder()
                .size(size)
                .steps(steps)
                .seed(seed)
                .build()
                .unwrap();
            let out = walk.generate();

            let unique: HashSet<_> = out.points.iter().collect();
            prop_assert_eq!(unique.len(), out.points.len(), "path revisited a point");
            for p in &out.points {
                prop_assert!(walk.lattice().contains(p), "{} escaped the lattice", p);
            }
        }

        #[test]
        fn never_blocked_implies_near_balance(
            seed in 0u64..300,
            steps in 0u32..30,
        ) {
            // size >= steps rules out boundary blocking entirely, so the
            // counters can never drift more than one apart.
            let out = BalancedWalk::builder()
                .size(30)
                .steps(steps)
                .seed(seed)
                .build()
                .unwrap()
                .generate();
            prop_assert_eq!(out.termination, Termination::Completed);
            prop_assert!(out.class_counts.max() - out.class_counts.min() <= 1);
        }
    }
}
