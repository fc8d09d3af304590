//! Unconstrained-direction self-avoiding walk on the cubic lattice.

use crate::error::WalkError;
use crate::path::{GridWalk, Termination};
use indexmap::IndexSet;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use veer_core::GridPoint;
use veer_lattice::CubicLattice;

/// Self-avoiding walk generator with uniform move choice.
///
/// Each step enumerates the three positive axis moves, filters to those
/// producing an in-bounds, unvisited point, and picks uniformly among the
/// survivors. An empty candidate set dead-ends the walk, a normal
/// terminal condition rather than an error.
///
/// Constructed via [`UniformWalk::builder`]. The RNG is seeded from the
/// configured seed on every [`generate`](UniformWalk::generate) call, so
/// identical configurations produce identical paths.
#[derive(Debug, Clone)]
pub struct UniformWalk {
    lattice: CubicLattice,
    steps: u32,
    seed: u64,
}

/// Builder for [`UniformWalk`].
///
/// Defaults: `size` 10, `steps` 20, `seed` 0.
#[derive(Debug, Clone)]
pub struct UniformWalkBuilder {
    size: u32,
    steps: u32,
    seed: u64,
}

impl UniformWalk {
    /// Create a new builder for configuring a `UniformWalk`.
    pub fn builder() -> UniformWalkBuilder {
        UniformWalkBuilder {
            size: 10,
            steps: 20,
            seed: 0,
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

    /// Generate one walk.
    ///
    /// Returns a strictly self-avoiding, in-bounds path of between 1 and
    /// `steps + 1` points, starting at the origin.
    pub fn generate(&self) -> GridWalk {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut points = vec![GridPoint::ORIGIN];
        let mut visited: IndexSet<GridPoint> = IndexSet::new();
        visited.insert(GridPoint::ORIGIN);
        let mut current = GridPoint::ORIGIN;

        for step in 0..self.steps {
            let candidates: SmallVec<[GridPoint; 3]> = self
                .lattice
                .neighbours(&current)
                .into_iter()
                .filter(|p| !visited.contains(p))
                .collect();

            let Some(&next) = candidates.choose(&mut rng) else {
                return GridWalk {
                    points,
                    termination: Termination::DeadEnd { step },
                };
            };

            points.push(next);
            visited.insert(next);
            current = next;
        }

        GridWalk {
            points,
            termination: Termination::Completed,
        }
    }
}

impl UniformWalkBuilder {
    /// Set the lattice extent (default: 10). Admissible coordinates span
    /// `[0, size]`; 0 describes a single-point lattice.
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the requested step count (default: 20). The walk may dead-end
    /// short of it.
    pub fn steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Set the RNG seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the generator, validating the lattice extent.
    pub fn build(self) -> Result<UniformWalk, WalkError> {
        let lattice = CubicLattice::new(self.size)?;
        Ok(UniformWalk {
            lattice,
            steps: self.steps,
            seed: self.seed,
        })
    }
}
