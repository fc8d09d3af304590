//! Constrained random-walk generators and path metrics.
//!
//! Three generators solve the same structural problem (sampling a path
//! under local legality rules with rejection) and differ in their move
//! catalog and constraints:
//!
//! - [`UniformWalk`]: self-avoiding walk on the bounded cubic lattice,
//!   uniform choice among legal axis moves.
//! - [`BalancedWalk`]: same legality rules, but move selection is driven
//!   by per-plane-class usage counters with a bounded retry budget.
//! - [`TriWalk`]: triangular half-plane walk where SouthWest moves are
//!   legalized at application time and may no-op.
//!
//! Every generator is configured through a validated builder and draws
//! from a `ChaCha8Rng` seeded per [`generate`](UniformWalk::generate)
//! call, so a given configuration always reproduces the same path.
//!
//! The [`metrics`] module consumes finished paths: [`PlaneAreas`] for the
//! cubic variants, [`TriMetrics`] for the triangular one.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod balanced;
pub mod error;
pub mod metrics;
pub mod path;
pub mod tri;
pub mod uniform;

pub use balanced::{BalancedGridWalk, BalancedWalk, BalancedWalkBuilder, PlaneCounts};
pub use error::WalkError;
pub use metrics::{PlaneAreas, TriMetrics};
pub use path::{GridWalk, Termination, TriPath};
pub use tri::{TriWalk, TriWalkBuilder};
pub use uniform::{UniformWalk, UniformWalkBuilder};
