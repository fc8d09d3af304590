//! Veer: self-avoiding, boundary-constrained random walks on discrete
//! lattices.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Veer sub-crates. For most users, adding `veer` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use veer::prelude::*;
//!
//! // A 20-step self-avoiding walk on the [0, 10]³ lattice.
//! let walk = UniformWalk::builder().size(10).steps(20).seed(42).build().unwrap();
//! let out = walk.generate();
//! assert_eq!(out.points[0], GridPoint::ORIGIN);
//!
//! // Per-plane displacement totals for the finished path.
//! let areas = PlaneAreas::of(&out.points);
//! assert_eq!(areas.total() as usize, 2 * out.steps_taken());
//!
//! // The plane-balanced variant also reports its class counters.
//! let balanced = BalancedWalk::builder().size(30).steps(30).seed(42).build().unwrap();
//! let out = balanced.generate();
//! assert!(out.termination.is_complete());
//! assert_eq!(out.class_counts.total(), 30);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `veer-core` | `GridPoint`, `TriPoint` value types |
//! | [`lattice`] | `veer-lattice` | Lattice backends, move catalogs, segment intersection |
//! | [`walk`] | `veer-walk` | Walk generators, result types, metrics extractors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`veer-core`).
pub use veer_core as types;

/// Lattice backends and move catalogs (`veer-lattice`).
///
/// Provides [`lattice::CubicLattice`] and [`lattice::TriLattice`], the
/// per-lattice move catalogs, and the standalone
/// [`lattice::segments_intersect`] geometry primitive.
pub use veer_lattice as lattice;

/// Walk generators and metrics (`veer-walk`).
///
/// The three generators ([`walk::UniformWalk`], [`walk::BalancedWalk`],
/// [`walk::TriWalk`]) and the [`walk::PlaneAreas`] / [`walk::TriMetrics`]
/// extractors.
pub use veer_walk as walk;

/// Common imports for typical Veer usage.
///
/// ```rust
/// use veer::prelude::*;
/// ```
pub mod prelude {
    // Value types
    pub use veer_core::{GridPoint, TriPoint};

    // Lattices and move catalogs
    pub use veer_lattice::{
        AxisMove, CubicLattice, LatticeError, PlaneClass, TriDirection, TriLattice,
    };

    // Generators, results, and metrics
    pub use veer_walk::{
        BalancedGridWalk, BalancedWalk, GridWalk, PlaneAreas, PlaneCounts, Termination,
        TriMetrics, TriPath, TriWalk, UniformWalk, WalkError,
    };
}
