//! Lattice backends and move catalogs for Veer walks.
//!
//! A lattice defines the admissible region a walk may occupy and the unit
//! moves available from any point. Two backends are provided:
//!
//! - [`CubicLattice`]: bounded 3D integer grid `[0, size]³` with the three
//!   positive axis-aligned unit moves ([`AxisMove`]), grouped into
//!   coordinate-plane classes ([`PlaneClass`]) for the balanced generator.
//! - [`TriLattice`]: triangular grid on the upper half-plane `y >= 0` with
//!   the three directions East, NorthEast, SouthWest ([`TriDirection`]).
//!
//! The [`geometry`] module holds a standalone 2D segment-intersection
//! primitive for path self-intersection analysis.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cubic;
pub mod error;
pub mod geometry;
pub mod tri;

pub use cubic::{AxisMove, CubicLattice, PlaneClass};
pub use error::LatticeError;
pub use geometry::segments_intersect;
pub use tri::{TriDirection, TriLattice, SQRT3_HALF};
