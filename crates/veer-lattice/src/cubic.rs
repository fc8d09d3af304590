//! Bounded 3D integer lattice with axis-aligned unit moves.

use crate::error::LatticeError;
use smallvec::SmallVec;
use veer_core::GridPoint;

/// One of the three positive axis-aligned unit moves.
///
/// Walks on the cubic lattice only ever step in the positive direction
/// along a single axis; the catalog order is fixed (X, Y, Z) so candidate
/// enumeration is deterministic for a given RNG stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisMove {
    /// `(+1, 0, 0)`
    X,
    /// `(0, +1, 0)`
    Y,
    /// `(0, 0, +1)`
    Z,
}

impl AxisMove {
    /// All moves in catalog order.
    pub const ALL: [AxisMove; 3] = [AxisMove::X, AxisMove::Y, AxisMove::Z];

    /// Returns the `(dx, dy, dz)` displacement for this move.
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            AxisMove::X => (1, 0, 0),
            AxisMove::Y => (0, 1, 0),
            AxisMove::Z => (0, 0, 1),
        }
    }

    /// The point reached by taking this move from `from`.
    pub const fn apply(self, from: GridPoint) -> GridPoint {
        let (dx, dy, dz) = self.offset();
        from.offset(dx, dy, dz)
    }
}

/// One of the three coordinate-plane move classes.
///
/// Each class groups the two axis moves lying in that plane: a move along
/// X or Y counts toward XY, along Y or Z toward YZ, along X or Z toward
/// XZ. The balanced generator keeps per-class usage counters and samples
/// from the least-used class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaneClass {
    /// Moves along X or Y.
    Xy,
    /// Moves along Y or Z.
    Yz,
    /// Moves along X or Z.
    Xz,
}

impl PlaneClass {
    /// All classes in catalog order.
    pub const ALL: [PlaneClass; 3] = [PlaneClass::Xy, PlaneClass::Yz, PlaneClass::Xz];

    /// The two axis moves belonging to this class.
    pub const fn moves(self) -> [AxisMove; 2] {
        match self {
            PlaneClass::Xy => [AxisMove::X, AxisMove::Y],
            PlaneClass::Yz => [AxisMove::Y, AxisMove::Z],
            PlaneClass::Xz => [AxisMove::X, AxisMove::Z],
        }
    }

    /// Short lowercase label (`"xy"`, `"yz"`, `"xz"`).
    pub const fn label(self) -> &'static str {
        match self {
            PlaneClass::Xy => "xy",
            PlaneClass::Yz => "yz",
            PlaneClass::Xz => "xz",
        }
    }
}

impl std::fmt::Display for PlaneClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A bounded three-dimensional integer lattice.
///
/// Admissible points have every coordinate in the closed interval
/// `[0, size]`. `size == 0` is valid and describes a single-point lattice
/// (the origin), on which every walk dead-ends immediately.
///
/// # Examples
///
/// ```
/// use veer_core::GridPoint;
/// use veer_lattice::CubicLattice;
///
/// let lattice = CubicLattice::new(10).unwrap();
/// assert!(lattice.contains(&GridPoint::new(10, 10, 10)));
/// assert!(!lattice.contains(&GridPoint::new(11, 0, 0)));
/// assert!(!lattice.contains(&GridPoint::new(-1, 0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubicLattice {
    size: u32,
}

impl CubicLattice {
    /// Maximum grid extent: coordinates use `i32`, so `size` must fit.
    pub const MAX_SIZE: u32 = i32::MAX as u32;

    /// Create a lattice spanning `[0, size]` on each axis.
    ///
    /// Returns `Err(LatticeError::SizeTooLarge)` if `size` exceeds
    /// [`MAX_SIZE`](Self::MAX_SIZE).
    pub fn new(size: u32) -> Result<Self, LatticeError> {
        if size > Self::MAX_SIZE {
            return Err(LatticeError::SizeTooLarge {
                value: size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size })
    }

    /// Grid extent along each axis.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of admissible points, `(size + 1)³`.
    ///
    /// `u128` because the cube overflows `u64` for the largest admissible
    /// sizes.
    pub fn point_count(&self) -> u128 {
        let side = self.size as u128 + 1;
        side * side * side
    }

    /// True iff every coordinate of `point` lies in `[0, size]`.
    pub fn contains(&self, point: &GridPoint) -> bool {
        let max = self.size as i32;
        (0..=max).contains(&point.x) && (0..=max).contains(&point.y) && (0..=max).contains(&point.z)
    }

    /// The in-bounds points reachable from `from` by one catalog move.
    ///
    /// Returned in catalog (X, Y, Z) order. Visited-set filtering is the
    /// caller's concern.
    pub fn neighbours(&self, from: &GridPoint) -> SmallVec<[GridPoint; 3]> {
        AxisMove::ALL
            .into_iter()
            .map(|m| m.apply(*from))
            .filter(|p| self.contains(p))
            .collect()
    }
}
