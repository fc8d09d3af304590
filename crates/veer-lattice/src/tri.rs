//! Triangular grid on the upper half-plane.
//!
//! The triangular lattice is spanned by two of its three directions: East
//! `(1, 0)` and NorthEast `(0.5, √3/2)`. SouthWest is the exact geometric
//! inverse of NorthEast, so a SouthWest step retraces a NorthEast edge.
//! The lattice itself is only bounded from below (`y >= 0`); the walk
//! generator enforces the boundary at the moment a SouthWest move is
//! applied.

use veer_core::TriPoint;

/// Half the square root of three: the vertical displacement of a
/// diagonal unit move on the 60° triangular grid.
pub const SQRT3_HALF: f64 = 0.866_025_403_784_438_6;

/// One of the three triangular-grid directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriDirection {
    /// `(+1, 0)`; always legal.
    East,
    /// `(+0.5, +√3/2)`.
    NorthEast,
    /// `(−0.5, −√3/2)`, the inverse of NorthEast; legalized at
    /// application time by the walk generator.
    SouthWest,
}

impl TriDirection {
    /// All directions in catalog order.
    pub const ALL: [TriDirection; 3] = [
        TriDirection::East,
        TriDirection::NorthEast,
        TriDirection::SouthWest,
    ];

    /// Returns the `(dx, dy)` displacement for this direction.
    pub const fn displacement(self) -> (f64, f64) {
        match self {
            TriDirection::East => (1.0, 0.0),
            TriDirection::NorthEast => (0.5, SQRT3_HALF),
            TriDirection::SouthWest => (-0.5, -SQRT3_HALF),
        }
    }

    /// The direction that may not immediately follow this one.
    ///
    /// NorthEast and SouthWest form the reversal pair; East constrains
    /// nothing.
    pub const fn blocks(self) -> Option<TriDirection> {
        match self {
            TriDirection::East => None,
            TriDirection::NorthEast => Some(TriDirection::SouthWest),
            TriDirection::SouthWest => Some(TriDirection::NorthEast),
        }
    }

    /// The point reached by taking this direction from `from`.
    pub fn apply(self, from: TriPoint) -> TriPoint {
        let (dx, dy) = self.displacement();
        from.translate(dx, dy)
    }

    /// Short label (`"E"`, `"NE"`, `"SW"`).
    pub const fn label(self) -> &'static str {
        match self {
            TriDirection::East => "E",
            TriDirection::NorthEast => "NE",
            TriDirection::SouthWest => "SW",
        }
    }
}

impl std::fmt::Display for TriDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The triangular half-plane lattice.
///
/// Admissible points have `y >= 0`; there is no upper or horizontal
/// bound. The type is a zero-sized bounds checker kept parallel to
/// [`CubicLattice`](crate::CubicLattice) so generators hold a lattice
/// value regardless of backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriLattice;

impl TriLattice {
    /// Create the half-plane lattice.
    pub const fn new() -> Self {
        TriLattice
    }

    /// True iff `point` lies on or above the lower boundary.
    pub fn contains(&self, point: &TriPoint) -> bool {
        point.y >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn east_is_horizontal_unit() {
        assert_eq!(TriDirection::East.displacement(), (1.0, 0.0));
    }

    #[test]
    fn south_west_is_exact_inverse_of_north_east() {
        let (nx, ny) = TriDirection::NorthEast.displacement();
        let (sx, sy) = TriDirection::SouthWest.displacement();
        assert_eq!(nx, -sx);
        assert_eq!(ny, -sy);
    }

    #[test]
    fn north_east_then_south_west_returns_exactly() {
        let up = TriDirection::NorthEast.apply(TriPoint::ORIGIN);
        let back = TriDirection::SouthWest.apply(up);
        assert_eq!(back, TriPoint::ORIGIN);
    }

    #[test]
    fn reversal_pair_is_symmetric() {
        assert_eq!(
            TriDirection::NorthEast.blocks(),
            Some(TriDirection::SouthWest)
        );
        assert_eq!(
            TriDirection::SouthWest.blocks(),
            Some(TriDirection::NorthEast)
        );
        assert_eq!(TriDirection::East.blocks(), None);
    }

    #[test]
    fn half_plane_boundary_is_closed() {
        let lattice = TriLattice::new();
        assert!(lattice.contains(&TriPoint::ORIGIN));
        assert!(lattice.contains(&TriPoint::new(-3.0, 0.0)));
        assert!(!lattice.contains(&TriPoint::new(0.0, -0.1)));
    }

    #[test]
    fn labels_match_catalog() {
        let labels: Vec<_> = TriDirection::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(labels, ["E", "NE", "SW"]);
    }
}
