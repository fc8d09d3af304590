//! Standalone 2D geometry primitives.

use veer_core::TriPoint;

/// Bounded segment-segment intersection test.
///
/// Solves the parametric system for the segments `a0→a1` and `b0→b1` via
/// the standard determinant formulation and returns true iff both
/// parameters land in `[0, 1]` (endpoints count as intersecting).
/// Parallel and coincident segments (zero determinant) report false,
/// including collinear overlapping pairs.
///
/// Not used by the walk generators themselves; this is the reusable
/// primitive for after-the-fact path self-intersection analysis.
pub fn segments_intersect(a0: TriPoint, a1: TriPoint, b0: TriPoint, b1: TriPoint) -> bool {
    let denominator = (a0.x - a1.x) * (b0.y - b1.y) - (a0.y - a1.y) * (b0.x - b1.x);
    if denominator == 0.0 {
        return false;
    }

    let t = ((a0.x - b0.x) * (b0.y - b1.y) - (a0.y - b0.y) * (b0.x - b1.x)) / denominator;
    let u = -((a0.x - a1.x) * (a0.y - b0.y) - (a0.y - a1.y) * (a0.x - b0.x)) / denominator;

    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}
