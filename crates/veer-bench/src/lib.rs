//! Benchmark profiles for the Veer lattice-walk library.
//!
//! Provides pre-built generator configurations shared by the benches:
//!
//! - [`reference_uniform`]: 20 steps on the default [0, 10]³ lattice
//! - [`reference_balanced`]: 30 steps, unblockable extent (exact balance)
//! - [`reference_tri`]: 15 steps on the triangular half-plane

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use veer_walk::{BalancedWalk, TriWalk, UniformWalk};

/// Build the reference uniform-walk profile: 20 steps, size 10.
pub fn reference_uniform(seed: u64) -> UniformWalk {
    UniformWalk::builder()
        .size(10)
        .steps(20)
        .seed(seed)
        .build()
        .expect("reference profile is valid")
}

/// Build the reference balanced-walk profile: 30 steps on a lattice large
/// enough that no class ever blocks.
pub fn reference_balanced(seed: u64) -> BalancedWalk {
    BalancedWalk::builder()
        .size(30)
        .steps(30)
        .seed(seed)
        .build()
        .expect("reference profile is valid")
}

/// Build the reference triangular-walk profile: 15 steps.
pub fn reference_tri(seed: u64) -> TriWalk {
    TriWalk::builder().steps(15).seed(seed).build()
}
