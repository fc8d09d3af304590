//! Core value types for the Veer lattice-walk library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! point types shared by the lattice backends and the walk generators.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod point;

pub use point::{GridPoint, TriPoint};
