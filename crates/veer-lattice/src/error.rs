//! Error types for lattice construction.

use std::fmt;

/// Errors arising from lattice construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// Requested grid extent does not fit the `i32` coordinate space.
    SizeTooLarge {
        /// The offending size.
        value: u32,
        /// Largest admissible size.
        max: u32,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeTooLarge { value, max } => {
                write!(f, "lattice size {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for LatticeError {}
