//! Error types for walk configuration.

use std::error::Error;
use std::fmt;
use veer_lattice::LatticeError;

/// Errors from building a walk generator.
///
/// Runtime outcomes (dead-ends, stalls, no-op moves) are never errors;
/// they are reported through
/// [`Termination`](crate::path::Termination) on the walk result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    /// A builder parameter failed validation.
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
    /// The underlying lattice could not be constructed.
    Lattice {
        /// The lattice construction error.
        source: LatticeError,
    },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid walk configuration: {reason}"),
            Self::Lattice { source } => write!(f, "lattice construction failed: {source}"),
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice { source } => Some(source),
            _ => None,
        }
    }
}

impl From<LatticeError> for WalkError {
    fn from(source: LatticeError) -> Self {
        Self::Lattice { source }
    }
}
