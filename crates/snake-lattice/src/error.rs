//! Error types for lattice operations.

use snake_core::Coord3;
use std::fmt;

/// Errors arising from lattice mutation.
///
/// Reaching one of these from the search engine means the
/// availability-before-mark protocol was broken; callers treat it as fatal
/// to the current run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// A coordinate is outside the lattice.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord3,
        /// Human-readable description of the valid range.
        bounds: &'static str,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
        }
    }
}

impl std::error::Error for LatticeError {}
