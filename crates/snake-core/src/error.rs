//! Error types for core value parsing.

use std::error::Error;
use std::fmt;

/// A textual coordinate could not be parsed into a [`Coord3`](crate::Coord3).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoordParseError {
    /// The input did not have exactly three comma-separated components.
    WrongArity {
        /// The offending input.
        input: String,
        /// Number of components found.
        found: usize,
    },
    /// A component was not a valid integer.
    InvalidComponent {
        /// The offending input.
        input: String,
        /// The component that failed to parse.
        component: String,
    },
}

impl fmt::Display for CoordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongArity { input, found } => {
                write!(f, "expected 3 components in '{input}', found {found}")
            }
            Self::InvalidComponent { input, component } => {
                write!(f, "component {component:?} of '{input}' is not an integer")
            }
        }
    }
}

impl Error for CoordParseError {}
