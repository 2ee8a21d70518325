//! Top-level search error.

use crate::config::ConfigError;
use crate::report::ReportError;
use snake_lattice::LatticeError;
use std::error::Error;
use std::fmt;

/// Errors that abort a search run.
///
/// None of these is expected during a correct search: a lattice error
/// means a cell was marked without an availability check, a config error
/// means the run was set up wrongly, and a report error means the output
/// sink failed.
#[derive(Debug)]
pub enum SearchError {
    /// The search configuration was rejected.
    Config(ConfigError),
    /// A lattice mutation violated the bounds invariant.
    Lattice(LatticeError),
    /// The solution reporter failed.
    Report(ReportError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::Report(e) => write!(f, "report: {e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Lattice(e) => Some(e),
            Self::Report(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<LatticeError> for SearchError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

impl From<ReportError> for SearchError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}
