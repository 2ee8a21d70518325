//! Search configuration, validation, and error types.
//!
//! [`SearchConfig`] chooses which seed cells a run starts from and whether
//! solutions are rendered. The segment sequence itself is not configurable;
//! [`validate_segments`] exists for the engine's test-only override.

use crate::seeds::{self, SeedPosition};
use snake_core::Coord3;
use snake_lattice::Lattice;
use std::error::Error;
use std::fmt;

// ── SeedSelection ──────────────────────────────────────────────────

/// Which start cells a run explores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedSelection {
    /// One representative per symmetry orbit. Default.
    #[default]
    Canonical,
    /// Every one of the 27 cells.
    Exhaustive,
    /// A single explicit cell.
    Single(Coord3),
}

impl SeedSelection {
    /// Resolve to the concrete seed list, in run order.
    pub fn seeds(&self) -> Vec<SeedPosition> {
        match *self {
            Self::Canonical => seeds::CANONICAL_SEEDS.to_vec(),
            Self::Exhaustive => seeds::all_cells(),
            Self::Single(coord) => vec![SeedPosition::single(coord)],
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SearchConfig::validate()`] or segment validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The segment sequence has no entries.
    EmptySegments,
    /// A segment has length zero.
    ZeroLengthSegment {
        /// Position of the offending entry.
        index: usize,
    },
    /// An explicit seed lies outside the lattice.
    SeedOutOfBounds {
        /// The offending seed.
        seed: Coord3,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySegments => write!(f, "segment sequence is empty"),
            Self::ZeroLengthSegment { index } => {
                write!(f, "segment {index} has length 0")
            }
            Self::SeedOutOfBounds { seed } => {
                write!(f, "seed {seed} is outside the 3x3x3 lattice")
            }
        }
    }
}

impl Error for ConfigError {}

/// Check that a segment sequence is non-empty with positive lengths.
pub fn validate_segments(segments: &[u32]) -> Result<(), ConfigError> {
    if segments.is_empty() {
        return Err(ConfigError::EmptySegments);
    }
    if let Some(index) = segments.iter().position(|&len| len == 0) {
        return Err(ConfigError::ZeroLengthSegment { index });
    }
    Ok(())
}

// ── SearchConfig ───────────────────────────────────────────────────

/// Input to [`run_search`](crate::run_search).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Start cells to explore. Default: [`SeedSelection::Canonical`].
    pub seeds: SeedSelection,
    /// Hand each solution to the reporter. Default: `true`.
    /// When `false` only counts are produced.
    pub report_solutions: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seeds: SeedSelection::Canonical,
            report_solutions: true,
        }
    }
}

impl SearchConfig {
    /// Check structural invariants before a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let SeedSelection::Single(seed) = self.seeds {
            if !Lattice::is_legal(seed) {
                return Err(ConfigError::SeedOutOfBounds { seed });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_core::SEGMENTS;

    #[test]
    fn default_config_is_canonical_and_reporting() {
        let config = SearchConfig::default();
        assert_eq!(config.seeds, SeedSelection::Canonical);
        assert!(config.report_solutions);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn single_seed_out_of_bounds_rejected() {
        let config = SearchConfig {
            seeds: SeedSelection::Single(Coord3::new(0, 3, 0)),
            ..SearchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SeedOutOfBounds {
                seed: Coord3::new(0, 3, 0)
            })
        );
    }

    #[test]
    fn seed_selection_resolves() {
        assert_eq!(SeedSelection::Canonical.seeds().len(), 4);
        assert_eq!(SeedSelection::Exhaustive.seeds().len(), 27);
        let single = SeedSelection::Single(Coord3::new(2, 1, 0)).seeds();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].coord, Coord3::new(2, 1, 0));
    }

    #[test]
    fn segment_validation() {
        assert!(validate_segments(&SEGMENTS).is_ok());
        assert!(validate_segments(&[1]).is_ok());
        assert_eq!(validate_segments(&[]), Err(ConfigError::EmptySegments));
        assert_eq!(
            validate_segments(&[3, 0, 2]),
            Err(ConfigError::ZeroLengthSegment { index: 1 })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::ZeroLengthSegment { index: 4 }.to_string(),
            "segment 4 has length 0"
        );
        assert_eq!(
            ConfigError::SeedOutOfBounds {
                seed: Coord3::new(-1, 0, 0)
            }
            .to_string(),
            "seed (-1, 0, 0) is outside the 3x3x3 lattice"
        );
    }
}
