//! Snake: an exhaustive solver for the 3×3×3 snake cube puzzle.
//!
//! This is the facade crate that re-exports the public API of the snake
//! sub-crates. It also ships the `snake-cube` binary, which prints every
//! solution and the final count.
//!
//! # Quick start
//!
//! ```rust
//! use snake::prelude::*;
//!
//! let config = SearchConfig {
//!     seeds: SeedSelection::Canonical,
//!     report_solutions: false,
//! };
//! let summary = run_search(&config, NullReporter).unwrap();
//! assert_eq!(summary.outcomes.len(), CANONICAL_SEEDS.len());
//! assert!(summary.weighted_total() >= summary.total());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `snake-core` | Coordinates, directions, the segment sequence |
//! | [`lattice`] | `snake-lattice` | Occupancy bitmap, claims, projection, symmetry |
//! | [`search`] | `snake-search` | Engine, reporters, seeds, config, driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, directions, and the segment sequence (`snake-core`).
pub use snake_core as types;

/// Lattice occupancy and geometry (`snake-lattice`).
///
/// [`lattice::Lattice`] tracks which of the 27 cells are filled;
/// [`lattice::project`] computes the cells a segment would cover.
pub use snake_lattice as lattice;

/// The backtracking search and its drivers (`snake-search`).
pub use snake_search as search;

/// Common imports for typical usage.
pub mod prelude {
    // Core
    pub use snake_core::{Coord3, Direction, SEGMENTS};

    // Lattice
    pub use snake_lattice::{project, CubeSymmetry, Lattice, LatticeError};

    // Search
    pub use snake_search::{
        run_search, NullReporter, SearchConfig, SearchEngine, SearchError, SearchStats,
        SearchSummary, SeedSelection, Solution, SolutionReporter, WriterReporter, CANONICAL_SEEDS,
    };
}
