//! Exhaustive backtracking search for snake cube solutions.
//!
//! A snake cube is a chain of 27 unit cubes made of rigid straight
//! [`SEGMENTS`](snake_core::SEGMENTS) that may only turn at segment
//! boundaries. The [`SearchEngine`] tries every direction for every
//! segment, pruning a branch as soon as it would leave the lattice or
//! revisit a cell, and hands each complete packing to a
//! [`SolutionReporter`].
//!
//! # Driving a search
//!
//! [`run_search`] takes a [`SearchConfig`] and runs the engine once per
//! seed cell on a single shared [`Lattice`](snake_lattice::Lattice). By
//! default only the four symmetry-distinct [`CANONICAL_SEEDS`] are used;
//! [`SearchSummary::weighted_total`] scales their counts back up to the
//! count over all 27 start cells.
//!
//! ```
//! use snake_search::{run_search, NullReporter, SearchConfig, SeedSelection};
//! use snake_core::Coord3;
//!
//! let config = SearchConfig {
//!     seeds: SeedSelection::Single(Coord3::new(1, 1, 1)),
//!     report_solutions: false,
//! };
//! let summary = run_search(&config, NullReporter).unwrap();
//! assert_eq!(summary.outcomes.len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod moves;
pub mod report;
pub mod seeds;
pub mod stats;

pub use config::{ConfigError, SearchConfig, SeedSelection};
pub use driver::{run_search, run_search_from_seed, run_seeds, SearchSummary, SeedOutcome};
pub use engine::SearchEngine;
pub use error::SearchError;
pub use moves::{MoveRecord, OwnedSolution, Solution};
pub use report::{NullReporter, ReportError, SolutionReporter, WriterReporter};
pub use seeds::{SeedPosition, CANONICAL_SEEDS};
pub use stats::SearchStats;
