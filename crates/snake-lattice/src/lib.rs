//! The 3×3×3 lattice the chain is packed into.
//!
//! This crate owns everything spatial: the [`Lattice`] occupancy grid with
//! its bounds checks and batch mark/clear, the scoped [`Claim`] guard used
//! for backtracking, the segment [`project`]or, and the [`CubeSymmetry`]
//! group used to reason about symmetry-equivalent start cells.
//!
//! # Indexing
//!
//! Legal coordinates have every component in `0..=2` and map to the dense
//! index `x + 3*y + 9*z`. Illegal coordinates have no index; they are
//! reported as [`None`] or as [`LatticeError::CoordOutOfBounds`], never
//! used to address storage.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod claim;
pub mod error;
pub mod lattice;
pub mod project;
pub mod symmetry;

#[cfg(test)]
pub(crate) mod compliance;

pub use claim::Claim;
pub use error::LatticeError;
pub use lattice::{Lattice, CELL_COUNT, SIDE};
pub use project::{endpoint, project, Segment};
pub use symmetry::{orbit, orbits, CubeSymmetry};
