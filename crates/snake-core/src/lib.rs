//! Core types for the snake cube search.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types shared by the lattice and the search engine: the
//! [`Coord3`] lattice coordinate, the six axis-aligned [`Direction`]s, and
//! the fixed [`SEGMENTS`] sequence of the chain.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod direction;
pub mod error;
pub mod segments;

pub use coord::Coord3;
pub use direction::Direction;
pub use error::CoordParseError;
pub use segments::{cells_covered, SEGMENTS};
