//! Test utilities for snake cube development.
//!
//! Provides a [`RecordingReporter`] that keeps every solution, and
//! validation helpers that check a reported solution independently of the
//! engine that produced it.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    check_solution, map_solution, sorted_renderings, RecordingReporter, SolutionDefect,
};
