//! Benchmark profiles for the snake cube search.
//!
//! - [`count_only`]: a search config that counts without rendering
//! - [`prefix_profiles`]: leading slices of the fixed sequence, for
//!   measuring how cost grows with search depth

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use snake_core::SEGMENTS;
use snake_search::{SearchConfig, SeedSelection};

/// Config for a count-only run over `seeds`.
pub fn count_only(seeds: SeedSelection) -> SearchConfig {
    SearchConfig {
        seeds,
        report_solutions: false,
    }
}

/// Prefixes of [`SEGMENTS`] at depths 5, 9, 13 and the full 17.
pub fn prefix_profiles() -> [(&'static str, &'static [u32]); 4] {
    [
        ("depth_5", &SEGMENTS[..5]),
        ("depth_9", &SEGMENTS[..9]),
        ("depth_13", &SEGMENTS[..13]),
        ("depth_17", &SEGMENTS[..]),
    ]
}
