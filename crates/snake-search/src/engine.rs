//! Recursive backtracking search.
//!
//! Each frame of the recursion holds the current cell and the index of the
//! next segment to place. A frame tries all six directions in
//! [`Direction::ALL`] order; for each it projects the segment, skips it if
//! any cell is off-lattice or occupied, and otherwise claims the cells,
//! records the move, and recurses. The claim guard and the move-stack pop
//! undo both on return, so after a subtree is exhausted the lattice and the
//! move stack are exactly as they were before it was entered.
//!
//! A frame whose segment index equals the sequence length is a solution:
//! it is reported and counts as 1. Frame counts are summed up the stack.

use crate::config::{validate_segments, ConfigError};
use crate::error::SearchError;
use crate::moves::{MoveRecord, Solution};
use crate::report::SolutionReporter;
use crate::stats::SearchStats;
use snake_core::{Coord3, Direction, SEGMENTS};
use snake_lattice::{endpoint, project, Lattice};

/// Depth-first solution counter over a fixed segment sequence.
///
/// The engine owns the move stack and the reporter; the lattice is passed
/// in per run so one lattice can serve many seeds.
///
/// # Examples
///
/// ```
/// use snake_core::Coord3;
/// use snake_lattice::Lattice;
/// use snake_search::{NullReporter, SearchEngine};
///
/// // A single 3-long segment from a corner fits in three directions.
/// let segments = [3];
/// let mut engine = SearchEngine::with_segments(&segments, NullReporter).unwrap();
/// let mut lattice = Lattice::new();
/// assert_eq!(engine.run_from_seed(&mut lattice, Coord3::new(0, 0, 0)).unwrap(), 3);
/// assert!(lattice.is_empty());
/// ```
#[derive(Debug)]
pub struct SearchEngine<'s, R> {
    segments: &'s [u32],
    reporter: R,
    moves: Vec<MoveRecord>,
    stats: SearchStats,
}

impl<R: SolutionReporter> SearchEngine<'static, R> {
    /// Engine over the fixed [`SEGMENTS`] sequence.
    pub fn new(reporter: R) -> Self {
        Self::from_parts(&SEGMENTS, reporter)
    }
}

impl<'s, R: SolutionReporter> SearchEngine<'s, R> {
    /// Engine over an explicit segment sequence.
    ///
    /// Returns `Err(ConfigError::EmptySegments)` or
    /// `Err(ConfigError::ZeroLengthSegment)` for sequences the search cannot
    /// walk. Length-1 segments are allowed and place no new cells.
    pub fn with_segments(segments: &'s [u32], reporter: R) -> Result<Self, ConfigError> {
        validate_segments(segments)?;
        Ok(Self::from_parts(segments, reporter))
    }

    fn from_parts(segments: &'s [u32], reporter: R) -> Self {
        Self {
            segments,
            reporter,
            moves: Vec::with_capacity(segments.len()),
            stats: SearchStats::default(),
        }
    }

    /// The segment sequence being searched.
    pub fn segments(&self) -> &[u32] {
        self.segments
    }

    /// Counters accumulated since construction or the last [`take_stats`](Self::take_stats).
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Return the accumulated counters and reset them.
    pub fn take_stats(&mut self) -> SearchStats {
        std::mem::take(&mut self.stats)
    }

    /// Borrow the reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Consume the engine, returning the reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Count every solution starting from `seed`.
    ///
    /// Occupies `seed` for the duration of the run and releases it before
    /// returning, on success and on error alike. Fails with
    /// [`SearchError::Lattice`] if `seed` is off-lattice and with
    /// [`SearchError::Report`] if the reporter fails.
    pub fn run_from_seed(&mut self, lattice: &mut Lattice, seed: Coord3) -> Result<u64, SearchError> {
        self.moves.clear();
        let mut claim = lattice.claim(seed)?;
        let found = self.explore(&mut claim, seed, seed, 0);
        self.moves.clear();
        found
    }

    fn explore(
        &mut self,
        lattice: &mut Lattice,
        seed: Coord3,
        at: Coord3,
        index: usize,
    ) -> Result<u64, SearchError> {
        self.stats.frames += 1;
        self.stats.deepest_segment = self.stats.deepest_segment.max(index);

        let Some(&length) = self.segments.get(index) else {
            self.stats.solutions += 1;
            tracing::trace!(%seed, end = %at, "solution found");
            self.reporter.report(&Solution::new(seed, &self.moves))?;
            return Ok(1);
        };

        let mut found = 0;
        for direction in Direction::ALL {
            self.stats.branches_tried += 1;
            let cells = project(at, direction, length);
            if !lattice.is_available(&cells) {
                self.stats.branches_pruned += 1;
                continue;
            }

            let next = endpoint(at, &cells);
            let mut claim = lattice.claim(&cells)?;
            self.moves.push(MoveRecord {
                direction,
                length,
                endpoint: next,
            });
            let result = self.explore(&mut claim, seed, next, index + 1);
            self.moves.pop();
            found += result?;
        }
        Ok(found)
    }
}
