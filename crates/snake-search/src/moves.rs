//! Move records and the solution view handed to reporters.

use snake_core::{Coord3, Direction};
use snake_lattice::project;
use std::fmt;

/// One committed segment of the path under construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    /// Direction the segment runs in.
    pub direction: Direction,
    /// Segment length taken from the sequence.
    pub length: u32,
    /// Cell the segment ends on.
    pub endpoint: Coord3,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} to {}", self.direction, self.length, self.endpoint)
    }
}

/// A complete packing, borrowed from the engine's move stack.
///
/// Only valid for the duration of a [`report`](crate::SolutionReporter::report)
/// call; use [`to_owned_solution`](Self::to_owned_solution) to keep it.
///
/// `Display` renders the numbered step list:
///
/// ```text
/// 1. Start at (0, 0, 0)
/// 2. right 3 to (2, 0, 0)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solution<'a> {
    start: Coord3,
    moves: &'a [MoveRecord],
}

impl<'a> Solution<'a> {
    /// Wrap a start cell and the moves made from it.
    pub fn new(start: Coord3, moves: &'a [MoveRecord]) -> Self {
        Self { start, moves }
    }

    /// The seed cell.
    pub fn start(&self) -> Coord3 {
        self.start
    }

    /// Segments in order.
    pub fn moves(&self) -> &'a [MoveRecord] {
        self.moves
    }

    /// Step descriptions: `Start at (x, y, z)` followed by one line per move.
    pub fn descriptions(&self) -> impl Iterator<Item = String> + 'a {
        let moves = self.moves;
        let start = format!("Start at {}", self.start);
        std::iter::once(start).chain(moves.iter().map(MoveRecord::to_string))
    }

    /// Every cell visited, in order, starting with the seed.
    pub fn path(&self) -> Vec<Coord3> {
        let mut cells = vec![self.start];
        let mut at = self.start;
        for m in self.moves {
            cells.extend(project(at, m.direction, m.length));
            at = m.endpoint;
        }
        cells
    }

    /// Copy into an owned value.
    pub fn to_owned_solution(&self) -> OwnedSolution {
        OwnedSolution {
            start: self.start,
            moves: self.moves.to_vec(),
        }
    }
}

impl fmt::Display for Solution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, desc) in self.descriptions().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {desc}", i + 1)?;
        }
        Ok(())
    }
}

/// An owned copy of a [`Solution`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OwnedSolution {
    /// The seed cell.
    pub start: Coord3,
    /// Segments in order.
    pub moves: Vec<MoveRecord>,
}

impl OwnedSolution {
    /// Borrow as a [`Solution`] view.
    pub fn view(&self) -> Solution<'_> {
        Solution::new(self.start, &self.moves)
    }
}
