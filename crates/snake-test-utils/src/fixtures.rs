//! Reusable reporter and solution checks.
//!
//! - [`RecordingReporter`]: keeps an owned copy of every solution.
//! - [`check_solution`]: replays a solution against the segment sequence
//!   on a fresh lattice.
//! - [`map_solution`]: image of a solution under a cube symmetry.

use snake_core::Coord3;
use snake_lattice::{endpoint, project, CubeSymmetry, Lattice};
use snake_search::{MoveRecord, OwnedSolution, ReportError, Solution, SolutionReporter};

/// Reporter that stores every solution it receives.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub solutions: Vec<OwnedSolution>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

impl SolutionReporter for RecordingReporter {
    fn report(&mut self, solution: &Solution<'_>) -> Result<(), ReportError> {
        self.solutions.push(solution.to_owned_solution());
        Ok(())
    }
}

/// Why a solution failed [`check_solution`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolutionDefect {
    /// Number of moves differs from the number of segments.
    WrongMoveCount { expected: usize, found: usize },
    /// Move `index` used a different length than the sequence dictates.
    WrongLength { index: usize, expected: u32, found: u32 },
    /// Move `index` records an endpoint that does not match its projection.
    WrongEndpoint { index: usize, recorded: Coord3, actual: Coord3 },
    /// A cell was off-lattice or visited twice.
    Collision { cell: Coord3 },
}

/// Replay `solution` on a fresh lattice, checking every invariant.
pub fn check_solution(solution: &Solution<'_>, segments: &[u32]) -> Result<(), SolutionDefect> {
    let moves = solution.moves();
    if moves.len() != segments.len() {
        return Err(SolutionDefect::WrongMoveCount {
            expected: segments.len(),
            found: moves.len(),
        });
    }

    let mut lattice = Lattice::new();
    let start = solution.start();
    if !lattice.is_available(start) {
        return Err(SolutionDefect::Collision { cell: start });
    }
    lattice
        .mark(start)
        .map_err(|_| SolutionDefect::Collision { cell: start })?;

    let mut at = start;
    for (index, (m, &expected)) in moves.iter().zip(segments).enumerate() {
        if m.length != expected {
            return Err(SolutionDefect::WrongLength {
                index,
                expected,
                found: m.length,
            });
        }
        let cells = project(at, m.direction, m.length);
        for &cell in &cells {
            if !lattice.is_available(cell) {
                return Err(SolutionDefect::Collision { cell });
            }
            lattice
                .mark(cell)
                .map_err(|_| SolutionDefect::Collision { cell })?;
        }
        let actual = endpoint(at, &cells);
        if actual != m.endpoint {
            return Err(SolutionDefect::WrongEndpoint {
                index,
                recorded: m.endpoint,
                actual,
            });
        }
        at = actual;
    }
    Ok(())
}

/// Image of `solution` under `symmetry`: start and endpoints mapped,
/// directions rotated accordingly.
pub fn map_solution(solution: &Solution<'_>, symmetry: &CubeSymmetry) -> OwnedSolution {
    OwnedSolution {
        start: symmetry.apply(solution.start()),
        moves: solution
            .moves()
            .iter()
            .map(|m| MoveRecord {
                direction: symmetry.map_direction(m.direction),
                length: m.length,
                endpoint: symmetry.apply(m.endpoint),
            })
            .collect(),
    }
}

/// Rendered solutions, sorted, for order-insensitive comparison.
pub fn sorted_renderings(solutions: &[OwnedSolution]) -> Vec<String> {
    let mut out: Vec<String> = solutions.iter().map(|s| s.view().to_string()).collect();
    out.sort();
    out
}
