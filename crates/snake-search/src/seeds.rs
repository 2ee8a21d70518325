//! Start cells for a search run.

use snake_core::Coord3;
use snake_lattice::Lattice;

/// A start cell with a human-readable label and its symmetry weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedPosition {
    /// The cell the chain starts in.
    pub coord: Coord3,
    /// Label used in logs.
    pub label: &'static str,
    /// How many of the 27 cells this seed stands for.
    pub multiplicity: u64,
}

impl SeedPosition {
    /// An explicit seed standing only for itself.
    pub const fn single(coord: Coord3) -> Self {
        Self {
            coord,
            label: "cell",
            multiplicity: 1,
        }
    }
}

/// One cell from each symmetry orbit of the lattice.
///
/// Every other cell is the image of one of these under a rotation or
/// reflection, which maps solutions to solutions one-to-one.
pub const CANONICAL_SEEDS: [SeedPosition; 4] = [
    SeedPosition {
        coord: Coord3::new(0, 0, 0),
        label: "corner",
        multiplicity: 8,
    },
    SeedPosition {
        coord: Coord3::new(0, 0, 1),
        label: "edge",
        multiplicity: 12,
    },
    SeedPosition {
        coord: Coord3::new(0, 1, 1),
        label: "face",
        multiplicity: 6,
    },
    SeedPosition {
        coord: Coord3::new(1, 1, 1),
        label: "centre",
        multiplicity: 1,
    },
];

/// All 27 cells as unit-weight seeds, in index order.
pub fn all_cells() -> Vec<SeedPosition> {
    Lattice::canonical_ordering()
        .map(SeedPosition::single)
        .collect()
}
