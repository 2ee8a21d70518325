//! The six axis-aligned unit directions.

use crate::coord::Coord3;
use std::fmt;

/// One of the six unit steps along the lattice axes.
///
/// The declaration order is the search order: solutions are reported in
/// the order produced by trying directions as listed in [`Direction::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// `(-1, 0, 0)`.
    Left,
    /// `(1, 0, 0)`.
    Right,
    /// `(0, 1, 0)`.
    Up,
    /// `(0, -1, 0)`.
    Down,
    /// `(0, 0, 1)`.
    Back,
    /// `(0, 0, -1)`.
    Front,
}

impl Direction {
    /// All six directions in search order.
    pub const ALL: [Direction; 6] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
        Direction::Back,
        Direction::Front,
    ];

    /// Unit vector for this direction.
    pub const fn offset(self) -> Coord3 {
        match self {
            Self::Left => Coord3::new(-1, 0, 0),
            Self::Right => Coord3::new(1, 0, 0),
            Self::Up => Coord3::new(0, 1, 0),
            Self::Down => Coord3::new(0, -1, 0),
            Self::Back => Coord3::new(0, 0, 1),
            Self::Front => Coord3::new(0, 0, -1),
        }
    }

    /// The direction pointing the other way along the same axis.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Back => Self::Front,
            Self::Front => Self::Back,
        }
    }

    /// Human-readable name used in solution output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
            Self::Back => "back",
            Self::Front => "front",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
