//! The [`Coord3`] integer vector.

use crate::direction::Direction;
use crate::error::CoordParseError;
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

/// An immutable integer position `(x, y, z)`.
///
/// Components are signed so that stepping off the lattice produces a
/// representable (but illegal) coordinate rather than an overflow; the
/// lattice decides legality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord3 {
    /// Position along the left/right axis.
    pub x: i32,
    /// Position along the down/up axis.
    pub y: i32,
    /// Position along the front/back axis.
    pub z: i32,
}

impl Coord3 {
    /// The origin `(0, 0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Construct a coordinate from its components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Components as an array, in `x, y, z` order.
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Step `steps` units along `direction`.
    pub fn step(self, direction: Direction, steps: i32) -> Self {
        self + direction.offset() * steps
    }
}

impl Add for Coord3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add<Direction> for Coord3 {
    type Output = Self;

    fn add(self, rhs: Direction) -> Self {
        self + rhs.offset()
    }
}

impl Mul<i32> for Coord3 {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<[i32; 3]> for Coord3 {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(i32, i32, i32)> for Coord3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl AsRef<[Coord3]> for Coord3 {
    fn as_ref(&self) -> &[Coord3] {
        std::slice::from_ref(self)
    }
}

impl fmt::Display for Coord3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Parses `x,y,z`, optionally wrapped in parentheses and with whitespace
/// around components, so the display form round-trips.
impl FromStr for Coord3 {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(CoordParseError::WrongArity {
                input: s.to_string(),
                found: parts.len(),
            });
        }

        let mut components = [0i32; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| CoordParseError::InvalidComponent {
                    input: s.to_string(),
                    component: (*part).to_string(),
                })?;
        }
        Ok(Self::from(components))
    }
}
