//! The 3×3×3 occupancy grid.

use crate::claim::Claim;
use crate::error::LatticeError;
use snake_core::Coord3;

/// Cells along each axis.
pub const SIDE: i32 = 3;

/// Total number of cells in the lattice.
pub const CELL_COUNT: usize = (SIDE * SIDE * SIDE) as usize;

const BOUNDS: &str = "each component must be in 0..=2";

/// Occupancy of the 27 lattice cells.
///
/// Every legal coordinate maps to exactly one occupancy bit, stored in a
/// `u32` at position [`Lattice::to_index`]. Equality compares the whole
/// bitmap, so "bit-identical after backtracking" is a plain `==`.
///
/// # Examples
///
/// ```
/// use snake_core::Coord3;
/// use snake_lattice::Lattice;
///
/// let mut lattice = Lattice::new();
/// let cells = [Coord3::new(0, 0, 0), Coord3::new(1, 0, 0)];
/// assert!(lattice.is_available(cells));
///
/// lattice.mark(cells).unwrap();
/// assert!(!lattice.is_available(Coord3::new(1, 0, 0)));
///
/// lattice.clear(cells).unwrap();
/// assert_eq!(lattice, Lattice::new());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Lattice {
    occupied: u32,
}

impl Lattice {
    /// Bitmap with every cell occupied.
    const FULL: u32 = (1 << CELL_COUNT) - 1;

    /// Create an empty lattice.
    pub const fn new() -> Self {
        Self { occupied: 0 }
    }

    /// `true` iff every component of `coord` is in `0..=2`.
    pub fn is_legal(coord: Coord3) -> bool {
        coord.to_array().iter().all(|c| (0..SIDE).contains(c))
    }

    /// Dense index `x + 3*y + 9*z` of a legal coordinate, `None` otherwise.
    pub fn to_index(coord: Coord3) -> Option<usize> {
        if !Self::is_legal(coord) {
            return None;
        }
        Some((coord.x + SIDE * coord.y + SIDE * SIDE * coord.z) as usize)
    }

    /// Inverse of [`to_index`](Self::to_index).
    pub fn from_index(index: usize) -> Option<Coord3> {
        if index >= CELL_COUNT {
            return None;
        }
        let i = index as i32;
        Some(Coord3::new(i % SIDE, (i / SIDE) % SIDE, i / (SIDE * SIDE)))
    }

    /// All 27 legal cells in index order (x fastest, then y, then z).
    pub fn canonical_ordering() -> impl Iterator<Item = Coord3> {
        (0..CELL_COUNT).filter_map(Self::from_index)
    }

    /// Occupancy of one cell, or `None` if the coordinate is illegal.
    pub fn is_occupied(&self, coord: Coord3) -> Option<bool> {
        Self::to_index(coord).map(|i| self.occupied & (1 << i) != 0)
    }

    /// `true` iff every cell is legal and currently unoccupied.
    ///
    /// Accepts a single [`Coord3`] or any slice-like sequence of them.
    /// An empty sequence is vacuously available.
    pub fn is_available(&self, cells: impl AsRef<[Coord3]>) -> bool {
        cells
            .as_ref()
            .iter()
            .all(|&c| self.is_occupied(c) == Some(false))
    }

    /// Set every cell occupied.
    ///
    /// All coordinates are validated before any state changes, so an
    /// out-of-bounds entry leaves the lattice untouched.
    pub fn mark(&mut self, cells: impl AsRef<[Coord3]>) -> Result<(), LatticeError> {
        let mask = Self::mask_of(cells.as_ref())?;
        self.occupied |= mask;
        Ok(())
    }

    /// Set every cell unoccupied; the inverse of [`mark`](Self::mark).
    ///
    /// Same validation and failure behavior as `mark`.
    pub fn clear(&mut self, cells: impl AsRef<[Coord3]>) -> Result<(), LatticeError> {
        let mask = Self::mask_of(cells.as_ref())?;
        self.occupied &= !mask;
        Ok(())
    }

    /// Mark `cells` and return a guard that clears them again on drop.
    ///
    /// Only cells that were unoccupied before the call are released, so
    /// dropping the guard restores the exact previous bitmap. The guard
    /// dereferences to the lattice, allowing nested claims.
    pub fn claim(&mut self, cells: impl AsRef<[Coord3]>) -> Result<Claim<'_>, LatticeError> {
        let cells = cells.as_ref();
        let mask = Self::mask_of(cells)?;
        let fresh = mask & !self.occupied;
        self.occupied |= mask;
        Ok(Claim::new(self, fresh, cells))
    }

    /// Raw occupancy bitmap: bit `i` is cell [`from_index(i)`](Self::from_index).
    pub fn occupancy(&self) -> u32 {
        self.occupied
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> u32 {
        self.occupied.count_ones()
    }

    /// `true` if no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// `true` if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied == Self::FULL
    }

    /// Clear the bits in `mask`. Used by [`Claim`] on drop.
    pub(crate) fn release(&mut self, mask: u32) {
        self.occupied &= !mask;
    }

    fn mask_of(cells: &[Coord3]) -> Result<u32, LatticeError> {
        cells.iter().try_fold(0u32, |mask, &coord| {
            let index = Self::to_index(coord).ok_or(LatticeError::CoordOutOfBounds {
                coord,
                bounds: BOUNDS,
            })?;
            Ok(mask | (1 << index))
        })
    }
}
