//! Scoped occupancy for backtracking.

use crate::lattice::Lattice;
use smallvec::SmallVec;
use snake_core::Coord3;
use std::ops::{Deref, DerefMut};

/// Guard returned by [`Lattice::claim`].
///
/// While alive it dereferences to the underlying lattice, so a recursive
/// search can keep exploring (and claim further cells) through it. On drop
/// it clears exactly the cells it newly occupied, on every exit path: early
/// returns, `?` propagation, and unwinding alike.
///
/// # Examples
///
/// ```
/// use snake_core::Coord3;
/// use snake_lattice::Lattice;
///
/// let mut lattice = Lattice::new();
/// {
///     let mut outer = lattice.claim(Coord3::new(0, 0, 0)).unwrap();
///     let inner = outer.claim([Coord3::new(1, 0, 0), Coord3::new(2, 0, 0)]).unwrap();
///     assert_eq!(inner.occupied_count(), 3);
/// }
/// assert!(lattice.is_empty());
/// ```
#[derive(Debug)]
pub struct Claim<'a> {
    lattice: &'a mut Lattice,
    /// Bits set by this claim and nobody else.
    fresh: u32,
    cells: SmallVec<[Coord3; 4]>,
}

impl<'a> Claim<'a> {
    pub(crate) fn new(lattice: &'a mut Lattice, fresh: u32, cells: &[Coord3]) -> Self {
        Self {
            lattice,
            fresh,
            cells: SmallVec::from_slice(cells),
        }
    }

    /// The cells this claim was taken on, in the order given.
    pub fn cells(&self) -> &[Coord3] {
        &self.cells
    }
}

impl Deref for Claim<'_> {
    type Target = Lattice;

    fn deref(&self) -> &Lattice {
        self.lattice
    }
}

impl DerefMut for Claim<'_> {
    fn deref_mut(&mut self) -> &mut Lattice {
        self.lattice
    }
}

impl Drop for Claim<'_> {
    fn drop(&mut self) {
        self.lattice.release(self.fresh);
    }
}
