//! The 48-element symmetry group of the cube.
//!
//! Each symmetry permutes the three axes and optionally flips each one,
//! acting on lattice coordinates about the centre cell `(1, 1, 1)`. The
//! 24 proper rotations are the elements with determinant `+1`; the other
//! 24 include a reflection.
//!
//! The search only needs to start from one cell per orbit: a symmetry maps
//! every solution from `c` to a solution from its image, so the total over
//! all 27 start cells is the sum over orbit representatives weighted by
//! orbit size.

use crate::lattice::Lattice;
use indexmap::IndexSet;
use snake_core::{Coord3, Direction};

/// Axis permutations, even ones first.
const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [1, 2, 0],
    [2, 0, 1],
    [0, 2, 1],
    [2, 1, 0],
    [1, 0, 2],
];

/// A rotation or reflection of the cube.
///
/// Output axis `i` takes input axis `axes[i]`, multiplied by `signs[i]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CubeSymmetry {
    axes: [usize; 3],
    signs: [i32; 3],
}

impl CubeSymmetry {
    /// The identity map.
    pub const IDENTITY: Self = Self {
        axes: [0, 1, 2],
        signs: [1, 1, 1],
    };

    /// All 48 symmetries, identity first.
    pub fn all() -> Vec<Self> {
        let mut out = Vec::with_capacity(48);
        for axes in PERMUTATIONS {
            for bits in 0..8u8 {
                let sign = |bit: u8| if bits & (1 << bit) == 0 { 1 } else { -1 };
                out.push(Self {
                    axes,
                    signs: [sign(0), sign(1), sign(2)],
                });
            }
        }
        out
    }

    /// `true` for the 24 proper rotations (determinant `+1`).
    pub fn is_rotation(&self) -> bool {
        let even = PERMUTATIONS[..3].contains(&self.axes);
        let flips: i32 = self.signs.iter().product();
        (flips == 1) == even
    }

    /// Apply the linear part to an offset (no translation).
    pub fn transform_offset(&self, offset: Coord3) -> Coord3 {
        let v = offset.to_array();
        Coord3::new(
            self.signs[0] * v[self.axes[0]],
            self.signs[1] * v[self.axes[1]],
            self.signs[2] * v[self.axes[2]],
        )
    }

    /// Map a lattice coordinate, fixing the centre cell.
    pub fn apply(&self, coord: Coord3) -> Coord3 {
        let centre = Coord3::new(1, 1, 1);
        self.transform_offset(coord + centre * -1) + centre
    }

    /// Image of a direction.
    ///
    /// A signed axis permutation maps every unit offset to another unit
    /// offset, so the lookup always finds an image.
    pub fn map_direction(&self, direction: Direction) -> Direction {
        let target = self.transform_offset(direction.offset());
        let image = Direction::ALL.into_iter().find(|d| d.offset() == target);
        debug_assert!(image.is_some(), "{direction} has no image under {self:?}");
        image.unwrap_or(direction)
    }
}

/// All images of `coord` under the cube symmetries, in discovery order.
pub fn orbit(coord: Coord3) -> IndexSet<Coord3> {
    CubeSymmetry::all()
        .iter()
        .map(|s| s.apply(coord))
        .collect()
}

/// Partition of the 27 cells into orbits.
///
/// Orbits are listed by their lowest-indexed cell: corners, edge midpoints,
/// face centres, then the centre cell.
pub fn orbits() -> Vec<IndexSet<Coord3>> {
    let mut seen: IndexSet<Coord3> = IndexSet::new();
    let mut out = Vec::new();
    for cell in Lattice::canonical_ordering() {
        if seen.contains(&cell) {
            continue;
        }
        let o = orbit(cell);
        seen.extend(o.iter().copied());
        out.push(o);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_has_48_distinct_elements() {
        let all = CubeSymmetry::all();
        assert_eq!(all.len(), 48);
        assert_eq!(all[0], CubeSymmetry::IDENTITY);
        let unique: IndexSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 48);
    }

    #[test]
    fn half_of_the_group_are_rotations() {
        let rotations = CubeSymmetry::all()
            .into_iter()
            .filter(CubeSymmetry::is_rotation)
            .count();
        assert_eq!(rotations, 24);
        assert!(CubeSymmetry::IDENTITY.is_rotation());
    }

    #[test]
    fn every_symmetry_permutes_the_lattice() {
        for s in CubeSymmetry::all() {
            let image: IndexSet<Coord3> =
                Lattice::canonical_ordering().map(|c| s.apply(c)).collect();
            assert_eq!(image.len(), 27, "{s:?} is not injective");
            assert!(image.iter().all(|&c| Lattice::is_legal(c)));
        }
    }

    #[test]
    fn every_symmetry_permutes_directions() {
        for s in CubeSymmetry::all() {
            let image: IndexSet<Direction> =
                Direction::ALL.iter().map(|&d| s.map_direction(d)).collect();
            assert_eq!(image.len(), 6, "{s:?} does not permute directions");
            for d in Direction::ALL {
                assert_eq!(s.map_direction(d).offset(), s.transform_offset(d.offset()));
            }
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "has no image")]
    fn degenerate_map_is_caught() {
        let collapsed = CubeSymmetry {
            axes: [0, 0, 1],
            signs: [1, 1, 1],
        };
        collapsed.map_direction(Direction::Left);
    }

    #[test]
    fn centre_is_fixed() {
        let centre = Coord3::new(1, 1, 1);
        for s in CubeSymmetry::all() {
            assert_eq!(s.apply(centre), centre);
        }
    }

    #[test]
    fn orbits_partition_lattice_into_four_classes() {
        let orbits = orbits();
        let sizes: Vec<usize> = orbits.iter().map(IndexSet::len).collect();
        assert_eq!(sizes, [8, 12, 6, 1]);
        assert_eq!(sizes.iter().sum::<usize>(), 27);

        assert!(orbits[0].contains(&Coord3::new(0, 0, 0)));
        assert!(orbits[1].contains(&Coord3::new(0, 0, 1)));
        assert!(orbits[2].contains(&Coord3::new(0, 1, 1)));
        assert!(orbits[3].contains(&Coord3::new(1, 1, 1)));
    }
}
