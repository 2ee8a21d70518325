//! Lattice contract test helpers.
//!
//! These functions check the indexing and occupancy invariants every
//! lattice state must satisfy, from empty to partially filled.

use crate::lattice::{Lattice, CELL_COUNT};
use indexmap::IndexSet;
use snake_core::{Coord3, Direction};

/// Assert that `to_index` is a bijection onto `0..27` with `from_index` as inverse.
pub fn assert_index_bijective() {
    let mut seen = IndexSet::new();
    for coord in Lattice::canonical_ordering() {
        let index = Lattice::to_index(coord).expect("canonical cell must be legal");
        assert!(index < CELL_COUNT, "index {index} of {coord} out of range");
        assert!(seen.insert(index), "index {index} assigned twice");
        assert_eq!(Lattice::from_index(index), Some(coord));
    }
    assert_eq!(seen.len(), CELL_COUNT);
}

/// Assert that a cell is available iff it is legal and not occupied.
pub fn assert_availability_matches_occupancy(lattice: &Lattice) {
    for coord in Lattice::canonical_ordering() {
        let occupied = lattice.is_occupied(coord).expect("legal cell");
        assert_eq!(
            lattice.is_available(coord),
            !occupied,
            "availability of {coord} disagrees with occupancy"
        );
    }
}

/// Assert that every neighbour just outside the lattice is unavailable.
pub fn assert_border_unavailable(lattice: &Lattice) {
    for coord in Lattice::canonical_ordering() {
        for d in Direction::ALL {
            let next: Coord3 = coord + d;
            if !Lattice::is_legal(next) {
                assert!(!lattice.is_available(next), "{next} reported available");
                assert_eq!(lattice.is_occupied(next), None);
            }
        }
    }
}

/// Assert that marking and clearing every free cell round-trips.
pub fn assert_mark_clear_round_trip(lattice: &Lattice) {
    let free: Vec<Coord3> = Lattice::canonical_ordering()
        .filter(|&c| lattice.is_available(c))
        .collect();
    let mut scratch = *lattice;
    scratch.mark(&free).expect("free cells are legal");
    assert!(scratch.is_full());
    scratch.clear(&free).expect("free cells are legal");
    assert_eq!(&scratch, lattice);
}

/// Run all compliance checks on a lattice state.
pub fn run_full_compliance(lattice: &Lattice) {
    assert_index_bijective();
    assert_availability_matches_occupancy(lattice);
    assert_border_unavailable(lattice);
    assert_mark_clear_round_trip(lattice);
}
