//! Projection of a straight segment onto the lattice.

use smallvec::SmallVec;
use snake_core::{Coord3, Direction};

/// Cells traversed by one segment, nearest first.
///
/// Segments in the fixed sequence are at most 3 long (2 new cells), so the
/// inline capacity keeps projection off the heap.
pub type Segment = SmallVec<[Coord3; 4]>;

/// The `length - 1` cells reached by walking from `start` along `direction`.
///
/// `start` itself is excluded: it is the shared end cell of the previous
/// segment and already occupied. No legality filtering is done here.
/// A `length` of 0 or 1 yields an empty segment.
///
/// # Examples
///
/// ```
/// use snake_core::{Coord3, Direction};
/// use snake_lattice::project;
///
/// let cells = project(Coord3::new(0, 0, 0), Direction::Right, 3);
/// assert_eq!(cells.as_slice(), &[Coord3::new(1, 0, 0), Coord3::new(2, 0, 0)]);
/// assert!(project(Coord3::new(0, 0, 0), Direction::Right, 1).is_empty());
/// ```
pub fn project(start: Coord3, direction: Direction, length: u32) -> Segment {
    (1..length)
        .map(|k| start.step(direction, k as i32))
        .collect()
}

/// Last cell of `segment`, or `start` if the segment is empty.
pub fn endpoint(start: Coord3, segment: &[Coord3]) -> Coord3 {
    segment.last().copied().unwrap_or(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn projection_leaves_lattice_unfiltered() {
        let cells = project(Coord3::new(0, 0, 0), Direction::Left, 3);
        assert_eq!(
            cells.as_slice(),
            &[Coord3::new(-1, 0, 0), Coord3::new(-2, 0, 0)]
        );
    }

    #[test]
    fn zero_length_is_empty() {
        assert!(project(Coord3::new(1, 1, 1), Direction::Up, 0).is_empty());
    }

    #[test]
    fn endpoint_of_empty_segment_is_start() {
        let start = Coord3::new(2, 1, 0);
        assert_eq!(endpoint(start, &[]), start);
        let cells = project(start, Direction::Down, 2);
        assert_eq!(endpoint(start, &cells), Coord3::new(2, 0, 0));
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        proptest::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn projection_walks_one_step_at_a_time(
            x in -3i32..6, y in -3i32..6, z in -3i32..6,
            direction in arb_direction(),
            length in 1u32..8,
        ) {
            let start = Coord3::new(x, y, z);
            let cells = project(start, direction, length);
            prop_assert_eq!(cells.len(), (length - 1) as usize);

            let mut previous = start;
            for &cell in &cells {
                prop_assert_eq!(cell, previous + direction);
                previous = cell;
            }
            prop_assert_eq!(endpoint(start, &cells), previous);
        }
    }
}
