//! The fixed segment-length sequence of the chain.

/// Lengths of the rigid straight runs of the chain, in order.
///
/// A segment of length `n` spans `n` cubes, the first of which is shared
/// with the end of the previous segment, so it occupies `n - 1` new cells.
/// The chain turns only between segments.
pub const SEGMENTS: [u32; 17] = [3, 3, 3, 3, 2, 2, 2, 3, 3, 2, 2, 3, 2, 3, 2, 2, 3];

/// Number of lattice cells a chain with these segment lengths covers,
/// counting the starting cell.
///
/// Zero-length entries are treated like length 1 (no new cells).
pub fn cells_covered(segments: &[u32]) -> u64 {
    1 + segments
        .iter()
        .map(|&len| u64::from(len.saturating_sub(1)))
        .sum::<u64>()
}
