//! Counters collected while the engine explores.

/// Work done by one or more search runs.
///
/// The engine populates these as it recurses; the driver reads them after
/// each seed and merges them into the run summary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive frames entered, including the root frame of each seed.
    pub frames: u64,
    /// Directions tried across all frames.
    pub branches_tried: u64,
    /// Directions rejected by the availability check.
    pub branches_pruned: u64,
    /// Frames that reached the end of the segment sequence.
    pub solutions: u64,
    /// Highest segment index any frame reached.
    pub deepest_segment: usize,
}

impl SearchStats {
    /// Accumulate `other` into `self`.
    pub fn merge(&mut self, other: &SearchStats) {
        self.frames += other.frames;
        self.branches_tried += other.branches_tried;
        self.branches_pruned += other.branches_pruned;
        self.solutions += other.solutions;
        self.deepest_segment = self.deepest_segment.max(other.deepest_segment);
    }

    /// Fraction of tried branches that were pruned.
    pub fn prune_ratio(&self) -> f64 {
        if self.branches_tried == 0 {
            return 0.0;
        }
        self.branches_pruned as f64 / self.branches_tried as f64
    }
}
