//! Deterministic ordering of merge candidates.
//!
//! Training selects the most frequent adjacent pair on every iteration.
//! Ties on the count are broken toward the lexicographically smallest
//! (first, second) pair, so two runs over the same corpus always learn
//! the same merge sequence regardless of hash-map iteration order.

use crate::core::merges::Pair;
use ahash::AHashMap;

/// A pair observed in the working sequence together with its count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCandidate {
    /// The pair of token IDs to merge
    pub pair: Pair,
    /// The frequency of this pair in the current sequence
    pub count: u64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(pair: Pair, count: u64) -> Self {
        Self { pair, count }
    }

    /// Pick the winning candidate from a count table.
    ///
    /// Returns None for an empty table.
    pub fn select(counts: &AHashMap<Pair, u64>) -> Option<Self> {
        counts
            .iter()
            .map(|(&pair, &count)| Self::new(pair, count))
            .max()
    }
}

// Higher count wins; among equal counts the smaller pair wins, which
// keeps `max` deterministic no matter the iteration order.
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
