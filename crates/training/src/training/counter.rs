//! Pair counting for BPE training.
//!
//! Counts adjacent ID pairs over the whole working sequence using
//! overlapping windows of two: every adjacent position contributes,
//! independent of how a later rewrite would group the symbols.

use ahash::AHashMap;
use bytemerge_core::{MergeCandidate, Pair};

/// Counter for adjacent pair frequencies in the working sequence.
#[derive(Debug, Default)]
pub struct PairCounter {
    /// Pair -> frequency count
    counts: AHashMap<Pair, u64>,
}

impl PairCounter {
    /// Create a new pair counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recount all adjacent pairs in `sequence` from scratch.
    ///
    /// Each merge changes the counts the next iteration observes, so the
    /// trainer recounts once per accepted merge.
    pub fn recount(&mut self, sequence: &[u32]) {
        self.counts.clear();
        for window in sequence.windows(2) {
            *self.counts.entry((window[0], window[1])).or_insert(0) += 1;
        }
    }

    /// The most frequent pair, ties broken toward the smallest pair.
    ///
    /// Returns None when the sequence held no pair (length <= 1).
    pub fn most_frequent(&self) -> Option<MergeCandidate> {
        MergeCandidate::select(&self.counts)
    }

    /// Frequency of a specific pair.
    pub fn get(&self, pair: Pair) -> Option<u64> {
        self.counts.get(&pair).copied()
    }

    /// Number of distinct pairs observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no pair was observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_windows() {
        let mut counter = PairCounter::new();
        counter.recount(&[97, 97, 97]);

        // Both windows of the run count, even though a rewrite would
        // only merge one of them
        assert_eq!(counter.get((97, 97)), Some(2));
        assert_eq!(counter.len(), 1);
    }

    #[test]
    fn test_most_frequent() {
        let mut counter = PairCounter::new();
        counter.recount(&[97, 98, 97, 98, 99]);

        let winner = counter.most_frequent().unwrap();
        assert_eq!(winner.pair, (97, 98));
        assert_eq!(winner.count, 2);
    }

    #[test]
    fn test_most_frequent_tie_break() {
        // (98, 97) and (97, 98) both occur twice; the smaller pair wins
        let mut counter = PairCounter::new();
        counter.recount(&[98, 97, 98, 97, 98]);

        let winner = counter.most_frequent().unwrap();
        assert_eq!(winner.pair, (97, 98));
    }

    #[test]
    fn test_short_sequences_have_no_pairs() {
        let mut counter = PairCounter::new();

        counter.recount(&[]);
        assert!(counter.most_frequent().is_none());

        counter.recount(&[97]);
        assert!(counter.most_frequent().is_none());
    }

    #[test]
    fn test_recount_clears_previous_counts() {
        let mut counter = PairCounter::new();
        counter.recount(&[97, 98]);
        counter.recount(&[99, 100]);

        assert_eq!(counter.get((97, 98)), None);
        assert_eq!(counter.get((99, 100)), Some(1));
    }
}
