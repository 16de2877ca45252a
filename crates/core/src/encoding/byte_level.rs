//! Byte-level merge application.
//!
//! Both training and encoding rewrite an ID sequence left to right,
//! replacing pair occurrences non-overlappingly within a single pass: a
//! run of three identical symbols yields one merge plus one leftover
//! symbol, never two overlapping merges. Training replaces the one
//! selected pair per pass; encoding applies whatever known pair the
//! scan meets first and repeats full passes until a pass changes
//! nothing.

use crate::core::{Pair, Vocabulary};

/// Replace every non-overlapping occurrence of `pair` with `new_id` in
/// one left-to-right pass.
pub fn merge_pair(sequence: &[u32], pair: Pair, new_id: u32) -> Vec<u32> {
    let mut merged = Vec::with_capacity(sequence.len());
    let mut i = 0;

    while i < sequence.len() {
        if i + 1 < sequence.len() && (sequence[i], sequence[i + 1]) == pair {
            merged.push(new_id);
            i += 2;
        } else {
            merged.push(sequence[i]);
            i += 1;
        }
    }

    merged
}

/// Run one full left-to-right pass applying any known merge.
///
/// Returns the rewritten sequence and whether any substitution was made.
pub fn merge_pass(vocab: &Vocabulary, sequence: &[u32]) -> (Vec<u32>, bool) {
    let mut merged = Vec::with_capacity(sequence.len());
    let mut changed = false;
    let mut i = 0;

    while i < sequence.len() {
        if i + 1 < sequence.len() {
            if let Some(new_id) = vocab.id_of_pair((sequence[i], sequence[i + 1])) {
                merged.push(new_id);
                changed = true;
                i += 2;
                continue;
            }
        }
        merged.push(sequence[i]);
        i += 1;
    }

    (merged, changed)
}

/// Encode a raw byte span: one ID per byte, then repeated merge passes
/// until a full pass produces no substitution.
///
/// Each pass applies whatever pair the scan finds first, not the pairs
/// in the order they were learned; for merge tables that are
/// inconsistent with greedy left-to-right application the two differ,
/// and the fixpoint of the scan is the contract.
pub fn encode_bytes(vocab: &Vocabulary, bytes: &[u8]) -> Vec<u32> {
    let mut sequence: Vec<u32> = bytes.iter().map(|&b| u32::from(b)).collect();

    loop {
        let (merged, changed) = merge_pass(vocab, &sequence);
        sequence = merged;
        if !changed {
            break;
        }
    }

    sequence
}
