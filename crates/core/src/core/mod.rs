//! Core BPE data structures.
//!
//! This module contains the vocabulary, the merge-rule table, and the
//! deterministic merge-candidate ordering used during training.

pub mod merges;
pub mod priority;
pub mod vocab;

pub use merges::{MergeMap, MergeRule, MergeRules, Pair};
pub use priority::MergeCandidate;
pub use vocab::Vocabulary;
