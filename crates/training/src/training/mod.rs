//! Training infrastructure for the bytemerge tokenizer.
//!
//! This module provides pair counting and the iterative merge loop for
//! learning BPE merge rules from a byte corpus.

pub mod counter;
pub mod trainer;

pub use counter::PairCounter;
pub use trainer::{BpeTrainer, MergeEvent, TrainingReport};
