//! Bytemerge-training - BPE training infrastructure
//!
//! This crate provides the training loop for learning BPE merge rules
//! from a byte corpus: pair frequency counting, deterministic candidate
//! selection, and the iterative merge loop with a streaming event hook.
//!
//! # Example
//!
//! ```rust
//! use bytemerge_core::Vocabulary;
//! use bytemerge_training::BpeTrainer;
//!
//! let mut vocab = Vocabulary::new(257).unwrap();
//! let mut trainer = BpeTrainer::new(&vocab, b"aaaa");
//!
//! let report = trainer.train(&mut vocab, false).unwrap();
//! assert_eq!(report.merge_count(), 1);
//! ```

pub use bytemerge_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{BpeTrainer, MergeEvent, PairCounter, TrainingReport};
