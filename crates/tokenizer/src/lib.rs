//! Bytemerge-tokenizer - High-level tokenizer API
//!
//! This crate provides a user-friendly interface for byte-level BPE
//! tokenization, integrating the vocabulary, the trainer and the
//! special-token splitter into a single API.
//!
//! # Example
//!
//! ```rust
//! use bytemerge_tokenizer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::with_vocab_size(300)?;
//! tokenizer.train(b"low lower lowest", false)?;
//! tokenizer.register_special("<|endoftext|>");
//!
//! let ids = tokenizer.encode("low<|endoftext|>")?;
//! assert_eq!(tokenizer.decode(&ids)?, "low<|endoftext|>");
//! # Ok::<(), bytemerge_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use bytemerge_core::{Result, TokenizerError, Vocabulary};
pub use bytemerge_training::{MergeEvent, TrainingReport};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Tokenizer, TokenizerBuilder, TokenizerConfig};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::{Span, SpecialSplitter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
