//! Bytemerge-core - Core BPE algorithm implementation
//!
//! This crate provides the fundamental data structures and algorithms for
//! byte-level byte-pair encoding (BPE): the vocabulary (byte identities,
//! learned merges, special tokens), the append-only merge-rule table, and
//! the left-to-right merge passes shared by training and encoding.
//!
//! # Example
//!
//! ```rust
//! use bytemerge_core::{encode_bytes, Vocabulary};
//!
//! let mut vocab = Vocabulary::new(257).unwrap();
//! vocab.add_merge((b'a' as u32, b'a' as u32)).unwrap();
//!
//! assert_eq!(encode_bytes(&vocab, b"aaaa"), vec![256, 256]);
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE data structures
pub mod core;
pub use core::{MergeCandidate, MergeMap, MergeRule, MergeRules, Pair, Vocabulary};

// Merge application
pub mod encoding;
pub use encoding::{encode_bytes, merge_pair, merge_pass};
