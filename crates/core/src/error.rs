//! Error types for the BPE tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Invalid configuration (e.g. vocabulary size with no room to learn)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// ID absent from both the byte/merge table and the special-token table
    #[error("Unknown token ID: {0}")]
    UnknownTokenId(u32),

    /// Two registrations disagree about the same special-token literal
    #[error("Special token conflict: {0}")]
    SpecialTokenConflict(String),

    /// Merge rule recorded for a pair that already has one
    #[error("Invalid merge rule: {0}")]
    InvalidMerge(String),

    /// Decoded bytes are not valid UTF-8
    #[error("Invalid UTF-8 in decoded bytes: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
