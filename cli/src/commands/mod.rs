//! CLI commands for the bytemerge tokenizer.

pub mod decode;
pub mod encode;
pub mod repl;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use repl::ReplCommand;

use anyhow::Result;
use bytemerge_core::TokenizerError;
use bytemerge_tokenizer::Tokenizer;
use std::path::Path;

/// Read the corpus file, rejecting an empty one.
pub fn read_corpus(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|err| TokenizerError::Io {
        path: path.to_path_buf(),
        err,
    })?;
    anyhow::ensure!(!bytes.is_empty(), "corpus file {} is empty", path.display());
    Ok(bytes)
}

/// Read the corpus file and train a fresh tokenizer on it.
pub fn trained_tokenizer(path: &Path, vocab_size: u32, stop_early: bool) -> Result<Tokenizer> {
    let bytes = read_corpus(path)?;
    let mut tokenizer = Tokenizer::with_vocab_size(vocab_size)?;
    tokenizer.train(&bytes, stop_early)?;
    Ok(tokenizer)
}
