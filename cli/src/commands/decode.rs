//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Corpus file to train on before decoding
    #[arg(short, long)]
    pub corpus: std::path::PathBuf,

    /// Vocabulary size limit for training
    #[arg(long, default_value_t = 1000)]
    pub vocab_size: u32,

    /// Stop training once the best pair occurs only once
    #[arg(long, default_value_t = false)]
    pub stop_early: bool,

    /// Token IDs to decode
    #[arg(required = true)]
    pub ids: Vec<u32>,
}

use anyhow::Result;

pub fn run(cmd: DecodeCommand) -> Result<()> {
    let tokenizer = super::trained_tokenizer(&cmd.corpus, cmd.vocab_size, cmd.stop_early)?;

    let text = tokenizer.decode(&cmd.ids)?;
    println!("{}", text);

    Ok(())
}
