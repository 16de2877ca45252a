//! Interactive train-then-prompt loop.
//!
//! Trains on the corpus file, registers the end-of-text token, then
//! reads lines from stdin and prints the encoded IDs and the decoded
//! text for each, until `q` or end of input.

use clap::Parser;

/// Repl command arguments.
#[derive(Parser)]
pub struct ReplCommand {
    /// Corpus file to train on
    #[arg(short, long)]
    pub corpus: std::path::PathBuf,

    /// Vocabulary size limit for training
    #[arg(long, default_value_t = 1000)]
    pub vocab_size: u32,

    /// Stop training once the best pair occurs only once
    #[arg(long, default_value_t = false)]
    pub stop_early: bool,

    /// Print each merge as it is learned
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

use anyhow::Result;
use bytemerge_tokenizer::Tokenizer;
use std::io::{BufRead, Write};

/// Special token registered after training.
pub const END_OF_TEXT: &str = "<|endoftext|>";

pub fn run(cmd: ReplCommand) -> Result<()> {
    let bytes = super::read_corpus(&cmd.corpus)?;
    println!("Corpus size: {} bytes", bytes.len());

    let mut tokenizer = Tokenizer::with_vocab_size(cmd.vocab_size)?;
    let merges = tokenizer.train_with_observer(&bytes, cmd.stop_early, |event| {
        if cmd.verbose {
            println!(
                "Merged IDs ({}, {}) as a new token {:?} with ID {}",
                event.pair.0,
                event.pair.1,
                String::from_utf8_lossy(&event.token_bytes),
                event.new_id
            );
        }
    })?;
    println!(
        "Training complete: {} merges performed. Final vocabulary size: {}",
        merges,
        tokenizer.vocab_size()
    );

    let id = tokenizer.register_special(END_OF_TEXT);
    println!("Added special token {} with ID {}", END_OF_TEXT, id);

    let stdin = std::io::stdin();
    loop {
        print!("\nEnter text to encode (or 'q' to quit): ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // end of input
        }
        let input = line.trim_end_matches(&['\r', '\n'][..]);
        if input == "q" {
            break;
        }

        let ids = tokenizer.encode(input)?;
        let rendered: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        println!("Encoded: {}", rendered.join(" "));
        println!("Decoded: {}", tokenizer.decode(&ids)?);
    }

    Ok(())
}
