//! Encode command implementation.

use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Corpus file to train on before encoding
    #[arg(short, long)]
    pub corpus: std::path::PathBuf,

    /// Vocabulary size limit for training
    #[arg(long, default_value_t = 1000)]
    pub vocab_size: u32,

    /// Stop training once the best pair occurs only once
    #[arg(long, default_value_t = false)]
    pub stop_early: bool,

    /// Print the IDs as a JSON array instead of space-separated
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Text to encode ("-" reads stdin)
    pub input: String,
}

use anyhow::Result;

pub fn run(cmd: EncodeCommand) -> Result<()> {
    let tokenizer = super::trained_tokenizer(&cmd.corpus, cmd.vocab_size, cmd.stop_early)?;

    // Read input text (from stdin if "-")
    let input = if cmd.input == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        cmd.input
    };

    let ids = tokenizer.encode(&input)?;

    if cmd.json {
        println!("{}", serde_json::to_string(&ids)?);
    } else {
        let rendered: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        println!("{}", rendered.join(" "));
    }

    Ok(())
}
