//! Encode command implementation.

use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to the training corpus
    #[arg(short, long)]
    pub corpus: String,

    /// Number of merge rules to learn
    #[arg(short, long, default_value_t = 1000)]
    pub merges: usize,

    /// Text to encode ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Emit token IDs as a JSON array
    #[arg(short, long, default_value_t = false)]
    pub json: bool,

    /// Print token count and compression ratio
    #[arg(short, long, default_value_t = false)]
    pub stats: bool,
}

use anyhow::Result as AnyhowResult;
use bytepair_tokenizer::{compression_ratio, BpeTokenizer, Tokenizer};
use bytepair_training::BpeTrainer;
use std::fs;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let corpus = fs::read_to_string(&cmd.corpus)?;
    let params = BpeTrainer::with_num_merges(cmd.merges).train(&corpus)?;
    let tokenizer = BpeTokenizer::from_params(params);

    // Read input text (from stdin if "-")
    let input_text = if cmd.input == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        cmd.input
    };

    let tokens = tokenizer.encode(&input_text);

    if cmd.json {
        println!("{}", serde_json::to_string(&tokens)?);
    } else {
        let ids: Vec<String> = tokens.iter().map(|id| id.to_string()).collect();
        println!("{}", ids.join(" "));
    }

    if cmd.stats {
        println!("Tokens: {}", tokens.len());
        println!(
            "Compression ratio: {:.2}",
            compression_ratio(&input_text, &tokens)
        );
    }

    Ok(())
}
