//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to the training corpus
    #[arg(short, long)]
    pub corpus: String,

    /// Number of merge rules to learn
    #[arg(short, long, default_value_t = 1000)]
    pub merges: usize,

    /// Space-separated token IDs ("-" reads stdin)
    #[arg(short, long)]
    pub tokens: String,
}

use anyhow::{Context, Result as AnyhowResult};
use bytepair_core::Token;
use bytepair_tokenizer::{BpeTokenizer, Tokenizer};
use bytepair_training::BpeTrainer;
use std::fs;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let corpus = fs::read_to_string(&cmd.corpus)?;
    let params = BpeTrainer::with_num_merges(cmd.merges).train(&corpus)?;
    let tokenizer = BpeTokenizer::from_params(params);

    let raw = if cmd.tokens == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        cmd.tokens
    };

    let tokens: Vec<Token> = raw
        .split_whitespace()
        .map(|id| id.parse::<Token>().with_context(|| format!("invalid token ID: {id}")))
        .collect::<AnyhowResult<_>>()?;

    let text = tokenizer.decode(&tokens)?;
    println!("{}", text);

    Ok(())
}
