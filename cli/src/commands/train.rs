//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training corpus
    #[arg(short, long)]
    pub corpus: String,

    /// Number of merge rules to learn
    #[arg(short, long, default_value_t = 1000)]
    pub merges: usize,

    /// Print every learned merge rule
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

use anyhow::Result as AnyhowResult;
use bytepair_training::{BpeTrainer, TrainingConfig};
use std::fs;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let corpus = fs::read_to_string(&cmd.corpus)?;

    let trainer = BpeTrainer::new(TrainingConfig {
        num_merges: cmd.merges,
        ..Default::default()
    });
    let params = trainer.train(&corpus)?;

    println!("Trained on {} bytes", corpus.len());
    println!("  Vocabulary size: {}", params.vocab_size());
    println!("  Merge rules: {}", params.merges().len());

    if cmd.verbose {
        for (rank, (pair, token)) in params.merges().iter().enumerate() {
            println!("  #{:<5} ({}, {}) -> {}", rank, pair.0, pair.1, token);
        }
    }

    Ok(())
}
