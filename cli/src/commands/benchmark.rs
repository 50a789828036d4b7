//! Benchmark command implementation.

use clap::Parser;

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    /// Path to the training corpus
    #[arg(short, long)]
    pub corpus: String,

    /// Number of merge rules to learn
    #[arg(short, long, default_value_t = 1000)]
    pub merges: usize,

    /// Path to input text file for benchmarking
    #[arg(short, long)]
    pub input: String,

    /// Number of iterations to run
    #[arg(long, default_value_t = 100)]
    pub iterations: usize,
}

use anyhow::Result as AnyhowResult;
use bytepair_tokenizer::{compression_ratio, BpeTokenizer, EncodingCache, Tokenizer};
use bytepair_training::BpeTrainer;
use std::fs;
use std::time::Instant;

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    let corpus = fs::read_to_string(&cmd.corpus)?;
    let text = fs::read_to_string(&cmd.input)?;

    println!("Training...");
    let start = Instant::now();
    let params = BpeTrainer::with_num_merges(cmd.merges).train(&corpus)?;
    let tokenizer = BpeTokenizer::from_params(params);
    println!("  Trained {} merges in {:.2}s", cmd.merges, start.elapsed().as_secs_f64());
    println!();

    println!("Benchmarking encoding...");
    println!("  Text length: {} bytes", text.len());
    println!("  Iterations: {}", cmd.iterations);
    println!();

    // Warmup
    let tokens = tokenizer.encode(&text);

    let start = Instant::now();
    for _ in 0..cmd.iterations {
        let _ = tokenizer.encode(&text);
    }
    let elapsed = start.elapsed();

    let avg_time_ms = elapsed.as_secs_f64() * 1000.0 / cmd.iterations as f64;
    let throughput = tokens.len() as f64 / (avg_time_ms / 1000.0);

    println!("Results:");
    println!("  Total time: {:.2}s", elapsed.as_secs_f64());
    println!("  Average time: {:.3}ms", avg_time_ms);
    println!("  Throughput: {:.0} tokens/s", throughput);
    println!(
        "  Compression ratio: {:.2}",
        compression_ratio(&text, &tokens)
    );
    println!();

    // Line-level pass through the cache; repeated lines are served from it
    let mut cache = EncodingCache::new();
    let start = Instant::now();
    for line in text.lines() {
        let _ = cache.get_or_encode(line, |l| tokenizer.encode(l));
    }
    let elapsed = start.elapsed();

    println!("Cached line encoding:");
    println!("  Lines: {}", text.lines().count());
    println!("  Time: {:.3}ms", elapsed.as_secs_f64() * 1000.0);
    println!("  Cache hits: {}", cache.hits());
    println!("  Cache misses: {}", cache.misses());

    Ok(())
}
