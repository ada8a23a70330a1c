//! Read one run log and print the reconstructed experiment.
//!
//! The textual equivalent of a results dashboard page: problem name,
//! config, one block per run, and the cross-run summary.
//!
//! Run with: cargo run --example read_log -- data/outputs/sat-3.log

use anyhow::{bail, Context, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: read_log <path-to-log-file>");
    };
    let log = evolog::read_log_file(&path).with_context(|| format!("reading {path}"))?;

    println!("=== {} ===", log.name());
    if !log.config().is_empty() {
        println!("config: {}", serde_json::to_string_pretty(log.config())?);
    }

    for (i, run) in log.runs().iter().enumerate() {
        println!("\nrun {} (logged index {}):", i + 1, run.run_index());
        println!("  generations:     {}", run.generations().len());
        println!("  best value:      {}", run.best_value());
        println!("  best normalized: {}", run.best_value_normalized());
        if run.has_constraint() {
            println!("  constraint:      {}", run.constraint());
        }
        println!("  best individual: {}", run.best_individual());
        println!("  decoded:         {}", run.decoded());
    }

    if let Some(summary) = log.summary() {
        println!(
            "\n{} runs: mean {:.4} +/- {:.4} (min {:.4}, max {:.4})",
            summary.count(),
            summary.mean(),
            summary.std_dev(),
            summary.min(),
            summary.max()
        );
    }
    Ok(())
}
