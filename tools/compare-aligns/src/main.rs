//! Alignment comparison tool
//!
//! Prints the summed absolute x and y error between two alignment files.

use std::path::PathBuf;

use align_compare::{compare, load_offsets};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "compare-aligns")]
#[command(about = "Compare the offsets of two alignment XML files")]
#[command(version)]
struct Cli {
    /// First alignment
    file1: PathBuf,

    /// Second alignment
    file2: PathBuf,

    /// Print the mean error per offset instead of the sum
    #[arg(short, long)]
    average: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let first = load_offsets(&cli.file1)
        .with_context(|| format!("Failed to load {}", cli.file1.display()))?;
    let second = load_offsets(&cli.file2)
        .with_context(|| format!("Failed to load {}", cli.file2.display()))?;

    let error = compare(&first, &second);
    info!(
        first = first.len(),
        second = second.len(),
        pairs = error.pairs,
        "compared alignments"
    );

    if cli.average {
        println!("{}", error.average());
    } else {
        println!("{error}");
    }
    Ok(())
}
