//! Verdict CLI.
//!
//! Loads a sentence from a JSON document, runs the validation pipeline, and
//! prints the classification report as indented JSON on stdout.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Validate a decision-record sentence against the frozen grammar.
#[derive(Parser)]
#[command(name = "verdict", version, about)]
struct Cli {
    /// Path to the sentence JSON document
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let contents = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let sentence: Value = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not valid JSON", cli.input.display()))?;

    let report = verdict_core::validate(&sentence)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
