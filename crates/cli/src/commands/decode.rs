use anyhow::{Context, Result};
use linecode_codec::{CodecStrategy, Signal};
use rayon::prelude::*;
use tracing::info;

use super::{report, Converted};
use crate::args::OutputArgs;

/// Validate raw text as a non-empty signal.
pub fn parse_signal(input: &str) -> Result<Signal> {
    let input = input.trim();
    if input.is_empty() {
        anyhow::bail!("Input is empty: enter at least one level (H or L)");
    }
    input
        .parse::<Signal>()
        .with_context(|| format!("Invalid signal '{input}'"))
}

fn decode_one(input: &str, strategy: CodecStrategy) -> Result<Converted> {
    let signal = parse_signal(input)?;
    let bits = strategy
        .decode(&signal)
        .with_context(|| format!("Failed to {strategy} decode '{input}'"))?;
    Ok(Converted {
        output: bits.to_string(),
        trace: signal,
    })
}

pub fn decode_inputs(inputs: &[String], strategy: CodecStrategy, opts: OutputArgs) -> Result<()> {
    info!(%strategy, count = inputs.len(), "decoding");
    if !opts.json {
        println!("📥 Decoding with {strategy}");
    }

    let results: Vec<Result<Converted>> = inputs
        .par_iter()
        .map(|input| decode_one(input, strategy))
        .collect();

    report(strategy, inputs, results, opts)
}
