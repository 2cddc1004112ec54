use anyhow::{Context, Result};
use linecode_codec::{BitString, CodecStrategy};
use rayon::prelude::*;
use tracing::info;

use super::{report, Converted};
use crate::args::OutputArgs;

/// Validate raw text as a non-empty bit string.
pub fn parse_bits(input: &str) -> Result<BitString> {
    let input = input.trim();
    if input.is_empty() {
        anyhow::bail!("Input is empty: enter at least one bit (0 or 1)");
    }
    input
        .parse::<BitString>()
        .with_context(|| format!("Invalid bit string '{input}'"))
}

fn encode_one(input: &str, strategy: CodecStrategy) -> Result<Converted> {
    let bits = parse_bits(input)?;
    let signal = strategy
        .encode(&bits)
        .with_context(|| format!("Failed to {strategy} encode '{input}'"))?;
    Ok(Converted {
        output: signal.to_string(),
        trace: signal,
    })
}

pub fn encode_inputs(inputs: &[String], strategy: CodecStrategy, opts: OutputArgs) -> Result<()> {
    info!(%strategy, count = inputs.len(), "encoding");
    if !opts.json {
        println!("📡 Encoding with {strategy}");
    }

    let results: Vec<Result<Converted>> = inputs
        .par_iter()
        .map(|input| encode_one(input, strategy))
        .collect();

    report(strategy, inputs, results, opts)
}
