use std::str::FromStr;

use clap::Args;
use linecode_codec::{CodecStrategy, Level};

use crate::defaults;

/// Parse an NRZI reference level (`L`, `H`, `low`, `high`).
pub fn parse_level(s: &str) -> Result<Level, String> {
    let mut chars = s.chars();
    let level = match (chars.next(), chars.next()) {
        (Some(c), None) => Level::from_char(c),
        _ => match s.to_ascii_lowercase().as_str() {
            "low" => Some(Level::Low),
            "high" => Some(Level::High),
            _ => None,
        },
    };
    level.ok_or_else(|| format!("invalid level '{s}' (use L, H, low or high)"))
}

/// A `--scheme` value.
///
/// Remembers whether the name itself fixed the NRZI reference level
/// (`nrzi-low`, `nrzi-high`), in which case a config file level must not
/// replace it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeArg {
    pub strategy: CodecStrategy,
    pub explicit_level: bool,
}

impl FromStr for SchemeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let strategy = CodecStrategy::from_str(s)?;
        let name = s.to_ascii_lowercase();
        Ok(Self {
            strategy,
            explicit_level: name.ends_with("-low") || name.ends_with("-high"),
        })
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Bit strings to encode (characters 0 and 1)
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Line code (nrz, nrzi, nrzi-high, manchester)
    ///
    /// Defaults to the config file value, or manchester.
    #[arg(short, long)]
    pub scheme: Option<SchemeArg>,

    /// NRZI reference level (L or H)
    #[arg(short, long, value_parser = parse_level)]
    pub initial: Option<Level>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Signals to decode (characters H and L)
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Line code (nrz, nrzi, manchester)
    #[arg(short, long)]
    pub scheme: Option<SchemeArg>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Bit string to run through every line code
    #[arg(default_value = defaults::DEMO_BITS)]
    pub bits: String,

    /// NRZI reference level (L or H)
    #[arg(short, long, value_parser = parse_level)]
    pub initial: Option<Level>,

    /// Draw a step trace of each encoded signal
    #[arg(long)]
    pub plot: bool,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Draw a step trace of each signal
    #[arg(long, conflicts_with = "json")]
    pub plot: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Columns per signal symbol in step traces (1-64)
    #[arg(
        long,
        default_value_t = defaults::UNIT_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..=64)
    )]
    pub unit_width: u16,
}
