use anyhow::Result;
use linecode_codec::{CodecStrategy, Level};

use super::encode::parse_bits;
use crate::printing::step_trace;

/// Run `bits` through every line code and print the encoded and decoded forms.
pub fn run_demo(bits: &str, initial: Level, plot: bool, unit_width: usize) -> Result<()> {
    let data = parse_bits(bits)?;

    println!("Original data:      {data}");

    let strategies = [
        ("NRZ Encoding:".to_string(), CodecStrategy::Nrz),
        (
            format!("NRZI Encoding (initial state '{initial}'):"),
            CodecStrategy::Nrzi { initial },
        ),
        ("Manchester Encoding:".to_string(), CodecStrategy::Manchester),
    ];

    for (title, strategy) in strategies {
        let encoded = strategy.encode(&data)?;
        let decoded = strategy.decode(&encoded)?;

        println!("\n{title}");
        println!("Encoded signal:     {encoded}");
        println!("Decoded data:       {decoded}");
        if plot {
            println!("{}", step_trace(&encoded, unit_width));
        }
    }

    Ok(())
}
