use crate::base::{Bit, BitString, Level, Signal};
use crate::error::CodecError;
use crate::traits::LineCode;

/// Strategy: Manchester (IEEE 802.3 convention).
///
/// Every bit becomes two opposite levels, so each bit period carries a
/// mid-bit transition:
/// - `0` -> `[Low, High]` (rising)
/// - `1` -> `[High, Low]` (falling)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manchester;

const fn symbol_pair(bit: Bit) -> [Level; 2] {
    match bit {
        Bit::Zero => [Level::Low, Level::High],
        Bit::One => [Level::High, Level::Low],
    }
}

/// Encode each bit as a pair of levels; the output is `2 * bits.len()` long.
pub fn manchester_encode(bits: &[Bit]) -> Signal {
    bits.iter().flat_map(|&bit| symbol_pair(bit)).collect()
}

/// Decode a Manchester signal two symbols at a time.
///
/// Fails with `MalformedLength` for odd-length input, and with `InvalidPair`
/// at the first pair that is neither `LH` nor `HL`.
pub fn manchester_decode(signal: &[Level]) -> Result<BitString, CodecError> {
    if signal.len() % 2 != 0 {
        return Err(CodecError::MalformedLength { len: signal.len() });
    }

    signal
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| match (pair[0], pair[1]) {
            (Level::Low, Level::High) => Ok(Bit::Zero),
            (Level::High, Level::Low) => Ok(Bit::One),
            (first, second) => Err(CodecError::InvalidPair {
                first,
                second,
                position: 2 * i,
            }),
        })
        .collect()
}

impl LineCode for Manchester {
    fn encode(&self, bits: &[Bit]) -> Result<Signal, CodecError> {
        Ok(manchester_encode(bits))
    }

    fn decode(&self, signal: &[Level]) -> Result<BitString, CodecError> {
        manchester_decode(signal)
    }

    fn name(&self) -> &'static str {
        "manchester"
    }
}
