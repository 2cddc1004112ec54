use std::iter;

use crate::base::{Bit, BitString, Level, Signal};
use crate::error::CodecError;
use crate::traits::LineCode;

/// Strategy: Non-Return-to-Zero Inverted.
///
/// A `1` toggles the line level and a `0` holds it. The encoded signal starts
/// with the `initial` reference level, so it is one symbol longer than the
/// input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nrzi {
    pub initial: Level,
}

impl Nrzi {
    pub const fn new(initial: Level) -> Self {
        Self { initial }
    }
}

/// Encode `bits` starting from the reference level `initial`.
///
/// The running level is local to this call; the output is
/// `[initial, level_after_bit_0, level_after_bit_1, ...]`.
pub fn nrzi_encode(bits: &[Bit], initial: Level) -> Signal {
    let levels = bits.iter().scan(initial, |level, &bit| {
        if bit.is_one() {
            *level = level.toggle();
        }
        Some(*level)
    });
    iter::once(initial).chain(levels).collect()
}

/// Decode by comparing each symbol with the one before it in the signal.
///
/// The first symbol is the reference level and yields no bit, so signals of
/// length 0 or 1 decode to an empty bitstring.
pub fn nrzi_decode(signal: &[Level]) -> BitString {
    signal
        .windows(2)
        .map(|pair| Bit::from(pair[0] != pair[1]))
        .collect()
}

impl LineCode for Nrzi {
    fn encode(&self, bits: &[Bit]) -> Result<Signal, CodecError> {
        Ok(nrzi_encode(bits, self.initial))
    }

    fn decode(&self, signal: &[Level]) -> Result<BitString, CodecError> {
        Ok(nrzi_decode(signal))
    }

    fn name(&self) -> &'static str {
        "nrzi"
    }
}
