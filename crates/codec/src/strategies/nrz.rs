use crate::base::{Bit, BitString, Level, Signal};
use crate::error::CodecError;
use crate::traits::LineCode;

/// Strategy: Non-Return-to-Zero (`1 -> High`, `0 -> Low`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nrz;

/// Map each bit to one level, preserving order and length.
pub fn nrz_encode(bits: &[Bit]) -> Signal {
    bits.iter().map(|&bit| Level::from(bit.is_one())).collect()
}

/// Inverse of [`nrz_encode`]: `High -> 1`, `Low -> 0`.
pub fn nrz_decode(signal: &[Level]) -> BitString {
    signal.iter().map(|&level| Bit::from(level.is_high())).collect()
}

impl LineCode for Nrz {
    fn encode(&self, bits: &[Bit]) -> Result<Signal, CodecError> {
        Ok(nrz_encode(bits))
    }

    fn decode(&self, signal: &[Level]) -> Result<BitString, CodecError> {
        Ok(nrz_decode(signal))
    }

    fn name(&self) -> &'static str {
        "nrz"
    }
}
