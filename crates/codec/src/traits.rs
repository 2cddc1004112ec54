use crate::base::{Bit, BitString, Level, Signal};
use crate::error::CodecError;

/// Core trait for line codes.
///
/// Every strategy (`Nrz`, `Nrzi`, `Manchester`) maps a complete bit sequence
/// to a two-level signal and back:
/// 1.  `encode`: bits to signal levels.
/// 2.  `decode`: signal levels back to the original bits.
///
/// Implementations keep no state between calls, so a single value can be
/// shared freely across threads.
pub trait LineCode {
    fn encode(&self, bits: &[Bit]) -> Result<Signal, CodecError>;
    fn decode(&self, signal: &[Level]) -> Result<BitString, CodecError>;

    /// Short lowercase name of the line code, e.g. `"nrz"`.
    fn name(&self) -> &'static str;
}
