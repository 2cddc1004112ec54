//! Symbol and sequence types.
//!
//! `Bit` and `Level` are closed two-value alphabets; `BitString` and `Signal`
//! are the immutable sequences the codecs consume and produce.

mod sequence;
mod symbol;

pub use sequence::{BitString, Signal};
pub use symbol::{Bit, Level, BIT_ALPHABET, LEVEL_ALPHABET};
