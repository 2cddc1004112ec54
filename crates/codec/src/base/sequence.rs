use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::symbol::{Bit, Level, BIT_ALPHABET, LEVEL_ALPHABET};
use crate::error::CodecError;

/// An ordered sequence of bits.
///
/// `BitString` is an immutable value: codecs build a fresh one per call and
/// never mutate it afterwards. It dereferences to `[Bit]`, so every codec entry
/// point that takes `&[Bit]` also accepts `&BitString`.
///
/// In text form a `BitString` is written with `'0'` and `'1'` and serializes
/// as that string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BitString(Vec<Bit>);

impl BitString {
    /// Create an empty `BitString`.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Borrow the underlying `Bit` slice.
    #[inline]
    pub fn as_slice(&self) -> &[Bit] {
        &self.0
    }
}

impl Deref for BitString {
    type Target = [Bit];

    fn deref(&self) -> &[Bit] {
        &self.0
    }
}

impl From<Vec<Bit>> for BitString {
    fn from(bits: Vec<Bit>) -> Self {
        Self(bits)
    }
}

impl FromIterator<Bit> for BitString {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            write!(f, "{}", bit.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = CodecError;

    /// Parse a textual bitstring such as `"1011001"`.
    ///
    /// Stops at the first character outside `0`/`1` and reports it with its
    /// character position as `InvalidSymbol`. The empty string is valid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| {
                Bit::from_char(c).ok_or(CodecError::InvalidSymbol {
                    symbol: c,
                    position,
                    alphabet: BIT_ALPHABET,
                })
            })
            .collect()
    }
}

impl From<BitString> for String {
    fn from(bits: BitString) -> String {
        bits.to_string()
    }
}

impl TryFrom<String> for BitString {
    type Error = CodecError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// An ordered sequence of signal levels.
///
/// Written with `'H'` and `'L'` in text form (lowercase accepted on input).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Signal(Vec<Level>);

impl Signal {
    /// Create an empty `Signal`.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Borrow the underlying `Level` slice.
    #[inline]
    pub fn as_slice(&self) -> &[Level] {
        &self.0
    }

    /// Count level changes between adjacent symbols.
    pub fn transitions(&self) -> usize {
        self.0.windows(2).filter(|w| w[0] != w[1]).count()
    }

    /// Split the signal into maximal runs of equal levels.
    ///
    /// Returns `(level, run_length)` pairs in order; an empty signal has no
    /// runs.
    pub fn runs(&self) -> Vec<(Level, usize)> {
        let mut runs: Vec<(Level, usize)> = Vec::new();
        for &level in &self.0 {
            match runs.last_mut() {
                Some((current, len)) if *current == level => *len += 1,
                _ => runs.push((level, 1)),
            }
        }
        runs
    }
}

impl Deref for Signal {
    type Target = [Level];

    fn deref(&self) -> &[Level] {
        &self.0
    }
}

impl From<Vec<Level>> for Signal {
    fn from(levels: Vec<Level>) -> Self {
        Self(levels)
    }
}

impl FromIterator<Level> for Signal {
    fn from_iter<I: IntoIterator<Item = Level>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &level in &self.0 {
            write!(f, "{}", level.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Signal {
    type Err = CodecError;

    /// Parse a textual signal such as `"LHHL"`.
    ///
    /// Case-insensitive. The first character outside `H`/`L` is reported as
    /// `InvalidSymbol` with its character position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| {
                Level::from_char(c).ok_or(CodecError::InvalidSymbol {
                    symbol: c,
                    position,
                    alphabet: LEVEL_ALPHABET,
                })
            })
            .collect()
    }
}

impl From<Signal> for String {
    fn from(signal: Signal) -> String {
        signal.to_string()
    }
}

impl TryFrom<String> for Signal {
    type Error = CodecError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
