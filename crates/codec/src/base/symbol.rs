use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Alphabet accepted for bits in text form.
pub const BIT_ALPHABET: &str = "01";

/// Alphabet accepted for signal levels in text form.
pub const LEVEL_ALPHABET: &str = "HL";

/// A single binary digit.
///
/// `Bit` is a closed two-value enumeration backed by a single byte
/// (`Zero = 0`, `One = 1`). Text conversion uses the characters `'0'` and
/// `'1'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Bit {
    Zero = 0,
    One = 1,
}

impl Bit {
    /// Convert from a character (`'0'` or `'1'`). Returns `None` for anything else.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            _ => None,
        }
    }

    /// Convert to the character `'0'` or `'1'`.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }

    /// Return true for `Bit::One`.
    #[inline(always)]
    pub const fn is_one(self) -> bool {
        matches!(self, Self::One)
    }
}

impl From<bool> for Bit {
    #[inline(always)]
    fn from(value: bool) -> Self {
        if value {
            Self::One
        } else {
            Self::Zero
        }
    }
}

impl From<Bit> for bool {
    #[inline(always)]
    fn from(bit: Bit) -> bool {
        bit.is_one()
    }
}

impl From<Bit> for char {
    #[inline(always)]
    fn from(bit: Bit) -> char {
        bit.to_char()
    }
}

impl TryFrom<char> for Bit {
    type Error = CodecError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(CodecError::InvalidSymbol {
            symbol: c,
            position: 0,
            alphabet: BIT_ALPHABET,
        })
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A two-level baseband signal state.
///
/// Text conversion uses `'H'` and `'L'`; lowercase input is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Level {
    Low = 0,
    High = 1,
}

impl Level {
    /// Convert from `'H'`/`'L'` (case-insensitive).
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'H' | 'h' => Some(Self::High),
            'L' | 'l' => Some(Self::Low),
            _ => None,
        }
    }

    /// Convert to the uppercase character `'H'` or `'L'`.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        match self {
            Self::High => 'H',
            Self::Low => 'L',
        }
    }

    /// Return the opposite level.
    #[inline(always)]
    pub const fn toggle(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }

    #[inline(always)]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::Low
    }
}

impl From<bool> for Level {
    #[inline(always)]
    fn from(value: bool) -> Self {
        if value {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<Level> for char {
    #[inline(always)]
    fn from(level: Level) -> char {
        level.to_char()
    }
}

impl TryFrom<char> for Level {
    type Error = CodecError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(CodecError::InvalidSymbol {
            symbol: c,
            position: 0,
            alphabet: LEVEL_ALPHABET,
        })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
