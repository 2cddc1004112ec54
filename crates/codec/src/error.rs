use thiserror::Error;

use crate::base::Level;

/// Error type for codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A text input contained a character outside its two-symbol alphabet.
    #[error("Invalid symbol '{symbol}' at position {position} (expected one of \"{alphabet}\")")]
    InvalidSymbol {
        symbol: char,
        position: usize,
        alphabet: &'static str,
    },
    /// A Manchester signal must contain a whole number of symbol pairs.
    #[error("Malformed Manchester signal: length {len} is odd")]
    MalformedLength { len: usize },
    /// A Manchester symbol pair was neither `LH` nor `HL`.
    ///
    /// `position` is the offset of the pair's first symbol in the signal.
    #[error("Invalid Manchester pair '{first}{second}' at position {position}")]
    InvalidPair {
        first: Level,
        second: Level,
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CodecError::InvalidSymbol {
            symbol: '2',
            position: 3,
            alphabet: "01",
        };
        assert_eq!(
            err.to_string(),
            "Invalid symbol '2' at position 3 (expected one of \"01\")"
        );

        let err = CodecError::MalformedLength { len: 3 };
        assert!(err.to_string().contains("length 3 is odd"));

        let err = CodecError::InvalidPair {
            first: Level::Low,
            second: Level::Low,
            position: 0,
        };
        assert_eq!(err.to_string(), "Invalid Manchester pair 'LL' at position 0");
    }
}
