//! Line coding for two-level baseband signals.
//!
//! Provides NRZ, NRZI and Manchester strategies for turning bit sequences
//! into `High`/`Low` signal levels and back.
//!
//! ```
//! use linecode_codec::{BitString, CodecStrategy, Level};
//!
//! let bits: BitString = "1011001".parse().unwrap();
//! let signal = CodecStrategy::Nrzi { initial: Level::Low }.encode(&bits).unwrap();
//! assert_eq!(signal.to_string(), "LHHLHHHL");
//! ```

pub mod base;
mod error;
pub mod prelude;
mod strategies;
mod traits;

pub use base::{Bit, BitString, Level, Signal};
pub use error::CodecError as Error;
pub use error::CodecError;
pub use strategies::{
    manchester_decode, manchester_encode, nrz_decode, nrz_encode, nrzi_decode, nrzi_encode,
    Manchester, Nrz, Nrzi,
};
pub use traits::LineCode;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Line codes available for encoding bit sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "lowercase")]
pub enum CodecStrategy {
    /// One level per bit, `1 -> High`.
    Nrz,
    /// Level toggles on `1`, prefixed by the reference level.
    Nrzi {
        #[serde(default)]
        initial: Level,
    },
    /// Two opposite levels per bit (`0 -> LH`, `1 -> HL`).
    Manchester,
}

impl CodecStrategy {
    /// Every strategy, with NRZI starting from `Low`.
    pub const ALL: [CodecStrategy; 3] = [
        CodecStrategy::Nrz,
        CodecStrategy::Nrzi {
            initial: Level::Low,
        },
        CodecStrategy::Manchester,
    ];

    /// Names accepted by `FromStr`.
    pub const NAMES: [&'static str; 5] = ["nrz", "nrzi", "nrzi-low", "nrzi-high", "manchester"];

    /// Encode using the selected strategy.
    pub fn encode(&self, bits: &[Bit]) -> Result<Signal, CodecError> {
        trace!(strategy = %self, bits = bits.len(), "encode");
        match self {
            CodecStrategy::Nrz => Nrz.encode(bits),
            CodecStrategy::Nrzi { initial } => Nrzi::new(*initial).encode(bits),
            CodecStrategy::Manchester => Manchester.encode(bits),
        }
    }

    /// Decode using the selected strategy.
    pub fn decode(&self, signal: &[Level]) -> Result<BitString, CodecError> {
        trace!(strategy = %self, symbols = signal.len(), "decode");
        let result = match self {
            CodecStrategy::Nrz => Nrz.decode(signal),
            CodecStrategy::Nrzi { initial } => Nrzi::new(*initial).decode(signal),
            CodecStrategy::Manchester => Manchester.decode(signal),
        };
        if let Err(e) = &result {
            debug!(strategy = %self, error = %e, "decode failed");
        }
        result
    }

    /// Length of the signal produced for `bits_len` input bits.
    pub const fn encoded_len(&self, bits_len: usize) -> usize {
        match self {
            CodecStrategy::Nrz => bits_len,
            CodecStrategy::Nrzi { .. } => bits_len + 1,
            CodecStrategy::Manchester => 2 * bits_len,
        }
    }

    /// Parse `text` as a bitstring, encode it and render the signal as text.
    pub fn encode_str(&self, text: &str) -> Result<String, CodecError> {
        let bits: BitString = text.parse()?;
        Ok(self.encode(&bits)?.to_string())
    }

    /// Parse `text` as a signal, decode it and render the bits as text.
    pub fn decode_str(&self, text: &str) -> Result<String, CodecError> {
        let signal: Signal = text.parse()?;
        Ok(self.decode(&signal)?.to_string())
    }
}

impl Default for CodecStrategy {
    fn default() -> Self {
        Self::Manchester
    }
}

impl std::fmt::Display for CodecStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nrz => write!(f, "nrz"),
            Self::Nrzi {
                initial: Level::Low,
            } => write!(f, "nrzi"),
            Self::Nrzi {
                initial: Level::High,
            } => write!(f, "nrzi-high"),
            Self::Manchester => write!(f, "manchester"),
        }
    }
}

impl std::str::FromStr for CodecStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nrz" => Ok(Self::Nrz),
            "nrzi" | "nrzi-low" => Ok(Self::Nrzi {
                initial: Level::Low,
            }),
            "nrzi-high" => Ok(Self::Nrzi {
                initial: Level::High,
            }),
            "manchester" => Ok(Self::Manchester),
            _ => Err(format!(
                "Unknown line code: {s}. Available: {}",
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl LineCode for CodecStrategy {
    fn encode(&self, bits: &[Bit]) -> Result<Signal, CodecError> {
        CodecStrategy::encode(self, bits)
    }

    fn decode(&self, signal: &[Level]) -> Result<BitString, CodecError> {
        CodecStrategy::decode(self, signal)
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Nrz => Nrz.name(),
            Self::Nrzi { .. } => Nrzi::default().name(),
            Self::Manchester => Manchester.name(),
        }
    }
}
