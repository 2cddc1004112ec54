//! Commonly used imports for convenience.
//!
//! ```
//! use linecode_codec::prelude::*;
//!
//! let bits: BitString = "0110".parse().unwrap();
//! assert_eq!(manchester_encode(&bits).to_string(), "LHHLHLLH");
//! ```

pub use crate::base::{Bit, BitString, Level, Signal};
pub use crate::error::CodecError;
pub use crate::strategies::{
    manchester_decode, manchester_encode, nrz_decode, nrz_encode, nrzi_decode, nrzi_encode,
    Manchester, Nrz, Nrzi,
};
pub use crate::traits::LineCode;
pub use crate::CodecStrategy;
