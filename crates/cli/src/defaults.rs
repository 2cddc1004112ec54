//! Shared default values for the command line.
//! Used both as clap defaults and as the fallback when no config file sets a value.

use linecode_codec::{CodecStrategy, Level};

pub const SCHEME: CodecStrategy = CodecStrategy::Manchester;
pub const INITIAL_LEVEL: Level = Level::Low;

/// Bit pattern used by `linecode demo` when none is given.
pub const DEMO_BITS: &str = "1011001";

/// Columns drawn per signal symbol in step traces.
pub const UNIT_WIDTH: u16 = 2;
