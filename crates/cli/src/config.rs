//! Optional JSON configuration file.
//!
//! ```json
//! { "strategy": { "scheme": "nrzi" }, "initial": "High" }
//! ```
//!
//! Command-line flags override file values, file values override the
//! built-in defaults.

use anyhow::{Context, Result};
use linecode_codec::{CodecStrategy, Level};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::args::SchemeArg;
use crate::defaults;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Line code used when `--scheme` is not given.
    pub strategy: Option<CodecStrategy>,
    /// NRZI reference level used when `--initial` is not given.
    pub initial: Option<Level>,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(?config, path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Pick the strategy to run from the command-line values and this config.
    ///
    /// The config `initial` level applies to any NRZI strategy unless the
    /// scheme name already fixed the level; `--initial` overrides both.
    pub fn resolve(&self, scheme: Option<SchemeArg>, initial: Option<Level>) -> CodecStrategy {
        let strategy = match scheme {
            Some(SchemeArg {
                strategy,
                explicit_level: true,
            }) => strategy,
            Some(SchemeArg { strategy, .. }) => self.with_config_initial(strategy),
            None => self.with_config_initial(self.strategy.unwrap_or(defaults::SCHEME)),
        };
        match initial {
            Some(level) => with_initial(strategy, level),
            None => strategy,
        }
    }

    fn with_config_initial(&self, strategy: CodecStrategy) -> CodecStrategy {
        match self.initial {
            Some(level) => with_initial(strategy, level),
            None => strategy,
        }
    }

    /// Reference level for commands that always run NRZI.
    pub fn initial_level(&self, initial: Option<Level>) -> Level {
        initial
            .or(self.initial)
            .unwrap_or(defaults::INITIAL_LEVEL)
    }
}

fn with_initial(strategy: CodecStrategy, level: Level) -> CodecStrategy {
    match strategy {
        CodecStrategy::Nrzi { .. } => CodecStrategy::Nrzi { initial: level },
        other => other,
    }
}
