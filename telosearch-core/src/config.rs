use std::path::Path;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_INCLUDE_REVERSE, DEFAULT_THREADS, MAX_TELOMERE_LENGTH, MIN_TELOMERE_LENGTH,
};
use crate::errors::{Result, TelomereError};
use crate::index::validate_window;

/// Search settings, usually read from a TOML file:
///
/// ```toml
/// min_length = 20
/// max_length = 25
/// include_reverse = true
/// threads = 8
/// ```
///
/// Missing keys fall back to the crate defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub include_reverse: bool,
    pub threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_length: MIN_TELOMERE_LENGTH,
            max_length: MAX_TELOMERE_LENGTH,
            include_reverse: DEFAULT_INCLUDE_REVERSE,
            threads: DEFAULT_THREADS,
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: SearchConfig =
            toml::from_str(contents).map_err(|e| TelomereError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        validate_window(self.min_length, self.max_length)
    }
}
