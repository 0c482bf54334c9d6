//! Tokenizer configuration.
//!
//! A [`TokenizerConfig`] is the serializable form of a
//! [`StrategyTokenizer`](crate::analysis::tokenizer::StrategyTokenizer). The
//! strategy is stored as its raw tag so an unknown tag in a config file is
//! reported as [`InvalidStrategy`](crate::error::TokenKitError::InvalidStrategy)
//! when the tokenizer is built, not as a JSON error.
//!
//! ```
//! use tokenkit::config::TokenizerConfig;
//! use tokenkit::analysis::tokenizer::StrategyTokenizer;
//!
//! let config = TokenizerConfig::from_json_str(
//!     r##"{"strategy": "custom", "custom_delimiters": "#@"}"##,
//! ).unwrap();
//! let tokenizer = StrategyTokenizer::from_config(&config).unwrap();
//! assert_eq!(tokenizer.tokenize("a#b@@c").unwrap(), vec!["a", "b", "c"]);
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::strategy::SplitStrategy;
use crate::error::Result;

/// Configuration for a strategy tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Strategy tag (`space`, `periods`, `specialchars`, `newline`, `custom`).
    pub strategy: String,

    /// Delimiter characters, used only by the `custom` strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_delimiters: Option<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            strategy: SplitStrategy::Space.as_str().to_string(),
            custom_delimiters: None,
        }
    }
}

impl TokenizerConfig {
    /// Create a configuration for `strategy`.
    pub fn new(strategy: SplitStrategy) -> Self {
        Self {
            strategy: strategy.as_str().to_string(),
            custom_delimiters: None,
        }
    }

    /// Create a configuration for the custom strategy.
    pub fn custom<S: Into<String>>(delimiters: S) -> Self {
        Self {
            strategy: SplitStrategy::Custom.as_str().to_string(),
            custom_delimiters: Some(delimiters.into()),
        }
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serialize this configuration to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
