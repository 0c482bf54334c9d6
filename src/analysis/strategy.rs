//! Splitting strategies.
//!
//! A [`SplitStrategy`] selects which splitting rule a
//! [`StrategyTokenizer`](crate::analysis::tokenizer::StrategyTokenizer) applies.
//! Strategies are usually chosen from a textual tag (command line flag or
//! config file), so the enum round-trips through the lowercase tags
//! `space`, `periods`, `specialchars`, `newline` and `custom`.
//!
//! # Examples
//!
//! ```
//! use tokenkit::analysis::strategy::SplitStrategy;
//!
//! let strategy: SplitStrategy = "Periods".parse().unwrap();
//! assert_eq!(strategy, SplitStrategy::Periods);
//! assert_eq!(strategy.to_string(), "periods");
//!
//! assert!("bogus".parse::<SplitStrategy>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenKitError};

/// The closed set of splitting rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitStrategy {
    /// Split on runs of whitespace, trimming both ends.
    Space,
    /// Split on every `.` or space individually.
    Periods,
    /// Split on every character of the fixed punctuation class or space.
    SpecialChars,
    /// Split on every `\n` individually.
    Newline,
    /// Split on every character of a user supplied delimiter set.
    Custom,
}

impl SplitStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [SplitStrategy; 5] = [
        SplitStrategy::Space,
        SplitStrategy::Periods,
        SplitStrategy::SpecialChars,
        SplitStrategy::Newline,
        SplitStrategy::Custom,
    ];

    /// The canonical tag of this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitStrategy::Space => "space",
            SplitStrategy::Periods => "periods",
            SplitStrategy::SpecialChars => "specialchars",
            SplitStrategy::Newline => "newline",
            SplitStrategy::Custom => "custom",
        }
    }

    /// A one-line, human readable description of the rule.
    pub fn description(&self) -> &'static str {
        match self {
            SplitStrategy::Space => "split on runs of whitespace, never yields empty tokens",
            SplitStrategy::Periods => "split on each '.' or ' ', keeps empty tokens",
            SplitStrategy::SpecialChars => {
                "split on each punctuation character or ' ', drops empty tokens"
            }
            SplitStrategy::Newline => "split on each '\\n', keeps empty tokens",
            SplitStrategy::Custom => "split on each configured delimiter, drops empty tokens",
        }
    }

    /// Whether this strategy can return empty tokens.
    pub fn may_yield_empty(&self) -> bool {
        matches!(self, SplitStrategy::Periods | SplitStrategy::Newline)
    }

    /// Whether this strategy needs a custom delimiter set.
    pub fn requires_delimiters(&self) -> bool {
        matches!(self, SplitStrategy::Custom)
    }
}

impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitStrategy {
    type Err = TokenKitError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "space" => Ok(SplitStrategy::Space),
            "periods" => Ok(SplitStrategy::Periods),
            // "nonalphanumeric" is the historical name of this mode.
            "specialchars" | "nonalphanumeric" => Ok(SplitStrategy::SpecialChars),
            "newline" => Ok(SplitStrategy::Newline),
            "custom" => Ok(SplitStrategy::Custom),
            _ => Err(TokenKitError::invalid_strategy(tag)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        for strategy in SplitStrategy::ALL {
            assert_eq!(strategy.as_str().parse::<SplitStrategy>().unwrap(), strategy);
        }
        assert_eq!(
            " SpecialChars ".parse::<SplitStrategy>().unwrap(),
            SplitStrategy::SpecialChars
        );
        assert_eq!(
            "nonalphanumeric".parse::<SplitStrategy>().unwrap(),
            SplitStrategy::SpecialChars
        );
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = "bogus".parse::<SplitStrategy>().unwrap_err();
        assert!(matches!(err, TokenKitError::InvalidStrategy(ref tag) if tag == "bogus"));

        assert!("".parse::<SplitStrategy>().is_err());
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_string(&SplitStrategy::SpecialChars).unwrap();
        assert_eq!(json, "\"specialchars\"");

        let strategy: SplitStrategy = serde_json::from_str("\"newline\"").unwrap();
        assert_eq!(strategy, SplitStrategy::Newline);
    }

    #[test]
    fn test_empty_token_classification() {
        assert!(SplitStrategy::Periods.may_yield_empty());
        assert!(SplitStrategy::Newline.may_yield_empty());
        assert!(!SplitStrategy::Space.may_yield_empty());
        assert!(!SplitStrategy::SpecialChars.may_yield_empty());
        assert!(!SplitStrategy::Custom.may_yield_empty());
    }
}
