//! Strategy-dispatching tokenizer.
//!
//! [`StrategyTokenizer`] is the main entry point of the crate: it is built
//! once from a [`SplitStrategy`] (plus a delimiter set for
//! [`SplitStrategy::Custom`]) and can then tokenize any number of texts.
//! It holds no mutable state, so a single instance can be shared across
//! threads without locking.

use std::sync::LazyLock;

use log::{debug, trace};
use rayon::prelude::*;

use super::Tokenizer;
use super::custom::CustomTokenizer;
use super::newline::NewlineTokenizer;
use super::periods::PeriodsTokenizer;
use super::space::SpaceTokenizer;
use super::special_chars::SpecialCharsTokenizer;

use crate::analysis::delimiter::DelimiterSet;
use crate::analysis::strategy::SplitStrategy;
use crate::analysis::token::{Token, TokenStream};
use crate::config::TokenizerConfig;
use crate::error::{Result, TokenKitError};

static SPECIAL_CHARS_TOKENIZER: LazyLock<SpecialCharsTokenizer> =
    LazyLock::new(SpecialCharsTokenizer::new);

/// A tokenizer that applies one of the five splitting strategies.
///
/// Construction is validated eagerly: an unknown strategy tag fails with
/// [`TokenKitError::InvalidStrategy`] and a custom strategy without
/// delimiters fails with [`TokenKitError::InvalidConfig`], so every
/// constructed tokenizer is usable.
///
/// # Examples
///
/// ```
/// use tokenkit::analysis::strategy::SplitStrategy;
/// use tokenkit::analysis::tokenizer::StrategyTokenizer;
///
/// let tokenizer = StrategyTokenizer::new(SplitStrategy::Periods, None).unwrap();
/// assert_eq!(tokenizer.tokenize("a.b. c").unwrap(), vec!["a", "b", "", "c"]);
///
/// let tokenizer = StrategyTokenizer::new(SplitStrategy::Custom, Some("#@")).unwrap();
/// assert_eq!(tokenizer.tokenize("a#b@@c").unwrap(), vec!["a", "b", "c"]);
///
/// assert!(StrategyTokenizer::from_tag("bogus", None).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct StrategyTokenizer {
    strategy: SplitStrategy,
    /// Present iff `strategy` is `Custom`
    custom: Option<CustomTokenizer>,
}

impl StrategyTokenizer {
    /// Create a tokenizer for `strategy`.
    ///
    /// `custom_delimiters` is required (and must be non-empty) for
    /// [`SplitStrategy::Custom`] and ignored otherwise.
    pub fn new(strategy: SplitStrategy, custom_delimiters: Option<&str>) -> Result<Self> {
        let custom = match (strategy, custom_delimiters) {
            (SplitStrategy::Custom, Some(chars)) => Some(CustomTokenizer::new(chars)?),
            (SplitStrategy::Custom, None) => {
                return Err(TokenKitError::invalid_config(
                    "the custom strategy requires a delimiter set",
                ));
            }
            (_, Some(chars)) => {
                debug!("ignoring delimiters {chars:?} for the {strategy} strategy");
                None
            }
            (_, None) => None,
        };

        debug!("created {strategy} tokenizer");
        Ok(StrategyTokenizer { strategy, custom })
    }

    /// Create a custom tokenizer from an already validated delimiter set.
    pub fn with_delimiters(delimiters: DelimiterSet) -> Self {
        StrategyTokenizer {
            strategy: SplitStrategy::Custom,
            custom: Some(CustomTokenizer::with_delimiters(delimiters)),
        }
    }

    /// Create a tokenizer from a textual strategy tag such as `"space"`.
    pub fn from_tag(tag: &str, custom_delimiters: Option<&str>) -> Result<Self> {
        Self::new(tag.parse()?, custom_delimiters)
    }

    /// Create a tokenizer from a deserialized configuration.
    pub fn from_config(config: &TokenizerConfig) -> Result<Self> {
        Self::from_tag(&config.strategy, config.custom_delimiters.as_deref())
    }

    /// The strategy this tokenizer applies.
    pub fn strategy(&self) -> SplitStrategy {
        self.strategy
    }

    /// The custom delimiter set, if the strategy is `Custom`.
    pub fn delimiters(&self) -> Option<&DelimiterSet> {
        self.custom.as_ref().map(CustomTokenizer::delimiters)
    }

    /// Split `text` into a stream of tokens with positions and offsets.
    pub fn token_stream(&self, text: &str) -> Result<TokenStream> {
        trace!("tokenizing {} bytes with {}", text.len(), self.strategy);

        match self.strategy {
            SplitStrategy::Space => SpaceTokenizer::new().tokenize(text),
            SplitStrategy::Periods => PeriodsTokenizer::new().tokenize(text),
            SplitStrategy::SpecialChars => SPECIAL_CHARS_TOKENIZER.tokenize(text),
            SplitStrategy::Newline => NewlineTokenizer::new().tokenize(text),
            SplitStrategy::Custom => match &self.custom {
                Some(tokenizer) => tokenizer.tokenize(text),
                None => Err(TokenKitError::invalid_config(
                    "the custom strategy requires a delimiter set",
                )),
            },
        }
    }

    /// Split `text` into tokens with positions and offsets.
    pub fn tokens(&self, text: &str) -> Result<Vec<Token>> {
        Ok(self.token_stream(text)?.collect())
    }

    /// Split `text` into an ordered sequence of token strings.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.token_stream(text)?.map(|token| token.text).collect())
    }

    /// Tokenize independent texts in parallel.
    ///
    /// The outer sequence follows the order of `texts`.
    pub fn tokenize_batch<S>(&self, texts: &[S]) -> Result<Vec<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        debug!("tokenizing a batch of {} texts with {}", texts.len(), self.strategy);
        texts
            .par_iter()
            .map(|text| self.tokenize(text.as_ref()))
            .collect()
    }

    /// Get the name of the applied strategy.
    pub fn name(&self) -> &'static str {
        self.strategy.as_str()
    }
}
