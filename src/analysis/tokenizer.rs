//! Tokenizer implementations for text analysis.
//!
//! Each splitting rule is its own [`Tokenizer`]; [`StrategyTokenizer`]
//! dispatches to one of them based on a [`SplitStrategy`](crate::analysis::strategy::SplitStrategy).
//!
//! # Available Tokenizers
//!
//! - [`space::SpaceTokenizer`] - Splits on runs of whitespace
//! - [`periods::PeriodsTokenizer`] - Splits on each `.` or space
//! - [`special_chars::SpecialCharsTokenizer`] - Splits on punctuation and spaces
//! - [`newline::NewlineTokenizer`] - Splits on each `\n`
//! - [`custom::CustomTokenizer`] - Splits on a user supplied character class
//!
//! # Examples
//!
//! ```
//! use tokenkit::analysis::tokenizer::Tokenizer;
//! use tokenkit::analysis::tokenizer::space::SpaceTokenizer;
//!
//! let tokenizer = SpaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so tokenizers can be shared across threads.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use tokenkit::analysis::token::{Token, TokenStream};
/// use tokenkit::analysis::tokenizer::Tokenizer;
/// use tokenkit::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod custom;
pub mod newline;
pub mod periods;
pub mod space;
pub mod special_chars;
pub mod strategy;

pub use strategy::StrategyTokenizer;
