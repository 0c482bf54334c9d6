//! # tokenkit
//!
//! A configurable text tokenizer. A [`StrategyTokenizer`](analysis::tokenizer::StrategyTokenizer)
//! is built once from a splitting strategy and turns text into an ordered
//! sequence of tokens.
//!
//! ## Strategies
//!
//! - `space` - runs of whitespace, never empty tokens
//! - `periods` - each `.` or space, empty tokens kept
//! - `specialchars` - each punctuation character or space, empty tokens dropped
//! - `newline` - each `\n`, empty tokens kept
//! - `custom` - each character of a user supplied set, empty tokens dropped
//!
//! ```
//! use tokenkit::prelude::*;
//!
//! let tokenizer = StrategyTokenizer::new(SplitStrategy::SpecialChars, None).unwrap();
//! assert_eq!(
//!     tokenizer.tokenize("hello, world!! foo").unwrap(),
//!     vec!["hello", "world", "foo"]
//! );
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;

pub mod prelude {
    pub use crate::analysis::delimiter::DelimiterSet;
    pub use crate::analysis::strategy::SplitStrategy;
    pub use crate::analysis::token::Token;
    pub use crate::analysis::tokenizer::{StrategyTokenizer, Tokenizer};
    pub use crate::config::TokenizerConfig;
    pub use crate::error::{Result, TokenKitError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
