//! Periods tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{IntoTokenStream, TokenStream, split_on};
use crate::error::Result;

/// A tokenizer that splits text on every `.` and every space.
///
/// Each delimiter is its own split point: nothing is collapsed or filtered,
/// so adjacent delimiters and delimiters at either end yield empty tokens.
#[derive(Clone, Debug, Default)]
pub struct PeriodsTokenizer;

impl PeriodsTokenizer {
    /// Create a new periods tokenizer.
    pub fn new() -> Self {
        PeriodsTokenizer
    }

    #[inline]
    fn is_delimiter(ch: char) -> bool {
        ch == '.' || ch == ' '
    }
}

impl Tokenizer for PeriodsTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(split_on(text, Self::is_delimiter).into_token_stream())
    }

    fn name(&self) -> &'static str {
        "periods"
    }
}
