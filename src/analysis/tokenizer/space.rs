//! Space tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{IntoTokenStream, TokenStream, split_runs};
use crate::error::Result;

/// A tokenizer that splits text on runs of whitespace.
///
/// Leading and trailing whitespace is trimmed and runs collapse, so this
/// tokenizer never produces empty tokens.
#[derive(Clone, Debug, Default)]
pub struct SpaceTokenizer;

impl SpaceTokenizer {
    /// Create a new space tokenizer.
    pub fn new() -> Self {
        SpaceTokenizer
    }
}

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(split_runs(text, char::is_whitespace).into_token_stream())
    }

    fn name(&self) -> &'static str {
        "space"
    }
}
