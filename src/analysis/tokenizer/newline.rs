//! Newline tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{IntoTokenStream, TokenStream, split_on};
use crate::error::Result;

/// A tokenizer that splits text on every `\n`.
///
/// No trimming and no filtering: consecutive newlines yield empty tokens and
/// a carriage return before `\n` stays part of the preceding token.
#[derive(Clone, Debug, Default)]
pub struct NewlineTokenizer;

impl NewlineTokenizer {
    /// Create a new newline tokenizer.
    pub fn new() -> Self {
        NewlineTokenizer
    }
}

impl Tokenizer for NewlineTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(split_on(text, |ch| ch == '\n').into_token_stream())
    }

    fn name(&self) -> &'static str {
        "newline"
    }
}
