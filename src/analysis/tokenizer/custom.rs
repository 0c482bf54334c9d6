//! Custom delimiter tokenizer implementation.

use super::Tokenizer;

use crate::analysis::delimiter::DelimiterSet;
use crate::analysis::token::{IntoTokenStream, TokenStream, remove_empty, split_on};
use crate::error::Result;

/// A tokenizer that splits text on a user supplied character class.
///
/// Each delimiter character is a literal split point. Empty tokens are
/// removed after splitting.
///
/// # Examples
///
/// ```
/// use tokenkit::analysis::tokenizer::Tokenizer;
/// use tokenkit::analysis::tokenizer::custom::CustomTokenizer;
///
/// let tokenizer = CustomTokenizer::new("#@").unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("a#b@@c").unwrap().map(|t| t.text).collect();
/// assert_eq!(tokens, vec!["a", "b", "c"]);
/// ```
#[derive(Clone, Debug)]
pub struct CustomTokenizer {
    delimiters: DelimiterSet,
}

impl CustomTokenizer {
    /// Create a new custom tokenizer from the characters of `delimiters`.
    ///
    /// Fails when `delimiters` is empty.
    pub fn new(delimiters: &str) -> Result<Self> {
        Ok(Self::with_delimiters(DelimiterSet::new(delimiters)?))
    }

    /// Create a new custom tokenizer from an existing delimiter set.
    pub fn with_delimiters(delimiters: DelimiterSet) -> Self {
        CustomTokenizer { delimiters }
    }

    /// The delimiter class used by this tokenizer.
    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }
}

impl Tokenizer for CustomTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens = split_on(text, |ch| self.delimiters.contains(ch));
        Ok(remove_empty(tokens).into_token_stream())
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}
