//! Special characters tokenizer implementation.

use super::Tokenizer;

use crate::analysis::delimiter::DelimiterSet;
use crate::analysis::token::{IntoTokenStream, TokenStream, remove_empty, split_on};
use crate::error::Result;

/// A tokenizer that splits text on punctuation and spaces.
///
/// Every character of [`SPECIAL_CHARS`](crate::analysis::delimiter::SPECIAL_CHARS)
/// is a single split point. Empty tokens are removed after splitting.
#[derive(Clone, Debug)]
pub struct SpecialCharsTokenizer {
    delimiters: DelimiterSet,
}

impl SpecialCharsTokenizer {
    /// Create a new special characters tokenizer.
    pub fn new() -> Self {
        SpecialCharsTokenizer {
            delimiters: DelimiterSet::special_chars(),
        }
    }

    /// The delimiter class used by this tokenizer.
    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }
}

impl Default for SpecialCharsTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for SpecialCharsTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens = split_on(text, |ch| self.delimiters.contains(ch));
        Ok(remove_empty(tokens).into_token_stream())
    }

    fn name(&self) -> &'static str {
        "specialchars"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn texts(text: &str) -> Vec<String> {
        SpecialCharsTokenizer::new()
            .tokenize(text)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_special_chars_tokenizer() {
        assert_eq!(texts("hello, world!! foo"), vec!["hello", "world", "foo"]);
    }

    #[test]
    fn test_brackets_and_backslash() {
        assert_eq!(texts(r"a[b]c\d^e"), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(texts("x_y+z"), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_tabs_and_newlines_are_kept() {
        assert_eq!(texts("a\tb\nc"), vec!["a\tb\nc"]);
    }

    #[test]
    fn test_only_delimiters() {
        assert!(texts("").is_empty());
        assert!(texts("?!., ").is_empty());
    }

    #[test]
    fn test_offsets_survive_filtering() {
        let tokens: Vec<Token> = SpecialCharsTokenizer::new()
            .tokenize("(hi) there")
            .unwrap()
            .collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].start_offset, 1);
        assert_eq!(tokens[0].end_offset, 3);
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 5);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(SpecialCharsTokenizer::new().name(), "specialchars");
    }
}
