//! Token types and splitting primitives.
//!
//! A [`Token`] is a contiguous slice of the input text together with its
//! position in the output sequence and its byte offsets in the input.
//! Every splitting rule is built from one of two primitives:
//!
//! - [`split_on`] - each delimiter character is its own split point, empty
//!   pieces are kept
//! - [`split_runs`] - runs of delimiter characters collapse, leading and
//!   trailing delimiters are trimmed, no empty pieces are produced
//!
//! # Examples
//!
//! ```
//! use tokenkit::analysis::token::{split_on, split_runs};
//!
//! let pieces: Vec<_> = split_on("a..b", |c| c == '.')
//!     .into_iter()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(pieces, vec!["a", "", "b"]);
//!
//! let pieces: Vec<_> = split_runs("  a  b ", char::is_whitespace)
//!     .into_iter()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(pieces, vec!["a", "b"]);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// # Examples
///
/// ```
/// use tokenkit::analysis::token::Token;
///
/// let token = Token::with_offsets("world", 1, 6, 11);
/// assert_eq!(token.text, "world");
/// assert_eq!(token.position, 1);
/// assert_eq!(token.start_offset, 6);
/// assert_eq!(token.end_offset, 11);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the output sequence (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Move this token to `position` in the output sequence.
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens produced by a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

/// Split `text` at every character matching `is_delimiter`.
///
/// Each delimiter occurrence is a single split point, so adjacent delimiters
/// and delimiters at either end produce empty tokens. An empty input yields
/// exactly one empty token.
pub fn split_on<F>(text: &str, is_delimiter: F) -> Vec<Token>
where
    F: Fn(char) -> bool,
{
    let mut tokens = Vec::new();
    let mut start = 0;

    for (offset, ch) in text.char_indices() {
        if is_delimiter(ch) {
            tokens.push(Token::with_offsets(
                &text[start..offset],
                tokens.len(),
                start,
                offset,
            ));
            start = offset + ch.len_utf8();
        }
    }

    tokens.push(Token::with_offsets(
        &text[start..],
        tokens.len(),
        start,
        text.len(),
    ));

    tokens
}

/// Split `text` on runs of characters matching `is_delimiter`.
///
/// Leading and trailing delimiters are ignored and runs collapse, so the
/// result never contains empty tokens.
pub fn split_runs<F>(text: &str, is_delimiter: F) -> Vec<Token>
where
    F: Fn(char) -> bool,
{
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (offset, ch) in text.char_indices() {
        match (is_delimiter(ch), word_start) {
            (true, Some(start)) => {
                tokens.push(Token::with_offsets(
                    &text[start..offset],
                    tokens.len(),
                    start,
                    offset,
                ));
                word_start = None;
            }
            (false, None) => word_start = Some(offset),
            _ => {}
        }
    }

    if let Some(start) = word_start {
        tokens.push(Token::with_offsets(
            &text[start..],
            tokens.len(),
            start,
            text.len(),
        ));
    }

    tokens
}

/// Drop empty tokens and renumber the survivors.
pub fn remove_empty(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| token.with_position(position))
        .collect()
}
