//! Delimiter character classes.
//!
//! A [`DelimiterSet`] is a set of literal characters, any one of which is a
//! split point. Membership is tested per code point, so characters that are
//! special in pattern languages (`]`, `\`, `^`, `-`) need no escaping.

use std::fmt;

use ahash::AHashSet;

use crate::error::{Result, TokenKitError};

/// The fixed class used by the `specialchars` strategy (space included).
pub const SPECIAL_CHARS: &str = "`-=~!@#$%^&*()_+[]{};'\\:\"|<,./>? ";

/// A character class of literal delimiters.
///
/// # Examples
///
/// ```
/// use tokenkit::analysis::delimiter::DelimiterSet;
///
/// let delimiters = DelimiterSet::new("#@").unwrap();
/// assert!(delimiters.contains('@'));
/// assert!(!delimiters.contains('a'));
///
/// assert!(DelimiterSet::new("").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct DelimiterSet {
    /// Delimiters in first-seen order, duplicates removed
    ordered: Vec<char>,
    lookup: AHashSet<char>,
}

impl DelimiterSet {
    /// Build a delimiter set from the characters of `chars`.
    ///
    /// Fails with [`TokenKitError::InvalidConfig`] when `chars` is empty.
    pub fn new(chars: &str) -> Result<Self> {
        if chars.is_empty() {
            return Err(TokenKitError::invalid_config(
                "custom delimiter set must contain at least one character",
            ));
        }

        let mut ordered = Vec::new();
        let mut lookup = AHashSet::new();
        for ch in chars.chars() {
            if lookup.insert(ch) {
                ordered.push(ch);
            }
        }

        Ok(DelimiterSet { ordered, lookup })
    }

    /// The class used by the `specialchars` strategy.
    pub fn special_chars() -> Self {
        let ordered: Vec<char> = SPECIAL_CHARS.chars().collect();
        let lookup = ordered.iter().copied().collect();
        DelimiterSet { ordered, lookup }
    }

    /// Check whether `ch` is a delimiter.
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.lookup.contains(&ch)
    }

    /// Number of distinct delimiters.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Distinct delimiters in first-seen order.
    pub fn chars(&self) -> &[char] {
        &self.ordered
    }

    /// The delimiters as a string, in first-seen order.
    pub fn as_string(&self) -> String {
        self.ordered.iter().collect()
    }
}

impl PartialEq for DelimiterSet {
    fn eq(&self, other: &Self) -> bool {
        self.lookup.len() == other.lookup.len()
            && self.lookup.iter().all(|ch| other.lookup.contains(ch))
    }
}

impl Eq for DelimiterSet {}

impl fmt::Display for DelimiterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collapses_duplicates() {
        let delimiters = DelimiterSet::new("#@#@,").unwrap();
        assert_eq!(delimiters.len(), 3);
        assert_eq!(delimiters.chars(), &['#', '@', ',']);
        assert_eq!(delimiters.as_string(), "#@,");
    }

    #[test]
    fn test_empty_set_rejected() {
        let err = DelimiterSet::new("").unwrap_err();
        assert!(matches!(err, TokenKitError::InvalidConfig(_)));
    }

    #[test]
    fn test_pattern_metacharacters_are_literal() {
        let delimiters = DelimiterSet::new("]\\^-").unwrap();
        for ch in [']', '\\', '^', '-'] {
            assert!(delimiters.contains(ch));
        }
        // A range like "a-c" would include 'b' in a pattern class.
        let range = DelimiterSet::new("a-c").unwrap();
        assert!(!range.contains('b'));
    }

    #[test]
    fn test_special_chars_class() {
        let delimiters = DelimiterSet::special_chars();
        for ch in "`-=~!@#$%^&*()_+[]{};'\\:\"|<,./>? ".chars() {
            assert!(delimiters.contains(ch), "missing {ch:?}");
        }
        for ch in ['a', 'Z', '0', '\t', '\n', 'é'] {
            assert!(!delimiters.contains(ch), "unexpected {ch:?}");
        }
    }

    #[test]
    fn test_equality_ignores_order() {
        assert_eq!(DelimiterSet::new("ab").unwrap(), DelimiterSet::new("ba").unwrap());
    }
}
