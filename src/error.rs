//! Error types for the tokenkit library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`TokenKitError`] enum.
//!
//! # Examples
//!
//! ```
//! use tokenkit::error::{Result, TokenKitError};
//!
//! fn pick_strategy(tag: &str) -> Result<()> {
//!     Err(TokenKitError::invalid_strategy(tag))
//! }
//!
//! let err = pick_strategy("bogus").unwrap_err();
//! assert_eq!(err.to_string(), "Invalid strategy: bogus");
//! ```

use std::io;

use thiserror::Error;

/// The main error type for tokenkit operations.
///
/// Tokenization itself only ever fails with [`TokenKitError::InvalidStrategy`]
/// or [`TokenKitError::InvalidConfig`]. The I/O and JSON variants are raised by
/// the config loader and the command line front end.
#[derive(Error, Debug)]
pub enum TokenKitError {
    /// The strategy tag is not one of the recognized splitting strategies.
    #[error("Invalid strategy: {0}")]
    InvalidStrategy(String),

    /// The tokenizer configuration is malformed (e.g. an empty custom delimiter set).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors (reading config or input files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TokenKitError.
pub type Result<T> = std::result::Result<T, TokenKitError>;

impl TokenKitError {
    /// Create a new invalid strategy error.
    pub fn invalid_strategy<S: Into<String>>(tag: S) -> Self {
        TokenKitError::InvalidStrategy(tag.into())
    }

    /// Create a new invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TokenKitError::InvalidConfig(msg.into())
    }
}
