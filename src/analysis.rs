//! Text analysis module for tokenkit.
//!
//! This module provides tokens, splitting strategies, delimiter classes and
//! the tokenizers that implement each strategy.

pub mod delimiter;
pub mod strategy;
pub mod token;
pub mod tokenizer;
