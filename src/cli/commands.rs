//! Command implementations for the tokenkit CLI.

use std::fs;
use std::io::{self, Read};

use log::{debug, info};

use crate::analysis::strategy::SplitStrategy;
use crate::analysis::tokenizer::StrategyTokenizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::TokenizerConfig;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: TokenKitArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => {
            let text = read_input(tokenize_args)?;
            let result = tokenize_text(tokenize_args, &text)?;
            output_result(&result, &args)
        }
        Command::Strategies => output_result(&list_strategies(), &args),
    }
}

/// Build the tokenizer configuration from the config file and flags.
///
/// Flags override values from the config file.
pub fn resolve_config(args: &TokenizeArgs) -> Result<TokenizerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("loading tokenizer config from {}", path.display());
            TokenizerConfig::from_file(path)?
        }
        None => TokenizerConfig::default(),
    };

    if let Some(strategy) = &args.strategy {
        config.strategy = strategy.clone();
    }
    if let Some(delimiters) = &args.delimiters {
        config.custom_delimiters = Some(delimiters.clone());
    }

    Ok(config)
}

/// Read the text to tokenize from the argument, the input file, or stdin.
pub fn read_input(args: &TokenizeArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    match &args.input {
        Some(path) => {
            info!("reading input from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        None => {
            info!("reading input from stdin");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Tokenize `text` according to the command arguments.
pub fn tokenize_text(args: &TokenizeArgs, text: &str) -> Result<TokenizeResult> {
    let config = resolve_config(args)?;
    let tokenizer = StrategyTokenizer::from_config(&config)?;

    let tokens = tokenizer.tokens(text)?;
    info!("{} tokens with {}", tokens.len(), tokenizer.strategy());

    Ok(TokenizeResult {
        strategy: tokenizer.strategy(),
        token_count: tokens.len(),
        tokens: tokens.iter().map(|token| token.text.clone()).collect(),
        offsets: args.offsets.then_some(tokens),
    })
}

/// Describe every available strategy.
pub fn list_strategies() -> Vec<StrategyInfo> {
    SplitStrategy::ALL.into_iter().map(StrategyInfo::from).collect()
}
