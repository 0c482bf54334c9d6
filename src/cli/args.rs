//! Command line argument parsing for the tokenkit CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// tokenkit - split text into tokens with a selectable strategy
#[derive(Parser, Debug, Clone)]
#[command(name = "tokenkit")]
#[command(about = "Split text into tokens with a selectable splitting strategy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TokenKitArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TokenKitArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Log level matching the verbosity flags.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize text from an argument, a file, or stdin
    Tokenize(TokenizeArgs),

    /// List the available splitting strategies
    Strategies,
}

/// Arguments for tokenizing text
#[derive(Parser, Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Text to tokenize (reads --input or stdin when omitted)
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// File to read the text from
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Splitting strategy (space, periods, specialchars, newline, custom)
    #[arg(short, long, env = "TOKENKIT_STRATEGY")]
    pub strategy: Option<String>,

    /// Delimiter characters for the custom strategy
    #[arg(short, long, value_name = "CHARS")]
    pub delimiters: Option<String>,

    /// Tokenizer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Include positions and byte offsets in the output
    #[arg(long)]
    pub offsets: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
