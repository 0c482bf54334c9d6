//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::strategy::SplitStrategy;
use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, TokenKitArgs};
use crate::error::Result;

/// Result structure for the tokenize command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub strategy: SplitStrategy,
    pub token_count: usize,
    pub tokens: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offsets: Option<Vec<Token>>,
}

/// Description of one splitting strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyInfo {
    pub name: String,
    pub description: String,
    pub may_yield_empty: bool,
    pub requires_delimiters: bool,
}

impl From<SplitStrategy> for StrategyInfo {
    fn from(strategy: SplitStrategy) -> Self {
        StrategyInfo {
            name: strategy.as_str().to_string(),
            description: strategy.description().to_string(),
            may_yield_empty: strategy.may_yield_empty(),
            requires_delimiters: strategy.requires_delimiters(),
        }
    }
}

/// Types that have a plain-text rendering.
pub trait HumanOutput {
    /// Render for a terminal; `verbosity` follows [`TokenKitArgs::verbosity`].
    fn to_human(&self, verbosity: u8) -> String;
}

impl HumanOutput for TokenizeResult {
    fn to_human(&self, verbosity: u8) -> String {
        let mut out = String::new();

        if verbosity > 1 {
            out.push_str(&format!("Tokens ({}, {}):\n", self.strategy, self.token_count));
        }

        match &self.offsets {
            Some(tokens) => {
                for token in tokens {
                    out.push_str(&format!(
                        "{}\t{}..{}\t{:?}\n",
                        token.position, token.start_offset, token.end_offset, token.text
                    ));
                }
            }
            None => {
                for token in &self.tokens {
                    out.push_str(token);
                    out.push('\n');
                }
            }
        }

        out
    }
}

impl HumanOutput for Vec<StrategyInfo> {
    fn to_human(&self, _verbosity: u8) -> String {
        let width = self.iter().map(|info| info.name.len()).max().unwrap_or(0);
        self.iter().fold(String::new(), |mut out, info| {
            out.push_str(&format!("{:<width$}  {}\n", info.name, info.description));
            out
        })
    }
}

/// Render a result in the selected output format.
pub fn render_result<T>(result: &T, args: &TokenKitArgs) -> Result<String>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => Ok(result.to_human(args.verbosity())),
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            Ok(format!("{json}\n"))
        }
    }
}

/// Print a result to stdout in the selected output format.
pub fn output_result<T>(result: &T, args: &TokenKitArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    print!("{}", render_result(result, args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn result(offsets: bool) -> TokenizeResult {
        TokenizeResult {
            strategy: SplitStrategy::Newline,
            token_count: 3,
            tokens: vec!["a".into(), "".into(), "b".into()],
            offsets: offsets.then(|| {
                vec![
                    Token::with_offsets("a", 0, 0, 1),
                    Token::with_offsets("", 1, 2, 2),
                    Token::with_offsets("b", 2, 3, 4),
                ]
            }),
        }
    }

    #[test]
    fn test_human_tokens_one_per_line() {
        assert_eq!(result(false).to_human(1), "a\n\nb\n");
        assert!(result(false).to_human(2).starts_with("Tokens (newline, 3):\n"));
    }

    #[test]
    fn test_human_offsets() {
        assert_eq!(
            result(true).to_human(1),
            "0\t0..1\t\"a\"\n1\t2..2\t\"\"\n2\t3..4\t\"b\"\n"
        );
    }

    #[test]
    fn test_json_output() {
        let args = TokenKitArgs::parse_from(["tokenkit", "-f", "json", "strategies"]);
        let json = render_result(&result(false), &args).unwrap();
        assert_eq!(
            json,
            "{\"strategy\":\"newline\",\"token_count\":3,\"tokens\":[\"a\",\"\",\"b\"]}\n"
        );
    }

    #[test]
    fn test_strategy_listing() {
        let infos: Vec<StrategyInfo> = SplitStrategy::ALL.into_iter().map(Into::into).collect();
        let text = infos.to_human(1);
        assert_eq!(text.lines().count(), 5);
        assert!(text.starts_with("space "));
        assert!(infos[4].requires_delimiters);
    }
}
