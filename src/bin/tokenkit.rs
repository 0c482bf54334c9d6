//! tokenkit CLI binary.

use std::process;

use clap::Parser;
use tokenkit::cli::{args::*, commands::*};

fn main() {
    // Parse command line arguments using clap
    let args = TokenKitArgs::parse();

    // RUST_LOG still wins over the verbosity flags
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level().as_str()),
    )
    .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
