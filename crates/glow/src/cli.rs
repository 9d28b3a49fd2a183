// ABOUTME: Help text and entry-point argument handling for the glow binary
// ABOUTME: Prints help or version and exits before any configuration is loaded

use anyhow::{Context, Result};

use crate::args::Args;
use crate::config::CONFIG_FILE_NAME;

pub fn help_text() -> String {
    format!(
        "
{} {}
{}

Keeps the theme regions of a stylesheet in sync with the design tokens and
validates tokens, stylesheet and sources.

USAGE:
    glow [FLAGS] <command> [options]

COMMANDS:
    sync  [--css <path>]                     Regenerates the theme regions of the stylesheet
    check [--css <path>] [--consumer <path>] Validates tokens and stylesheet completeness
    audit [dir]                              Scans a source tree for undefined variables,
                                             hardcoded hex colors and forbidden utilities

FLAGS:
    -h, --help                     Prints help information
    -c, --config <file>            Specifies a configuration file (default: ./{})
    --tokens <file>                Loads tokens from a JSON document instead of the built-in set
    -v                             Increases logging verbosity each use for up to 3 times
    -V, --version                  Prints version information
",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
        CONFIG_FILE_NAME,
    )
}

pub fn parse_args() -> Result<Args> {
    let args = Args::parse_args().context("could not parse arguments")?;

    if args.display_help || (args.command.is_none() && !args.display_version) {
        print!("{}", help_text());
        std::process::exit(0);
    }

    if args.display_version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    Ok(args)
}
