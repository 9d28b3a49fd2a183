// ABOUTME: Command line arguments for the glow binary
// ABOUTME: Hand-rolled argv parsing with global flags accepted anywhere on the line

use std::path::PathBuf;

use anyhow::{Result, bail};

/// Subcommand selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Regenerate the theme regions of the stylesheet.
    Sync { css: Option<PathBuf> },
    /// Validate tokens and the generated stylesheet.
    Check {
        css: Option<PathBuf>,
        consumer: Option<PathBuf>,
    },
    /// Audit a source tree.
    Audit { dir: Option<PathBuf> },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Sync { .. } => "sync",
            Command::Check { .. } => "check",
            Command::Audit { .. } => "audit",
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub command: Option<Command>,
    pub config: Option<PathBuf>,
    pub tokens: Option<PathBuf>,
    pub verbosity: u8,
    pub display_help: bool,
    pub display_version: bool,
}

impl Args {
    pub fn parse_args() -> Result<Args> {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse arguments, excluding the program name.
    pub fn parse_from<I>(argv: I) -> Result<Args>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = Args::default();
        let mut positional: Vec<String> = Vec::new();
        let mut css = None;
        let mut consumer = None;

        let mut argv = argv.into_iter();
        while let Some(arg) = argv.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg.clone(), None),
            };

            let mut value = |name: &str| -> Result<PathBuf> {
                match inline.clone().or_else(|| argv.next()) {
                    Some(v) if !v.is_empty() => Ok(PathBuf::from(v)),
                    _ => bail!("{name} requires a path argument"),
                }
            };

            match flag.as_str() {
                "--" => {
                    positional.extend(argv.by_ref());
                    break;
                }
                "-h" | "--help" => args.display_help = true,
                "-V" | "--version" => args.display_version = true,
                "-c" | "--config" => args.config = Some(value("--config")?),
                "--tokens" => args.tokens = Some(value("--tokens")?),
                "--css" => css = Some(value("--css")?),
                "--consumer" => consumer = Some(value("--consumer")?),
                "--verbose" => args.verbosity = args.verbosity.saturating_add(1),
                short if short.starts_with('-') && !short.starts_with("--") && short.len() > 1 => {
                    // Clustered short flags such as -vv
                    for ch in short.chars().skip(1) {
                        match ch {
                            'v' => args.verbosity = args.verbosity.saturating_add(1),
                            'h' => args.display_help = true,
                            'V' => args.display_version = true,
                            _ => bail!("unexpected short arg {short}"),
                        }
                    }
                }
                long if long.starts_with("--") => bail!("unexpected double dash argument: {long}"),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let command = match positional.next().as_deref() {
            None => None,
            Some("sync") => Some(Command::Sync { css: css.take() }),
            Some("check") => Some(Command::Check {
                css: css.take(),
                consumer: consumer.take(),
            }),
            Some("audit") => Some(Command::Audit {
                dir: positional.next().map(PathBuf::from),
            }),
            Some(other) => bail!("unknown command '{other}'"),
        };

        if let Some(extra) = positional.next() {
            bail!("unexpected argument '{extra}'");
        }
        if css.is_some() {
            bail!("--css is only accepted by sync and check");
        }
        if consumer.is_some() {
            bail!("--consumer is only accepted by check");
        }

        args.command = command;
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(line: &str) -> Result<Args> {
        Args::parse_from(line.split_whitespace().map(String::from))
    }

    #[test]
    fn test_sync_with_css() {
        let args = parse("sync --css web/index.css").unwrap();
        assert_eq!(
            args.command,
            Some(Command::Sync {
                css: Some("web/index.css".into())
            })
        );
    }

    #[test]
    fn test_global_flags_anywhere() {
        let args =
            parse("-vv check --consumer=tw.config.js -c glow.toml --tokens t.json -v").unwrap();
        assert_eq!(args.verbosity, 3);
        assert_eq!(args.config, Some("glow.toml".into()));
        assert_eq!(args.tokens, Some("t.json".into()));
        assert_eq!(
            args.command,
            Some(Command::Check {
                css: None,
                consumer: Some("tw.config.js".into())
            })
        );
    }

    #[test]
    fn test_audit_directory() {
        let args = parse("audit app/src").unwrap();
        assert_eq!(args.command, Some(Command::Audit { dir: Some("app/src".into()) }));
        assert_eq!(parse("audit").unwrap().command, Some(Command::Audit { dir: None }));
    }

    #[test]
    fn test_help_and_version() {
        assert!(parse("--help").unwrap().display_help);
        assert!(parse("-V").unwrap().display_version);
        assert_eq!(parse("").unwrap(), Args::default());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse("deploy").is_err());
        assert!(parse("sync extra").is_err());
        assert!(parse("audit --css a.css").is_err());
        assert!(parse("sync --consumer a.js").is_err());
        assert!(parse("sync --css").is_err());
        assert!(parse("--frobnicate").is_err());
        assert!(parse("-x").is_err());
    }
}
