// ABOUTME: The [logging] table of glow.toml and its environment overrides
// ABOUTME: Level, per-module levels, console format and the optional log file

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::Level;

/// A `tracing::Level` that round-trips through config text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogLevel(pub Level);

impl FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let level = match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" | "warning" => Level::WARN,
            "error" => Level::ERROR,
            _ => {
                return Err(anyhow!(
                    "unknown log level '{s}' (expected trace, debug, info, warn or error)"
                ));
            }
        };
        Ok(LogLevel(level))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // tracing prints upper case; config files use lower case
        f.write_str(&self.0.as_str().to_ascii_lowercase())
    }
}

impl TryFrom<String> for LogLevel {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_string()
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        LogLevel(level)
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

/// How log lines reach stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleFormat {
    #[default]
    Compact,
    Pretty,
    Json,
    Off,
}

/// Logging settings, the `[logging]` table of glow.toml.
///
/// ```toml
/// [logging]
/// level = "info"
/// console = "pretty"
/// file = "/tmp/glow.log"
///
/// [logging.modules]
/// glow_css = "trace"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,

    /// Per-module overrides keyed by crate path, e.g. `glow_css`
    pub modules: BTreeMap<String, LogLevel>,

    pub console: ConsoleFormat,

    /// Daily-rotated log file; no file logging when unset
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(Level::WARN),
            modules: BTreeMap::new(),
            console: ConsoleFormat::default(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Defaults with the environment applied on top.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `GLOW_LOG` (or `RUST_LOG`), `GLOW_LOG_JSON`, `GLOW_LOG_NO_CONSOLE`
    /// and `GLOW_LOG_FILE`.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|name| env::var(name).ok())
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(level) = var("GLOW_LOG") {
            self.level = level.parse::<LogLevel>().context("GLOW_LOG")?;
        } else if let Some(directives) = var("RUST_LOG") {
            self.apply_directives(&directives).context("RUST_LOG")?;
        }

        if var("GLOW_LOG_JSON").is_some() {
            self.console = ConsoleFormat::Json;
        }
        if var("GLOW_LOG_NO_CONSOLE").is_some() {
            self.console = ConsoleFormat::Off;
        }
        if let Some(path) = var("GLOW_LOG_FILE") {
            self.file = Some(if path.is_empty() {
                default_log_file()
            } else {
                PathBuf::from(path)
            });
        }
        Ok(())
    }

    /// Apply comma separated `level` and `module=level` directives.
    pub fn apply_directives(&mut self, directives: &str) -> Result<()> {
        for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.split_once('=') {
                Some((module, level)) => {
                    let level = level
                        .parse::<LogLevel>()
                        .with_context(|| format!("directive '{directive}'"))?;
                    self.modules.insert(module.trim().to_string(), level);
                }
                None => self.level = directive.parse::<LogLevel>()?,
            }
        }
        Ok(())
    }
}

/// `<config dir>/glow/glow.log`, or `glow.log` when there is no config dir.
pub fn default_log_file() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("glow").join("glow.log"))
        .unwrap_or_else(|| PathBuf::from("glow.log"))
}
