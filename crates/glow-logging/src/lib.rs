// ABOUTME: Logging for the glow crates built on tracing
// ABOUTME: Re-exports the tracing macros and installs the subscriber described by [logging]

pub mod config;
pub mod layers;
pub mod performance;
pub mod subscriber;

pub use tracing::{Level, Span, debug, error, info, instrument, span, trace, warn};

pub use config::{ConsoleFormat, LogLevel, LoggingConfig, default_log_file};
pub use performance::{DEFAULT_WARN_THRESHOLD, PerfTimer};
pub use subscriber::{LoggingGuard, init_subscriber};

use anyhow::Result;

/// Install the subscriber with default settings and environment overrides.
pub fn init_logging() -> Result<LoggingGuard> {
    init_subscriber(LoggingConfig::from_env()?)
}

pub fn init_logging_with_config(config: LoggingConfig) -> Result<LoggingGuard> {
    init_subscriber(config)
}

/// Level for a `-v` repetition count: none warns, then info, debug, trace.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
