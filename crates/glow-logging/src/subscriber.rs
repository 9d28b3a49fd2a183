// ABOUTME: Installs the global glow subscriber from a LoggingConfig
// ABOUTME: The returned guard owns the file writer and must live until exit

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

use crate::config::LoggingConfig;
use crate::layers::{BoxedLayer, console_layer, file_layer, level_filter};

/// Flushes the file log on drop.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    file: Option<WorkerGuard>,
}

impl LoggingGuard {
    pub fn writes_file(&self) -> bool {
        self.file.is_some()
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_subscriber(config: LoggingConfig) -> Result<LoggingGuard> {
    let filter = level_filter(&config)?;

    let mut layers: Vec<BoxedLayer> = console_layer(config.console).into_iter().collect();
    let file = match &config.file {
        Some(path) => {
            let (layer, guard) = file_layer(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            layers.push(layer);
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    tracing::debug!(
        level = %config.level,
        console = ?config.console,
        file = ?config.file,
        "Logging initialized"
    );

    Ok(LoggingGuard { file })
}
