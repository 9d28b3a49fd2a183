// ABOUTME: Output layers and the level filter for the glow subscriber
// ABOUTME: stderr console in compact, pretty or JSON form plus a daily-rolling log file

use std::path::Path;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    filter::Directive,
    fmt::{self, format::FmtSpan},
};

use crate::config::{ConsoleFormat, LoggingConfig};

pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// The stderr layer for `format`, or `None` when the console is off.
///
/// stdout carries command output only.
pub fn console_layer(format: ConsoleFormat) -> Option<BoxedLayer> {
    let base = fmt::layer().with_writer(std::io::stderr);
    let layer = match format {
        ConsoleFormat::Off => return None,
        ConsoleFormat::Compact => base.with_target(false).compact().boxed(),
        ConsoleFormat::Pretty => base
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .pretty()
            .boxed(),
        ConsoleFormat::Json => base
            .json()
            .with_current_span(true)
            .with_span_events(FmtSpan::CLOSE)
            .boxed(),
    };
    Some(layer)
}

/// Plain-text file layer rotated daily next to `path`.
///
/// The guard flushes the background writer when dropped.
pub fn file_layer(path: &Path) -> Result<(BoxedLayer, WorkerGuard)> {
    let file_name = path
        .file_name()
        .context(format!("Log file path {} has no file name", path.display()))?;
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    std::fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::daily(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .boxed();
    Ok((layer, guard))
}

/// Global level plus one directive per module override.
pub fn level_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    config.modules.iter().try_fold(
        EnvFilter::default().add_directive(LevelFilter::from_level(config.level.0).into()),
        |filter, (module, level)| {
            let directive = format!("{module}={level}")
                .parse::<Directive>()
                .with_context(|| format!("Invalid module name '{module}' in logging config"))?;
            Ok(filter.add_directive(directive))
        },
    )
}
