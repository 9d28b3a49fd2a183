// ABOUTME: Implementations of the sync, check and audit commands
// ABOUTME: Each command writes human output to the given streams and reports pass or fail

use std::borrow::Cow;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context as _, Result};
use glow_css::{StylesheetSync, SyncError};
use glow_logging::{PerfTimer, info, warn};
use glow_tokens::DesignSystem;
use glow_validate::{ValidationReport, Validator};

use crate::args::Command;
use crate::config::GlowConfig;

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub config: &'a GlowConfig,
    pub system: &'a DesignSystem,
}

/// Pick the token source: `--tokens`, then `[paths] tokens`, then the built-in set.
pub fn load_design_system(
    config: &GlowConfig,
    tokens: Option<&Path>,
) -> Result<Cow<'static, DesignSystem>> {
    let path = tokens.map(Path::to_path_buf).or_else(|| config.tokens());
    match path {
        Some(path) => {
            let system = DesignSystem::load(&path)
                .with_context(|| format!("Failed to load tokens from {}", path.display()))?;
            Ok(Cow::Owned(system))
        }
        None => Ok(Cow::Borrowed(DesignSystem::builtin())),
    }
}

/// Run `command`. Returns `false` when the command completed but failed.
pub fn run(
    command: &Command,
    ctx: Context<'_>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool> {
    info!(command = command.name(), "Running command");
    match command {
        Command::Sync { css } => sync(ctx, css.as_deref(), out, err),
        Command::Check { css, consumer } => check(ctx, css.as_deref(), consumer.as_deref(), out),
        Command::Audit { dir } => audit(ctx, dir.as_deref(), out),
    }
}

pub fn sync(
    ctx: Context<'_>,
    css: Option<&Path>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool> {
    let path = css.map(Path::to_path_buf).unwrap_or_else(|| ctx.config.stylesheet());
    let _timer = PerfTimer::new("glow sync").with_warn_threshold(Duration::from_millis(250));

    match StylesheetSync::new(ctx.system, &ctx.config.markers).sync_file(&path) {
        Ok(report) => {
            for skipped in &report.skipped {
                writeln!(err, "error: {skipped}")?;
            }
            writeln!(out, "{} updated from token tree", path.display())?;
            Ok(true)
        }
        Err(SyncError::NoRegions { path, skipped }) => {
            for skipped in &skipped {
                writeln!(err, "error: {skipped}")?;
            }
            writeln!(err, "error: no theme region could be updated in {}", path.display())?;
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn check(
    ctx: Context<'_>,
    css: Option<&Path>,
    consumer: Option<&Path>,
    out: &mut dyn Write,
) -> Result<bool> {
    let css_path = css.map(Path::to_path_buf).unwrap_or_else(|| ctx.config.stylesheet());
    let consumer_path = consumer
        .map(Path::to_path_buf)
        .unwrap_or_else(|| ctx.config.consumer_config());

    let stylesheet = std::fs::read_to_string(&css_path)
        .with_context(|| format!("Failed to read stylesheet {}", css_path.display()))?;
    let consumer_config = std::fs::read_to_string(&consumer_path).with_context(|| {
        format!("Failed to read consumer configuration {}", consumer_path.display())
    })?;

    let _timer = PerfTimer::new("glow check").with_warn_threshold(Duration::from_millis(250));
    let validator = Validator::new(ctx.config.validation.clone());
    let mut report = validator.validate_tokens(ctx.system);
    report.merge(validator.validate_stylesheet(&stylesheet, &consumer_config, &ctx.config.markers));

    print_report(&report, out)
}

pub fn audit(ctx: Context<'_>, dir: Option<&Path>, out: &mut dyn Write) -> Result<bool> {
    let source_dir = dir.map(Path::to_path_buf).unwrap_or_else(|| ctx.config.source_dir());
    let validator = Validator::new(ctx.config.validation.clone());
    let mut report = validator.audit(&source_dir, &ctx.config.stylesheet(), &ctx.config.audit)?;

    match std::env::current_dir() {
        Ok(cwd) => {
            report.violations = report
                .violations
                .into_iter()
                .map(|v| v.relative_to(&cwd))
                .collect();
        }
        Err(e) => warn!(error = %e, "Cannot determine working directory, printing full paths"),
    }

    print_report(&report, out)
}

fn print_report(report: &ValidationReport, out: &mut dyn Write) -> Result<bool> {
    for violation in &report.violations {
        writeln!(out, "[{}] {violation}", violation.check().name())?;
    }
    writeln!(out, "{}", report.summary())?;
    Ok(report.is_valid())
}
