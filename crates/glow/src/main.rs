// ABOUTME: Entry point for the glow command line tool
// ABOUTME: Loads configuration, initializes logging and dispatches the selected command

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use glow::{Context, GlowConfig, cli, commands};
use glow_logging::{LoggingGuard, level_for_verbosity};

fn setup_logging(config: &GlowConfig, verbosity: u8) -> Result<LoggingGuard> {
    use glow_logging::init_logging_with_config;

    // [logging] table first, then environment, then -v
    let mut logging = config.logging.clone();
    logging
        .apply_env_overrides()
        .context("Failed to apply logging overrides from environment")?;
    if verbosity > 0 {
        logging.level = level_for_verbosity(verbosity).into();
    }

    let guard = init_logging_with_config(logging).context("Failed to initialize glow logging")?;
    glow_logging::debug!(verbosity, "Glow logging system initialized");
    Ok(guard)
}

fn main() -> Result<ExitCode> {
    let args = cli::parse_args()?;

    let config = GlowConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    let _guard = setup_logging(&config, args.verbosity).context("failed to initialize logging")?;

    let Some(command) = args.command else {
        return Ok(ExitCode::SUCCESS);
    };

    let system = commands::load_design_system(&config, args.tokens.as_deref())?;
    let ctx = Context {
        config: &config,
        system: &system,
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let passed = commands::run(&command, ctx, &mut stdout.lock(), &mut stderr.lock())?;

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
