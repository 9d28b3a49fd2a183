// ABOUTME: Library half of the glow binary: arguments, configuration and commands
// ABOUTME: Kept separate from main so the commands can be driven from tests

pub mod args;
pub mod cli;
pub mod commands;
pub mod config;

pub use args::{Args, Command};
pub use commands::{Context, load_design_system};
pub use config::{ConfigError, GlowConfig};
