// ABOUTME: Configuration for the glow binary, loaded from glow.toml
// ABOUTME: Every table is optional; relative paths resolve against the config file's directory

use std::path::{Path, PathBuf};

use glow_css::Markers;
use glow_logging::{LoggingConfig, debug, info};
use glow_validate::{AuditRules, ValidationRules};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the project configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "glow.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// File locations used by the commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Generated stylesheet containing the theme regions
    pub stylesheet: PathBuf,

    /// Consumer configuration whose `var(--…)` references must be declared
    pub consumer_config: PathBuf,

    /// Source tree scanned by `glow audit`
    pub source_dir: PathBuf,

    /// Token document; the built-in design system is used when unset
    pub tokens: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            stylesheet: default_stylesheet(),
            consumer_config: PathBuf::from("tailwind.config.js"),
            source_dir: PathBuf::from("src"),
            tokens: None,
        }
    }
}

fn default_stylesheet() -> PathBuf {
    PathBuf::from("src/index.css")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    pub paths: PathsConfig,
    pub markers: Markers,
    pub validation: ValidationRules,
    pub audit: AuditRules,
    pub logging: LoggingConfig,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    root: PathBuf,
}

impl GlowConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Otherwise `./glow.toml` is used when
    /// present, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let local = Path::new(CONFIG_FILE_NAME);
                if local.is_file() {
                    Self::load_from(local)
                } else {
                    debug!("No glow.toml found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();

        info!(
            config_path = %path.display(),
            regions = config.markers.regions.len(),
            "Loaded glow configuration"
        );
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Resolve a configured path against the config file's directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn stylesheet(&self) -> PathBuf {
        self.resolve(&self.paths.stylesheet)
    }

    pub fn consumer_config(&self) -> PathBuf {
        self.resolve(&self.paths.consumer_config)
    }

    pub fn source_dir(&self) -> PathBuf {
        self.resolve(&self.paths.source_dir)
    }

    pub fn tokens(&self) -> Option<PathBuf> {
        self.paths.tokens.as_deref().map(|p| self.resolve(p))
    }
}
