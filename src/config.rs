//! Configuration file handling for asciify.
//!
//! Loads configuration from `~/.config/asciify/config.toml` or a custom path.
//! Command-line flags override anything set here.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{Gradient, GridSize};
use crate::error::{AsciifyError, Result};

/// Default output width in characters.
pub const DEFAULT_WIDTH: u32 = 80;
/// Default output height in characters.
pub const DEFAULT_HEIGHT: u32 = 80;

/// Configuration file structure for asciify.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub gradient: Option<String>,
}

impl Config {
    /// Load configuration.
    ///
    /// With `None`, reads the default path and falls back to defaults when it
    /// doesn't exist. An explicit path that doesn't exist is an error.
    pub fn load(path: Option<&Path>) -> std::result::Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::NotFound { path });
            }
            log::debug!("No config file at '{}', using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;
        log::info!("Loaded config from '{}'", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config value render.{field} must be a positive integer")]
    ZeroDimension { field: &'static str },
}

/// Fully resolved settings for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub grid: GridSize,
    pub gradient: Gradient,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            grid: GridSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            gradient: Gradient::default(),
        }
    }
}

impl RenderOptions {
    /// Merge command-line values over the config file over built-in defaults.
    ///
    /// `width` and `height` are already validated; `None` means "not given".
    pub fn resolve(
        config: &Config,
        width: Option<u32>,
        height: Option<u32>,
        gradient: Option<&str>,
    ) -> Result<Self> {
        let render = &config.render;

        let config_width = positive(render.width, "width")?;
        let config_height = positive(render.height, "height")?;

        let gradient = match gradient.or(render.gradient.as_deref()) {
            Some(s) => Gradient::parse(s)?,
            None => Gradient::default(),
        };

        Ok(Self {
            grid: GridSize::new(
                width.or(config_width).unwrap_or(DEFAULT_WIDTH),
                height.or(config_height).unwrap_or(DEFAULT_HEIGHT),
            ),
            gradient,
        })
    }
}

fn positive(value: Option<u32>, field: &'static str) -> Result<Option<u32>> {
    match value {
        Some(0) => Err(AsciifyError::Config(ConfigError::ZeroDimension { field })),
        other => Ok(other),
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("asciify").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/asciify/config.toml")
        })
}
