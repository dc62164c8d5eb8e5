use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::gate::ColorMode;
use crate::theme::ThemeColorsConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BannerConfig {
    /// Fixed banner width; terminal width is detected when unset
    pub width: Option<usize>,
    /// Border character
    pub rule: Option<char>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Color policy: auto, always or never
    pub color: Option<ColorMode>,
    /// Built-in theme name
    pub theme: Option<String>,
    /// Per-role overrides applied on top of the theme
    #[serde(default)]
    pub colors: ThemeColorsConfig,
    #[serde(default)]
    pub banner: BannerConfig,
}

impl Config {
    /// Load and merge the global and local config files
    pub fn load() -> Result<Config, ConfigError> {
        load_config()
    }

    /// Merge two configs, with `other` taking precedence
    pub fn merge(self, other: Config) -> Config {
        Config {
            color: other.color.or(self.color),
            theme: other.theme.or(self.theme),
            colors: self.colors.merge(other.colors),
            banner: BannerConfig {
                width: other.banner.width.or(self.banner.width),
                rule: other.banner.rule.or(self.banner.rule),
            },
        }
    }

    /// Color policy, `auto` when no file sets one
    pub fn color_mode(&self) -> ColorMode {
        self.color.unwrap_or_default()
    }

    /// Banner border character, defaulting to "-"
    pub fn banner_rule(&self) -> char {
        self.banner.rule.unwrap_or(crate::layout::DEFAULT_RULE)
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load global config from ~/.config/cb9/config.toml
fn load_global_config() -> Result<Option<Config>, ConfigError> {
    let config_path = dirs::config_dir().map(|p| p.join("cb9").join("config.toml"));

    if let Some(path) = config_path {
        if path.exists() {
            return read_config(&path).map(Some);
        }
    }

    Ok(None)
}

/// Load local config from .cb9/config.toml in the current directory or parent directories
pub fn load_local_config(start_path: &Path) -> Result<Option<Config>, ConfigError> {
    let mut current = start_path.to_path_buf();

    loop {
        let config_path = current.join(".cb9").join("config.toml");
        if config_path.exists() {
            return read_config(&config_path).map(Some);
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

/// Load and merge configs (global + local)
pub fn load_config() -> Result<Config, ConfigError> {
    let current_dir = std::env::current_dir()?;

    let global = load_global_config()?.unwrap_or_default();
    let local = load_local_config(&current_dir)?.unwrap_or_default();

    Ok(global.merge(local))
}
