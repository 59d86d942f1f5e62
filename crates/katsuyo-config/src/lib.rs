use std::env;
use std::path::{Path, PathBuf};

use katsuyo_core::types::Formality;
use serde::{Deserialize, Serialize};

use self::gloss::GlossConfig;
use self::log::LogConfig;
use self::provider::{ProviderConfig, ProviderKind};

pub mod gloss;
pub mod log;
pub mod provider;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where a loaded config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// File was absent, defaults and environment were used
    Missing(PathBuf),
}

impl ConfigSource {
    pub fn is_default(&self) -> bool {
        matches!(self, ConfigSource::Missing(_))
    }

    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => {
                tracing::info!("Loaded config from {}", path.display())
            }
            ConfigSource::Missing(path) => {
                tracing::warn!("Config file {} not found, using defaults", path.display())
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Formality used when a command does not name one
    pub formality: Formality,
    pub gloss: GlossConfig,
    pub provider: ProviderConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults with environment overrides
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    /// Read a JSON config file; a missing file yields [`Config::new`].
    ///
    /// Nothing is logged here since this runs before the subscriber is
    /// installed; call [`ConfigSource::log`] once tracing is up.
    pub fn load(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if !path.exists() {
            return Ok((Self::new(), ConfigSource::Missing(path.to_path_buf())));
        }

        let json = std::fs::read_to_string(path)?;
        let mut config = Self::from_json(&json)?;
        config.apply_overrides(|key| env::var(key).ok());
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply `KATSUYO_*` overrides from a variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("KATSUYO_FORMALITY") {
            match value.parse() {
                Ok(formality) => self.formality = formality,
                Err(e) => tracing::warn!("Ignoring KATSUYO_FORMALITY: {}", e),
            }
        }

        if let Some(path) = lookup("KATSUYO_PROVIDER_PATH").filter(|p| !p.is_empty()) {
            self.provider.kind = ProviderKind::Json;
            self.provider.path = Some(path);
        }

        if let Some(filter) = lookup("KATSUYO_LOG").filter(|f| !f.is_empty()) {
            self.log.filter = filter;
        }
    }
}
