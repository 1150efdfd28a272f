use super::{evolution::EvolutionConfig, traits::ConfigSection};
use crate::error::MpError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `MPEVO_EVOLUTION__POPULATION_SIZE=200`.
pub const ENV_PREFIX: &str = "MPEVO";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), MpError> {
        self.evolution.validate()?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer defaults, an optional TOML file and `MPEVO_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, MpError> {
        let manager = Self::load_unvalidated(path)?;
        manager.config.validate()?;
        Ok(manager)
    }

    /// Same layering as [`ConfigManager::load`] without validation, for callers
    /// that still apply overrides through [`ConfigManager::update`].
    pub fn load_unvalidated(path: Option<&Path>) -> Result<Self, MpError> {
        let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            log::debug!("Loading {} overrides from {}", EvolutionConfig::section_name(), path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;

        Ok(Self { config })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MpError> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| MpError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    pub fn update<F>(&mut self, f: F) -> Result<(), MpError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}
