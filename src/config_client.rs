use crate::error::ExporterError;
use serde::de::DeserializeOwned;
use serde_yaml;
use std::env;
use std::fs;
use tracing::{debug, info};

pub trait SetDefaults {
    fn set_defaults(&mut self);
}

pub struct ConfigClientConfig {
    config_path: String,
}

impl ConfigClientConfig {
    pub fn new(config_path: String) -> Result<Self, ExporterError> {
        debug!("ConfigClientConfig::new(config_path: {})", config_path);
        Ok(Self { config_path })
    }

    pub fn from_env() -> Result<Self, ExporterError> {
        let config_path =
            env::var("CONFIG_PATH").unwrap_or_else(|_| "/configs/config.yaml".to_string());

        Self::new(config_path)
    }
}

pub struct ConfigClient {
    config: ConfigClientConfig,
}

impl ConfigClient {
    pub fn new(config: ConfigClientConfig) -> Self {
        Self { config }
    }

    pub fn read_config_from_file<T>(&self) -> Result<T, ExporterError>
    where
        T: DeserializeOwned + SetDefaults,
    {
        let config_file_contents =
            fs::read_to_string(&self.config.config_path).map_err(|e| ExporterError::Config {
                message: format!(
                    "failed to read config file '{}': {}",
                    self.config.config_path, e
                ),
            })?;

        let mut config: T =
            serde_yaml::from_str(&config_file_contents).map_err(|e| ExporterError::Config {
                message: format!(
                    "failed to parse config file '{}': {}",
                    self.config.config_path, e
                ),
            })?;

        config.set_defaults();

        info!("Loaded config from {}", &self.config.config_path);

        Ok(config)
    }
}
