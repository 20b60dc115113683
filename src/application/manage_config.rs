//! Configuration management use case

use crate::error::{FrontsyncError, Result};
use crate::infrastructure::{Config, WorkspaceRepository};

/// Service for viewing and modifying workspace configuration
pub struct ConfigService {
    repository: WorkspaceRepository,
}

impl ConfigService {
    pub fn new(repository: WorkspaceRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a config value by key
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(self.repository.root())?;

        match key {
            "default_file_type" => Ok(config.default_file_type),
            "date_format" => Ok(config.date_format),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(FrontsyncError::Config(format!(
                "Unknown config key: {}. Valid keys: default_file_type, date_format, created",
                key
            ))),
        }
    }

    /// Set a config value by key
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(self.repository.root())?;

        match key {
            "default_file_type" => {
                let ext = value.trim_start_matches('.');
                if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                    return Err(FrontsyncError::Config(format!(
                        "Invalid file type: {}",
                        value
                    )));
                }
                config.default_file_type = ext.to_string();
            }
            "date_format" => {
                if value.trim().is_empty() {
                    return Err(FrontsyncError::Config(
                        "date_format cannot be empty".to_string(),
                    ));
                }
                config.date_format = value.to_string();
            }
            "created" => {
                return Err(FrontsyncError::Config(
                    "created is read-only".to_string(),
                ));
            }
            _ => {
                return Err(FrontsyncError::Config(format!(
                    "Unknown config key: {}. Valid keys: default_file_type, date_format",
                    key
                )));
            }
        }

        config.save_to_dir(self.repository.root())
    }

    /// List the full configuration
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(self.repository.root())
    }
}
