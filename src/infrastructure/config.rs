//! Configuration management

use crate::domain::ContentTypeDescriptor;
use crate::error::{FrontsyncError, Result};
use crate::infrastructure::repository::WORKSPACE_DIR;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_file_type() -> String {
    "md".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Extension used for generated templates
    #[serde(default = "default_file_type")]
    pub default_file_type: String,

    /// chrono format string for date placeholders and date fields
    #[serde(default = "default_date_format")]
    pub date_format: String,

    pub created: DateTime<Utc>,

    /// Content type descriptors known to this workspace
    #[serde(default)]
    pub content_types: Vec<ContentTypeDescriptor>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            default_file_type: default_file_type(),
            date_format: default_date_format(),
            created: Utc::now(),
            content_types: vec![ContentTypeDescriptor::default_type()],
        }
    }

    /// Load config from .frontsync/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FrontsyncError::NotWorkspace(path.to_path_buf())
            } else {
                FrontsyncError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| FrontsyncError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .frontsync/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join("config.toml");

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| FrontsyncError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.default_file_type, "md");
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.content_types.len(), 1);
        assert_eq!(config.content_types[0].name, "default");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new();

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".frontsync/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.default_file_type, config.default_file_type);
        assert_eq!(loaded.date_format, config.date_format);
        assert_eq!(loaded.created, config.created);
        assert_eq!(loaded.content_types, config.content_types);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());
        match result.unwrap_err() {
            FrontsyncError::NotWorkspace(_) => {}
            other => panic!("Expected NotWorkspace error, got {}", other),
        }
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let workspace = temp.path().join(".frontsync");
        fs::create_dir(&workspace).unwrap();
        fs::write(
            workspace.join("config.toml"),
            "created = \"2025-01-01T00:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.default_file_type, "md");
        assert_eq!(loaded.date_format, "%Y-%m-%d");
        assert!(loaded.content_types.is_empty());
    }
}
