//! Persistent taxonomy registry store
//!
//! Registries survive the process in .frontsync/taxonomies.toml. The store
//! is injected into the application services; there is no ambient global
//! registry state.

use crate::domain::{Registry, TaxonomyType};
use crate::error::{FrontsyncError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Access to the persisted registry of one taxonomy.
pub trait RegistryStore {
    fn get(&self, taxonomy: &TaxonomyType) -> Result<Registry>;
    fn set(&self, taxonomy: &TaxonomyType, registry: &Registry) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    custom: BTreeMap<String, Vec<String>>,
}

/// TOML-backed registry store
#[derive(Debug, Clone)]
pub struct TomlRegistryStore {
    path: PathBuf,
}

impl TomlRegistryStore {
    /// Store rooted in a workspace state directory
    pub fn new(workspace_dir: PathBuf) -> Self {
        TomlRegistryStore {
            path: workspace_dir.join("taxonomies.toml"),
        }
    }

    fn load(&self) -> Result<RegistryFile> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RegistryFile::default())
            }
            Err(e) => return Err(FrontsyncError::Io(e)),
        };

        toml::from_str(&contents).map_err(FrontsyncError::TomlDeserialize)
    }

    fn save(&self, file: &RegistryFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(file)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl RegistryStore for TomlRegistryStore {
    fn get(&self, taxonomy: &TaxonomyType) -> Result<Registry> {
        let file = self.load()?;
        let terms = match taxonomy {
            TaxonomyType::Tag => file.tags,
            TaxonomyType::Category => file.categories,
            TaxonomyType::Custom(id) => file.custom.get(id).cloned().unwrap_or_default(),
        };
        Ok(Registry::from_terms(terms))
    }

    fn set(&self, taxonomy: &TaxonomyType, registry: &Registry) -> Result<()> {
        let mut file = self.load()?;
        let terms = registry.terms().to_vec();
        match taxonomy {
            TaxonomyType::Tag => file.tags = terms,
            TaxonomyType::Category => file.categories = terms,
            TaxonomyType::Custom(id) => {
                file.custom.insert(id.clone(), terms);
            }
        }
        self.save(&file)
    }
}
