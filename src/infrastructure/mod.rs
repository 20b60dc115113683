//! Infrastructure layer - File system, configuration and persistence

pub mod config;
pub mod parallel;
pub mod registry_store;
pub mod repository;

pub use config::Config;
pub use registry_store::{RegistryStore, TomlRegistryStore};
pub use repository::WorkspaceRepository;
