//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, WorkspaceRepository};
use std::fs;
use std::path::Path;

/// Initialize a new frontsync workspace at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = WorkspaceRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new();
    config.save_to_dir(repo.root())?;

    fs::create_dir_all(repo.templates_dir())?;

    println!("Initialized frontsync workspace at {}", path.display());

    Ok(())
}
