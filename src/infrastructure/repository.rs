//! Workspace repository
//!
//! Owns document discovery and I/O for one workspace. The engine never
//! discovers files through any other path.

use crate::error::{FrontsyncError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory holding workspace state (config, registries, templates).
pub const WORKSPACE_DIR: &str = ".frontsync";

/// File extensions treated as documents.
const DOCUMENT_EXTENSIONS: &[&str] = &["md", "mdx", "markdown"];

/// File system workspace for front matter documents
#[derive(Debug, Clone)]
pub struct WorkspaceRepository {
    pub root: PathBuf,
}

impl WorkspaceRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        WorkspaceRepository { root }
    }

    /// Discover the workspace root.
    /// First checks the FRONTSYNC_ROOT environment variable, then walks up
    /// from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("FRONTSYNC_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(WorkspaceRepository::new(path));
            } else {
                return Err(FrontsyncError::Config(format!(
                    "FRONTSYNC_ROOT is set to '{}' but no {} directory found. \
                    Run 'frontsync init' in that directory or unset FRONTSYNC_ROOT.",
                    path.display(),
                    WORKSPACE_DIR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the workspace root by walking up from a starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                return Ok(WorkspaceRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(FrontsyncError::NotWorkspace(start.to_path_buf()));
                }
            }
        }
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the workspace state directory
    pub fn workspace_dir(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR)
    }

    /// Absolute path of the templates directory
    pub fn templates_dir(&self) -> PathBuf {
        self.workspace_dir().join("templates")
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    /// Create the workspace state directory
    pub fn initialize(&self) -> Result<()> {
        let dir = self.workspace_dir();

        if dir.exists() {
            return Err(FrontsyncError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&dir)?;
        Ok(())
    }

    /// Check if a document exists (relative path)
    pub fn document_exists(&self, filename: &str) -> bool {
        self.root.join(filename).is_file()
    }

    /// Read a document's raw text (relative path)
    pub fn read_document(&self, filename: &str) -> Result<String> {
        fs::read_to_string(self.root.join(filename)).map_err(FrontsyncError::Io)
    }

    /// Write document content, creating parent directories as needed
    pub fn write_document(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.root.join(filename);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content).map_err(FrontsyncError::Io)
    }

    /// Write document content using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove
    /// the destination first.
    pub fn write_document_atomic(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.root.join(filename);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.frontsync-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("document.md"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    /// Binary copy of a file (relative paths) within the workspace.
    /// Preserves content the codec does not model.
    pub fn copy_document(&self, from: &str, to: &str) -> Result<()> {
        let from_path = self.root.join(from);
        let to_path = self.root.join(to);

        if !from_path.exists() {
            return Err(FrontsyncError::Config(format!(
                "Cannot copy missing file: {}",
                from_path.display()
            )));
        }

        if let Some(parent) = to_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::copy(from_path, to_path)?;
        Ok(())
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    fn is_document(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext))
    }

    /// List every document in the corpus as sorted relative paths.
    ///
    /// Walks the whole workspace, pruning dot-directories (which also keeps
    /// templates under .frontsync/templates out of the corpus). A fresh
    /// call re-lists; nothing is cached.
    pub fn list_documents(&self) -> Vec<String> {
        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        let mut documents = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if !Self::is_document(entry.path()) {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if let Some(filename) = Self::normalize_relative_path(rel) {
                documents.push(filename);
            }
        }

        documents.sort();
        documents
    }
}
