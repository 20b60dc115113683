//! Generate template use case
//!
//! Snapshots an existing document's front matter (and optionally its body)
//! into the workspace templates folder.

use crate::domain::{frontmatter, placeholder};
use crate::error::{FrontsyncError, Result};
use crate::infrastructure::{Config, WorkspaceRepository};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GenerateTemplateOptions {
    /// Source document, relative to the workspace root
    pub document: String,
    pub title: String,
    /// Keep the document body in the template, or start templates empty
    pub keep_body: bool,
}

/// Service for generating a template from a document
pub struct GenerateTemplateService {
    repository: WorkspaceRepository,
}

impl GenerateTemplateService {
    pub fn new(repository: WorkspaceRepository) -> Self {
        GenerateTemplateService { repository }
    }

    /// Execute the generation. Returns the path of the new template.
    pub fn execute(&self, options: GenerateTemplateOptions) -> Result<PathBuf> {
        if options.title.trim().is_empty() {
            return Err(FrontsyncError::NoTitle);
        }

        if !self.repository.document_exists(&options.document) {
            return Err(FrontsyncError::NoActiveDocument(options.document.clone()));
        }

        let config = Config::load_from_dir(self.repository.root())?;

        let text = self.repository.read_document(&options.document)?;
        // The document is explicitly targeted; parse failure is fatal.
        let document = frontmatter::parse(&text)?;

        let body = if options.keep_body {
            document.body.as_str()
        } else {
            ""
        };
        let contents = frontmatter::serialize(&document.data, body);

        let templates_dir = self.repository.templates_dir();
        fs::create_dir_all(&templates_dir)?;

        // Slugged so a title with path separators cannot escape the
        // templates directory.
        let template_path = templates_dir.join(format!(
            "{}.{}",
            placeholder::slugify(options.title.trim()),
            config.default_file_type
        ));
        fs::write(&template_path, contents)?;

        Ok(template_path)
    }
}
