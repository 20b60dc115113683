//! Create taxonomy term use case

use crate::domain::taxonomy::{field_terms, set_field_terms};
use crate::domain::{frontmatter, TaxonomyType};
use crate::error::{FrontsyncError, Result};
use crate::infrastructure::{RegistryStore, WorkspaceRepository};

#[derive(Debug, Clone)]
pub struct CreateTermOptions {
    pub taxonomy: TaxonomyType,
    pub term: String,
    /// Document to append the new term to (the opt-in "add to the open
    /// page" side effect). Relative to the workspace root.
    pub document: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTermReport {
    pub term: String,
    pub added_to_document: Option<String>,
}

/// Service for adding a term to a taxonomy registry
pub struct CreateTermService<S: RegistryStore> {
    repository: WorkspaceRepository,
    store: S,
}

impl<S: RegistryStore> CreateTermService<S> {
    pub fn new(repository: WorkspaceRepository, store: S) -> Self {
        CreateTermService { repository, store }
    }

    /// Insert the term into the registry, then optionally append it to the
    /// given document's taxonomy field.
    ///
    /// Fails with `DuplicateTerm` on a case-sensitive exact match. The
    /// registry commit happens before the document append; the document is
    /// explicitly targeted, so its parse failure is fatal and surfaced.
    pub fn execute(&self, options: CreateTermOptions) -> Result<CreateTermReport> {
        let term = options.term.trim();
        if term.is_empty() {
            return Err(FrontsyncError::InvalidTerm(options.term.clone()));
        }

        let mut registry = self.store.get(&options.taxonomy)?;
        if !registry.insert(term) {
            return Err(FrontsyncError::DuplicateTerm {
                taxonomy: options.taxonomy.label().to_string(),
                term: term.to_string(),
            });
        }
        self.store.set(&options.taxonomy, &registry)?;

        let mut added_to_document = None;
        if let Some(filename) = &options.document {
            if !self.repository.document_exists(filename) {
                return Err(FrontsyncError::NoActiveDocument(filename.clone()));
            }

            let text = self.repository.read_document(filename)?;
            let mut document = frontmatter::parse(&text)?;

            let field = options.taxonomy.field_name();
            let mut terms = field_terms(&document.data, field);
            if !terms.iter().any(|t| t == term) {
                terms.push(term.to_string());
                set_field_terms(&mut document.data, field, &terms);
                self.repository.write_document_atomic(
                    filename,
                    &frontmatter::serialize(&document.data, &document.body),
                )?;
            }
            added_to_document = Some(filename.clone());
        }

        Ok(CreateTermReport {
            term: term.to_string(),
            added_to_document,
        })
    }
}
