//! Export taxonomy use case
//!
//! Scans the whole corpus for values under the fixed `tags` and
//! `categories` front matter fields and folds them into the persisted
//! registries. Custom taxonomies are not auto-exported.

use crate::domain::taxonomy::field_terms;
use crate::domain::{frontmatter, TaxonomyType};
use crate::error::Result;
use crate::infrastructure::parallel::{parallel_map, MAX_PARALLEL_FILES};
use crate::infrastructure::{RegistryStore, WorkspaceRepository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub scanned: usize,
    /// Documents skipped because they could not be read or parsed.
    pub skipped: usize,
    pub tag_count: usize,
    pub category_count: usize,
}

/// Service for exporting corpus taxonomy values into the registries
pub struct ExportService<S: RegistryStore> {
    repository: WorkspaceRepository,
    store: S,
}

impl<S: RegistryStore> ExportService<S> {
    pub fn new(repository: WorkspaceRepository, store: S) -> Self {
        ExportService { repository, store }
    }

    /// Execute the export.
    ///
    /// Parse failures are non-fatal: the scan is resilient to arbitrary
    /// unparseable files. Per-file reads run in a bounded worker pool; the
    /// registry merge is a single step applied once all results are in.
    pub fn execute(&self) -> Result<ExportReport> {
        let documents = self.repository.list_documents();
        let scanned = documents.len();

        let repository = &self.repository;
        let scans = parallel_map(documents, MAX_PARALLEL_FILES, |filename| {
            scan_document(repository, &filename)
        });

        let mut skipped = 0;
        let mut tags: Vec<String> = Vec::new();
        let mut categories: Vec<String> = Vec::new();
        for scan in scans {
            match scan {
                Some((doc_tags, doc_categories)) => {
                    tags.extend(doc_tags);
                    categories.extend(doc_categories);
                }
                None => skipped += 1,
            }
        }

        let mut tag_registry = self.store.get(&TaxonomyType::Tag)?;
        tag_registry.merge(tags);
        self.store.set(&TaxonomyType::Tag, &tag_registry)?;

        let mut category_registry = self.store.get(&TaxonomyType::Category)?;
        category_registry.merge(categories);
        self.store.set(&TaxonomyType::Category, &category_registry)?;

        Ok(ExportReport {
            scanned,
            skipped,
            tag_count: tag_registry.len(),
            category_count: category_registry.len(),
        })
    }
}

fn scan_document(
    repository: &WorkspaceRepository,
    filename: &str,
) -> Option<(Vec<String>, Vec<String>)> {
    let text = repository.read_document(filename).ok()?;
    let document = frontmatter::parse(&text).ok()?;

    Some((
        field_terms(&document.data, TaxonomyType::Tag.field_name()),
        field_terms(&document.data, TaxonomyType::Category.field_name()),
    ))
}
