//! Remap taxonomy use case
//!
//! Renames, merges or deletes a registry term and propagates the change to
//! every document referencing it. Per-file failures are collected and
//! reported, never fatal; the registry commit is a single step applied
//! after all file results are in. Once propagation starts it runs to
//! completion: there is no mid-remap cancellation.
//!
//! A delete that empties a document's only front matter field strips the
//! metadata block entirely; such a document no longer carries front matter
//! and is skipped by later scans.

use crate::domain::remap::apply_to_document;
use crate::domain::{frontmatter, RemapAction, TaxonomyType};
use crate::error::{FrontsyncError, Result};
use crate::infrastructure::parallel::{parallel_map, MAX_PARALLEL_FILES};
use crate::infrastructure::{RegistryStore, WorkspaceRepository};

#[derive(Debug, Clone)]
pub struct RemapOptions {
    pub taxonomy: TaxonomyType,
    pub term: String,
    pub action: RemapAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapFailure {
    pub filename: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapReport {
    pub scanned: usize,
    pub changed: usize,
    /// Documents skipped because they could not be parsed.
    pub skipped: usize,
    pub failures: Vec<RemapFailure>,
}

enum FileOutcome {
    Unchanged,
    Changed,
    Skipped,
    Failed(RemapFailure),
}

/// Service for remapping a taxonomy term across the corpus
pub struct RemapService<S: RegistryStore> {
    repository: WorkspaceRepository,
    store: S,
}

impl<S: RegistryStore> RemapService<S> {
    pub fn new(repository: WorkspaceRepository, store: S) -> Self {
        RemapService { repository, store }
    }

    /// Execute the remap.
    ///
    /// Fails with `TermNotFound` before any file is touched. A rename onto
    /// the same term is a no-op. The registry reflects the intended target
    /// state at the end even when individual document writes failed; those
    /// failures are listed in the report.
    pub fn execute(&self, options: RemapOptions) -> Result<RemapReport> {
        let mut registry = self.store.get(&options.taxonomy)?;
        if !registry.contains(&options.term) {
            return Err(FrontsyncError::TermNotFound {
                taxonomy: options.taxonomy.label().to_string(),
                term: options.term.clone(),
            });
        }

        if let RemapAction::Rename(new_term) = &options.action {
            if new_term.trim().is_empty() {
                return Err(FrontsyncError::InvalidTerm(new_term.clone()));
            }
            if new_term == &options.term {
                return Ok(RemapReport::default());
            }
        }

        let documents = self.repository.list_documents();
        let scanned = documents.len();

        let repository = &self.repository;
        let field = options.taxonomy.field_name();
        let term = options.term.as_str();
        let action = &options.action;
        let outcomes = parallel_map(documents, MAX_PARALLEL_FILES, |filename| {
            remap_document(repository, &filename, field, term, action)
        });

        let mut report = RemapReport {
            scanned,
            ..RemapReport::default()
        };
        for outcome in outcomes {
            match outcome {
                FileOutcome::Unchanged => {}
                FileOutcome::Changed => report.changed += 1,
                FileOutcome::Skipped => report.skipped += 1,
                FileOutcome::Failed(failure) => report.failures.push(failure),
            }
        }

        // Single registry commit after the propagation barrier.
        match &options.action {
            RemapAction::Rename(new_term) => registry.rename(&options.term, new_term),
            RemapAction::Delete => registry.remove(&options.term),
        }
        self.store.set(&options.taxonomy, &registry)?;

        Ok(report)
    }
}

fn remap_document(
    repository: &WorkspaceRepository,
    filename: &str,
    field: &str,
    term: &str,
    action: &RemapAction,
) -> FileOutcome {
    let text = match repository.read_document(filename) {
        Ok(text) => text,
        Err(e) => {
            return FileOutcome::Failed(RemapFailure {
                filename: filename.to_string(),
                reason: e.to_string(),
            })
        }
    };

    let Ok(mut document) = frontmatter::parse(&text) else {
        return FileOutcome::Skipped;
    };

    if !apply_to_document(&mut document.data, field, term, action) {
        return FileOutcome::Unchanged;
    }

    let rewritten = frontmatter::serialize(&document.data, &document.body);
    match repository.write_document_atomic(filename, &rewritten) {
        Ok(()) => FileOutcome::Changed,
        Err(e) => FileOutcome::Failed(RemapFailure {
            filename: filename.to_string(),
            reason: e.to_string(),
        }),
    }
}
