//! Per-document remap application
//!
//! Pure rewrite of one document's taxonomy field for a rename or delete.
//! The corpus-wide orchestration lives in the application layer.

use crate::domain::taxonomy::{field_terms, remove_field, set_field_terms};
use serde_yaml::Mapping;

/// The remap decision, made once upfront by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemapAction {
    Rename(String),
    Delete,
}

/// Apply a remap action to one document's front matter mapping.
///
/// Returns true when the mapping changed. Renames dedupe the array when the
/// new term was already present (first occurrence position wins). Deletes
/// remove the field entirely once its array empties.
pub fn apply_to_document(
    data: &mut Mapping,
    field: &str,
    term: &str,
    action: &RemapAction,
) -> bool {
    let terms = field_terms(data, field);
    if !terms.iter().any(|t| t == term) {
        return false;
    }

    match action {
        RemapAction::Rename(new_term) => {
            let mut updated: Vec<String> = Vec::with_capacity(terms.len());
            for existing in terms {
                let replacement = if existing == term {
                    new_term.clone()
                } else {
                    existing
                };
                if !updated.contains(&replacement) {
                    updated.push(replacement);
                }
            }
            set_field_terms(data, field, &updated);
        }
        RemapAction::Delete => {
            let remaining: Vec<String> = terms.into_iter().filter(|t| t != term).collect();
            if remaining.is_empty() {
                remove_field(data, field);
            } else {
                set_field_terms(data, field, &remaining);
            }
        }
    }

    true
}
