//! Taxonomy types and the canonical term registry

use serde_yaml::{Mapping, Value};
use std::fmt;
use std::str::FromStr;

/// A controlled vocabulary tracked by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaxonomyType {
    Tag,
    Category,
    Custom(String),
}

impl TaxonomyType {
    /// The front matter field name holding this taxonomy's values.
    pub fn field_name(&self) -> &str {
        match self {
            TaxonomyType::Tag => "tags",
            TaxonomyType::Category => "categories",
            TaxonomyType::Custom(id) => id,
        }
    }

    /// Singular label used in user-facing messages.
    pub fn label(&self) -> &str {
        match self {
            TaxonomyType::Tag => "tag",
            TaxonomyType::Category => "category",
            TaxonomyType::Custom(id) => id,
        }
    }
}

impl FromStr for TaxonomyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("Taxonomy name cannot be empty".to_string()),
            "tag" | "tags" => Ok(TaxonomyType::Tag),
            "category" | "categories" => Ok(TaxonomyType::Category),
            other => Ok(TaxonomyType::Custom(other.to_string())),
        }
    }
}

impl fmt::Display for TaxonomyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The canonical set of terms for one taxonomy.
///
/// Invariant after every mutating operation: terms are non-empty, unique
/// (case-sensitive) and sorted lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    terms: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Registry { terms: Vec::new() }
    }

    /// Build a registry from raw terms, normalizing them.
    pub fn from_terms(terms: Vec<String>) -> Self {
        let mut registry = Registry { terms };
        registry.normalize();
        registry
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<String> {
        self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    /// Insert a term. Returns false if it was already present.
    pub fn insert(&mut self, term: &str) -> bool {
        if self.contains(term) {
            return false;
        }
        self.terms.push(term.to_string());
        self.normalize();
        true
    }

    /// Merge terms collected from a corpus scan into the registry.
    pub fn merge<I>(&mut self, terms: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.terms.extend(terms);
        self.normalize();
    }

    /// Replace `from` with `to`. A rename onto an existing term collapses
    /// the two (the registry never contains duplicates).
    pub fn rename(&mut self, from: &str, to: &str) {
        self.terms.retain(|t| t != from);
        self.terms.push(to.to_string());
        self.normalize();
    }

    /// Remove a term if present.
    pub fn remove(&mut self, term: &str) {
        self.terms.retain(|t| t != term);
    }

    fn normalize(&mut self) {
        self.terms.retain(|t| !t.is_empty());
        self.terms.sort();
        self.terms.dedup();
    }
}

/// Read a taxonomy field's terms from a front matter mapping.
///
/// Accepts both a sequence of strings and a single scalar string (some
/// generators write one-term fields as scalars). Missing fields and
/// non-string entries yield nothing.
pub fn field_terms(data: &Mapping, field: &str) -> Vec<String> {
    match data.get(Value::String(field.to_string())) {
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(term)) => vec![term.clone()],
        _ => Vec::new(),
    }
}

/// Write a taxonomy field as a sequence, replacing any previous value.
///
/// Always a sequence: a field holding one term stays a one-element list.
pub fn set_field_terms(data: &mut Mapping, field: &str, terms: &[String]) {
    data.insert(
        Value::String(field.to_string()),
        Value::Sequence(terms.iter().cloned().map(Value::String).collect()),
    );
}

/// Remove a taxonomy field from a front matter mapping.
pub fn remove_field(data: &mut Mapping, field: &str) {
    data.remove(Value::String(field.to_string()));
}
