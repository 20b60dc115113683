//! Error types for frontsync

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the front matter codec.
///
/// `NoMetadataBlock` is recoverable for callers that accept documents
/// without front matter; corpus scans treat both variants as skip-and-continue.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("No front matter block found")]
    NoMetadataBlock,

    #[error("Malformed front matter: {0}")]
    MalformedMetadata(String),
}

/// Main error type for the frontsync application
#[derive(Debug, Error)]
pub enum FrontsyncError {
    #[error("Not a frontsync workspace: {0}")]
    NotWorkspace(PathBuf),

    #[error("The {taxonomy} '{term}' already exists")]
    DuplicateTerm { taxonomy: String, term: String },

    #[error("The {taxonomy} '{term}' is not in the registry")]
    TermNotFound { taxonomy: String, term: String },

    #[error("Invalid term: {0}")]
    InvalidTerm(String),

    #[error("No title was provided")]
    NoTitle,

    #[error("Document not found: {0}")]
    NoActiveDocument(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Target folder not found: {0}")]
    NoTargetFolder(String),

    #[error(
        "Created file {path} could not be re-parsed and needs manual metadata repair: {source}"
    )]
    CreatedFileNeedsRepair { path: PathBuf, source: FormatError },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl FrontsyncError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FrontsyncError::NotWorkspace(_) => 2,
            FrontsyncError::DuplicateTerm { .. } => 3,
            FrontsyncError::TermNotFound { .. } => 4,
            FrontsyncError::Format(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FrontsyncError::NotWorkspace(path) => {
                format!(
                    "Not a frontsync workspace: {}\n\n\
                    Suggestions:\n\
                    • Run 'frontsync init' in this directory to create a workspace\n\
                    • Navigate to an existing frontsync workspace\n\
                    • Set FRONTSYNC_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            FrontsyncError::DuplicateTerm { taxonomy, term } => {
                format!(
                    "The {} '{}' already exists\n\n\
                    Suggestions:\n\
                    • Terms are matched case-sensitively; check the exact spelling\n\
                    • Use 'frontsync term list {}' to see the registered terms",
                    taxonomy, term, taxonomy
                )
            }
            FrontsyncError::TermNotFound { taxonomy, term } => {
                format!(
                    "The {} '{}' is not in the registry\n\n\
                    Suggestions:\n\
                    • Use 'frontsync term list {}' to see the registered terms\n\
                    • Run 'frontsync export' to pick up terms already used in documents",
                    taxonomy, term, taxonomy
                )
            }
            FrontsyncError::NoTitle => {
                "No title was provided\n\n\
                Suggestions:\n\
                • Pass a non-empty title, e.g. frontsync template create article.md posts \"My Post\""
                    .to_string()
            }
            FrontsyncError::TemplateNotFound(name) => {
                format!(
                    "Template not found: {}\n\n\
                    Suggestions:\n\
                    • Templates live in .frontsync/templates\n\
                    • Create one from an open document: frontsync template generate <document> <title>",
                    name
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FrontsyncError
pub type Result<T> = std::result::Result<T, FrontsyncError>;
