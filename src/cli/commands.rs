//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "frontsync")]
#[command(about = "Front matter taxonomy synchronization for markdown corpora", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Manage taxonomy terms
    Term {
        #[command(subcommand)]
        command: TermCommands,
    },

    /// Export tags and categories found in documents into the registries
    Export,

    /// Rename, merge or delete a taxonomy term across all documents
    Remap {
        /// Taxonomy (tag, category, or a custom taxonomy id)
        taxonomy: String,

        /// Term to remap
        term: String,

        /// New term to rename/merge to
        #[arg(long, conflicts_with = "delete")]
        to: Option<String>,

        /// Delete the term instead of renaming it
        #[arg(long)]
        delete: bool,
    },

    /// Manage document templates
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum TermCommands {
    /// Add a new term to a taxonomy registry
    Create {
        /// Taxonomy (tag, category, or a custom taxonomy id)
        taxonomy: String,

        /// The new term
        term: String,

        /// Also append the term to this document's taxonomy field
        #[arg(long)]
        document: Option<String>,
    },

    /// List the registered terms of a taxonomy
    List {
        /// Taxonomy (tag, category, or a custom taxonomy id)
        taxonomy: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// Generate a template from an existing document
    Generate {
        /// Source document (relative to the workspace root)
        document: String,

        /// Template title (becomes the template file name)
        title: String,

        /// Keep the document body in the template
        #[arg(long)]
        keep_body: bool,
    },

    /// Create a new document from a template
    Create {
        /// Template file name inside .frontsync/templates
        template: String,

        /// Target folder (relative to the workspace root)
        folder: String,

        /// Title of the new document
        title: String,
    },
}
