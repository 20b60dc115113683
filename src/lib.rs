//! frontsync - Front matter metadata synchronization engine
//!
//! Keeps controlled-vocabulary front matter fields (tags, categories and
//! custom taxonomies) consistent across a corpus of markdown documents, and
//! instantiates new documents from templates.
//!
//! Taxonomy-mutating operations (export, remap, term creation) assume one
//! invocation in flight at a time per workspace; callers are responsible
//! for serializing them.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FrontsyncError;
