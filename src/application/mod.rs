//! Application layer - Use cases and orchestration

pub mod create_content;
pub mod create_term;
pub mod export_taxonomy;
pub mod generate_template;
pub mod init;
pub mod manage_config;
pub mod remap_taxonomy;

pub use create_content::{CreateContentOptions, CreateContentService};
pub use create_term::{CreateTermOptions, CreateTermService};
pub use export_taxonomy::{ExportReport, ExportService};
pub use generate_template::{GenerateTemplateOptions, GenerateTemplateService};
pub use remap_taxonomy::{RemapOptions, RemapReport, RemapService};
