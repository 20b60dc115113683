//! Domain layer - Front matter codec, taxonomies and template logic

pub mod content_type;
pub mod frontmatter;
pub mod placeholder;
pub mod remap;
pub mod taxonomy;

pub use content_type::ContentTypeDescriptor;
pub use frontmatter::Document;
pub use remap::RemapAction;
pub use taxonomy::{Registry, TaxonomyType};
