//! Content type descriptors
//!
//! External input describing which fields a document kind carries, which of
//! them are taxonomy-typed, and which hold dates that template creation
//! must refresh.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    DateTime,
    List,
    Taxonomy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Taxonomy id for taxonomy-typed fields (e.g. "tags").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<String>,
}

impl FieldDescriptor {
    fn new(name: &str, kind: FieldKind) -> Self {
        FieldDescriptor {
            name: name.to_string(),
            kind,
            default: None,
            taxonomy: None,
        }
    }

    fn taxonomy_field(name: &str, taxonomy: &str) -> Self {
        FieldDescriptor {
            name: name.to_string(),
            kind: FieldKind::Taxonomy,
            default: None,
            taxonomy: Some(taxonomy.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeDescriptor {
    pub name: String,
    #[serde(default = "default_extension")]
    pub file_extension: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

fn default_extension() -> String {
    "md".to_string()
}

impl ContentTypeDescriptor {
    /// The built-in content type used when a template declares no known type.
    pub fn default_type() -> Self {
        ContentTypeDescriptor {
            name: "default".to_string(),
            file_extension: default_extension(),
            fields: vec![
                FieldDescriptor::new("title", FieldKind::String),
                FieldDescriptor::new("description", FieldKind::String),
                FieldDescriptor::new("date", FieldKind::DateTime),
                FieldDescriptor::new("slug", FieldKind::String),
                FieldDescriptor::taxonomy_field("tags", "tags"),
                FieldDescriptor::taxonomy_field("categories", "categories"),
            ],
        }
    }

    /// Names of the fields holding dates that creation should refresh.
    pub fn date_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.kind == FieldKind::DateTime)
            .map(|f| f.name.as_str())
    }

    /// Find a content type by name, falling back to the built-in default.
    pub fn resolve(types: &[ContentTypeDescriptor], name: Option<&str>) -> ContentTypeDescriptor {
        name.and_then(|n| types.iter().find(|t| t.name == n))
            .cloned()
            .unwrap_or_else(ContentTypeDescriptor::default_type)
    }
}
