//! Front matter codec
//!
//! Parses a document into a (metadata, body) pair and serializes it back.
//! YAML between `---` fences is the canonical sub-format. TOML between
//! `+++` fences is recognized on read and normalized to YAML on the next
//! write. The body is sliced from the original text byte-exactly, so
//! `parse(serialize(data, body))` returns `body` unchanged.

use crate::error::FormatError;
use serde_yaml::{Mapping, Value};

const YAML_FENCE: &str = "---";
const TOML_FENCE: &str = "+++";

/// A parsed document: ordered front matter mapping plus the raw body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub data: Mapping,
    pub body: String,
}

impl Document {
    pub fn new(data: Mapping, body: String) -> Self {
        Document { data, body }
    }
}

/// Parse a document's text into front matter and body.
pub fn parse(text: &str) -> Result<Document, FormatError> {
    if let Some(document) = parse_fenced(text, YAML_FENCE, decode_yaml)? {
        return Ok(document);
    }
    if let Some(document) = parse_fenced(text, TOML_FENCE, decode_toml)? {
        return Ok(document);
    }

    Err(FormatError::NoMetadataBlock)
}

/// Serialize front matter and body back to document text.
///
/// Deterministic: the same mapping (including key order) and body always
/// produce byte-identical output. An empty mapping emits the body alone.
pub fn serialize(data: &Mapping, body: &str) -> String {
    if data.is_empty() {
        return body.to_string();
    }

    // serde_yaml terminates its output with a newline.
    let yaml = serde_yaml::to_string(&Value::Mapping(data.clone()))
        .unwrap_or_else(|_| String::from("{}\n"));

    format!("{}\n{}{}\n{}", YAML_FENCE, yaml, YAML_FENCE, body)
}

fn parse_fenced(
    text: &str,
    fence: &str,
    decode: fn(&str) -> Result<Mapping, FormatError>,
) -> Result<Option<Document>, FormatError> {
    let Some((block, body_start)) = fenced_block(text, fence) else {
        return Ok(None);
    };

    let data = decode(block)?;
    Ok(Some(Document::new(data, text[body_start..].to_string())))
}

/// Locate a fenced metadata block at the start of the text.
///
/// Returns the raw block content and the byte offset where the body begins.
/// Byte offsets are tracked so the body can be sliced from the original
/// text instead of being rebuilt from joined lines.
fn fenced_block<'a>(text: &'a str, fence: &str) -> Option<(&'a str, usize)> {
    let mut lines = text.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != fence {
        return None;
    }

    let block_start = first.len();
    let mut offset = block_start;

    for line in lines {
        if line.trim_end() == fence {
            return Some((&text[block_start..offset], offset + line.len()));
        }
        offset += line.len();
    }

    None
}

fn decode_yaml(block: &str) -> Result<Mapping, FormatError> {
    let value: Value = serde_yaml::from_str(block)
        .map_err(|e| FormatError::MalformedMetadata(e.to_string()))?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        // An empty block deserializes to null.
        Value::Null => Ok(Mapping::new()),
        other => Err(FormatError::MalformedMetadata(format!(
            "expected a mapping, found {}",
            value_kind(&other)
        ))),
    }
}

fn decode_toml(block: &str) -> Result<Mapping, FormatError> {
    let table: toml::Table =
        toml::from_str(block).map_err(|e| FormatError::MalformedMetadata(e.to_string()))?;

    let mut mapping = Mapping::new();
    for (key, value) in table {
        mapping.insert(Value::String(key), toml_to_yaml(value));
    }
    Ok(mapping)
}

fn toml_to_yaml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Value::Number(serde_yaml::Number::from(f)),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => {
            Value::Sequence(items.into_iter().map(toml_to_yaml).collect())
        }
        toml::Value::Table(table) => {
            let mut mapping = Mapping::new();
            for (key, value) in table {
                mapping.insert(Value::String(key), toml_to_yaml(value));
            }
            Value::Mapping(mapping)
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a scalar",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
