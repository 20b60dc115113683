//! Template placeholder resolution
//!
//! Substitutes `{{token}}` placeholders inside string scalars of a front
//! matter mapping. Substitution is purely textual and never rewrites
//! non-string values; unknown tokens are left unchanged.

use chrono::{DateTime, Datelike, Utc};
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{\{\s*([a-z]+)\s*\}\}").unwrap())
}

/// Values available to placeholder substitution.
#[derive(Debug, Clone)]
pub struct PlaceholderContext {
    pub title: String,
    pub now: DateTime<Utc>,
    pub date_format: String,
}

impl PlaceholderContext {
    pub fn new(title: &str, now: DateTime<Utc>, date_format: &str) -> Self {
        PlaceholderContext {
            title: title.to_string(),
            now,
            date_format: date_format.to_string(),
        }
    }

    fn lookup(&self, token: &str) -> Option<String> {
        match token {
            "title" => Some(self.title.clone()),
            "slug" => Some(slugify(&self.title)),
            "date" => Some(self.now.format(&self.date_format).to_string()),
            "year" => Some(format!("{:04}", self.now.year())),
            "month" => Some(format!("{:02}", self.now.month())),
            "day" => Some(format!("{:02}", self.now.day())),
            _ => None,
        }
    }
}

/// Resolve placeholders in every string scalar of the mapping.
/// Returns the number of substitutions made.
pub fn resolve(data: &mut Mapping, ctx: &PlaceholderContext) -> usize {
    let mut substitutions = 0;
    for (_, value) in data.iter_mut() {
        resolve_value(value, ctx, &mut substitutions);
    }
    substitutions
}

fn resolve_value(value: &mut Value, ctx: &PlaceholderContext, substitutions: &mut usize) {
    match value {
        Value::String(text) => {
            let resolved = resolve_text(text, ctx, substitutions);
            if resolved != *text {
                *text = resolved;
            }
        }
        Value::Sequence(items) => {
            for item in items {
                resolve_value(item, ctx, substitutions);
            }
        }
        Value::Mapping(nested) => {
            for (_, nested_value) in nested.iter_mut() {
                resolve_value(nested_value, ctx, substitutions);
            }
        }
        _ => {}
    }
}

fn resolve_text(text: &str, ctx: &PlaceholderContext, substitutions: &mut usize) -> String {
    placeholder_regex()
        .replace_all(text, |captures: &regex::Captures<'_>| {
            match ctx.lookup(&captures[1]) {
                Some(replacement) => {
                    *substitutions += 1;
                    replacement
                }
                // Unknown tokens stay as written.
                None => captures[0].to_string(),
            }
        })
        .to_string()
}

/// Derive a file-name-safe slug from a title.
///
/// Lowercases, maps spaces to hyphens, keeps alphanumerics and '-'/'_',
/// replaces everything else with underscores.
pub fn slugify(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c.to_ascii_lowercase(),
            ' ' => '-',
            _ => '_',
        })
        .collect::<String>()
        .trim_matches('_')
        .trim_matches('-')
        .to_string()
}
