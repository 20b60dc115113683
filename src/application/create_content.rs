//! Create content from template use case
//!
//! Instantiates a template into a target folder: binary copy first (so
//! content the codec does not model survives), then re-parse, resolve
//! placeholders, refresh date fields and write back.

use crate::domain::content_type::ContentTypeDescriptor;
use crate::domain::placeholder::{self, PlaceholderContext};
use crate::domain::frontmatter;
use crate::error::{FrontsyncError, Result};
use crate::infrastructure::{Config, WorkspaceRepository};
use chrono::Utc;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CreateContentOptions {
    /// Template file name inside .frontsync/templates
    pub template: String,
    /// Target folder, relative to the workspace root
    pub target_folder: String,
    pub title: String,
}

/// Service for creating a document from a template
pub struct CreateContentService {
    repository: WorkspaceRepository,
}

impl CreateContentService {
    pub fn new(repository: WorkspaceRepository) -> Self {
        CreateContentService { repository }
    }

    /// Execute the creation. Returns the path of the new document.
    ///
    /// A parse failure after the copy leaves the new file on disk and
    /// reports it as needing manual metadata repair; the raw copy already
    /// succeeded and is not rolled back.
    pub fn execute(&self, options: CreateContentOptions) -> Result<PathBuf> {
        let title = options.title.trim();
        if title.is_empty() {
            return Err(FrontsyncError::NoTitle);
        }

        let template_rel = format!(".frontsync/templates/{}", options.template);
        if !self.repository.document_exists(&template_rel) {
            return Err(FrontsyncError::TemplateNotFound(options.template.clone()));
        }

        let target_dir = self.repository.root().join(&options.target_folder);
        if !target_dir.is_dir() {
            return Err(FrontsyncError::NoTargetFolder(
                options.target_folder.clone(),
            ));
        }

        let config = Config::load_from_dir(self.repository.root())?;
        let content_type = self.resolve_content_type(&template_rel, &config);

        let extension = Path::new(&options.template)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| content_type.file_extension.clone());

        let new_rel = format!(
            "{}/{}.{}",
            options.target_folder.trim_end_matches('/'),
            placeholder::slugify(title),
            extension
        );
        if self.repository.document_exists(&new_rel) {
            return Err(FrontsyncError::Config(format!(
                "Document already exists: {}",
                new_rel
            )));
        }

        self.repository.copy_document(&template_rel, &new_rel)?;
        let new_path = self.repository.root().join(&new_rel);

        let text = self.repository.read_document(&new_rel)?;
        let mut document = match frontmatter::parse(&text) {
            Ok(document) => document,
            Err(source) => {
                return Err(FrontsyncError::CreatedFileNeedsRepair {
                    path: new_path,
                    source,
                })
            }
        };

        let now = Utc::now();
        let ctx = PlaceholderContext::new(title, now, &config.date_format);
        placeholder::resolve(&mut document.data, &ctx);

        // Content-type-declared date handling: every DateTime field gets
        // the creation timestamp.
        let stamp = now.format(&config.date_format).to_string();
        for field in content_type.date_fields() {
            document.data.insert(
                Value::String(field.to_string()),
                Value::String(stamp.clone()),
            );
        }

        self.repository.write_document_atomic(
            &new_rel,
            &frontmatter::serialize(&document.data, &document.body),
        )?;

        Ok(new_path)
    }

    /// Resolve the template's content type from its `type` field.
    /// An unreadable template or unknown type falls back to the default.
    fn resolve_content_type(&self, template_rel: &str, config: &Config) -> ContentTypeDescriptor {
        let declared = self
            .repository
            .read_document(template_rel)
            .ok()
            .and_then(|text| frontmatter::parse(&text).ok())
            .and_then(|document| {
                document
                    .data
                    .get(Value::String("type".to_string()))
                    .and_then(|v| v.as_str().map(str::to_string))
            });

        ContentTypeDescriptor::resolve(&config.content_types, declared.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init;
    use std::fs;
    use tempfile::TempDir;

    fn setup(temp: &TempDir) -> CreateContentService {
        init::init(temp.path()).unwrap();
        fs::create_dir_all(temp.path().join("posts")).unwrap();
        CreateContentService::new(WorkspaceRepository::new(temp.path().to_path_buf()))
    }

    fn write_template(temp: &TempDir, name: &str, contents: &str) {
        fs::write(
            temp.path().join(".frontsync/templates").join(name),
            contents,
        )
        .unwrap();
    }

    fn options(template: &str, folder: &str, title: &str) -> CreateContentOptions {
        CreateContentOptions {
            template: template.to_string(),
            target_folder: folder.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn creates_document_with_resolved_placeholders() {
        let temp = TempDir::new().unwrap();
        let service = setup(&temp);
        write_template(
            &temp,
            "article.md",
            "---\ntitle: '{{title}}'\nslug: '{{slug}}'\n---\nBody from template.\n",
        );

        let path = service
            .execute(options("article.md", "posts", "My Post"))
            .unwrap();

        assert_eq!(path, temp.path().join("posts/my-post.md"));
        let text = fs::read_to_string(&path).unwrap();
        let document = frontmatter::parse(&text).unwrap();
        assert_eq!(
            document.data.get(Value::String("title".to_string())),
            Some(&Value::String("My Post".to_string()))
        );
        assert_eq!(
            document.data.get(Value::String("slug".to_string())),
            Some(&Value::String("my-post".to_string()))
        );
        assert_eq!(document.body, "Body from template.\n");
    }

    #[test]
    fn refreshes_declared_date_fields() {
        let temp = TempDir::new().unwrap();
        let service = setup(&temp);
        write_template(&temp, "article.md", "---\ntitle: '{{title}}'\ndate: old\n---\n");

        let path = service
            .execute(options("article.md", "posts", "Dated"))
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let document = frontmatter::parse(&text).unwrap();
        let date = document
            .data
            .get(Value::String("date".to_string()))
            .and_then(|v| v.as_str())
            .unwrap();
        assert_ne!(date, "old");
        // Default date format is YYYY-MM-DD.
        assert_eq!(date.len(), 10);
        assert!(date.starts_with("20"));
    }

    #[test]
    fn template_not_found() {
        let temp = TempDir::new().unwrap();
        let service = setup(&temp);

        let err = service
            .execute(options("missing.md", "posts", "Title"))
            .unwrap_err();
        assert!(matches!(err, FrontsyncError::TemplateNotFound(_)));
    }

    #[test]
    fn missing_target_folder() {
        let temp = TempDir::new().unwrap();
        let service = setup(&temp);
        write_template(&temp, "article.md", "---\ntitle: t\n---\n");

        let err = service
            .execute(options("article.md", "nope", "Title"))
            .unwrap_err();
        assert!(matches!(err, FrontsyncError::NoTargetFolder(_)));
    }

    #[test]
    fn empty_title() {
        let temp = TempDir::new().unwrap();
        let service = setup(&temp);

        let err = service.execute(options("a.md", "posts", " ")).unwrap_err();
        assert!(matches!(err, FrontsyncError::NoTitle));
    }

    #[test]
    fn refuses_to_overwrite_existing_document() {
        let temp = TempDir::new().unwrap();
        let service = setup(&temp);
        write_template(&temp, "article.md", "---\ntitle: t\n---\n");
        fs::write(temp.path().join("posts/my-post.md"), "existing").unwrap();

        let err = service
            .execute(options("article.md", "posts", "My Post"))
            .unwrap_err();
        assert!(matches!(err, FrontsyncError::Config(_)));
        assert_eq!(
            fs::read_to_string(temp.path().join("posts/my-post.md")).unwrap(),
            "existing"
        );
    }

    #[test]
    fn unparseable_template_copy_is_kept_and_flagged() {
        let temp = TempDir::new().unwrap();
        let service = setup(&temp);
        write_template(&temp, "broken.md", "no front matter at all\n");

        let err = service
            .execute(options("broken.md", "posts", "My Post"))
            .unwrap_err();

        match err {
            FrontsyncError::CreatedFileNeedsRepair { path, .. } => {
                // The raw copy stays on disk for manual repair.
                assert!(path.exists());
                assert_eq!(
                    fs::read_to_string(path).unwrap(),
                    "no front matter at all\n"
                );
            }
            other => panic!("Expected CreatedFileNeedsRepair, got {}", other),
        }
    }

    #[test]
    fn uses_template_extension_for_new_file() {
        let temp = TempDir::new().unwrap();
        let service = setup(&temp);
        write_template(&temp, "page.mdx", "---\ntitle: '{{title}}'\n---\n");

        let path = service
            .execute(options("page.mdx", "posts", "Ext Check"))
            .unwrap();
        assert_eq!(path, temp.path().join("posts/ext-check.mdx"));
    }

    #[test]
    fn custom_content_type_controls_date_fields() {
        let temp = TempDir::new().unwrap();
        let service = setup(&temp);

        // Register a content type with a lastmod date field.
        let mut config = Config::load_from_dir(temp.path()).unwrap();
        config.content_types.push(
            toml::from_str(
                "name = \"note\"\nfile_extension = \"md\"\n\
                 [[fields]]\nname = \"title\"\ntype = \"string\"\n\
                 [[fields]]\nname = \"lastmod\"\ntype = \"datetime\"\n",
            )
            .unwrap(),
        );
        config.save_to_dir(temp.path()).unwrap();

        write_template(&temp, "note.md", "---\ntype: note\ntitle: '{{title}}'\n---\n");

        let path = service
            .execute(options("note.md", "posts", "Typed"))
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let document = frontmatter::parse(&text).unwrap();
        assert!(document
            .data
            .get(Value::String("lastmod".to_string()))
            .is_some());
        // The default type's "date" field is not injected for this type.
        assert!(document
            .data
            .get(Value::String("date".to_string()))
            .is_none());
    }
}
