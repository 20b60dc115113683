use clap::Parser;
use frontsync::application::{
    init, manage_config::ConfigService, CreateContentOptions, CreateContentService,
    CreateTermOptions, CreateTermService, ExportService, GenerateTemplateOptions,
    GenerateTemplateService, RemapOptions, RemapService,
};
use frontsync::cli::{output, Cli, Commands, TemplateCommands, TermCommands};
use frontsync::domain::{RemapAction, TaxonomyType};
use frontsync::error::FrontsyncError;
use frontsync::infrastructure::{RegistryStore, TomlRegistryStore, WorkspaceRepository};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn parse_taxonomy(input: &str) -> Result<TaxonomyType, FrontsyncError> {
    TaxonomyType::from_str(input).map_err(FrontsyncError::Config)
}

fn run(cli: Cli) -> Result<(), FrontsyncError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Config { key, value, list } => {
            let repo = WorkspaceRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("default_file_type = {}", config.default_file_type);
                println!("date_format = {}", config.date_format);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: frontsync config [--list | <key> [<value>]]");
                println!("Valid keys: default_file_type, date_format, created");
                Ok(())
            }
        }
        Commands::Term { command } => match command {
            TermCommands::Create {
                taxonomy,
                term,
                document,
            } => {
                let taxonomy = parse_taxonomy(&taxonomy)?;
                let repo = WorkspaceRepository::discover()?;
                let store = TomlRegistryStore::new(repo.workspace_dir());
                let service = CreateTermService::new(repo, store);

                let report = service.execute(CreateTermOptions {
                    taxonomy: taxonomy.clone(),
                    term,
                    document,
                })?;

                println!("Added {} '{}'", taxonomy.label(), report.term);
                if let Some(filename) = report.added_to_document {
                    println!("Appended to {}", filename);
                }
                Ok(())
            }
            TermCommands::List { taxonomy } => {
                let taxonomy = parse_taxonomy(&taxonomy)?;
                let repo = WorkspaceRepository::discover()?;
                let store = TomlRegistryStore::new(repo.workspace_dir());

                let registry = store.get(&taxonomy)?;
                if registry.is_empty() {
                    println!("{}", output::format_term_list(registry.terms()));
                } else {
                    print!("{}", output::format_term_list(registry.terms()));
                }
                Ok(())
            }
        },
        Commands::Export => {
            let repo = WorkspaceRepository::discover()?;
            let store = TomlRegistryStore::new(repo.workspace_dir());
            let service = ExportService::new(repo, store);

            let report = service.execute()?;
            println!("{}", output::format_export_report(&report));
            Ok(())
        }
        Commands::Remap {
            taxonomy,
            term,
            to,
            delete,
        } => {
            let taxonomy = parse_taxonomy(&taxonomy)?;
            let action = match (to, delete) {
                (Some(new_term), false) => RemapAction::Rename(new_term),
                (None, true) => RemapAction::Delete,
                _ => {
                    return Err(FrontsyncError::Config(
                        "Specify either --to <NEW> or --delete".to_string(),
                    ))
                }
            };

            let repo = WorkspaceRepository::discover()?;
            let store = TomlRegistryStore::new(repo.workspace_dir());
            let service = RemapService::new(repo, store);

            let report = service.execute(RemapOptions {
                taxonomy,
                term,
                action,
            })?;

            println!("{}", output::format_remap_report(&report));
            let warnings = output::format_remap_failures(&report);
            if !warnings.is_empty() {
                eprintln!("{}", warnings);
            }
            Ok(())
        }
        Commands::Template { command } => match command {
            TemplateCommands::Generate {
                document,
                title,
                keep_body,
            } => {
                let repo = WorkspaceRepository::discover()?;
                let service = GenerateTemplateService::new(repo);

                let path = service.execute(GenerateTemplateOptions {
                    document,
                    title,
                    keep_body,
                })?;
                println!("Template created: {}", path.display());
                Ok(())
            }
            TemplateCommands::Create {
                template,
                folder,
                title,
            } => {
                let repo = WorkspaceRepository::discover()?;
                let service = CreateContentService::new(repo);

                let path = service.execute(CreateContentOptions {
                    template,
                    target_folder: folder,
                    title,
                })?;
                println!("Created {}", path.display());
                Ok(())
            }
        },
    }
}
