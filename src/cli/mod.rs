//! CLI layer - Command definitions and output formatting

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, TemplateCommands, TermCommands};
