//! CLI Tooling
//!
//! Command-line interface over the browsing core. Every path argument is relative to
//! the browsing root chosen at startup.

use crate::browser::Browser;
use crate::config::BrowseConfig;
use crate::error::BrowseError;
use crate::root::RootContext;
use crate::tooling::format::{format_entry_json, format_entry_text, format_mutation_json};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Rootbrowse CLI - browse and edit one directory tree by relative path
#[derive(Parser)]
#[command(name = "rootbrowse")]
#[command(about = "Browse a local directory tree and create, empty, or delete entries in it")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Browsing root (defaults to config `root`, then ROOT_DIR, then the working directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold logging flags into the loaded configuration.
    pub fn apply_logging_overrides(&self, config: &mut BrowseConfig) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show a folder listing, or a text file's metadata and content
    Browse {
        /// Path relative to the root (empty for the root itself)
        #[arg(default_value = "")]
        path: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Create a folder, including missing parents
    CreateFolder {
        /// Folder path relative to the root
        name: String,
    },
    /// Create a new .txt file
    CreateFile {
        /// File path relative to the root; must end in .txt
        name: String,
        /// Text content to write
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Remove everything inside a folder, keeping the folder
    EmptyFolder {
        /// Folder path relative to the root
        name: String,
    },
    /// Delete an empty folder
    DeleteFolder {
        /// Folder path relative to the root
        name: String,
    },
    /// Delete a file
    DeleteFile {
        /// File path relative to the root
        name: String,
    },
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Browse { .. } => "browse",
        Commands::CreateFolder { .. } => "create-folder",
        Commands::CreateFile { .. } => "create-file",
        Commands::EmptyFolder { .. } => "empty-folder",
        Commands::DeleteFolder { .. } => "delete-folder",
        Commands::DeleteFile { .. } => "delete-file",
    }
}

/// CLI context holding the browser for one root.
pub struct CliContext {
    browser: Browser,
}

impl CliContext {
    /// Create a context from already-loaded configuration. An explicit root wins.
    pub fn from_config(root: Option<PathBuf>, config: &BrowseConfig) -> Result<Self, BrowseError> {
        let chosen = root.or_else(|| config.root.clone());
        let root = RootContext::from_env_or_cwd(chosen.as_deref())?;
        info!(root = %root.path().display(), "browsing root selected");
        Ok(Self {
            browser: Browser::new(root),
        })
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Run a command and render its output.
    pub fn execute(&self, command: &Commands) -> Result<String, BrowseError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        match &result {
            Ok(_) => info!(
                command = command_name(command),
                duration_ms = started.elapsed().as_millis() as u64,
                "command completed"
            ),
            Err(e) => info!(
                command = command_name(command),
                status = e.status_code(),
                error = %e,
                "command failed"
            ),
        }
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, BrowseError> {
        let mutations = self.browser.mutations();
        match command {
            Commands::Browse { path, format } => self.handle_browse(path, format),
            Commands::CreateFolder { name } => {
                mutations.create_folder(name).map(format_mutation_json)
            }
            Commands::CreateFile { name, content } => mutations
                .create_file(name, content)
                .map(format_mutation_json),
            Commands::EmptyFolder { name } => {
                mutations.empty_folder(name).map(format_mutation_json)
            }
            Commands::DeleteFolder { name } => {
                mutations.delete_folder(name).map(format_mutation_json)
            }
            Commands::DeleteFile { name } => mutations.delete_file(name).map(format_mutation_json),
        }
    }

    /// Handle browse command
    fn handle_browse(&self, path: &str, format: &str) -> Result<String, BrowseError> {
        let entry = self.browser.browse(path)?;
        match format {
            "json" => Ok(format_entry_json(&entry)),
            "text" | _ => Ok(format_entry_text(path, &entry)),
        }
    }
}
