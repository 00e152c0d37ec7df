//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `locales`: List, add and remove locales
//! - `translations`: Inspect and edit the entries of one locale
//! - `import` / `export`: CSV interchange
//! - `sync`: Merge new default translations into a locale
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        self.common.verbose
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Configuration file (default: search .transyncrc.json upwards)
    #[arg(long, global = true, env = "TRANSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct LocalesCommand {
    #[command(subcommand)]
    pub action: LocalesAction,
}

#[derive(Debug, Subcommand)]
pub enum LocalesAction {
    /// List stored locales
    List,
    /// Create a locale
    Add {
        locale: String,
        /// Fill the new locale with its default translations
        #[arg(long)]
        initialize: bool,
    },
    /// Delete a locale and all of its translations
    Remove {
        locale: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct TranslationsCommand {
    #[command(subcommand)]
    pub action: TranslationsAction,
}

/// Keys are written `namespace::key` for vendor entries and plain `key` otherwise.
#[derive(Debug, Subcommand)]
pub enum TranslationsAction {
    /// List every entry of a locale
    List { locale: String },
    /// Print the value stored for a key
    Get { locale: String, key: String },
    /// Set the value of a key, creating the entry if needed
    Update {
        locale: String,
        key: String,
        value: String,
    },
    /// Delete a key
    Remove { locale: String, key: String },
}

#[derive(Debug, Args)]
pub struct TransferArgs {
    pub locale: String,
    /// CSV file
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct SyncArgs {
    pub locale: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List, add or remove locales
    Locales(LocalesCommand),
    /// Inspect and edit the translations of a locale
    Translations(TranslationsCommand),
    /// Replace a locale's translations with the content of a CSV file
    Import(TransferArgs),
    /// Write a locale's translations to a CSV file
    Export(TransferArgs),
    /// Merge new default translations into a locale, keeping stored values
    Sync(SyncArgs),
    /// Initialize a new .transyncrc.json configuration file
    Init,
}
