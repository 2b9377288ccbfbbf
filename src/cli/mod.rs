//! Command-line interface.

pub mod add;
pub mod edit;
pub mod export;
pub mod generate;
pub mod import;
pub mod info;
pub mod list;
pub mod output;
pub mod remove;
pub mod wipe;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

use crate::core::store::{self, Backend};
use crate::error::Result;

/// Auth - a TOTP authenticator for the command line.
#[derive(Parser)]
#[command(
    name = "auth",
    about = "A TOTP authenticator for the command line",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Storage backend to use
    #[arg(long, global = true, value_enum, default_value_t = BackendArg::Sqlite)]
    pub backend: BackendArg,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Add a new TOTP entry
    Add {
        /// Display name for the entry
        name: String,
        /// Base32 shared secret
        secret: String,
        /// Number of code digits, 6-8 (default: 6)
        digits: Option<String>,
        /// Time period in seconds (default: 30)
        period: Option<String>,
    },

    /// Remove an entry
    Remove {
        /// Entry name, id, or list position
        entry: String,
    },

    /// List all entries with their current codes
    List,

    /// Generate the code for one entry
    Generate {
        /// Entry name, id, or list position
        entry: String,
    },

    /// Show details for an entry
    Info {
        /// Entry name, id, or list position
        entry: String,
    },

    /// Edit an entry in place (empty positionals leave fields unchanged)
    Edit {
        /// Entry name, id, or list position
        entry: String,
        /// New display name
        name: Option<String>,
        /// New Base32 shared secret
        secret: Option<String>,
        /// New digit count, 6-8
        digits: Option<String>,
        /// New period in seconds
        period: Option<String>,
    },

    /// Import entries from a TOML or JSON file
    Import {
        /// Path to the file
        file: String,
        /// File format: toml or json (default: by extension)
        format: Option<String>,
    },

    /// Export entries to a TOML or JSON file
    Export {
        /// Path to the file
        file: String,
        /// File format: toml or json (default: by extension)
        format: Option<String>,
    },

    /// Remove every entry and delete the database
    Wipe,
}

/// Storage backend selector.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum BackendArg {
    /// Indexed SQLite database
    Sqlite,
    /// Single TOML file
    Toml,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Sqlite => Backend::Sqlite,
            BackendArg::Toml => Backend::Toml,
        }
    }
}

/// Execute a parsed command.
///
/// Opens the selected store first; every command operates through the
/// same `Store` trait object.
pub fn execute(command: Option<Command>, backend: BackendArg) -> Result<()> {
    let Some(command) = command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut store = store::open(backend.into())?;
    let store = store.as_mut();

    match command {
        Command::Add {
            name,
            secret,
            digits,
            period,
        } => add::execute(store, &name, &secret, digits.as_deref(), period.as_deref()),
        Command::Remove { entry } => remove::execute(store, &entry),
        Command::List => list::execute(store),
        Command::Generate { entry } => generate::execute(store, &entry),
        Command::Info { entry } => info::execute(store, &entry),
        Command::Edit {
            entry,
            name,
            secret,
            digits,
            period,
        } => edit::execute(
            store,
            &entry,
            name.as_deref(),
            secret.as_deref(),
            digits.as_deref(),
            period.as_deref(),
        ),
        Command::Import { file, format } => import::execute(store, &file, format.as_deref()),
        Command::Export { file, format } => export::execute(store, &file, format.as_deref()),
        Command::Wipe => wipe::execute(store),
    }
}
