//! Credential storage backends.
//!
//! The [`Store`] trait abstracts entry CRUD so the CLI works identically
//! against either backend:
//!
//! - [`FileStore`] keeps the whole collection in one TOML file and
//!   rewrites it on every mutation.
//! - [`SqliteStore`] persists each operation individually and can offload
//!   the secret column into the OS secret service.
//!
//! ## Adding a new backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file (e.g., `remote.rs`)
//! 3. Wire it into [`Backend`] and [`open`]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::entry::Entry;
use crate::error::{Error, Result};

mod file;
mod secrets;
mod sqlite;

pub use file::FileStore;
pub use secrets::SecretVault;
pub use sqlite::SqliteStore;

/// Database file name for the indexed backend.
pub const SQLITE_FILE: &str = "auth.db";

/// Database file name for the structured-file backend.
pub const TOML_FILE: &str = "db.toml";

/// Entry storage trait.
///
/// All operations are synchronous, blocking local-resource accesses. The
/// store owns entry identity: `add` ignores any caller-supplied id and
/// allocates a fresh one.
pub trait Store {
    /// Populate in-memory state from the backing resource.
    ///
    /// # Errors
    ///
    /// Fails when the resource is absent or malformed; the store is left
    /// empty but usable either way.
    fn load(&mut self) -> Result<()>;

    /// Return a snapshot copy of all entries.
    ///
    /// The snapshot does not reflect subsequent mutations. Backends with
    /// secret offload resolve reference tokens to plaintext here, falling
    /// back to the raw stored value when resolution fails.
    fn entries(&self) -> Result<Vec<Entry>>;

    /// Add an entry, allocating a fresh id.
    ///
    /// # Returns
    ///
    /// The id assigned to the new entry.
    fn add(&mut self, entry: &Entry) -> Result<u64>;

    /// Remove the entry with exactly this id, releasing any associated
    /// secret-service record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownId` when no entry matches.
    fn remove(&mut self, id: u64) -> Result<()>;

    /// Replace all mutable fields of the entry matching `entry.id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownId` when no entry matches.
    fn update(&mut self, entry: &Entry) -> Result<()>;

    /// Path of the backing file.
    fn path(&self) -> &Path;
}

/// Available storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Indexed SQLite database (default).
    Sqlite,
    /// Single structured TOML file.
    Toml,
}

/// Resolve the database directory.
///
/// `AUTH_DATABASE_DIR` overrides everything; otherwise the store lives
/// under `$HOME/.local/share/auth`. Returns `None` when neither is
/// resolvable, in which case the caller fails gracefully.
pub fn database_dir() -> Option<PathBuf> {
    if let Ok(dir) = env::var("AUTH_DATABASE_DIR") {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::home_dir().map(|home| home.join(".local").join("share").join("auth"))
}

/// Open the selected backend at the default location and load it.
///
/// A missing or unreadable database is not an error at this point: the
/// file backend writes a fresh empty database, the indexed backend starts
/// from an empty table.
pub fn open(backend: Backend) -> Result<Box<dyn Store>> {
    let dir = database_dir().ok_or(Error::NoDatabaseDir)?;
    fs::create_dir_all(&dir)?;

    match backend {
        Backend::Sqlite => {
            let mut store = SqliteStore::open(dir.join(SQLITE_FILE), SecretVault::probe())?;
            store.load()?;
            Ok(Box::new(store))
        }
        Backend::Toml => {
            let mut store = FileStore::new(dir.join(TOML_FILE));
            if store.load().is_err() {
                debug!(path = %store.path().display(), "no readable database, writing a fresh one");
                store.save()?;
            }
            Ok(Box::new(store))
        }
    }
}
