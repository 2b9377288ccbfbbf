//! Wipe command.

use std::fs;

use tracing::info;

use crate::cli::output;
use crate::core::store::Store;
use crate::error::{Error, Result};

/// Remove every entry (releasing secure-vault records one by one), then
/// delete the backing database file.
pub fn execute(store: &mut dyn Store) -> Result<()> {
    let entries = store.entries()?;
    if entries.is_empty() {
        return Err(Error::NothingToWipe);
    }

    for entry in &entries {
        store.remove(entry.id)?;
    }

    let path = store.path().to_path_buf();
    if path.exists() {
        fs::remove_file(&path)?;
    }

    info!(count = entries.len(), "wiped database");
    output::success("database wiped successfully");
    Ok(())
}
