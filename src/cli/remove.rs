//! Remove command.

use tracing::info;

use crate::cli::output;
use crate::core::resolve::find_entry;
use crate::core::store::Store;
use crate::error::{Result, StoreError};

/// Remove an entry addressed by name, id, or list position.
pub fn execute(store: &mut dyn Store, token: &str) -> Result<()> {
    let entries = store.entries()?;
    let entry = find_entry(&entries, token)
        .ok_or_else(|| StoreError::EntryNotFound(token.to_string()))?;

    store.remove(entry.id)?;
    info!(id = entry.id, name = %entry.name, "removed entry");

    output::success(&format!("removed entry: {}", output::name(&entry.name)));
    Ok(())
}
