//! Export command.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::import_export::{export_entries, Format};
use crate::core::store::Store;
use crate::error::{Error, Result};

/// Export all entries to a TOML or JSON file.
///
/// Secrets are written in plaintext, resolved from the secure vault
/// where applicable.
pub fn execute(store: &mut dyn Store, file: &str, format: Option<&str>) -> Result<()> {
    let path = Path::new(file);
    let format = Format::resolve(format, path)?;

    let entries = store.entries()?;
    if entries.is_empty() {
        return Err(Error::NothingToExport);
    }

    export_entries(path, format, &entries)?;

    info!(count = entries.len(), file, "exported entries");
    output::success(&format!("exported {} entries to {file}", entries.len()));
    Ok(())
}
