//! Import command.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::import_export::{import_entries, Format};
use crate::core::store::Store;
use crate::error::{Error, Result};

/// Import entries from a TOML or JSON file.
pub fn execute(store: &mut dyn Store, file: &str, format: Option<&str>) -> Result<()> {
    let path = Path::new(file);
    let format = Format::resolve(format, path)?;

    let imported = import_entries(path, format, store)?;
    if imported == 0 {
        return Err(Error::NothingImported(file.to_string()));
    }

    info!(imported, file, "imported entries");
    output::success(&format!("imported {imported} entries from {file}"));
    Ok(())
}
