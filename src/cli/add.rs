//! Add command.

use tracing::info;

use crate::cli::output;
use crate::core::entry::Entry;
use crate::core::store::Store;
use crate::core::validate;
use crate::error::Result;

/// Add a new entry after validating all inputs at the boundary.
pub fn execute(
    store: &mut dyn Store,
    name: &str,
    secret: &str,
    digits: Option<&str>,
    period: Option<&str>,
) -> Result<()> {
    let mut entry = Entry::new(name, secret);

    if let Some(raw) = digits {
        entry.digits = validate::parse_digits(raw)?;
    }
    if let Some(raw) = period {
        entry.period = validate::parse_period(raw)?;
    }
    validate::validate_secret(secret)?;

    let id = store.add(&entry)?;
    info!(id, name, "added entry");

    output::success(&format!("added new entry: {}", output::name(name)));
    Ok(())
}
