//! Edit command.
//!
//! Positional arguments map onto entry fields; an empty string (or a
//! missing trailing argument) leaves the field unchanged, so
//! `auth edit github "" "" 8` only bumps the digit count.

use tracing::info;

use crate::cli::output;
use crate::core::resolve::find_entry;
use crate::core::store::Store;
use crate::core::validate;
use crate::error::{Result, StoreError};

/// Modify an entry in place. Only changed fields are validated.
pub fn execute(
    store: &mut dyn Store,
    token: &str,
    name: Option<&str>,
    secret: Option<&str>,
    digits: Option<&str>,
    period: Option<&str>,
) -> Result<()> {
    let entries = store.entries()?;
    let mut entry = find_entry(&entries, token)
        .ok_or_else(|| StoreError::EntryNotFound(token.to_string()))?;

    if let Some(name) = filled(name) {
        entry.name = name.to_string();
    }
    if let Some(secret) = filled(secret) {
        validate::validate_secret(secret)?;
        entry.secret = secret.to_string();
    }
    if let Some(raw) = filled(digits) {
        entry.digits = validate::parse_digits(raw)?;
    }
    if let Some(raw) = filled(period) {
        entry.period = validate::parse_period(raw)?;
    }

    store.update(&entry)?;
    info!(id = entry.id, name = %entry.name, "updated entry");

    output::success(&format!("updated entry: {}", output::name(&entry.name)));
    Ok(())
}

/// Treat empty-string positionals as "leave unchanged".
fn filled(arg: Option<&str>) -> Option<&str> {
    arg.filter(|s| !s.is_empty())
}
