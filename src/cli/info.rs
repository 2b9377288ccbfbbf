//! Info command.

use crate::cli::output;
use crate::core::resolve::find_entry;
use crate::core::store::Store;
use crate::core::totp::Totp;
use crate::error::{Result, StoreError};

/// Show all details for one entry, including the current code.
pub fn execute(store: &mut dyn Store, token: &str) -> Result<()> {
    let entries = store.entries()?;
    let entry = find_entry(&entries, token)
        .ok_or_else(|| StoreError::EntryNotFound(token.to_string()))?;

    let totp = Totp::new(&entry.secret, entry.digits, entry.period);
    let code = totp.generate();
    let remaining = totp.seconds_remaining();

    output::kv("name:  ", output::name(&entry.name));
    output::kv("id:    ", entry.id);
    output::kv("secret:", &entry.secret);
    output::kv("digits:", entry.digits);
    output::kv("period:", format!("{}s", entry.period));
    output::kv(
        "code:  ",
        format!("{} (expires in {remaining}s)", output::code(&code)),
    );
    Ok(())
}
