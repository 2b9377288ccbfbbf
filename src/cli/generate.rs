//! Generate command.

use crate::cli::output;
use crate::core::resolve::find_entry;
use crate::core::store::Store;
use crate::core::totp::Totp;
use crate::error::{Result, StoreError};

/// Print the current code for one entry.
///
/// An entry whose secret holds no decodable key material still prints its
/// sentinel string and exits successfully; generation is total.
pub fn execute(store: &mut dyn Store, token: &str) -> Result<()> {
    let entries = store.entries()?;
    let entry = find_entry(&entries, token)
        .ok_or_else(|| StoreError::EntryNotFound(token.to_string()))?;

    let code = Totp::new(&entry.secret, entry.digits, entry.period).generate();
    println!("{}", output::code(&code));
    Ok(())
}
