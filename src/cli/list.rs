//! List command.

use colored::Colorize;

use crate::cli::output;
use crate::core::store::Store;
use crate::core::totp::Totp;
use crate::error::Result;

/// Print all entries sorted by id, with live codes and expiry countdowns.
pub fn execute(store: &mut dyn Store) -> Result<()> {
    let mut entries = store.entries()?;

    if entries.is_empty() {
        output::dimmed("no entries found");
        return Ok(());
    }

    entries.sort_by_key(|e| e.id);

    let name_width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4)
        + 2;

    println!(
        "{}",
        format!("{:<6}{:<name_width$}{:<10}{}", "ID", "NAME", "CODE", "EXPIRES").bold()
    );
    println!("{}", "─".repeat(6 + name_width + 10 + 7).dimmed());

    for entry in &entries {
        let totp = Totp::new(&entry.secret, entry.digits, entry.period);
        let code = totp.generate();
        let remaining = totp.seconds_remaining();

        // Pad before colorizing so ANSI escapes don't skew the columns
        println!(
            "{}{}{}{}",
            format!("{:<6}", entry.id).cyan(),
            format!("{:<name_width$}", entry.name).green(),
            output::code(&format!("{code:<10}")),
            format!("{remaining}s").magenta()
        );
    }

    Ok(())
}
