//! Entry lookup by name, id, or display position.
//!
//! The CLI lets users address entries three ways interchangeably: by the
//! store-assigned id, by the row number shown in `list` output, or by
//! name. Resolution tries them in that order.

use crate::core::entry::Entry;

/// Resolve a user-supplied token against a set of entries.
///
/// Order: (1) exact id match when the token is numeric, (2) 1-based
/// position into the list sorted by ascending id, (3) exact name match.
/// Returns `None` when nothing matches.
pub fn find_entry(entries: &[Entry], token: &str) -> Option<Entry> {
    if let Ok(num) = token.parse::<u64>() {
        if let Some(entry) = entries.iter().find(|e| e.id == num) {
            return Some(entry.clone());
        }

        if num > 0 && num as usize <= entries.len() {
            let mut sorted: Vec<Entry> = entries.to_vec();
            sorted.sort_by_key(|e| e.id);
            return Some(sorted[num as usize - 1].clone());
        }
    }

    entries.iter().find(|e| e.name == token).cloned()
}
