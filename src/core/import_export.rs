//! Bulk import/export of entries as TOML or JSON.
//!
//! Both encodings share one document shape: a top-level `entries` array
//! whose records carry `name`, `secret`, and optionally `digits`/`period`
//! when they differ from the defaults. Ids are never exported; the store
//! allocates fresh ones on import.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::entry::{Entry, DEFAULT_DIGITS, DEFAULT_PERIOD};
use crate::core::store::Store;
use crate::error::{Error, Result};

/// Supported transfer encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Resolve the format from an explicit argument, else the file
    /// extension, defaulting to TOML.
    pub fn resolve(arg: Option<&str>, path: &Path) -> Result<Self> {
        if let Some(arg) = arg {
            return match arg.to_ascii_lowercase().as_str() {
                "toml" => Ok(Self::Toml),
                "json" => Ok(Self::Json),
                other => Err(Error::UnsupportedFormat(other.to_string())),
            };
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Ok(Self::Toml),
        }
    }
}

/// A record as found in an external file. `name` and `secret` are kept
/// optional so incomplete records can be skipped instead of failing the
/// whole import.
#[derive(Deserialize)]
struct RawRecord {
    name: Option<String>,
    secret: Option<String>,
    digits: Option<u32>,
    period: Option<u32>,
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    entries: Vec<RawRecord>,
}

#[derive(Serialize)]
struct ExportRecord<'a> {
    name: &'a str,
    secret: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    digits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period: Option<u32>,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    entries: Vec<ExportRecord<'a>>,
}

/// Import entries from a file into the store.
///
/// Records missing `name` or `secret` are skipped; only records actually
/// added to the store count.
///
/// # Returns
///
/// The number of imported entries.
pub fn import_entries(path: &Path, format: Format, store: &mut dyn Store) -> Result<usize> {
    let contents = fs::read_to_string(path)?;

    let doc: RawDocument = match format {
        Format::Toml => toml::from_str(&contents)?,
        Format::Json => serde_json::from_str(&contents)?,
    };

    let mut imported = 0;
    for record in doc.entries {
        let (Some(name), Some(secret)) = (record.name, record.secret) else {
            debug!("skipping record without name or secret");
            continue;
        };

        let mut entry = Entry::new(&name, &secret);
        if let Some(digits) = record.digits {
            entry.digits = digits;
        }
        if let Some(period) = record.period {
            entry.period = period;
        }

        if store.add(&entry).is_ok() {
            imported += 1;
        }
    }

    Ok(imported)
}

/// Export entries to a file.
pub fn export_entries(path: &Path, format: Format, entries: &[Entry]) -> Result<()> {
    let doc = ExportDocument {
        entries: entries
            .iter()
            .map(|e| ExportRecord {
                name: &e.name,
                secret: &e.secret,
                digits: (e.digits != DEFAULT_DIGITS).then_some(e.digits),
                period: (e.period != DEFAULT_PERIOD).then_some(e.period),
            })
            .collect(),
    };

    let contents = match format {
        Format::Toml => toml::to_string_pretty(&doc)?,
        Format::Json => serde_json::to_string_pretty(&doc)?,
    };

    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_explicit_argument() {
        let p = Path::new("backup.txt");
        assert_eq!(Format::resolve(Some("toml"), p).unwrap(), Format::Toml);
        assert_eq!(Format::resolve(Some("json"), p).unwrap(), Format::Json);
        assert_eq!(Format::resolve(Some("JSON"), p).unwrap(), Format::Json);
        assert!(Format::resolve(Some("yaml"), p).is_err());
    }

    #[test]
    fn format_from_extension_defaults_to_toml() {
        assert_eq!(
            Format::resolve(None, Path::new("backup.json")).unwrap(),
            Format::Json
        );
        assert_eq!(
            Format::resolve(None, Path::new("backup.toml")).unwrap(),
            Format::Toml
        );
        assert_eq!(
            Format::resolve(None, Path::new("backup")).unwrap(),
            Format::Toml
        );
    }
}
