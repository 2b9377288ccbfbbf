//! Structured-file storage backend.
//!
//! The whole collection lives in one TOML document; every mutation
//! rewrites the file. Secrets are stored verbatim; secret-service
//! offload belongs to the indexed backend.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::Store;
use crate::core::entry::Entry;
use crate::error::{Result, StoreError};

/// On-disk document: a top-level `entries` array of tables.
#[derive(Serialize, Deserialize, Default)]
struct Document {
    #[serde(default)]
    entries: Vec<Entry>,
}

/// TOML file backend with sequential id allocation.
pub struct FileStore {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl FileStore {
    /// Create a store over the given file. Nothing is read until
    /// [`Store::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    /// Persist the current collection, overwriting the file.
    pub fn save(&self) -> Result<()> {
        let doc = Document {
            entries: self.entries.clone(),
        };
        let contents = toml::to_string_pretty(&doc)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn next_id(&self) -> u64 {
        self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }
}

impl Store for FileStore {
    fn load(&mut self) -> Result<()> {
        self.entries.clear();

        let contents = fs::read_to_string(&self.path)?;
        let doc: Document = toml::from_str(&contents)?;
        self.entries = doc.entries;
        Ok(())
    }

    fn entries(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.clone())
    }

    fn add(&mut self, entry: &Entry) -> Result<u64> {
        let mut entry = entry.clone();
        entry.id = self.next_id();
        let id = entry.id;

        self.entries.push(entry);
        self.save()?;
        Ok(id)
    }

    fn remove(&mut self, id: u64) -> Result<()> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::UnknownId(id))?;

        self.entries.remove(index);
        self.save()?;
        Ok(())
    }

    fn update(&mut self, entry: &Entry) -> Result<()> {
        let slot = self
            .entries
            .iter_mut()
            .find(|e| e.id == entry.id)
            .ok_or(StoreError::UnknownId(entry.id))?;

        *slot = entry.clone();
        self.save()?;
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
