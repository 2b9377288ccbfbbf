//! Indexed SQLite storage backend.
//!
//! Each operation is an individual persisted write. Ids are allocated
//! randomly within a fixed range and checked against the set of ids seen
//! at load time, so they stay stable and hard to guess across restarts.

use std::path::{Path, PathBuf};

use rand::Rng;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::warn;

use super::secrets::{is_reference, SecretVault};
use super::Store;
use crate::core::entry::Entry;
use crate::error::{Result, StoreError};

/// Allocation range for randomized ids.
const ID_MIN: u64 = 1000;
const ID_MAX: u64 = 5000;

/// Tracked-id count at which allocation gives up re-rolling. Equal to the
/// size of the id range, so reaching it means the range is exhausted.
const MAX_TRACKED_IDS: usize = 4001;

/// Allocate a fresh id, re-rolling on collision with the used set.
///
/// Degenerate fallback: once the used set covers the whole range this
/// returns the minimum used id without recording it. The returned id
/// collides with a live row, so the subsequent INSERT fails on the
/// primary-key constraint and the add reports failure instead of looping
/// forever.
fn allocate_id(used: &mut Vec<u64>) -> u64 {
    if used.len() >= MAX_TRACKED_IDS {
        return used.iter().copied().min().unwrap_or(ID_MIN);
    }

    let mut rng = rand::thread_rng();
    loop {
        let id = rng.gen_range(ID_MIN..=ID_MAX);
        if !used.contains(&id) {
            used.push(id);
            return id;
        }
    }
}

/// SQLite backend with optional secret-service offload.
pub struct SqliteStore {
    conn: Connection,
    path: PathBuf,
    used_ids: Vec<u64>,
    vault: Option<SecretVault>,
}

impl SqliteStore {
    /// Open (creating if necessary) the database at `path`.
    ///
    /// Pass `Some(vault)` to store secrets in the OS credential vault and
    /// keep only reference tokens in the secret column.
    pub fn open(path: impl Into<PathBuf>, vault: Option<SecretVault>) -> Result<Self> {
        let path = path.into();
        let conn = Connection::open(&path)
            .map_err(|e| StoreError::OpenFailed(e.to_string()))?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS auth_entries (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                secret TEXT NOT NULL,
                digits INTEGER DEFAULT 6,
                period INTEGER DEFAULT 30
            );",
        )
        .map_err(StoreError::from)?;

        Ok(Self {
            conn,
            path,
            used_ids: Vec::new(),
            vault,
        })
    }

    /// The raw secret column for an entry, without vault resolution.
    fn raw_secret(&self, id: u64) -> Result<Option<String>> {
        let raw = self
            .conn
            .query_row(
                "SELECT secret FROM auth_entries WHERE id = ?1;",
                [id],
                |row| row.get(0),
            )
            .optional()
            .map_err(StoreError::from)?;
        Ok(raw)
    }

    /// Decide what to write into the secret column for a new record.
    fn offload_secret(&self, name: &str, id: u64, secret: &str) -> String {
        match &self.vault {
            Some(vault) => match vault.store(name, id, secret) {
                Ok(token) => token,
                Err(e) => {
                    warn!(error = %e, "failed to store secret securely, falling back to plaintext");
                    secret.to_string()
                }
            },
            None => secret.to_string(),
        }
    }
}

impl Store for SqliteStore {
    fn load(&mut self) -> Result<()> {
        self.used_ids.clear();

        let mut stmt = self
            .conn
            .prepare("SELECT id FROM auth_entries;")
            .map_err(StoreError::from)?;
        let ids = stmt
            .query_map([], |row| row.get::<_, u64>(0))
            .map_err(StoreError::from)?;

        for id in ids {
            self.used_ids.push(id.map_err(StoreError::from)?);
        }
        Ok(())
    }

    fn entries(&self) -> Result<Vec<Entry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, secret, digits, period FROM auth_entries;")
            .map_err(StoreError::from)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Entry {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    secret: row.get(2)?,
                    digits: row.get(3)?,
                    period: row.get(4)?,
                })
            })
            .map_err(StoreError::from)?;

        let mut entries = Vec::new();
        for row in rows {
            let mut entry = row.map_err(StoreError::from)?;

            // Resolve vault references; degrade to the raw stored value
            // when the lookup fails
            if let Some(vault) = &self.vault {
                if is_reference(&entry.secret) {
                    match vault.resolve(&entry.secret) {
                        Ok(secret) => entry.secret = secret,
                        Err(e) => {
                            warn!(id = entry.id, error = %e, "failed to retrieve secret from secure storage");
                        }
                    }
                }
            }

            entries.push(entry);
        }

        Ok(entries)
    }

    fn add(&mut self, entry: &Entry) -> Result<u64> {
        let id = allocate_id(&mut self.used_ids);
        let stored = self.offload_secret(&entry.name, id, &entry.secret);

        self.conn
            .execute(
                "INSERT INTO auth_entries (id, name, secret, digits, period)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
                params![id, entry.name, stored, entry.digits, entry.period],
            )
            .map_err(StoreError::from)?;

        Ok(id)
    }

    fn remove(&mut self, id: u64) -> Result<()> {
        let raw = self.raw_secret(id)?;

        let changed = self
            .conn
            .execute("DELETE FROM auth_entries WHERE id = ?1;", [id])
            .map_err(StoreError::from)?;
        if changed == 0 {
            return Err(StoreError::UnknownId(id).into());
        }

        if let (Some(vault), Some(raw)) = (&self.vault, raw) {
            if is_reference(&raw) {
                if let Err(e) = vault.delete(&raw) {
                    warn!(id, error = %e, "failed to delete secret from secure storage");
                }
            }
        }

        self.used_ids.retain(|&used| used != id);
        Ok(())
    }

    fn update(&mut self, entry: &Entry) -> Result<()> {
        let raw_old = self
            .raw_secret(entry.id)?
            .ok_or(StoreError::UnknownId(entry.id))?;

        let stored = match &self.vault {
            // Unchanged reference token: keep it, no vault round-trip
            Some(_) if entry.secret == raw_old && is_reference(&raw_old) => raw_old,
            Some(vault) => match vault.replace(&raw_old, &entry.name, entry.id, &entry.secret) {
                Ok(token) => token,
                Err(e) => {
                    warn!(id = entry.id, error = %e, "failed to update secret in secure storage");
                    entry.secret.clone()
                }
            },
            None => entry.secret.clone(),
        };

        let changed = self
            .conn
            .execute(
                "UPDATE auth_entries SET name = ?1, secret = ?2, digits = ?3, period = ?4
                 WHERE id = ?5;",
                params![entry.name, stored, entry.digits, entry.period, entry.id],
            )
            .map_err(StoreError::from)?;
        if changed == 0 {
            return Err(StoreError::UnknownId(entry.id).into());
        }

        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
