//! Error taxonomy for auth.
//!
//! Input validation and store failures get their own sub-enums so the CLI
//! can match on them; everything else converts via `#[from]`.

use thiserror::Error;

/// Top-level error type for all auth operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("could not determine a database directory: set AUTH_DATABASE_DIR or HOME")]
    NoDatabaseDir,

    #[error("unsupported file format: {0} (expected toml or json)")]
    UnsupportedFormat(String),

    #[error("no entries were imported from {0}")]
    NothingImported(String),

    #[error("no entries to export")]
    NothingToExport,

    #[error("no entries to wipe")]
    NothingToWipe,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Input-boundary validation failures.
///
/// These are always caller mistakes, reported as messages and never fatal
/// to the process.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("digits must be between 6 and 8")]
    InvalidDigits,

    #[error("invalid digits value: {0}")]
    UnparsableDigits(String),

    #[error("period cannot be 0")]
    ZeroPeriod,

    #[error("invalid period value: {0}")]
    UnparsablePeriod(String),

    #[error("secret contains invalid characters")]
    InvalidSecret,
}

/// Credential store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("entry not found: {0}")]
    EntryNotFound(String),

    #[error("no entry with id {0}")]
    UnknownId(u64),

    #[error("cannot open database: {0}")]
    OpenFailed(String),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
