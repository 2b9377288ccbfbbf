//! Credential entry record.

use serde::{Deserialize, Serialize};

/// Default number of code digits.
pub const DEFAULT_DIGITS: u32 = 6;

/// Default validity window in seconds.
pub const DEFAULT_PERIOD: u32 = 30;

/// A stored TOTP credential.
///
/// `digits` and `period` are only written out when they differ from the
/// defaults, matching the on-disk and import/export document shape. The
/// `id` is assigned by the store on add and immutable afterwards; any
/// caller-supplied value is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub secret: String,
    #[serde(default = "default_digits", skip_serializing_if = "is_default_digits")]
    pub digits: u32,
    #[serde(default = "default_period", skip_serializing_if = "is_default_period")]
    pub period: u32,
    #[serde(default)]
    pub id: u64,
}

impl Entry {
    /// Create an entry with default digits and period. The store assigns
    /// the id.
    pub fn new(name: &str, secret: &str) -> Self {
        Self {
            name: name.to_string(),
            secret: secret.to_string(),
            digits: DEFAULT_DIGITS,
            period: DEFAULT_PERIOD,
            id: 0,
        }
    }
}

fn default_digits() -> u32 {
    DEFAULT_DIGITS
}

fn default_period() -> u32 {
    DEFAULT_PERIOD
}

fn is_default_digits(digits: &u32) -> bool {
    *digits == DEFAULT_DIGITS
}

fn is_default_period(period: &u32) -> bool {
    *period == DEFAULT_PERIOD
}
