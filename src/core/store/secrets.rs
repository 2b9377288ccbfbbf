//! OS secret-service offload for the secret column.
//!
//! When the platform credential vault is reachable (Secret Service on
//! Linux, Keychain on macOS, Credential Manager on Windows, via the
//! `keyring` crate), the indexed backend stores a reference token in the
//! database instead of the plaintext secret. Vault failures never abort a
//! store operation; callers degrade to plaintext handling.

use tracing::debug;

/// Prefix marking a stored secret as a vault reference.
pub const REFERENCE_PREFIX: &str = "SecretStorage:";

const SERVICE: &str = "io.auth-cli.totp";

/// Whether a stored secret value is a vault reference token rather than
/// plaintext.
pub fn is_reference(stored: &str) -> bool {
    stored.starts_with(REFERENCE_PREFIX)
}

fn parse_reference(token: &str) -> Option<(&str, &str)> {
    token.strip_prefix(REFERENCE_PREFIX)?.rsplit_once(':')
}

fn account(name: &str, id: u64) -> String {
    format!("{name}:{id}")
}

/// Handle to the OS credential vault.
///
/// Modeled as an optional capability: [`SecretVault::probe`] yields `None`
/// when no vault is reachable, and the store simply keeps secrets in
/// plaintext.
pub struct SecretVault(());

impl SecretVault {
    /// Probe for a usable credential vault.
    pub fn probe() -> Option<Self> {
        let entry = keyring::Entry::new(SERVICE, "availability-probe").ok()?;
        match entry.get_password() {
            Ok(_) | Err(keyring::Error::NoEntry) => Some(Self(())),
            Err(e) => {
                debug!(error = %e, "secret service unavailable, storing secrets in plaintext");
                None
            }
        }
    }

    /// Stash a secret, returning the reference token to persist in its
    /// place (`SecretStorage:<name>:<id>`).
    pub fn store(&self, name: &str, id: u64, secret: &str) -> Result<String, keyring::Error> {
        let entry = keyring::Entry::new(SERVICE, &account(name, id))?;
        entry.set_password(secret)?;
        Ok(format!("{REFERENCE_PREFIX}{}", account(name, id)))
    }

    /// Resolve a reference token back to the plaintext secret.
    pub fn resolve(&self, token: &str) -> Result<String, keyring::Error> {
        let (name, id) = parse_reference(token).ok_or(keyring::Error::NoEntry)?;
        let entry = keyring::Entry::new(SERVICE, &format!("{name}:{id}"))?;
        entry.get_password()
    }

    /// Delete the vault record behind a reference token.
    pub fn delete(&self, token: &str) -> Result<(), keyring::Error> {
        let (name, id) = parse_reference(token).ok_or(keyring::Error::NoEntry)?;
        let entry = keyring::Entry::new(SERVICE, &format!("{name}:{id}"))?;
        entry.delete_credential()
    }

    /// Supersede an old record with a fresh secret: the old record (if the
    /// stored value is a reference) is deleted, never duplicated.
    pub fn replace(
        &self,
        old_token: &str,
        name: &str,
        id: u64,
        secret: &str,
    ) -> Result<String, keyring::Error> {
        if is_reference(old_token) {
            // Best effort: a stale record is preferable to losing the new one
            if let Err(e) = self.delete(old_token) {
                debug!(error = %e, "could not delete superseded vault record");
            }
        }
        self.store(name, id, secret)
    }
}
